use crate::domain::{Mode, TaskId, TaskList};

/// Every Nth completed focus interval earns a long break
pub const LONG_BREAK_EVERY: u32 = 4;

/// Mode sequencing state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub completed_focus_count: u32,
    pub active_task_id: Option<TaskId>,
}

/// Decides the next mode after each countdown and advances the active
/// task's progress. Holds the active task by id only; the task itself
/// stays in the [`TaskList`].
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn completed_focus_count(&self) -> u32 {
        self.state.completed_focus_count
    }

    pub fn active_task_id(&self) -> Option<TaskId> {
        self.state.active_task_id
    }

    /// Dispatch a completion to the matching handler
    pub fn on_completed(&mut self, mode: Mode, tasks: &mut TaskList) -> Mode {
        match mode {
            Mode::Focus => self.on_focus_completed(tasks),
            Mode::ShortBreak | Mode::LongBreak => self.on_break_completed(tasks),
        }
    }

    /// Count the focus interval, credit the active task and pick the break
    pub fn on_focus_completed(&mut self, tasks: &mut TaskList) -> Mode {
        self.state.completed_focus_count += 1;

        if let Some(task) = self.state.active_task_id.and_then(|id| tasks.get_mut(id)) {
            task.record_unit();
            tracing::info!(
                task = %task.name,
                completed = task.completed_units,
                estimated = task.estimated_units,
                done = task.done,
                "active task credited"
            );
        }

        let next = if self.state.completed_focus_count % LONG_BREAK_EVERY == 0 {
            Mode::LongBreak
        } else {
            Mode::ShortBreak
        };
        tracing::info!(count = self.state.completed_focus_count, ?next, "focus completed");
        next
    }

    /// Back to focus; the active task is released once it is done or gone
    pub fn on_break_completed(&mut self, tasks: &TaskList) -> Mode {
        let keep = self
            .state
            .active_task_id
            .and_then(|id| tasks.get(id))
            .is_some_and(|task| !task.done);

        if !keep && self.state.active_task_id.take().is_some() {
            tracing::info!("active task released");
        }
        Mode::Focus
    }

    /// Make `id` the active task. Restarts the long-break cycle.
    pub fn select_task(&mut self, id: TaskId) -> Mode {
        self.state.active_task_id = Some(id);
        self.state.completed_focus_count = 0;
        tracing::info!(%id, "task selected");
        Mode::Focus
    }

    /// Forget the active task if it was the one deleted
    pub fn on_task_deleted(&mut self, id: TaskId) {
        if self.state.active_task_id == Some(id) {
            self.state.active_task_id = None;
            tracing::info!(%id, "active task deleted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_long_break_every_fourth_focus() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();

        let mut sequence = Vec::new();
        for _ in 0..4 {
            sequence.push(session.on_focus_completed(&mut tasks));
            assert_eq!(session.on_break_completed(&tasks), Mode::Focus);
        }

        assert_eq!(
            sequence,
            vec![Mode::ShortBreak, Mode::ShortBreak, Mode::ShortBreak, Mode::LongBreak]
        );
        assert_eq!(session.completed_focus_count(), 4);
    }

    #[test]
    fn test_task_progress_caps_at_estimate() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        let id = tasks.add("Write chapter", 3).unwrap();
        session.select_task(id);

        for _ in 0..3 {
            session.on_focus_completed(&mut tasks);
        }
        let task = tasks.get(id).unwrap();
        assert_eq!(task.completed_units, 3);
        assert!(task.done);

        session.on_focus_completed(&mut tasks);
        let task = tasks.get(id).unwrap();
        assert_eq!(task.completed_units, 3);
        assert!(task.done);
    }

    #[test]
    fn test_focus_completion_keeps_active_task() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        let id = tasks.add("A", 1).unwrap();
        session.select_task(id);

        session.on_focus_completed(&mut tasks);
        assert_eq!(session.active_task_id(), Some(id));
    }

    #[test]
    fn test_break_keeps_unfinished_task() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        let id = tasks.add("A", 2).unwrap();
        session.select_task(id);
        session.on_focus_completed(&mut tasks);

        assert_eq!(session.on_break_completed(&tasks), Mode::Focus);
        assert_eq!(session.active_task_id(), Some(id));
    }

    #[test]
    fn test_break_releases_done_task() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        let id = tasks.add("A", 1).unwrap();
        session.select_task(id);
        session.on_focus_completed(&mut tasks);

        assert_eq!(session.on_break_completed(&tasks), Mode::Focus);
        assert_eq!(session.active_task_id(), None);
    }

    #[test]
    fn test_deleting_active_task_clears_reference() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        let id = tasks.add("A", 2).unwrap();
        session.select_task(id);

        tasks.delete(id);
        session.on_task_deleted(id);
        assert_eq!(session.active_task_id(), None);

        assert_eq!(session.on_break_completed(&tasks), Mode::Focus);
        assert_eq!(session.active_task_id(), None);
    }

    #[test]
    fn test_deleting_other_task_keeps_reference() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        let active = tasks.add("A", 2).unwrap();
        let other = tasks.add("B", 2).unwrap();
        session.select_task(active);

        tasks.delete(other);
        session.on_task_deleted(other);
        assert_eq!(session.active_task_id(), Some(active));
    }

    #[test]
    fn test_select_task_scenario() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        session.on_focus_completed(&mut tasks);
        session.on_focus_completed(&mut tasks);

        let id = tasks.add("T", 1).unwrap();
        assert_eq!(session.select_task(id), Mode::Focus);
        assert_eq!(session.completed_focus_count(), 0);

        let next = session.on_completed(Mode::Focus, &mut tasks);
        assert_eq!(session.completed_focus_count(), 1);
        let task = tasks.get(id).unwrap();
        assert_eq!(task.completed_units, 1);
        assert!(task.done);
        assert_eq!(next, Mode::ShortBreak);
    }

    #[test]
    fn test_on_completed_dispatches_breaks() {
        let mut session = SessionController::new();
        let mut tasks = TaskList::new();
        assert_eq!(session.on_completed(Mode::LongBreak, &mut tasks), Mode::Focus);
        assert_eq!(session.on_completed(Mode::ShortBreak, &mut tasks), Mode::Focus);
        assert_eq!(session.completed_focus_count(), 0);
    }
}
