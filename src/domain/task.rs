use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound for a task's estimated pomodoros
pub const MAX_ESTIMATED_UNITS: u32 = 20;

pub type TaskId = Uuid;

/// A task that collects completed focus units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub estimated_units: u32,
    pub completed_units: u32,
    pub done: bool,
}

impl Task {
    pub fn new(name: impl Into<String>, estimated_units: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            estimated_units: estimated_units.clamp(1, MAX_ESTIMATED_UNITS),
            completed_units: 0,
            done: false,
        }
    }

    /// Record one completed focus unit, capped at the estimate.
    /// Recomputes `done` from the new count.
    pub fn record_unit(&mut self) {
        self.completed_units = (self.completed_units + 1).min(self.estimated_units);
        self.done = self.completed_units >= self.estimated_units;
    }

    /// Ratio of completed to estimated units (0.0 to 1.0)
    pub fn progress_ratio(&self) -> f64 {
        if self.estimated_units == 0 {
            return 1.0;
        }
        (self.completed_units as f64 / self.estimated_units as f64).min(1.0)
    }

    /// Whether a manual "+1" is still possible
    pub fn can_increment(&self) -> bool {
        !self.done && self.completed_units < self.estimated_units
    }
}

/// Parse the estimate field of the add-task form.
/// Unparsable or zero input falls back to 1, the rest clamps to the bounds.
pub fn parse_estimate(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n.min(MAX_ESTIMATED_UNITS),
    }
}

/// Ordered collection owning every task
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task. Returns `None` for a blank name.
    pub fn add(&mut self, name: &str, estimated_units: u32) -> Option<TaskId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let task = Task::new(name, estimated_units);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Remove a task, returning it if it existed
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.position(id)?;
        Some(self.tasks.remove(idx))
    }

    /// Flip the done flag without touching the unit counters
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => false,
        }
    }

    /// Manual "+1 pomodoro". No-op for done or fully counted tasks.
    pub fn increment(&mut self, id: TaskId) -> bool {
        match self.get_mut(id) {
            Some(task) if task.can_increment() => {
                task.record_unit();
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
