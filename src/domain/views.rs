use super::task::Task;

/// Format seconds as "MM:SS"
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Fraction of the countdown already elapsed (0.0 to 1.0).
/// A zero-length countdown reports no progress.
pub fn progress_fraction(total_secs: u32, remaining_secs: u32) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    let elapsed = total_secs.saturating_sub(remaining_secs);
    elapsed as f64 / total_secs as f64
}

/// Choose a task glyph based on completion
pub fn task_glyph(task: &Task, use_emoji: bool) -> &'static str {
    if use_emoji {
        if task.done {
            "✅"
        } else if task.completed_units == 0 {
            "⭕"
        } else {
            "🍅"
        }
    } else if task.done {
        "x"
    } else if task.completed_units == 0 {
        "o"
    } else {
        "+"
    }
}

/// One tomato slot per estimated unit: filled for completed, hollow for remaining
pub fn unit_track(task: &Task, use_emoji: bool) -> String {
    let (filled, empty) = if use_emoji { ("●", "○") } else { ("#", "-") };
    let completed = task.completed_units.min(task.estimated_units) as usize;
    let remaining = task.estimated_units as usize - completed;
    format!("{}{}", filled.repeat(completed), empty.repeat(remaining))
}

/// "2 / 4 pomodoros"
pub fn units_label(task: &Task) -> String {
    format!("{} / {} pomodoros", task.completed_units, task.estimated_units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(3600), "60:00");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(0, 0), 0.0);
        assert_eq!(progress_fraction(100, 100), 0.0);
        assert_eq!(progress_fraction(100, 25), 0.75);
        assert_eq!(progress_fraction(100, 0), 1.0);
    }

    #[test]
    fn test_task_glyph() {
        let mut task = Task::new("A", 2);
        assert_eq!(task_glyph(&task, false), "o");
        task.record_unit();
        assert_eq!(task_glyph(&task, false), "+");
        task.record_unit();
        assert_eq!(task_glyph(&task, false), "x");
    }

    #[test]
    fn test_unit_track() {
        let mut task = Task::new("A", 3);
        task.record_unit();
        assert_eq!(unit_track(&task, false), "#--");
        assert_eq!(unit_track(&task, true), "●○○");
        assert_eq!(units_label(&task), "1 / 3 pomodoros");
    }
}
