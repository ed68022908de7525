use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub tabs_area: Rect,
    pub timer_area: Rect,
    pub content_area: Rect,
    pub tasks_area: Rect,
    pub flash_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top bar: date, projected finish, session count (1 row)
/// - Mode tabs (3 rows)
/// - Main area: Timer card above ambient content (60%) | Task list (40%)
/// - Flash message (1 row)
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Mode tabs
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Flash
            Constraint::Length(1), // Keybindings
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Timer + content
            Constraint::Percentage(40), // Tasks
        ])
        .split(main_chunks[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Timer card
            Constraint::Min(0),    // Quote / break idea
        ])
        .split(horizontal[0]);

    MainLayout {
        header_area: main_chunks[0],
        tabs_area: main_chunks[1],
        timer_area: left[0],
        content_area: left[1],
        tasks_area: horizontal[1],
        flash_area: main_chunks[3],
        keybindings_area: main_chunks[4],
    }
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(16),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
