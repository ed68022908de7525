pub mod session;
pub mod timer;

pub use session::{SessionController, SessionState, LONG_BREAK_EVERY};
pub use timer::{TimerEngine, TimerEvent, TimerState};
