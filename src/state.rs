#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AutoplayState {
    Stopped, // No timer registered
    Running, // Advancing every interval
    Paused,  // Timer kept, countdown frozen
}
