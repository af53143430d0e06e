//! Process and time helpers used by the session.
pub mod child_process;
pub mod clock;
