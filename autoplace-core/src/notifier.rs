//! User-visible desktop notifications. Never allowed to abort the session.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Normal,
    Critical,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

pub trait Notifier {
    /// Fire and forget: implementations swallow (and log) their own failures.
    fn notify(&self, urgency: Urgency, summary: &str, body: &str);
}

