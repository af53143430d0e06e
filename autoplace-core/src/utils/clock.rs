//! Sleeping, injected so polling can be simulated in tests.
use crate::errors::{PlaceError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const SLICE: Duration = Duration::from_millis(50);

pub trait Clock {
    /// Blocks for `duration`.
    ///
    /// # Errors
    ///
    /// Returns `PlaceError::Interrupted` if the session was asked to stop while waiting.
    fn sleep(&mut self, duration: Duration) -> Result<()>;
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn sleep(&mut self, duration: Duration) -> Result<()> {
        (**self).sleep(duration)
    }
}

/// Real time. Sleeps in short slices so a shutdown request is noticed quickly.
#[derive(Debug, Default, Clone)]
pub struct SystemClock {
    interrupted: Arc<AtomicBool>,
}

impl SystemClock {
    #[must_use]
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self { interrupted }
    }

    fn check(&self) -> Result<()> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Err(PlaceError::Interrupted);
        }
        Ok(())
    }
}

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) -> Result<()> {
        let mut left = duration;
        while !left.is_zero() {
            self.check()?;
            let step = left.min(SLICE);
            std::thread::sleep(step);
            left -= step;
        }
        self.check()
    }
}
