//! Desktop notifications through `notify-send`.
use autoplace_core::{Notifier, Urgency};
use std::process::{Command, Stdio};

const APP_NAME: &str = "autoplace";

/// Sends notifications with `notify-send`. Failures are logged, never returned.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotifySend;

impl Notifier for NotifySend {
    fn notify(&self, urgency: Urgency, summary: &str, body: &str) {
        let status = Command::new("notify-send")
            .args(["-a", APP_NAME, "-u", &urgency.to_string(), summary, body])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::warn!("notify-send exited with {}", status),
            Err(e) => tracing::warn!("Unable to run notify-send: {}", e),
        }
    }
}

/// Forwards to `sink` only while enabled.
#[derive(Debug, Clone)]
pub struct Notifications<N> {
    enabled: bool,
    sink: N,
}

impl<N: Notifier> Notifications<N> {
    pub const fn new(enabled: bool, sink: N) -> Self {
        Self { enabled, sink }
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn sink(&self) -> &N {
        &self.sink
    }
}

impl<N: Notifier> Notifier for Notifications<N> {
    fn notify(&self, urgency: Urgency, summary: &str, body: &str) {
        if self.enabled {
            self.sink.notify(urgency, summary, body);
        } else {
            tracing::trace!("Notification suppressed: {}: {}", summary, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoplace_core::mocks::RecordingNotifier;

    #[test]
    fn disabled_notifications_reach_no_sink() {
        let notifications = Notifications::new(false, RecordingNotifier::default());
        notifications.notify(Urgency::Critical, "autoplace", "boom");
        assert!(notifications.sink().sent.borrow().is_empty());
    }

    #[test]
    fn enabled_notifications_are_forwarded() {
        let mut notifications = Notifications::new(true, RecordingNotifier::default());
        notifications.notify(Urgency::Normal, "autoplace", "hello");
        notifications.disable();
        assert!(!notifications.is_enabled());
        notifications.notify(Urgency::Normal, "autoplace", "bye");
        assert_eq!(
            *notifications.sink().sent.borrow(),
            vec![(Urgency::Normal, "autoplace".to_string(), "hello".to_string())]
        );
    }
}
