//! `autoplace` configuration

mod checks;
mod default;

use autoplace_core::{
    correlator, placement, Correlator, PlaceError, Placement, ScreenResolution, Step,
    WorkspaceGrid,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub use checks::Problem;

/// Which window manager control protocol implementation to talk through.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// EWMH client messages sent with x11rb.
    #[default]
    X11rb,
    /// The `wmctrl` command line tool.
    Wmctrl,
}

/// How long and how often to look for the window of a launched application.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CorrelationConfig {
    pub attempts: u32,
    pub poll_interval_ms: u64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            attempts: correlator::DEFAULT_ATTEMPTS,
            poll_interval_ms: correlator::DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

/// The whole configuration file.
///
/// # Example
///
/// In `config.ron`
///
/// ```ron
/// (
///     horizontal_workspaces: 2,
///     vertical_workspaces: 1,
///     layouts: {
///         "1920x1080": [
///             RunApp(["xterm"]),
///             Place(0, 0, 960, 1080),
///         ],
///     },
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub horizontal_workspaces: u32,
    pub vertical_workspaces: u32,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default)]
    pub correlation: CorrelationConfig,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    /// Step lists keyed by screen resolution, e.g. `"1920x1080"`.
    #[serde(default)]
    pub layouts: BTreeMap<String, Vec<Step>>,
}

fn default_settle_delay_ms() -> u64 {
    placement::DEFAULT_SETTLE_DELAY.as_millis() as u64
}

const fn default_notifications() -> bool {
    true
}

impl Config {
    #[must_use]
    pub const fn grid(&self) -> WorkspaceGrid {
        WorkspaceGrid::new(self.horizontal_workspaces, self.vertical_workspaces)
    }

    #[must_use]
    pub const fn correlator(&self) -> Correlator {
        Correlator::new(
            self.correlation.attempts,
            Duration::from_millis(self.correlation.poll_interval_ms),
        )
    }

    #[must_use]
    pub const fn placement(&self) -> Placement {
        Placement::new(Duration::from_millis(self.settle_delay_ms))
    }

    /// Returns the steps defined for `resolution`.
    ///
    /// # Errors
    ///
    /// Errors with `MissingLayout` when the file has no section for this resolution.
    pub fn layout_for(&self, resolution: ScreenResolution) -> Result<&[Step], PlaceError> {
        let key = resolution.to_string();
        self.layouts
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(PlaceError::MissingLayout { resolution: key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_lookup_uses_resolution_key() {
        let config = Config::default();
        let steps = config
            .layout_for(ScreenResolution::new(1920, 1080))
            .unwrap();
        assert!(matches!(steps.first(), Some(Step::RunApp(_))));
    }

    #[test]
    fn missing_layout_names_the_resolution() {
        let config = Config::default();
        let err = config
            .layout_for(ScreenResolution::new(1366, 768))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "No layout defined for resolution \"1366x768\""
        );
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let config: Config = ron::from_str(
            r#"(horizontal_workspaces: 3, vertical_workspaces: 2, layouts: {})"#,
        )
        .unwrap();
        assert_eq!(config.grid(), WorkspaceGrid::new(3, 2));
        assert_eq!(config.backend, Backend::X11rb);
        assert_eq!(config.correlator(), Correlator::default());
        assert_eq!(config.placement(), Placement::default());
        assert!(config.notifications);
    }

    #[test]
    fn steps_parse_from_ron() {
        let config: Config = ron::from_str(
            r#"(
                horizontal_workspaces: 2,
                vertical_workspaces: 1,
                backend: Wmctrl,
                correlation: (attempts: 4),
                layouts: {
                    "2560x1440": [
                        RunApp(["firefox", "--new-window"]),
                        Place(-10, 0, 1280, 1440),
                        ToWorkspace(1),
                    ],
                },
            )"#,
        )
        .unwrap();
        assert_eq!(config.backend, Backend::Wmctrl);
        assert_eq!(config.correlation.attempts, 4);
        assert_eq!(config.correlation.poll_interval_ms, 500);
        assert_eq!(
            config.layouts["2560x1440"],
            vec![
                Step::RunApp(vec!["firefox".into(), "--new-window".into()]),
                Step::Place(-10, 0, 1280, 1440),
                Step::ToWorkspace(1),
            ]
        );
    }

    #[test]
    fn steps_parse_from_toml() {
        let config: Config = toml::from_str(
            r#"
            horizontal_workspaces = 2
            vertical_workspaces = 1

            [layouts]
            "1920x1080" = [
                { RunApp = ["xterm"] },
                { Place = [0, 0, 960, 1080] },
                { ToWorkspace = 1 },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(
            config.layouts["1920x1080"],
            vec![
                Step::RunApp(vec!["xterm".into()]),
                Step::Place(0, 0, 960, 1080),
                Step::ToWorkspace(1),
            ]
        );
    }
}
