use super::{Backend, Config, CorrelationConfig};
use autoplace_core::Step;
use std::collections::BTreeMap;

impl Default for Config {
    fn default() -> Self {
        let cmd = |args: &[&str]| Step::RunApp(args.iter().map(ToString::to_string).collect());

        let mut layouts = BTreeMap::new();
        layouts.insert(
            "1920x1080".to_string(),
            vec![
                cmd(&["xterm"]),
                Step::Place(0, 0, 960, 1080),
                cmd(&["xterm"]),
                Step::Place(960, 0, 960, 1080),
                Step::ToWorkspace(0),
            ],
        );
        layouts.insert(
            "3840x2160".to_string(),
            vec![
                cmd(&["xterm"]),
                Step::Place(0, 0, 1920, 2160),
                cmd(&["xterm"]),
                Step::Place(1920, 0, 1920, 2160),
                Step::ToWorkspace(0),
            ],
        );

        Self {
            horizontal_workspaces: 2,
            vertical_workspaces: 1,
            backend: Backend::default(),
            correlation: CorrelationConfig::default(),
            settle_delay_ms: super::default_settle_delay_ms(),
            notifications: true,
            layouts,
        }
    }
}
