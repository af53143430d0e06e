use super::Config;
use autoplace_core::{ScreenResolution, Step};
use std::fmt;

/// Something in the configuration that will make a session fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    EmptyGrid,
    BadResolutionKey(String),
    EmptyCommand { layout: String, step: usize },
    PlaceWithoutWindow { layout: String, step: usize },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str(
                "horizontal_workspaces and vertical_workspaces must both be at least 1",
            ),
            Self::BadResolutionKey(key) => {
                write!(f, "layout key \"{key}\" is not of the form WIDTHxHEIGHT")
            }
            Self::EmptyCommand { layout, step } => {
                write!(f, "{layout}, step {step}: RunApp needs a program")
            }
            Self::PlaceWithoutWindow { layout, step } => write!(
                f,
                "{layout}, step {step}: Place comes before any RunApp, there is no window to move"
            ),
        }
    }
}

impl Config {
    /// Returns every problem found, empty when the configuration is usable.
    pub fn problems(&self) -> Vec<Problem> {
        let mut problems = Vec::new();
        if !self.grid().is_valid() {
            problems.push(Problem::EmptyGrid);
        }
        for (key, steps) in &self.layouts {
            if key.parse::<ScreenResolution>().is_err() {
                problems.push(Problem::BadResolutionKey(key.clone()));
            }
            problems.extend(check_steps(key, steps));
        }
        problems
    }

    /// Print the layouts with their step counts.
    pub fn check_layouts(&self, verbose: bool) {
        for (key, steps) in &self.layouts {
            let apps = steps
                .iter()
                .filter(|s| matches!(s, Step::RunApp(_)))
                .count();
            println!("    {key}: {} steps, {apps} applications", steps.len());
            if verbose {
                for step in steps {
                    println!("        {step:?}");
                }
            }
        }
    }
}

fn check_steps(layout: &str, steps: &[Step]) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut launched = false;
    for (n, step) in steps.iter().enumerate() {
        let step_no = n + 1;
        match step {
            Step::RunApp(cmd) if cmd.is_empty() => problems.push(Problem::EmptyCommand {
                layout: layout.to_string(),
                step: step_no,
            }),
            Step::RunApp(_) => launched = true,
            Step::Place(..) if !launched => problems.push(Problem::PlaceWithoutWindow {
                layout: layout.to_string(),
                step: step_no,
            }),
            Step::Place(..) | Step::ToWorkspace(_) => {}
        }
    }
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_problems() {
        assert!(Config::default().problems().is_empty());
    }

    #[test]
    fn zero_sized_grid_is_reported() {
        let config = Config {
            vertical_workspaces: 0,
            ..Config::default()
        };
        assert_eq!(config.problems(), vec![Problem::EmptyGrid]);
    }

    #[test]
    fn broken_layouts_are_reported() {
        let mut config = Config::default();
        config.layouts.insert(
            "big".to_string(),
            vec![
                Step::Place(0, 0, 1, 1),
                Step::RunApp(vec![]),
                Step::RunApp(vec!["xterm".into()]),
                Step::Place(0, 0, 1, 1),
            ],
        );
        assert_eq!(
            config.problems(),
            vec![
                Problem::BadResolutionKey("big".into()),
                Problem::PlaceWithoutWindow {
                    layout: "big".into(),
                    step: 1
                },
                Problem::EmptyCommand {
                    layout: "big".into(),
                    step: 2
                },
            ]
        );
    }
}
