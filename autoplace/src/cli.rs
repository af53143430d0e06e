//! Command line of the `autoplace` binary.
//!
//! Arguments that are not recognised are dropped before parsing instead of being reported.
use clap::{arg, command, value_parser, ArgMatches};
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    pub disable_notifications: bool,
    pub config: Option<PathBuf>,
}

const FLAGS: [&str; 5] = ["-h", "--help", "-V", "--version", "--disable-notifications"];
const CONFIG: &str = "--config";

#[must_use]
pub fn get_command() -> clap::Command {
    command!("autoplace")
        .about("Launches applications and moves their windows to the layout of this resolution")
        .help_template(crate::utils::get_help_template())
        .args_override_self(true)
        .args(&[
            arg!(--"disable-notifications" "Do not send desktop notifications."),
            arg!(--config <PATH> "Use this configuration file instead of the default one.")
                .value_parser(value_parser!(PathBuf)),
        ])
}

/// Keeps the program name and the arguments `get_command` knows, in order.
pub fn retain_known_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();
    while let Some(arg) = args.next() {
        if FLAGS.contains(&arg.as_str()) || arg.starts_with("--config=") {
            kept.push(arg);
        } else if arg == CONFIG {
            if let Some(value) = args.next() {
                kept.push(arg);
                kept.push(value);
            }
        } else {
            tracing::debug!("Ignoring unknown argument {:?}", arg);
        }
    }
    kept
}

/// Parses the process arguments. Exits on `--help` and `--version`.
pub fn parse<I>(args: I) -> Args
where
    I: IntoIterator<Item = String>,
{
    from_matches(&get_command().get_matches_from(retain_known_args(args)))
}

fn from_matches(matches: &ArgMatches) -> Args {
    Args {
        disable_notifications: matches.get_flag("disable-notifications"),
        config: matches.get_one::<PathBuf>("config").cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("autoplace")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    fn try_parse(args: &[&str]) -> Args {
        let matches = get_command()
            .try_get_matches_from(retain_known_args(argv(args)))
            .unwrap();
        from_matches(&matches)
    }

    #[test]
    fn no_arguments_use_defaults() {
        assert_eq!(try_parse(&[]), Args::default());
    }

    #[test]
    fn known_flags_are_parsed() {
        assert_eq!(
            try_parse(&["--disable-notifications", "--config", "~/layout.ron"]),
            Args {
                disable_notifications: true,
                config: Some(PathBuf::from("~/layout.ron")),
            }
        );
        assert_eq!(
            try_parse(&["--config=/etc/autoplace.toml"]).config,
            Some(PathBuf::from("/etc/autoplace.toml"))
        );
    }

    #[test]
    fn repeated_flags_override_earlier_ones() {
        let args = try_parse(&["--disable-notifications", "--disable-notifications"]);
        assert!(args.disable_notifications);
        assert_eq!(
            try_parse(&["--config", "a.ron", "--config", "b.ron"]).config,
            Some(PathBuf::from("b.ron"))
        );
        assert_eq!(
            try_parse(&["--config=a.ron", "--bogus", "--config", "b.ron"]).config,
            Some(PathBuf::from("b.ron"))
        );
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        assert_eq!(
            retain_known_args(argv(&["--verbose", "-x", "stray", "--disable-notifications"])),
            argv(&["--disable-notifications"])
        );
        assert!(try_parse(&["--bogus", "--disable-notifications"]).disable_notifications);
    }

    #[test]
    fn config_without_value_is_dropped() {
        assert_eq!(retain_known_args(argv(&["--config"])), argv(&[]));
    }

    #[test]
    fn help_is_kept_for_clap() {
        let err = get_command()
            .try_get_matches_from(retain_known_args(argv(&["--junk", "-h"])))
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
