use anyhow::{bail, Result};
use autoplace::utils::file_handler::{
    load_config_file, place_default_config_file, write_to_file,
};
use autoplace::{Backend, Config};
use clap::{arg, command, value_parser};
use std::env;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let matches = command!("autoplace check")
        .about("Checks the autoplace configuration file")
        .help_template(autoplace::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Prints every step of every layout."),
            arg!(-i --init "Writes the default configuration if there is none yet."),
            arg!([INPUT] "The configuration file to check. Uses the default location otherwise.")
                .value_parser(value_parser!(PathBuf)),
        ])
        .get_matches();

    let config_file = matches.get_one::<PathBuf>("INPUT").map(PathBuf::as_path);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m autoplace version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m Enabled features:{}",
        env!("AUTOPLACE_FEATURES")
    );

    if matches.get_flag("init") {
        init_config()?;
    }

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match load_config_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(e) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {e:#} \x1b[0m");
            bail!("Configuration failed");
        }
    };

    println!("\x1b[0;94m::\x1b[0m Layouts:");
    config.check_layouts(verbose);

    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    check_environment(&config);

    let problems = config.problems();
    if problems.is_empty() {
        println!("\x1b[0;92m    -> No problems found \x1b[0m");
        return Ok(());
    }
    for problem in &problems {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
    }
    bail!("{} problem(s) found", problems.len());
}

fn init_config() -> Result<()> {
    let path = place_default_config_file()?;
    if path.exists() {
        println!(
            "\x1b[0;94m::\x1b[0m Keeping existing configuration at {}",
            path.display()
        );
        return Ok(());
    }
    write_to_file(&path, &Config::default())?;
    println!(
        "\x1b[0;92m    -> Default configuration written to {} \x1b[0m",
        path.display()
    );
    Ok(())
}

/// Warns about helper programs the configuration relies on but `PATH` does not provide.
fn check_environment(config: &Config) {
    let mut programs = vec![];
    if config.backend == Backend::Wmctrl {
        programs.extend(["wmctrl", "xdpyinfo"]);
    }
    if config.notifications {
        programs.push("notify-send");
    }
    programs.extend(
        config
            .layouts
            .values()
            .flatten()
            .filter_map(|step| match step {
                autoplace_core::Step::RunApp(cmd) => cmd.first().map(String::as_str),
                _ => None,
            }),
    );
    programs.sort_unstable();
    programs.dedup();

    for program in programs {
        if is_program_in_path(program) {
            println!("\x1b[0;92m    -> {program} OK \x1b[0m");
        } else {
            println!("\x1b[1;93mWARN:\x1b[0m\x1b[1m {program} not found in PATH \x1b[0m");
        }
    }
    if env::var_os("DISPLAY").is_none() {
        println!("\x1b[1;93mWARN:\x1b[0m\x1b[1m DISPLAY is not set \x1b[0m");
    }
}

fn is_program_in_path(program: &str) -> bool {
    let program = shellexpand::tilde(program);
    if program.contains('/') {
        return Path::new(&*program).exists();
    }
    env::var_os("PATH").map_or(false, |paths| {
        env::split_paths(&paths).any(|dir| dir.join(&*program).exists())
    })
}
