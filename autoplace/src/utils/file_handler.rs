use crate::Config;
use anyhow::{Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const PREFIX: &str = "autoplace";

const COMMENT_HEADER: &str = r#"// autoplace configuration
//
// `layouts` maps a screen resolution ("WIDTHxHEIGHT") to the steps run at startup:
//   RunApp(["program", "arg", ...])  launch and wait for its window
//   Place(x, y, width, height)       move/resize the window of the last RunApp
//   ToWorkspace(index)               move the viewport to a workspace of the grid

"#;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

#[must_use]
pub fn check_file_type(path: impl AsRef<Path>) -> ConfigFileType {
    match path.as_ref().extension() {
        Some(ext) if ext == "toml" => ConfigFileType::TomlFile,
        _ => ConfigFileType::RonFile,
    }
}

/// Returns the config file in use: `config.ron`, else `config.toml`, else where `config.ron`
/// would go.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be determined (no `$HOME`).
pub fn get_default_path() -> Result<PathBuf> {
    let xdg = BaseDirectories::with_prefix(PREFIX)?;
    Ok(xdg
        .find_config_file("config.ron")
        .or_else(|| xdg.find_config_file("config.toml"))
        .unwrap_or_else(|| xdg.get_config_file("config.ron")))
}

/// Expands a leading `~` of a user supplied path.
#[must_use]
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// Loads the file at `path`, or the default one.
///
/// # Errors
///
/// Errors if the file does not exist, cannot be read or does not parse.
pub fn load_config_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => expand_path(path),
        None => get_default_path()?,
    };
    tracing::debug!("Loading config file '{}'", path.display());

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_config(&contents, check_file_type(&path))
        .with_context(|| format!("cannot parse {}", path.display()))
}

/// # Errors
///
/// Errors if `contents` is not a valid configuration in the given format.
pub fn parse_config(contents: &str, file_type: ConfigFileType) -> Result<Config> {
    let config = match file_type {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            ron.from_str(contents)?
        }
        ConfigFileType::TomlFile => toml::from_str(contents)?,
    };
    Ok(config)
}

/// Returns the path a new default `config.ron` should be written to, creating its directory.
///
/// # Errors
///
/// Errors if the config directory cannot be created.
pub fn place_default_config_file() -> Result<PathBuf> {
    Ok(BaseDirectories::with_prefix(PREFIX)?.place_config_file("config.ron")?)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(3)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}
