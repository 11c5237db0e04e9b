//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory)
//! and applying command-line overrides on top.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use schematic::{SchematicError, config::AppConfig};

use crate::Args;

/// Local configuration path, relative to the working directory.
const LOCAL_CONFIG: &str = "schematic/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for SchematicError {
    fn from(err: ConfigError) -> Self {
        SchematicError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (schematic/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SchematicError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "schematic", "schematic") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Applies the render options given on the command line on top of a loaded
/// configuration.
pub fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut render = config.render().clone();
    if let Some(format) = args.format {
        debug!(format:% = format; "Output format overridden from command line");
        render = render.with_format(format);
    }
    if let Some(layout) = args.layout {
        debug!(layout:% = layout; "Layout engine overridden from command line");
        render = render.with_layout(layout);
    }
    if let Some(direction) = args.direction {
        debug!(direction:% = direction; "Rank direction overridden from command line");
        render = render.with_direction(direction);
    }
    if let Some(file_name) = &args.file_name {
        debug!(file_name = file_name.as_str(); "File name overridden from command line");
        render = render.with_file_name(file_name);
    }
    if let Some(dir) = &args.output_dir {
        debug!(output_dir = dir.as_str(); "Output directory overridden from command line");
        render = render.with_output_dir(dir);
    }
    config.with_render(render)
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SchematicError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(config)
}
