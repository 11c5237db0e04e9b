//! Output file naming and writing.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::{Builder, NamedTempFile};

use crate::config::OutputFormat;

/// Stem used when a title has no visible characters.
const FALLBACK_STEM: &str = "diagram";

/// Result of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    path: PathBuf,
    format: OutputFormat,
    size: usize,
}

impl Rendered {
    /// Location of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Size of the written file in bytes.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Derives the output file name from a diagram title.
///
/// Whitespace-separated words are joined with `_` and lowercased.
///
/// # Examples
///
/// ```
/// use schematic::{config::OutputFormat, file_name};
///
/// assert_eq!(file_name("Web App  Architecture", OutputFormat::Png), "web_app_architecture.png");
/// ```
pub fn file_name(title: &str, format: OutputFormat) -> String {
    let stem = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    let stem = if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    };
    format!("{stem}.{}", format.extension())
}

/// Writes `bytes` to `dir/name`, replacing any existing file only once the
/// whole content has been written.
pub(crate) fn write(
    dir: &Path,
    name: &str,
    bytes: &[u8],
    format: OutputFormat,
) -> io::Result<Rendered> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);

    let mut temp = temp_file(dir)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(&path).map_err(|err| err.error)?;

    debug!(path = path.display().to_string(), size = bytes.len(); "Output written");
    Ok(Rendered {
        path,
        format,
        size: bytes.len(),
    })
}

/// Creates the staging file next to the target.
///
/// Temporary files are private by default; the staging file is created with
/// the mode a plain `File::create` would use, so the persisted image gets the
/// usual umask-derived permissions.
fn temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".schematic-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
