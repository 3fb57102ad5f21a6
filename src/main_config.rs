// Locating the status file through the daemon's main configuration file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StatusError};

/// Directives that name the status file. Older releases used the latter two.
const STATUS_FILE_KEYS: [&str; 3] = ["status_file", "status_log", "xsddefault_status_log"];

/// Finds the status file named by the main config at `config`. The last
/// matching directive wins; relative paths are taken from the config's
/// directory.
pub fn locate_status_file(config: &Path) -> Result<PathBuf> {
    let file = File::open(config).map_err(|source| StatusError::Open {
        path: config.to_path_buf(),
        source,
    })?;
    let found = scan_status_file(BufReader::new(file))
        .map_err(|source| StatusError::Read { source })?;
    let Some(value) = found else {
        return Err(StatusError::NoStatusFile {
            config: config.to_path_buf(),
        });
    };
    let base = config.parent().unwrap_or_else(|| Path::new(""));
    let path = base.join(value);
    debug!(config = %config.display(), status_file = %path.display(), "status file located");
    Ok(path)
}

/// Last status-file directive value in a main-config stream, unresolved.
pub fn scan_status_file<R: BufRead>(mut source: R) -> std::io::Result<Option<String>> {
    let mut found = None;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if !value.is_empty() && STATUS_FILE_KEYS.contains(&key) {
            found = Some(value.to_string());
        }
    }
    Ok(found)
}
