use std::{io::ErrorKind, path::{Path, PathBuf}};

use eyre::{Context, Result};
use regex::Regex;
use tokio::fs::read_dir;
use tracing::{debug, warn};

/// Fills `{label}` in a file name pattern such as `metrics-{label}-*.json`
pub fn label_pattern(template: &str, label: &str) -> String {
    template.replace("{label}", label)
}

/// Translates a file name glob (`*` and `?` only) to an anchored regex
pub fn glob_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            c => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    expr.push('$');
    Regex::new(&expr).wrap_err_with(|| format!("Invalid file pattern {pattern}"))
}

/// Files directly inside `dir` whose name matches `pattern`.
/// A missing directory yields no files.
pub async fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let file_regex = glob_regex(pattern)?;
    let mut items = match read_dir(dir).await {
        Ok(items) => items,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("Results folder {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err).wrap_err_with(|| format!("Read {}", dir.display())),
    };

    let mut results = Vec::new();
    while let Some(entry) = items.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| file_regex.is_match(name))
        {
            results.push(entry.path());
        }
    }
    results.sort();
    debug!("{pattern} matched {} files in {}", results.len(), dir.display());
    Ok(results)
}
