use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{FplError, Value};

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_home(path: &Path) -> Result<PathBuf, FplError> {
    match path.to_str().and_then(|s| s.strip_prefix("~/")) {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| FplError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: path.to_string_lossy().to_string(),
                hint: Some("Set HOME or use an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(path.to_path_buf()),
    }
}

/// Candidate spellings for a key: as written, `snake_case`, `kebab-case`.
///
/// Identifiers can't contain `-`, but quoted block keys can, so both are tried.
pub(super) fn key_variants(seg: &str) -> Vec<String> {
    let mut out = vec![seg.to_string()];

    let snake = seg.replace('-', "_");
    if snake != seg {
        out.push(snake);
    }

    let kebab = seg.replace('_', "-");
    if kebab != seg {
        out.push(kebab);
    }

    out
}

pub(super) fn lookup<'a>(map: &'a IndexMap<String, Value>, seg: &str) -> Option<&'a Value> {
    key_variants(seg).iter().find_map(|k| map.get(k))
}

/// Find the first line that assigns the final key of `path`, for error reporting.
///
/// Returns `(line_number, trimmed_line)`, or `(0, "")` when nothing matches.
pub(super) fn find_config_line(path: &str, content: &str) -> (usize, String) {
    let Some(key) = path.rsplit('.').next().filter(|k| !k.is_empty()) else {
        return (0, String::new());
    };

    let quoted = format!("\"{}\"", key);
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        for candidate in [key, quoted.as_str()] {
            if let Some(pos) = trimmed.find(candidate) {
                let rest = trimmed[pos + candidate.len()..].trim_start();
                let boundary = pos == 0
                    || !trimmed[..pos]
                        .chars()
                        .next_back()
                        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
                if boundary && rest.starts_with(':') {
                    return (idx + 1, trimmed.to_string());
                }
            }
        }
    }

    (0, String::new())
}

/// Find the line declaring `@name`.
pub(super) fn find_block_line(name: &str, content: &str) -> (usize, String) {
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix('@') {
            let ident: String = rest
                .trim_start()
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            if ident == name {
                return (idx + 1, trimmed.to_string());
            }
        }
    }

    (0, String::new())
}
