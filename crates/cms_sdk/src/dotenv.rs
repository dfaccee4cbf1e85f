//! Minimal `.env` reader used for credential loading.
//!
//! Understands comments, blank lines, `export ` prefixes, and quoted values.
//! Duplicate keys and whitespace around `=` are rejected so typos surface
//! instead of silently shadowing a credential.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub(crate) struct DotenvFile {
    vars: HashMap<String, String>,
}

impl DotenvFile {
    /// Read and parse `path`. A missing file yields an empty variable set.
    pub(crate) fn read(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|err| format!("Failed to read dotenv file {}: {err}", path.display()))?;
        let mut vars = HashMap::new();

        for (index, line) in contents.lines().enumerate() {
            let parsed = parse_line(line).map_err(|err| {
                format!(
                    "Failed to parse dotenv file {} at line {}: {err}",
                    path.display(),
                    index + 1
                )
            })?;

            let Some((key, value)) = parsed else {
                continue;
            };

            if vars.insert(key.clone(), value).is_some() {
                return Err(format!(
                    "Duplicate variable '{key}' in dotenv file {}",
                    path.display()
                ));
            }
        }

        Ok(Self { vars })
    }

    pub(crate) fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

/// Parse one line into a key/value pair. Comments and blank lines yield
/// `None`.
fn parse_line(line: &str) -> Result<Option<(String, String)>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (export_stripped, has_export) = if let Some(stripped) = trimmed.strip_prefix("export ") {
        (stripped, true)
    } else {
        (trimmed, false)
    };

    let eq_index = export_stripped.find('=').ok_or_else(|| {
        if has_export {
            "Invalid dotenv line after export prefix".to_string()
        } else {
            "Invalid dotenv line, missing '='".to_string()
        }
    })?;

    if eq_index == 0 {
        return Err("Invalid dotenv line, missing key".to_string());
    }

    let before = export_stripped[..eq_index].chars().last();
    let after = export_stripped[eq_index + 1..].chars().next();
    if before.is_some_and(|ch| ch.is_whitespace()) || after.is_some_and(|ch| ch.is_whitespace()) {
        return Err("Whitespace around '=' is not allowed".to_string());
    }

    let key = &export_stripped[..eq_index];
    if !is_valid_key(key) {
        return Err(format!("Invalid dotenv variable name '{key}'"));
    }

    let mut value = export_stripped[eq_index + 1..].to_string();
    if value.starts_with('"') || value.starts_with('\'') {
        let quote = match value.chars().next() {
            Some(q) => q,
            None => return Err("Invalid empty quoted value".to_string()),
        };
        if !value.ends_with(quote) || value.len() == 1 {
            return Err("Invalid quoted value".to_string());
        }
        value = value[1..value.len() - 1].to_string();
    }

    Ok(Some((key.to_string(), value)))
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
}
