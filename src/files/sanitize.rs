//! Sketch name to file name sanitization.
//!
//! Sketch names come from the device and can contain anything except `,`
//! and `|`. Exported files need names that work on every common
//! filesystem.

use std::collections::HashSet;

use deunicode::deunicode;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Used when sanitization leaves nothing.
const FALLBACK_NAME: &str = "sketch";

/// Longest stem we produce, leaving room for a suffix and extension.
const MAX_STEM_LENGTH: usize = 200;

/// Turn a sketch name into a filesystem-safe file stem.
///
/// Transliterates to ASCII, turns whitespace into hyphens, drops invalid
/// characters, trims dots and hyphens at the edges, escapes Windows
/// reserved names and falls back to `sketch` when nothing is left.
pub fn sanitize(name: &str) -> String {
    let ascii = deunicode(name);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;
    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
    }

    let trimmed: String = result
        .trim_matches(|c| c == '.' || c == '-')
        .chars()
        .take(MAX_STEM_LENGTH)
        .collect();
    let stem = escape_reserved(&trimmed);

    if stem.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        stem
    }
}

/// `<stem>.<extension>`, with `_2`, `_3`... appended to the stem until the
/// name is not in `used`. The returned name is added to `used`.
pub fn unique_file_name(stem: &str, extension: &str, used: &mut HashSet<String>) -> String {
    let mut name = format!("{}.{}", stem, extension);
    let mut n = 2;
    while used.contains(&name) {
        name = format!("{}_{}.{}", stem, n, extension);
        n += 1;
    }
    used.insert(name.clone());
    name
}

fn escape_reserved(name: &str) -> String {
    let base = name.split('.').next().unwrap_or(name);
    let upper = base.to_uppercase();
    if WINDOWS_RESERVED.contains(&upper.as_str()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
