use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

/// Strips a trailing `#` comment and surrounding whitespace.
pub fn strip_comment(raw: &str) -> &str {
    match raw.find('#') {
        Some(pos) => raw[..pos].trim(),
        None => raw.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_padding() {
        assert_eq!(strip_comment("  a b  "), "a b");
        assert_eq!(strip_comment("a b # note"), "a b");
        assert_eq!(strip_comment("# only a note"), "");
    }
}
