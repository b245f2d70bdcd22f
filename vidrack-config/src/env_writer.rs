//! `.env` rendering and atomic writing for the bootstrapper.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

/// Renders key/value pairs as `KEY=VALUE` lines with a trailing newline.
pub fn render_env(pairs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

/// Parses an env file's contents into a key/value map.
///
/// Blank lines and `#` comments are skipped; later keys win.
pub fn read_env_map(contents: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            map.insert(key.trim().to_string(), value.to_string());
        }
    }
    map
}

/// Writes the file through a temporary sibling and renames it into place, so
/// a crash mid-write never leaves a truncated `.env`.
pub fn write_env_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };
    tmp.write_all(contents.as_bytes())?;

    // A replaced file keeps its permission bits.
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn renders_pairs_in_order() {
        let rendered = render_env(&[
            ("DB_HOST", "localhost".to_string()),
            ("DB_USER", "vidrack".to_string()),
        ]);
        assert_eq!(rendered, "DB_HOST=localhost\nDB_USER=vidrack\n");
    }

    #[test]
    fn read_map_skips_comments_and_blanks() {
        let map = read_env_map("# creds\n\nDB_USER=vidrack\nDB_PASSWORD=a=b\n");
        assert_eq!(map.get("DB_USER").unwrap(), "vidrack");
        // Values keep embedded '=' intact.
        assert_eq!(map.get("DB_PASSWORD").unwrap(), "a=b");
    }

    #[test]
    fn atomic_write_replaces_existing_contents() {
        let dir = tempdir().unwrap();
        let env_path = dir.path().join(".env");
        fs::write(&env_path, "FOO=bar\n").unwrap();

        write_env_atomically(&env_path, "FOO=baz\nBAR=qux\n").unwrap();

        let content = fs::read_to_string(&env_path).unwrap();
        assert!(content.contains("FOO=baz"));
        assert!(content.contains("BAR=qux"));
        assert!(!content.contains("FOO=bar"));
    }

    #[test]
    fn atomic_write_creates_missing_file() {
        let dir = tempdir().unwrap();
        let env_path = dir.path().join(".env");

        write_env_atomically(&env_path, "DB=video_catalog\n").unwrap();

        assert_eq!(
            fs::read_to_string(&env_path).unwrap(),
            "DB=video_catalog\n"
        );
    }
}
