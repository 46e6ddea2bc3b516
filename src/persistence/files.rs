use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default task file: ~/.local/var/tasks
pub fn default_task_file() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".local").join("var").join("tasks"))
}

/// Default completion log: ~/.local/var/log/tasks.log
pub fn default_log_file() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".local").join("var").join("log").join("tasks.log"))
}

/// Create the parent directory of a file if it is missing
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Temp file must live on the same filesystem for the rename
    let mut temp_file = NamedTempFile::new_in(&dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Append content to a file, creating it (and its directory) if needed
pub fn append_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open file for appending: {}", path.display()))?;

    file.write_all(content.as_bytes())
        .context("Failed to append to file")?;

    file.sync_all().context("Failed to sync file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let tasks = default_task_file().unwrap();
        assert!(tasks.ends_with(".local/var/tasks"));

        let log = default_log_file().unwrap();
        assert!(log.ends_with(".local/var/log/tasks.log"));
    }

    #[test]
    fn test_atomic_write_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("tasks");

        atomic_write(&test_file, "Buy milk,01-06-25,01-06-25,4\n").unwrap();
        assert_eq!(read_file(&test_file).unwrap(), "Buy milk,01-06-25,01-06-25,4\n");

        atomic_write(&test_file, "").unwrap();
        assert_eq!(read_file(&test_file).unwrap(), "");
    }

    #[test]
    fn test_atomic_write_creates_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("var").join("tasks");

        atomic_write(&test_file, "content").unwrap();
        assert_eq!(read_file(&test_file).unwrap(), "content");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("nonexistent");

        assert_eq!(read_file(&test_file).unwrap(), "");
    }

    #[test]
    fn test_append_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("log").join("tasks.log");

        append_to_file(&test_file, "Line 1\n").unwrap();
        append_to_file(&test_file, "Line 2\n").unwrap();

        assert_eq!(read_file(&test_file).unwrap(), "Line 1\nLine 2\n");
    }
}
