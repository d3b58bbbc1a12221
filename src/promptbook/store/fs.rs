use super::KeyValueSlot;
use crate::error::{PromptError, Result};
use std::fs;
use std::path::PathBuf;
#[cfg(any(test, feature = "test_utils"))]
use std::path::Path;
use uuid::Uuid;

/// File-backed slot: each key is stored as `<root>/<key>.json`.
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PromptError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(PromptError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Write to a temp file then rename so a crash never leaves half a blob
        let tmp_file = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, value).map_err(PromptError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.key_path(key)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PromptError::Io(e));
        }
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.key_path(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSlot) {
        let dir = TempDir::new().unwrap();
        let slot = FileSlot::new(dir.path().join("data"));
        (dir, slot)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (_dir, slot) = setup();
        assert_eq!(slot.get("prompts-storage").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_overwrites() {
        let (_dir, slot) = setup();
        slot.set("k", "first").unwrap();
        slot.set("k", "second").unwrap();

        assert_eq!(slot.get("k").unwrap(), Some("second".to_string()));
        assert_eq!(slot.location("k"), slot.root().join("k.json"));
    }

    #[test]
    fn set_leaves_no_temp_files() {
        let (_dir, slot) = setup();
        slot.set("k", "value").unwrap();

        for entry in fs::read_dir(slot.root()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn set_fails_when_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let slot = FileSlot::new(blocker);
        assert!(slot.set("k", "v").is_err());
    }
}
