use anyhow::{Context, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A named persistent slot surviving restarts. One key maps to one opaque
/// string value, overwritten wholesale on every write.
///
/// Readers and writers report failures as `Result`; whether a failure is
/// fatal is the caller's policy, not the slot's.
pub trait KeyValueSlot {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed slot: each key is stored as `<root>/<key>.json` under a
/// per-user profile directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).with_context(|| {
            format!("failed to create profile directory '{}'", root.display())
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read slot '{key}'")),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| {
            format!("failed to write slot '{key}' at '{}'", path.display())
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
