//! Persistence of the all-time high score
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A place to keep the high score between games and between runs of the
/// program
pub(crate) trait HighScoreStore: fmt::Debug {
    /// Fetch the stored high score.  A store with nothing in it yet reports
    /// zero.
    fn load(&self) -> Result<u32, LoadError>;

    /// Overwrite the stored high score with `score`
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&self) -> Result<u32, LoadError> {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        (**self).save(score)
    }
}

/// High score kept in a file as a single JSON integer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub(crate) fn new(path: PathBuf) -> HighScoreFile {
        HighScoreFile { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src).map_err(LoadError::deserialize)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&score).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

/// High score that lives only as long as the process, for when saving to disk
/// is turned off
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStore {
    score: u32,
}

impl MemoryStore {
    pub(crate) fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(self.score)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        self.score = score;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_zero() {
        let tmpdir = tempdir().unwrap();
        let store = HighScoreFile::new(tmpdir.path().join("highscore.json"));
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("dirs").join("highscore.json");
        let mut store = HighScoreFile::new(path.clone());
        store.save(42).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "42\n");
        assert_eq!(store.load().unwrap(), 42);
        store.save(43).unwrap();
        assert_eq!(HighScoreFile::new(path).load().unwrap(), 43);
    }

    #[test]
    fn garbage_file() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.json");
        fs_err::write(&path, "{\"score\": \"lots\"}\n").unwrap();
        let e = HighScoreFile::new(path).load().unwrap_err();
        assert_eq!(e.to_string(), "Failed to read high score from disk");
        assert_eq!(
            std::error::Error::source(&e).map(ToString::to_string),
            Some(String::from("failed to deserialize high score"))
        );
    }

    #[test]
    fn negative_score_rejected() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore.json");
        fs_err::write(&path, "-3\n").unwrap();
        assert!(HighScoreFile::new(path).load().is_err());
    }

    #[test]
    fn memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), 0);
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), 7);
    }

    #[test]
    fn boxed_store() {
        let mut store: Box<dyn HighScoreStore> = Box::new(MemoryStore::new());
        store.save(9).unwrap();
        assert_eq!(store.load().unwrap(), 9);
    }
}
