use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::character::Character;
use crate::error::{CoreError, CoreResult};

/// Somewhere a single character record can be loaded from and saved to.
///
/// Saving always replaces the whole record, so readers never observe a
/// partially updated character.
pub trait CharacterStore {
    /// Load the stored record, or `None` if nothing has been saved yet.
    fn load(&self) -> CoreResult<Option<Character>>;

    /// Replace the stored record.
    fn save(&self, character: &Character) -> CoreResult<()>;
}

/// Stores one character as pretty-printed JSON in a file.
///
/// Saves go to a temporary file next to the target, which is then renamed
/// over it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that holds the backing file; temporary files are made here
    /// so the final rename stays on one filesystem.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CharacterStore for JsonFileStore {
    fn load(&self) -> CoreResult<Option<Character>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let character = serde_json::from_str(&content)?;
        tracing::debug!("Loaded character from {}", self.path.display());
        Ok(Some(character))
    }

    fn save(&self, character: &Character) -> CoreResult<()> {
        let mut json = serde_json::to_string_pretty(character)?;
        json.push('\n');
        let mut tmp = NamedTempFile::new_in(self.dir()).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        tracing::info!(
            "Saved '{}' to {}",
            character.character_name,
            self.path.display()
        );
        Ok(())
    }
}

/// Load the stored record, falling back when there is none or it is unreadable.
///
/// A record that fails to parse is not an error here: it is logged and the
/// fallback is used instead, so a corrupted save never locks the user out.
/// I/O failures other than a missing file are still returned.
pub fn load_or_else(
    store: &impl CharacterStore,
    fallback: impl FnOnce() -> Character,
) -> CoreResult<Character> {
    match store.load() {
        Ok(Some(character)) => Ok(character),
        Ok(None) => Ok(fallback()),
        Err(CoreError::Json(e)) => {
            tracing::warn!("Stored character is unreadable, using fallback: {e}");
            Ok(fallback())
        }
        Err(e) => Err(e),
    }
}
