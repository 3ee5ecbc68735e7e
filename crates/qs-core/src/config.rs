use std::path::{Path, PathBuf};

/// Lowest school year offered for new characters.
pub const MIN_YEAR: i32 = 1;
/// Highest school year offered for new characters.
pub const MAX_YEAR: i32 = 7;

/// Configuration for an editing session.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Where the character record is stored.
    pub path: PathBuf,
    /// School year given to newly created characters.
    pub new_character_year: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("character.json"),
            new_character_year: MIN_YEAR,
        }
    }
}

impl EditorConfig {
    /// Set the record path.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Set the year for new characters (clamped to 1-7).
    pub fn with_year(mut self, year: i32) -> Self {
        self.new_character_year = year.clamp(MIN_YEAR, MAX_YEAR);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EditorConfig::default();
        assert_eq!(cfg.path, PathBuf::from("character.json"));
        assert_eq!(cfg.new_character_year, 1);
    }

    #[test]
    fn builder_methods() {
        let cfg = EditorConfig::default().with_path("wren.json").with_year(4);
        assert_eq!(cfg.path, PathBuf::from("wren.json"));
        assert_eq!(cfg.new_character_year, 4);
    }

    #[test]
    fn year_clamped() {
        assert_eq!(EditorConfig::default().with_year(0).new_character_year, 1);
        assert_eq!(EditorConfig::default().with_year(12).new_character_year, 7);
    }
}
