//! Storage initialization
//!
//! Handles first-run setup: directories, default settings and the database.

use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Writes the default settings file if missing and creates the database
/// schema. Existing data is left untouched.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<Settings, ExpenseError> {
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
    }

    // Opening creates the schema
    Storage::new(paths)?;

    Ok(settings)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.is_initialized() || !paths.database_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();

        assert!(paths.settings_file().exists());
        assert!(paths.database_file().exists());
        assert!(!needs_initialization(&paths));
    }

    #[test]
    fn test_initialize_keeps_existing_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = initialize_storage(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
    }
}
