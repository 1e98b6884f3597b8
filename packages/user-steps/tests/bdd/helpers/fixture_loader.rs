//! User fixture loader for BDD tests
//!
//! Seeds the in-memory CMS with all YAML account files from the
//! project-level `fixtures/users/` directory.

use std::path::Path;

use walkdir::WalkDir;

use cms_user_steps::{ContextError, MemoryCms};

/// Load all user fixture YAML files into the CMS double.
///
/// Scans `fixtures/users/` relative to the project root and loads every
/// `.yaml` file found. Returns the number of accounts seeded.
pub fn load_all_fixtures(cms: &mut MemoryCms) -> Result<usize, ContextError> {
    // Find the fixture directory relative to Cargo.toml
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let fixture_dir = Path::new(manifest_dir)
        .parent() // packages/
        .and_then(|p| p.parent()) // project root
        .map(|p| p.join("fixtures").join("users"))
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not find fixture directory",
            )
        })
        .map_err(ContextError::from)?;

    if !fixture_dir.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Fixture directory not found: {}", fixture_dir.display()),
        )
        .into());
    }

    let mut count = 0;

    for entry in WalkDir::new(&fixture_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Only process YAML files
        if path.is_file() && path.extension().is_some_and(|ext| ext == "yaml") {
            let content = std::fs::read_to_string(path)?;
            let loaded = cms.load_fixture(&content)?;
            tracing::debug!(path = %path.display(), loaded, "Loaded user fixture");
            count += loaded;
        }
    }

    tracing::info!(count, "Seeded fixture users");
    Ok(count)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::load_all_fixtures;
    use cms_user_steps::{CmsBackend, MemoryCms, UserColumn};

    #[test]
    fn test_load_all_fixtures() {
        let mut cms = MemoryCms::new();
        let count = load_all_fixtures(&mut cms).expect("Failed to load fixtures");
        assert!(count > 0, "Expected to seed at least one user");
    }

    #[test]
    fn test_known_fixture_users_seeded() {
        let mut cms = MemoryCms::new();
        load_all_fixtures(&mut cms).expect("Failed to load fixtures");

        assert!(
            cms.find_user(UserColumn::Name, "editor_jane").is_some(),
            "editor_jane should be seeded"
        );
        assert!(
            cms.find_user(UserColumn::Mail, "admin.rita@example.com").is_some(),
            "admin_rita should be seeded"
        );
    }
}
