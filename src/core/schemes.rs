use crate::domain::model::Scheme;
use crate::utils::error::{HealthError, Result};
use std::collections::HashMap;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/schemes.json");

/// Scheme records keyed by the code the recommendation backend returns.
#[derive(Debug, Clone, Default)]
pub struct SchemeCatalog {
    schemes: HashMap<String, Scheme>,
}

impl SchemeCatalog {
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content).map_err(|e| HealthError::ConfigValidationError {
            field: "schemes.catalog_path".to_string(),
            message: format!("{}: {}", path.as_ref().display(), e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let schemes: HashMap<String, Scheme> = serde_json::from_str(content)?;
        Ok(Self { schemes })
    }

    /// Unknown codes are not an error; there is simply nothing to show.
    pub fn lookup(&self, code: &str) -> Option<&Scheme> {
        let found = self.schemes.get(code);
        if found.is_none() {
            tracing::warn!("No catalog entry for scheme code '{}'", code);
        }
        found
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = SchemeCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        let scheme = catalog.lookup("PMJAY").unwrap();
        assert_eq!(scheme.website, "https://pmjay.gov.in");
    }

    #[test]
    fn test_unknown_code_yields_none() {
        let catalog = SchemeCatalog::bundled().unwrap();
        assert!(catalog.lookup("NOT-A-SCHEME").is_none());
    }

    #[test]
    fn test_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"X1": {"name": "Local Scheme", "short_description": "s", "long_description": "l", "website": "https://example.org"}}"#,
        )
        .unwrap();

        let catalog = SchemeCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("X1").unwrap().name, "Local Scheme");
    }

    #[test]
    fn test_invalid_catalog_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = SchemeCatalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, HealthError::ConfigValidationError { .. }));
    }
}
