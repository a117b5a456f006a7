use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One selectable satellite: display name plus its NORAD catalog number.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogEntry {
    pub name: String,
    pub norad_id: u32,
}

/// Static name-to-identifier mapping shown in the dashboard form. This is
/// data, not logic: nothing here talks to the positions API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub satellites: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.satellites
    }

    pub fn find(&self, norad_id: u32) -> Option<&CatalogEntry> {
        self.satellites.iter().find(|e| e.norad_id == norad_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
satellites:
  - name: ISS (ZARYA)
    norad_id: 25544
  - name: HST
    norad_id: 20580
"#;

    #[test]
    fn parses_entries_in_file_order() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].name, "ISS (ZARYA)");
        assert_eq!(catalog.entries()[1].norad_id, 20580);
    }

    #[test]
    fn find_by_norad_id() {
        let catalog = Catalog::from_str(SAMPLE).unwrap();
        assert_eq!(catalog.find(25544).unwrap().name, "ISS (ZARYA)");
        assert!(catalog.find(99999).is_none());
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(Catalog::from_str("satellites: 12").is_err());
    }
}
