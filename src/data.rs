// src/data.rs

use crate::catalog::{Catalog, CatalogError};
use crate::model::Topic;

/// Carga el catálogo de temas desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    read_catalog_from_str(include_str!("data/catalog.yaml"))
}

pub fn read_catalog_from_str(yaml: &str) -> Result<Catalog, CatalogError> {
    let topics: Vec<Topic> = serde_yaml::from_str(yaml)?;
    Catalog::new(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = read_catalog_embedded().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.all_problems().count(), 16);

        let first = &catalog.topics()[0];
        assert_eq!(first.id, "brute-force");
        assert_eq!(first.problems[0].id, "bf-1");
        assert_eq!(first.problems[0].difficulty, Difficulty::Easy);
        assert_eq!(first.problems[0].test_cases.len(), 2);
        assert_eq!(first.problems[0].sample_input, "2 7 11 15\n9");
    }

    #[test]
    fn optional_fields_default() {
        let catalog = read_catalog_embedded().unwrap();
        let path_sum = catalog.problem("dfs-2").unwrap();
        assert!(path_sum.test_cases.is_empty());
        assert!(path_sum.explanation.is_none());
        assert_eq!(catalog.owner_of("dfs-2").unwrap().id, "dfs");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = read_catalog_from_str("- id: [unterminated").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
