//! The loaded route catalog.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Category, Route};

use super::error::{CatalogError, DataIntegrityError};
use super::records::DatasetFile;

/// Per-category route counts, computed once from the catalog.
///
/// Display-only: lookup logic never consults these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteStats {
    /// Total number of routes.
    pub total: usize,
    /// Depot-to-line runs.
    pub sorties: usize,
    /// Line-to-depot runs.
    pub rentrees: usize,
    /// Line-to-line runs.
    pub inter_lignes: usize,
    /// Routes with an unrecognized authored category.
    pub other: usize,
}

/// The immutable set of authored empty-run routes.
///
/// Built once from a static dataset; iteration order is authoring order.
/// Safe for unrestricted concurrent reads; nothing is written after
/// construction.
#[derive(Debug)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    version: Option<String>,
    valid_from: Option<NaiveDate>,
}

impl RouteCatalog {
    /// Load the catalog from a dataset file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse the catalog from JSON dataset text.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let file: DatasetFile = serde_json::from_str(json)?;

        let valid_from = match &file.version {
            Some(v) => Some(parse_version_date(v)?),
            None => None,
        };

        let routes: Vec<Route> = file.routes.into_iter().map(|r| r.into_route()).collect();
        validate(&routes)?;

        debug!(
            routes = routes.len(),
            version = file.version.as_deref().unwrap_or("-"),
            "catalog loaded"
        );

        Ok(Self {
            routes,
            version: file.version,
            valid_from,
        })
    }

    /// Build a catalog from already-constructed routes.
    ///
    /// Applies the same data contract as [`RouteCatalog::parse`].
    pub fn from_routes(routes: Vec<Route>) -> Result<Self, DataIntegrityError> {
        validate(&routes)?;
        Ok(Self {
            routes,
            version: None,
            valid_from: None,
        })
    }

    /// All routes, in authoring order.
    pub fn all(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes in the catalog.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the catalog has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Booklet edition string, as authored (DD.MM.YYYY).
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Date from which the booklet edition is valid.
    pub fn valid_from(&self) -> Option<NaiveDate> {
        self.valid_from
    }

    /// Count routes per category in a single pass.
    pub fn stats(&self) -> RouteStats {
        let mut stats = RouteStats {
            total: self.routes.len(),
            sorties: 0,
            rentrees: 0,
            inter_lignes: 0,
            other: 0,
        };
        for route in &self.routes {
            match route.category {
                Category::Sortie => stats.sorties += 1,
                Category::Rentree => stats.rentrees += 1,
                Category::InterLigne => stats.inter_lignes += 1,
                Category::Other(_) => stats.other += 1,
            }
        }
        stats
    }
}

/// Check the data contract: non-empty endpoints, non-empty itinerary,
/// no duplicate (origin, destination) pair.
fn validate(routes: &[Route]) -> Result<(), DataIntegrityError> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for (index, route) in routes.iter().enumerate() {
        if route.origin.trim().is_empty() {
            return Err(DataIntegrityError::MissingOrigin { index });
        }
        if route.destination.trim().is_empty() {
            return Err(DataIntegrityError::MissingDestination { index });
        }
        if route.itinerary.is_empty() {
            return Err(DataIntegrityError::EmptyItinerary {
                index,
                origin: route.origin.clone(),
                destination: route.destination.clone(),
            });
        }
        if !seen.insert((route.origin.as_str(), route.destination.as_str())) {
            return Err(DataIntegrityError::DuplicateRoute {
                index,
                origin: route.origin.clone(),
                destination: route.destination.clone(),
            });
        }
    }

    Ok(())
}

/// Parse the booklet edition date, e.g. "14.12.2025".
fn parse_version_date(value: &str) -> Result<NaiveDate, DataIntegrityError> {
    NaiveDate::parse_from_str(value, "%d.%m.%Y").map_err(|_| {
        DataIntegrityError::InvalidVersionDate {
            value: value.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Step;
    use std::io::Write;

    fn route(origin: &str, destination: &str, category: Category) -> Route {
        Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            category,
            line_info: None,
            itinerary: vec![Step::new("Tout droit")],
            notes: None,
            depot: None,
        }
    }

    const DATASET: &str = r#"{
        "version": "14.12.2025",
        "routes": [
            {
                "origin": "Dépôt En Chardon",
                "destination": "Terminus Rive",
                "category": "sortie",
                "lineInfo": "Ligne 12",
                "itinerary": [
                    { "direction": "Sortir du dépôt" },
                    { "direction": "Tourner à droite" },
                    { "direction": "Continuer tout droit" },
                    { "direction": "Terminus Rive" }
                ],
                "depot": "En Chardon"
            },
            {
                "origin": "Terminus Rive",
                "destination": "Dépôt En Chardon",
                "category": "rentree",
                "itinerary": [{ "direction": "Faire demi-tour au giratoire" }]
            }
        ]
    }"#;

    #[test]
    fn parse_valid_dataset() {
        let catalog = RouteCatalog::parse(DATASET).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.version(), Some("14.12.2025"));
        assert_eq!(
            catalog.valid_from(),
            Some(NaiveDate::from_ymd_opt(2025, 12, 14).unwrap())
        );

        let first = &catalog.all()[0];
        assert_eq!(first.origin, "Dépôt En Chardon");
        assert_eq!(first.destination, "Terminus Rive");
        assert_eq!(first.category, Category::Sortie);
        assert_eq!(first.step_count(), 4);
    }

    #[test]
    fn iteration_preserves_authoring_order() {
        let catalog = RouteCatalog::parse(DATASET).unwrap();
        let origins: Vec<&str> = catalog.all().iter().map(|r| r.origin.as_str()).collect();
        assert_eq!(origins, vec!["Dépôt En Chardon", "Terminus Rive"]);
    }

    #[test]
    fn missing_origin_fails() {
        let json = r#"{
            "routes": [{
                "destination": "B",
                "category": "sortie",
                "itinerary": [{ "direction": "Tout droit" }]
            }]
        }"#;

        match RouteCatalog::parse(json) {
            Err(CatalogError::Integrity(DataIntegrityError::MissingOrigin { index: 0 })) => {}
            other => panic!("expected MissingOrigin, got {other:?}"),
        }
    }

    #[test]
    fn missing_destination_fails() {
        let json = r#"{
            "routes": [{
                "origin": "A",
                "category": "sortie",
                "itinerary": [{ "direction": "Tout droit" }]
            }]
        }"#;

        match RouteCatalog::parse(json) {
            Err(CatalogError::Integrity(DataIntegrityError::MissingDestination { index: 0 })) => {}
            other => panic!("expected MissingDestination, got {other:?}"),
        }
    }

    #[test]
    fn empty_itinerary_fails() {
        let json = r#"{
            "routes": [{
                "origin": "A",
                "destination": "B",
                "category": "sortie",
                "itinerary": []
            }]
        }"#;

        match RouteCatalog::parse(json) {
            Err(CatalogError::Integrity(DataIntegrityError::EmptyItinerary {
                index: 0, ..
            })) => {}
            other => panic!("expected EmptyItinerary, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_pair_fails() {
        let routes = vec![
            route("A", "B", Category::Sortie),
            route("A", "C", Category::Sortie),
            route("A", "B", Category::Rentree),
        ];

        match RouteCatalog::from_routes(routes) {
            Err(DataIntegrityError::DuplicateRoute { index: 2, .. }) => {}
            other => panic!("expected DuplicateRoute, got {other:?}"),
        }
    }

    #[test]
    fn reversed_pair_is_not_a_duplicate() {
        let routes = vec![
            route("A", "B", Category::Sortie),
            route("B", "A", Category::Rentree),
        ];
        assert!(RouteCatalog::from_routes(routes).is_ok());
    }

    #[test]
    fn invalid_version_date_fails() {
        let json = r#"{ "version": "décembre 2025", "routes": [] }"#;

        match RouteCatalog::parse(json) {
            Err(CatalogError::Integrity(DataIntegrityError::InvalidVersionDate { value })) => {
                assert_eq!(value, "décembre 2025");
            }
            other => panic!("expected InvalidVersionDate, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        match RouteCatalog::parse("{ not json") {
            Err(CatalogError::Parse(_)) => {}
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn stats_counts_per_category() {
        let routes = vec![
            route("A", "B", Category::Sortie),
            route("B", "A", Category::Rentree),
            route("A", "C", Category::Sortie),
            route("C", "D", Category::InterLigne),
            route("D", "E", Category::Other("essai".into())),
        ];
        let catalog = RouteCatalog::from_routes(routes).unwrap();
        let stats = catalog.stats();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.sorties, 2);
        assert_eq!(stats.rentrees, 1);
        assert_eq!(stats.inter_lignes, 1);
        assert_eq!(stats.other, 1);
    }

    #[test]
    fn shipped_dataset_is_valid() {
        let catalog = RouteCatalog::parse(include_str!("../../data/routes.json")).unwrap();

        let stats = catalog.stats();
        assert_eq!(stats.total, 10);
        assert_eq!(stats.sorties, 4);
        assert_eq!(stats.rentrees, 4);
        assert_eq!(stats.inter_lignes, 2);
        assert_eq!(stats.other, 0);
        assert_eq!(catalog.version(), Some("14.12.2025"));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let catalog = RouteCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        match RouteCatalog::load(&path) {
            Err(CatalogError::Read(_)) => {}
            other => panic!("expected Read, got {other:?}"),
        }
    }
}
