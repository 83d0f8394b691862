//! Serde records for the authored dataset.
//!
//! The on-disk shape mirrors the authored source: camelCase fields, routes
//! in authoring order, an optional booklet version in the header. Fields
//! checked by the data contract default to empty so a missing field surfaces
//! as a [`DataIntegrityError`] rather than a parse error.
//!
//! [`DataIntegrityError`]: super::DataIntegrityError

use serde::Deserialize;

use crate::domain::{Category, Route, Step};

/// Top-level dataset file.
#[derive(Debug, Deserialize)]
pub(super) struct DatasetFile {
    /// Booklet edition, DD.MM.YYYY.
    #[serde(default)]
    pub version: Option<String>,

    /// Authored routes, in authoring order.
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// One authored route record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RouteRecord {
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub destination: String,

    pub category: Category,

    #[serde(default)]
    pub line_info: Option<String>,

    #[serde(default)]
    pub itinerary: Vec<StepRecord>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub depot: Option<String>,
}

/// One itinerary step record.
#[derive(Debug, Deserialize)]
pub(super) struct StepRecord {
    pub direction: String,
}

impl RouteRecord {
    /// Convert into a domain route. Validation happens in the catalog.
    pub fn into_route(self) -> Route {
        Route {
            origin: self.origin,
            destination: self.destination,
            category: self.category,
            line_info: self.line_info,
            itinerary: self
                .itinerary
                .into_iter()
                .map(|s| Step::new(s.direction))
                .collect(),
            notes: self.notes,
            depot: self.depot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_camel_case() {
        let json = r#"{
            "origin": "Blandonnet",
            "destination": "Dépôt En Chardon",
            "category": "rentree",
            "lineInfo": "Ligne 14",
            "itinerary": [{ "direction": "Quitter le terminus" }],
            "depot": "En Chardon"
        }"#;

        let record: RouteRecord = serde_json::from_str(json).unwrap();
        let route = record.into_route();
        assert_eq!(route.origin, "Blandonnet");
        assert_eq!(route.category, Category::Rentree);
        assert_eq!(route.line_info.as_deref(), Some("Ligne 14"));
        assert_eq!(route.notes, None);
        assert_eq!(route.depot.as_deref(), Some("En Chardon"));
        assert_eq!(route.itinerary.len(), 1);
        assert_eq!(route.itinerary[0].direction, "Quitter le terminus");
    }

    #[test]
    fn missing_contract_fields_default_to_empty() {
        // origin/destination/itinerary are validated later; absence must not
        // be a parse error.
        let json = r#"{ "category": "sortie" }"#;

        let record: RouteRecord = serde_json::from_str(json).unwrap();
        assert!(record.origin.is_empty());
        assert!(record.destination.is_empty());
        assert!(record.itinerary.is_empty());
    }

    #[test]
    fn unknown_category_is_preserved() {
        let json = r#"{
            "origin": "A",
            "destination": "B",
            "category": "mise en place",
            "itinerary": [{ "direction": "Tout droit" }]
        }"#;

        let record: RouteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Other("mise en place".into()));
    }
}
