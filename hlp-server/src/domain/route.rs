//! Authored route types.

use serde::Serialize;

use super::Category;

/// One step of an itinerary: a free-text driving instruction.
///
/// Steps are author-written prose ("Tourner à droite sur la route de
/// Meyrin"), not structured data. The first step of a route is always the
/// departure point and the last is always the arrival, regardless of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The driving instruction.
    pub direction: String,
}

impl Step {
    /// Create a step from an instruction string.
    pub fn new(direction: impl Into<String>) -> Self {
        Self {
            direction: direction.into(),
        }
    }
}

/// An authored empty-run route.
///
/// Identity is the (origin, destination) pair: a catalog contains at most
/// one route per pair. Routes are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Departure location name.
    pub origin: String,

    /// Arrival location name.
    pub destination: String,

    /// Why the vehicle is running empty.
    pub category: Category,

    /// Transit line reference, when the category implies a line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_info: Option<String>,

    /// Ordered driving instructions; never empty in a loaded catalog.
    pub itinerary: Vec<Step>,

    /// Free-text caveats or alternatives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Associated depot name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depot: Option<String>,
}

impl Route {
    /// Number of itinerary steps.
    pub fn step_count(&self) -> usize {
        self.itinerary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route() -> Route {
        Route {
            origin: "Dépôt En Chardon".to_string(),
            destination: "Terminus Rive".to_string(),
            category: Category::Sortie,
            line_info: Some("Ligne 12".to_string()),
            itinerary: vec![
                Step::new("Sortir du dépôt"),
                Step::new("Tourner à droite"),
                Step::new("Continuer tout droit"),
                Step::new("Terminus Rive"),
            ],
            notes: None,
            depot: Some("En Chardon".to_string()),
        }
    }

    #[test]
    fn step_count() {
        assert_eq!(route().step_count(), 4);
    }

    #[test]
    fn serialize_uses_camel_case_and_skips_absent_fields() {
        let mut r = route();
        r.notes = None;
        r.depot = None;
        r.line_info = Some("Ligne 12".to_string());

        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["lineInfo"], "Ligne 12");
        assert_eq!(value["category"], "sortie");
        assert!(value.get("notes").is_none());
        assert!(value.get("depot").is_none());
        assert_eq!(value["itinerary"][1]["direction"], "Tourner à droite");
    }
}
