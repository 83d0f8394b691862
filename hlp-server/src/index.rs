//! Route lookup index.
//!
//! One O(n) pass over the catalog builds three derived structures: the
//! distinct origins, each origin's reachable destinations, and an exact
//! (origin, destination) → route map. Every list keeps first-seen catalog
//! order so the selector UI is deterministic across runs: the ordering is
//! the contract, not an accident of hashing.
//!
//! A lookup miss is an ordinary value (empty slice, `None`), never an
//! error: callers branch on absence.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::{Category, Route};

/// Derived lookup structures over an immutable [`RouteCatalog`].
///
/// Built once after the catalog loads; any catalog change requires a full
/// rebuild. Shares the catalog via `Arc`, so building the index does not
/// copy route data.
#[derive(Debug)]
pub struct RouteIndex {
    /// The catalog this index was built from.
    catalog: Arc<RouteCatalog>,

    /// Distinct origins, in first-seen catalog order.
    origins: Vec<String>,

    /// Map from origin to its reachable destinations, de-duplicated,
    /// in first-seen order among routes sharing that origin.
    destinations: HashMap<String, Vec<String>>,

    /// Exact-match map: origin → destination → position in the catalog.
    by_pair: HashMap<String, HashMap<String, usize>>,
}

impl RouteIndex {
    /// Build the index from a loaded catalog.
    pub fn build(catalog: Arc<RouteCatalog>) -> Self {
        let mut origins: Vec<String> = Vec::new();
        let mut destinations: HashMap<String, Vec<String>> = HashMap::new();
        let mut by_pair: HashMap<String, HashMap<String, usize>> = HashMap::new();

        for (position, route) in catalog.all().iter().enumerate() {
            let dests = destinations.entry(route.origin.clone()).or_default();
            if dests.is_empty() {
                // First route from this origin
                origins.push(route.origin.clone());
            }
            if !dests.contains(&route.destination) {
                dests.push(route.destination.clone());
            }

            by_pair
                .entry(route.origin.clone())
                .or_default()
                .insert(route.destination.clone(), position);
        }

        debug!(
            routes = catalog.len(),
            origins = origins.len(),
            "route index built"
        );

        Self {
            catalog,
            origins,
            destinations,
            by_pair,
        }
    }

    /// The catalog this index was built from.
    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// All distinct origins, in catalog order.
    pub fn origins(&self) -> &[String] {
        &self.origins
    }

    /// Destinations reachable from an origin, in first-seen order.
    ///
    /// Returns an empty slice for an unknown origin.
    pub fn destinations_from(&self, origin: &str) -> &[String] {
        self.destinations
            .get(origin)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Look up the route for an exact (origin, destination) pair.
    ///
    /// Returns `None` when no route matches: a lookup miss, not a failure.
    pub fn find_exact_route(&self, origin: &str, destination: &str) -> Option<&Route> {
        let position = *self.by_pair.get(origin)?.get(destination)?;
        self.catalog.all().get(position)
    }

    /// Free-text search over origin, destination, line info, and notes.
    ///
    /// Case-insensitive substring match; results keep catalog order, no
    /// ranking. An empty query matches every route.
    pub fn search(&self, query: &str) -> Vec<&Route> {
        let needle = query.to_lowercase();
        self.catalog
            .all()
            .iter()
            .filter(|route| matches_query(route, &needle))
            .collect()
    }

    /// All routes in a category, in catalog order.
    pub fn filter_by_category(&self, category: &Category) -> Vec<&Route> {
        self.catalog
            .all()
            .iter()
            .filter(|route| &route.category == category)
            .collect()
    }
}

/// Case-insensitive substring match against the searchable route fields.
fn matches_query(route: &Route, needle: &str) -> bool {
    route.origin.to_lowercase().contains(needle)
        || route.destination.to_lowercase().contains(needle)
        || route
            .line_info
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
        || route
            .notes
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
}
