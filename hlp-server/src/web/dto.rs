//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::RouteStats;
use crate::directions::{AnnotatedInstruction, Direction, Span, annotate};
use crate::domain::Route;

/// Response listing all origins.
#[derive(Debug, Serialize)]
pub struct OriginsResponse {
    /// Distinct origins, in catalog order.
    pub origins: Vec<String>,
}

/// Request for the destinations reachable from an origin.
#[derive(Debug, Deserialize)]
pub struct DestinationsRequest {
    /// Origin location name.
    pub from: String,
}

/// Response listing reachable destinations.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    /// Destinations in first-seen order; empty for an unknown origin.
    pub destinations: Vec<String>,
}

/// Request for an exact route lookup.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin location name.
    pub from: String,

    /// Destination location name.
    pub to: String,
}

/// Response for an exact route lookup.
///
/// `route` is `null` on a lookup miss; absence is data, not an error.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// The matched route, if any.
    pub route: Option<RouteResult>,
}

/// A full route with annotated itinerary steps.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Departure location name.
    pub origin: String,

    /// Arrival location name.
    pub destination: String,

    /// Authored category value.
    pub category: String,

    /// Transit line reference.
    pub line_info: Option<String>,

    /// Itinerary steps, each with direction annotations.
    pub steps: Vec<StepResult>,

    /// Free-text caveats or alternatives.
    pub notes: Option<String>,

    /// Associated depot name.
    pub depot: Option<String>,

    /// Number of steps.
    pub step_count: usize,
}

/// One itinerary step with its direction annotations.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// The instruction text, unmodified.
    pub text: String,

    /// Overall direction category, if any phrase matched.
    pub direction: Option<Direction>,

    /// Matched phrase spans (byte offsets into `text`).
    pub spans: Vec<SpanResult>,
}

/// A matched directional phrase inside a step.
#[derive(Debug, Serialize)]
pub struct SpanResult {
    /// Byte offset of the first matched byte.
    pub start: usize,

    /// Byte offset one past the last matched byte.
    pub end: usize,

    /// Category of the matched phrase.
    pub direction: Direction,
}

/// Request for free-text route search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; empty matches everything.
    #[serde(default)]
    pub q: String,

    /// Optional category to narrow to.
    pub category: Option<String>,
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matching routes, in catalog order.
    pub routes: Vec<RouteSummary>,
}

/// A route in search results, without its itinerary.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    /// Departure location name.
    pub origin: String,

    /// Arrival location name.
    pub destination: String,

    /// Authored category value.
    pub category: String,

    /// Transit line reference.
    pub line_info: Option<String>,

    /// Number of itinerary steps.
    pub step_count: usize,
}

/// Response with per-category route counts.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Total number of routes.
    pub total: usize,

    /// Depot-to-line runs.
    pub sorties: usize,

    /// Line-to-depot runs.
    pub rentrees: usize,

    /// Line-to-line runs.
    pub inter_lignes: usize,

    /// Booklet edition, when the dataset carries one.
    pub version: Option<String>,
}

/// Request carrying one instruction text.
#[derive(Debug, Deserialize)]
pub struct InstructionRequest {
    /// The instruction to classify or annotate.
    #[serde(default)]
    pub text: String,
}

/// Response for instruction classification.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Detected category, `null` when no phrase matched.
    pub direction: Option<Direction>,
}

/// Response for instruction annotation.
#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    /// The original text, unmodified.
    pub text: String,

    /// Overall category.
    pub direction: Option<Direction>,

    /// Matched phrase spans.
    pub spans: Vec<SpanResult>,
}

// Conversion implementations

impl RouteResult {
    /// Create from a domain route, annotating every step.
    pub fn from_route(route: &Route) -> Self {
        let steps = route
            .itinerary
            .iter()
            .map(|step| StepResult::from_instruction(annotate(&step.direction)))
            .collect();

        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            category: route.category.as_str().to_string(),
            line_info: route.line_info.clone(),
            steps,
            notes: route.notes.clone(),
            depot: route.depot.clone(),
            step_count: route.step_count(),
        }
    }
}

impl StepResult {
    /// Create from an annotated instruction.
    pub fn from_instruction(ann: AnnotatedInstruction) -> Self {
        Self {
            direction: ann.direction,
            spans: ann.spans.iter().map(SpanResult::from_span).collect(),
            text: ann.text,
        }
    }
}

impl SpanResult {
    /// Create from a directions span.
    pub fn from_span(span: &Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
            direction: span.direction,
        }
    }
}

impl RouteSummary {
    /// Create from a domain route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            category: route.category.as_str().to_string(),
            line_info: route.line_info.clone(),
            step_count: route.step_count(),
        }
    }
}

impl StatsResponse {
    /// Create from catalog stats and the optional booklet version.
    pub fn from_stats(stats: RouteStats, version: Option<&str>) -> Self {
        Self {
            total: stats.total,
            sorties: stats.sorties,
            rentrees: stats.rentrees,
            inter_lignes: stats.inter_lignes,
            version: version.map(str::to_string),
        }
    }
}

impl AnnotateResponse {
    /// Create from an annotated instruction.
    pub fn from_instruction(ann: AnnotatedInstruction) -> Self {
        Self {
            direction: ann.direction,
            spans: ann.spans.iter().map(SpanResult::from_span).collect(),
            text: ann.text,
        }
    }
}
