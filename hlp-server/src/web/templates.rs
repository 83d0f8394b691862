//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::RouteStats;
use crate::directions::annotate;
use crate::domain::{Category, Route};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: stats header, route selector, search.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub origins: Vec<String>,
    pub stats: StatsView,
    pub version: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route detail fragment.
#[derive(Template)]
#[template(path = "route_detail.html")]
pub struct RouteDetailTemplate {
    pub route: RouteView,
}

/// Placeholder fragment for a lookup miss or empty selection.
#[derive(Template)]
#[template(path = "route_miss.html")]
pub struct RouteMissTemplate;

/// Search results fragment.
#[derive(Template)]
#[template(path = "route_list.html")]
pub struct RouteListTemplate {
    pub routes: Vec<RouteSummaryView>,
    pub query: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Stats view model for the header.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub total: usize,
    pub sorties: usize,
    pub rentrees: usize,
    pub inter_lignes: usize,
}

impl StatsView {
    /// Create from catalog stats.
    pub fn from_stats(stats: RouteStats) -> Self {
        Self {
            total: stats.total,
            sorties: stats.sorties,
            rentrees: stats.rentrees,
            inter_lignes: stats.inter_lignes,
        }
    }
}

/// Route view model for the detail fragment.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub origin: String,
    pub destination: String,
    pub category_label: String,
    pub category_kind: String,
    pub line_info: String,
    pub steps: Vec<StepView>,
    pub notes: String,
    pub depot: String,
    pub step_count: usize,
}

impl RouteView {
    /// Create from a domain route, annotating every step.
    pub fn from_route(route: &Route) -> Self {
        let step_count = route.step_count();
        let steps = route
            .itinerary
            .iter()
            .enumerate()
            .map(|(i, step)| StepView::from_instruction(&step.direction, i == 0, i + 1 == step_count))
            .collect();

        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            category_label: category_label(&route.category),
            category_kind: category_kind(&route.category).to_string(),
            line_info: route.line_info.clone().unwrap_or_default(),
            steps,
            notes: route.notes.clone().unwrap_or_default(),
            depot: route.depot.clone().unwrap_or_default(),
            step_count,
        }
    }
}

/// One itinerary step, split into plain and highlighted segments.
#[derive(Debug, Clone)]
pub struct StepView {
    pub segments: Vec<SegmentView>,
    pub first: bool,
    pub last: bool,
}

impl StepView {
    /// Annotate an instruction and split it around the matched spans.
    ///
    /// The span list is turned into alternating plain/highlighted segments
    /// here, in the view layer; the template only ever wraps segment text,
    /// so nothing unescaped reaches the page.
    pub fn from_instruction(text: &str, first: bool, last: bool) -> Self {
        let ann = annotate(text);
        let mut segments = Vec::new();
        let mut cursor = 0;

        for span in &ann.spans {
            if span.start > cursor {
                segments.push(SegmentView {
                    text: ann.text[cursor..span.start].to_string(),
                    class_name: String::new(),
                });
            }
            segments.push(SegmentView {
                text: ann.text[span.start..span.end].to_string(),
                class_name: format!("dir-{}", span.direction.as_str()),
            });
            cursor = span.end;
        }
        if cursor < ann.text.len() {
            segments.push(SegmentView {
                text: ann.text[cursor..].to_string(),
                class_name: String::new(),
            });
        }

        Self {
            segments,
            first,
            last,
        }
    }
}

/// A run of step text; highlighted when `class_name` is non-empty.
#[derive(Debug, Clone)]
pub struct SegmentView {
    pub text: String,
    pub class_name: String,
}

/// Route view model for search results.
#[derive(Debug, Clone)]
pub struct RouteSummaryView {
    pub origin: String,
    pub destination: String,
    pub category_label: String,
    pub category_kind: String,
    pub line_info: String,
    pub step_count: usize,
}

impl RouteSummaryView {
    /// Create from a domain route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            category_label: category_label(&route.category),
            category_kind: category_kind(&route.category).to_string(),
            line_info: route.line_info.clone().unwrap_or_default(),
            step_count: route.step_count(),
        }
    }
}

/// French display label for a category badge.
///
/// Unknown authored values are rendered verbatim.
fn category_label(category: &Category) -> String {
    match category {
        Category::Sortie => "Sortie de dépôt".to_string(),
        Category::Rentree => "Rentrée au dépôt".to_string(),
        Category::InterLigne => "Déplacement inter-lignes".to_string(),
        Category::Other(value) => value.clone(),
    }
}

/// CSS class suffix for a category badge.
fn category_kind(category: &Category) -> &'static str {
    match category {
        Category::Sortie => "sortie",
        Category::Rentree => "rentree",
        Category::InterLigne => "inter-ligne",
        Category::Other(_) => "autre",
    }
}
