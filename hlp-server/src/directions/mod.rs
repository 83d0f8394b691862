//! Direction annotation engine.
//!
//! Classifies free-text driving instructions ("tourner à gauche", "au
//! giratoire", …) into a closed set of direction categories, and marks the
//! matched phrases as spans over the original text. Both functions are
//! stateless, total, and share one ordered phrase table, so the classifier
//! and the annotator can never disagree about precedence.
//!
//! The annotator output is pure data (text + span list), never markup; each
//! presentation layer turns spans into its own rendering primitive.

mod annotate;
mod classify;
mod phrases;

pub use annotate::{AnnotatedInstruction, Span, annotate};
pub use classify::classify;

use std::fmt;

use serde::Serialize;

/// A direction category detected in an instruction.
///
/// "No direction detected" is represented as `Option::<Direction>::None`
/// by [`classify`], not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Entering or negotiating a roundabout.
    Roundabout,
    /// Turning back the way the vehicle came.
    UTurn,
    /// A left turn.
    Left,
    /// A right turn.
    Right,
    /// Keeping straight on.
    Straight,
}

impl Direction {
    /// Stable lowercase name, usable as a CSS class or API value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Roundabout => "roundabout",
            Direction::UTurn => "uturn",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Straight => "straight",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
