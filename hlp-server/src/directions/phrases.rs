//! The shared phrase table.
//!
//! One ordered table drives both [`classify`](super::classify) and
//! [`annotate`](super::annotate). Category order is the precedence contract:
//! first match wins, so an instruction mentioning both a turn and a
//! roundabout classifies as roundabout. Within a category, longer
//! verb-phrase variants come before their bare keywords so a span covers
//! "tourner à gauche" rather than just "à gauche".
//!
//! All phrases are lowercase; matching is done on lower-cased text,
//! substring only; no stemming, no fuzzy matching.

use super::Direction;

/// Phrases per category, in precedence order.
pub(super) const PHRASE_TABLE: &[(Direction, &[&str])] = &[
    (
        Direction::Roundabout,
        &["giratoire", "rond-point", "rond point"],
    ),
    (
        Direction::UTurn,
        &["faire demi-tour", "demi-tour", "demi tour", "1/2 tour"],
    ),
    (
        Direction::Left,
        &[
            "tourner à gauche",
            "partir à gauche",
            "prendre à gauche",
            "à gauche",
        ],
    ),
    (
        Direction::Right,
        &[
            "tourner à droite",
            "descendre à droite",
            "prendre à droite",
            "à droite",
        ],
    ),
    (
        Direction::Straight,
        &[
            "continuer tout droit",
            "poursuivre tout droit",
            "tout droit",
            "continuer",
            "poursuivre",
        ],
    ),
];
