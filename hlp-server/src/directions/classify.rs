//! Instruction classification.

use super::Direction;
use super::phrases::PHRASE_TABLE;

/// Classify a driving instruction into a direction category.
///
/// Matching is case-insensitive substring search over the ordered phrase
/// table; the first category with any match wins. Returns `None` when no
/// phrase matches. Total and deterministic, never fails.
///
/// # Examples
///
/// ```
/// use hlp_server::directions::{Direction, classify};
///
/// assert_eq!(classify("Tourner à droite"), Some(Direction::Right));
///
/// // Precedence: a roundabout beats the turn mentioned with it
/// assert_eq!(
///     classify("tourner à gauche au giratoire"),
///     Some(Direction::Roundabout)
/// );
///
/// assert_eq!(classify("Arrêt Bel-Air"), None);
/// ```
pub fn classify(text: &str) -> Option<Direction> {
    let lower = text.to_lowercase();
    for (direction, phrases) in PHRASE_TABLE {
        if phrases.iter().any(|phrase| lower.contains(phrase)) {
            return Some(*direction);
        }
    }
    None
}
