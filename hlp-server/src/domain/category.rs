//! Route category types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Why a vehicle is running empty.
///
/// The booklet uses three categories. Authored data occasionally carries
/// other values; those are preserved verbatim rather than rejected, and the
/// presentation layer renders them as-is.
///
/// # Examples
///
/// ```
/// use hlp_server::domain::Category;
///
/// assert_eq!(Category::parse("sortie"), Category::Sortie);
/// assert_eq!(Category::parse("inter-ligne"), Category::InterLigne);
///
/// // Unknown values pass through
/// let other = Category::parse("essai");
/// assert_eq!(other.as_str(), "essai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Depot-to-line empty run.
    Sortie,
    /// Line-to-depot empty run.
    Rentree,
    /// Line-to-line empty run.
    InterLigne,
    /// Any other authored value, preserved verbatim.
    Other(String),
}

impl Category {
    /// Parse an authored category value.
    ///
    /// The three booklet categories map to their variants; anything else is
    /// kept as [`Category::Other`]. This function is total.
    pub fn parse(s: &str) -> Self {
        match s {
            "sortie" => Category::Sortie,
            "rentree" => Category::Rentree,
            "inter-ligne" => Category::InterLigne,
            other => Category::Other(other.to_string()),
        }
    }

    /// Returns the authored string form of the category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Sortie => "sortie",
            Category::Rentree => "rentree",
            Category::InterLigne => "inter-ligne",
            Category::Other(s) => s,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_categories() {
        assert_eq!(Category::parse("sortie"), Category::Sortie);
        assert_eq!(Category::parse("rentree"), Category::Rentree);
        assert_eq!(Category::parse("inter-ligne"), Category::InterLigne);
    }

    #[test]
    fn parse_unknown_passes_through() {
        let cat = Category::parse("mise en place");
        assert_eq!(cat, Category::Other("mise en place".to_string()));
        assert_eq!(cat.as_str(), "mise en place");
    }

    #[test]
    fn parse_is_case_sensitive() {
        // The dataset is authored lowercase; "Sortie" is not a known value
        // and must round-trip untouched.
        let cat = Category::parse("Sortie");
        assert_eq!(cat, Category::Other("Sortie".to_string()));
    }

    #[test]
    fn display_matches_authored_form() {
        assert_eq!(Category::Sortie.to_string(), "sortie");
        assert_eq!(Category::Rentree.to_string(), "rentree");
        assert_eq!(Category::InterLigne.to_string(), "inter-ligne");
        assert_eq!(Category::Other("essai".into()).to_string(), "essai");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Category::InterLigne).unwrap();
        assert_eq!(json, "\"inter-ligne\"");

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::InterLigne);

        let other: Category = serde_json::from_str("\"essai\"").unwrap();
        assert_eq!(other, Category::Other("essai".to_string()));
    }
}
