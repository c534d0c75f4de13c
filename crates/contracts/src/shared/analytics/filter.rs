use serde::{Deserialize, Serialize};

/// Wildcard value accepted on the wire for "no constraint".
pub const ALL: &str = "all";

/// A single dimension constraint: either the wildcard or an exact value.
///
/// Serialized as a plain string, `"all"` (or an empty string) meaning wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    pub fn only(value: &str) -> Self {
        Selector::Only(value.to_string())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Wildcard passes unconditionally, otherwise exact match
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }
}

/// `"all"` in any letter case and the empty string both read as the wildcard
impl From<String> for Selector {
    fn from(value: String) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
            Selector::All
        } else {
            Selector::Only(value)
        }
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        match selector {
            Selector::All => ALL.to_string(),
            Selector::Only(value) => value,
        }
    }
}

/// Geographic filter state: five optional exact-match constraints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSet {
    pub continent: Selector,
    pub country: Selector,
    pub category: Selector,
    pub seller_type: Selector,
    pub shipping_mode: Selector,
}

impl FilterSet {
    /// The identity filter
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_wildcard(&self) -> bool {
        self.continent.is_all()
            && self.country.is_all()
            && self.category.is_all()
            && self.seller_type.is_all()
            && self.shipping_mode.is_all()
    }

    pub fn with_continent(mut self, value: &str) -> Self {
        self.continent = Selector::only(value);
        self
    }

    pub fn with_country(mut self, value: &str) -> Self {
        self.country = Selector::only(value);
        self
    }

    pub fn with_category(mut self, value: &str) -> Self {
        self.category = Selector::only(value);
        self
    }

    pub fn with_seller_type(mut self, value: &str) -> Self {
        self.seller_type = Selector::only(value);
        self
    }

    pub fn with_shipping_mode(mut self, value: &str) -> Self {
        self.shipping_mode = Selector::only(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_from_wire_value() {
        assert_eq!(Selector::from("all".to_string()), Selector::All);
        assert_eq!(Selector::from("ALL".to_string()), Selector::All);
        assert_eq!(Selector::from(String::new()), Selector::All);
        assert_eq!(
            Selector::from("Africa".to_string()),
            Selector::Only("Africa".to_string())
        );
    }

    #[test]
    fn test_filter_set_deserializes_partial_json() {
        let filter: FilterSet =
            serde_json::from_str(r#"{"continent":"Africa","sellerType":"all"}"#).unwrap();
        assert_eq!(filter.continent, Selector::only("Africa"));
        assert!(filter.seller_type.is_all());
        assert!(filter.country.is_all());
        assert!(!filter.is_wildcard());
    }

    #[test]
    fn test_selector_matches() {
        assert!(Selector::All.matches("anything"));
        assert!(Selector::only("Kenya").matches("Kenya"));
        assert!(!Selector::only("Kenya").matches("kenya"));
    }
}
