//! Comparator vocabularies: public, internal, and stored.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Comparator vocabulary accepted from clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicComparator {
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

/// Comparator vocabulary shared with the chain indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum InternalComparator {
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl PublicComparator {
    /// Total one-to-one mapping into the internal vocabulary.
    pub fn to_internal(self) -> InternalComparator {
        match self {
            PublicComparator::Eq => InternalComparator::Equal,
            PublicComparator::Lt => InternalComparator::LessThan,
            PublicComparator::Lte => InternalComparator::LessThanOrEqual,
            PublicComparator::Gt => InternalComparator::GreaterThan,
            PublicComparator::Gte => InternalComparator::GreaterThanOrEqual,
        }
    }
}

impl InternalComparator {
    /// Inverse of [`PublicComparator::to_internal`].
    pub fn to_public(self) -> PublicComparator {
        match self {
            InternalComparator::Equal => PublicComparator::Eq,
            InternalComparator::LessThan => PublicComparator::Lt,
            InternalComparator::LessThanOrEqual => PublicComparator::Lte,
            InternalComparator::GreaterThan => PublicComparator::Gt,
            InternalComparator::GreaterThanOrEqual => PublicComparator::Gte,
        }
    }
}

impl FromStr for PublicComparator {
    type Err = RuleError;

    /// Parse open (network) input. Unknown strings fail, never default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQ" => Ok(PublicComparator::Eq),
            "LT" => Ok(PublicComparator::Lt),
            "LTE" => Ok(PublicComparator::Lte),
            "GT" => Ok(PublicComparator::Gt),
            "GTE" => Ok(PublicComparator::Gte),
            other => Err(RuleError::UnsupportedComparator(other.to_string())),
        }
    }
}

impl FromStr for InternalComparator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQUAL" => Ok(InternalComparator::Equal),
            "LESS_THAN" => Ok(InternalComparator::LessThan),
            "LESS_THAN_OR_EQUAL" => Ok(InternalComparator::LessThanOrEqual),
            "GREATER_THAN" => Ok(InternalComparator::GreaterThan),
            "GREATER_THAN_OR_EQUAL" => Ok(InternalComparator::GreaterThanOrEqual),
            other => Err(RuleError::UnsupportedComparator(other.to_string())),
        }
    }
}

/// Comparator as stored on a balance matching rule: the internal vocabulary
/// plus the two-amount `RANGE` form. `RANGE` is produced only by the rule
/// serializer for two-sided bounds; it has no public-vocabulary counterpart
/// and never comes out of [`PublicComparator::to_internal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchingComparator {
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Range,
}

impl From<InternalComparator> for MatchingComparator {
    fn from(c: InternalComparator) -> Self {
        match c {
            InternalComparator::Equal => MatchingComparator::Equal,
            InternalComparator::LessThan => MatchingComparator::LessThan,
            InternalComparator::LessThanOrEqual => MatchingComparator::LessThanOrEqual,
            InternalComparator::GreaterThan => MatchingComparator::GreaterThan,
            InternalComparator::GreaterThanOrEqual => MatchingComparator::GreaterThanOrEqual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_public_internal_bijection() {
        for public in PublicComparator::iter() {
            assert_eq!(public.to_internal().to_public(), public);
        }
    }

    #[test]
    fn test_mapping_table() {
        assert_eq!(PublicComparator::Eq.to_internal(), InternalComparator::Equal);
        assert_eq!(PublicComparator::Gt.to_internal(), InternalComparator::GreaterThan);
        assert_eq!(
            PublicComparator::Gte.to_internal(),
            InternalComparator::GreaterThanOrEqual
        );
        assert_eq!(PublicComparator::Lt.to_internal(), InternalComparator::LessThan);
        assert_eq!(
            PublicComparator::Lte.to_internal(),
            InternalComparator::LessThanOrEqual
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(InternalComparator::LessThanOrEqual).unwrap(),
            serde_json::json!("LESS_THAN_OR_EQUAL")
        );
        assert_eq!(
            serde_json::to_value(PublicComparator::Gte).unwrap(),
            serde_json::json!("GTE")
        );
        assert_eq!(
            serde_json::to_value(MatchingComparator::Range).unwrap(),
            serde_json::json!("RANGE")
        );
        assert_eq!(InternalComparator::GreaterThanOrEqual.to_string(), "GREATER_THAN_OR_EQUAL");
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        // NEQ is reserved but unused in both vocabularies.
        assert_eq!(
            "NEQ".parse::<PublicComparator>(),
            Err(RuleError::UnsupportedComparator("NEQ".to_string()))
        );
        assert_eq!(
            "NOT_EQUAL".parse::<InternalComparator>(),
            Err(RuleError::UnsupportedComparator("NOT_EQUAL".to_string()))
        );
        // Case-sensitive: the wire vocabulary is upper-case only.
        assert!("eq".parse::<PublicComparator>().is_err());
    }

    #[test]
    fn test_internal_comparators_survive_conversion_to_stored_form() {
        for public in PublicComparator::iter() {
            let stored = MatchingComparator::from(public.to_internal());
            assert_ne!(stored, MatchingComparator::Range);
        }
    }
}
