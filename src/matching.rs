//! Indexer-facing matching rule shapes.
//!
//! A `MatchingRule` is built once at alert creation, stored as an opaque
//! JSON column, and consumed verbatim by the external chain indexer. Field
//! names here are a stable wire contract shared with that indexer.
//!
//! Reads must tolerate rules written by earlier serializer versions:
//! unknown fields are ignored, a missing `status` defaults to `ANY`, and
//! amounts are accepted as either JSON strings or bare numbers.

use serde::{Deserialize, Deserializer, Serialize};

use crate::comparator::MatchingComparator;
use crate::error::RuleError;

/// Transaction outcome filter on a matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxStatus {
    Success,
    Fail,
    #[default]
    Any,
}

/// The normalized predicate consumed by the chain indexer, tagged by `rule`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule")]
pub enum MatchingRule {
    /// Any action under the account, filtered by outcome.
    #[serde(rename = "ACTION_ANY")]
    ActionAny {
        affected_account_id: String,
        status: TxStatus,
    },
    /// A specific function call under the account.
    #[serde(rename = "ACTION_FUNCTION_CALL")]
    ActionFunctionCall {
        affected_account_id: String,
        #[serde(default)]
        status: TxStatus,
        function: String,
    },
    /// A standard event logged under the account.
    #[serde(rename = "EVENT_ANY")]
    EventAny {
        affected_account_id: String,
        #[serde(default)]
        status: TxStatus,
        standard: String,
        version: String,
        event: String,
    },
    /// An account balance change crossing a threshold or range.
    #[serde(rename = "STATE_CHANGE_ACCOUNT_BALANCE")]
    StateChangeAccountBalance {
        affected_account_id: String,
        #[serde(default)]
        status: TxStatus,
        #[serde(deserialize_with = "amount_from_string_or_number")]
        amount: String,
        /// Upper bound, present only for the `RANGE` comparator.
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "opt_amount_from_string_or_number"
        )]
        amount_to: Option<String>,
        comparator: MatchingComparator,
        percentage: bool,
    },
}

impl MatchingRule {
    /// The on-chain account this rule is scoped to.
    pub fn affected_account_id(&self) -> &str {
        match self {
            MatchingRule::ActionAny {
                affected_account_id, ..
            }
            | MatchingRule::ActionFunctionCall {
                affected_account_id, ..
            }
            | MatchingRule::EventAny {
                affected_account_id, ..
            }
            | MatchingRule::StateChangeAccountBalance {
                affected_account_id, ..
            } => affected_account_id,
        }
    }

    /// Parse a stored JSON column value. Unreadable records surface as
    /// [`RuleError::CorruptMatchingRule`], fatal to this read only.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RuleError> {
        serde_json::from_value(value).map_err(|e| RuleError::CorruptMatchingRule(e.to_string()))
    }

    /// Parse a stored JSON column from its raw text form.
    pub fn from_json_str(raw: &str) -> Result<Self, RuleError> {
        serde_json::from_str(raw).map_err(|e| RuleError::CorruptMatchingRule(e.to_string()))
    }

    /// Render the stored JSON form. Serialization of a well-formed rule is
    /// infallible: the shapes above contain only string-keyed fields.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("matching rule JSON form")
    }
}

/// Accept an amount as either a JSON string or a bare number. Early
/// serializer versions wrote percentage amounts as numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Text(String),
    Number(serde_json::Number),
}

impl From<AmountRepr> for String {
    fn from(repr: AmountRepr) -> String {
        match repr {
            AmountRepr::Text(s) => s,
            AmountRepr::Number(n) => n.to_string(),
        }
    }
}

fn amount_from_string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    AmountRepr::deserialize(d).map(String::from)
}

fn opt_amount_from_string_or_number<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<String>, D::Error> {
    Option::<AmountRepr>::deserialize(d).map(|v| v.map(String::from))
}
