//! DTO → matching-rule translation.
//!
//! One branch per rule kind; the match is exhaustive, so adding a kind
//! without a branch is a compile failure rather than a silent runtime
//! default.

use std::fmt;

use crate::comparator::{InternalComparator, MatchingComparator};
use crate::dto::RuleDto;
use crate::error::ValidationError;
use crate::matching::{MatchingRule, TxStatus};

/// Project a rule DTO onto the indexer-facing matching rule.
///
/// Pure and deterministic. Inputs that passed [`RuleDto::validate`] never
/// fail here; the invariants are re-checked so that a caller skipping
/// validation gets the same typed error instead of a malformed stored rule.
pub fn serialize_rule(dto: &RuleDto) -> Result<MatchingRule, ValidationError> {
    dto.validate()?;
    Ok(match dto {
        RuleDto::TxSuccess { contract } => MatchingRule::ActionAny {
            affected_account_id: contract.clone(),
            status: TxStatus::Success,
        },
        RuleDto::TxFailure { contract } => MatchingRule::ActionAny {
            affected_account_id: contract.clone(),
            status: TxStatus::Fail,
        },
        RuleDto::FnCall { contract, function } => MatchingRule::ActionFunctionCall {
            affected_account_id: contract.clone(),
            status: TxStatus::Any,
            function: function.clone(),
        },
        RuleDto::Event {
            contract,
            standard,
            version,
            event,
        } => MatchingRule::EventAny {
            affected_account_id: contract.clone(),
            status: TxStatus::Any,
            standard: standard.clone(),
            version: version.clone(),
            event: event.clone(),
        },
        RuleDto::AcctBalPct { contract, from, to } => {
            let (amount, amount_to, comparator) = balance_parts(*from, *to)?;
            MatchingRule::StateChangeAccountBalance {
                affected_account_id: contract.clone(),
                status: TxStatus::Any,
                amount,
                amount_to,
                comparator,
                percentage: true,
            }
        }
        RuleDto::AcctBalNum { contract, from, to } => {
            let (amount, amount_to, comparator) = balance_parts(*from, *to)?;
            MatchingRule::StateChangeAccountBalance {
                affected_account_id: contract.clone(),
                status: TxStatus::Any,
                amount,
                amount_to,
                comparator,
                percentage: false,
            }
        }
    })
}

/// Collapse a `{from, to}` bound pair into the stored
/// `{amount, amount_to, comparator}` form:
///
/// - only `from`      → `GREATER_THAN_OR_EQUAL`
/// - only `to`        → `LESS_THAN_OR_EQUAL`
/// - `from == to`     → `EQUAL`
/// - `from < to`      → `RANGE`, carrying both amounts
fn balance_parts<T>(
    from: Option<T>,
    to: Option<T>,
) -> Result<(String, Option<String>, MatchingComparator), ValidationError>
where
    T: Copy + PartialEq + fmt::Display,
{
    match (from, to) {
        (Some(f), None) => Ok((
            f.to_string(),
            None,
            InternalComparator::GreaterThanOrEqual.into(),
        )),
        (None, Some(t)) => Ok((t.to_string(), None, InternalComparator::LessThanOrEqual.into())),
        (Some(f), Some(t)) if f == t => Ok((f.to_string(), None, InternalComparator::Equal.into())),
        (Some(f), Some(t)) => Ok((f.to_string(), Some(t.to_string()), MatchingComparator::Range)),
        // Unreachable after validate(); kept typed for totality.
        (None, None) => Err(ValidationError::MissingBound),
    }
}
