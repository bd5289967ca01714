//! Matching-rule → DTO projection.
//!
//! Used for live API reads and for rendering historical triggered-alert
//! records, so it must read rules written by every past serializer version.
//! Best-effort inverse of `serialize_rule`: single-sided and `RANGE`
//! balance rules round-trip exactly; records written before `RANGE` existed
//! reflect the single bound that was active at write time.

use std::str::FromStr;

use crate::comparator::MatchingComparator;
use crate::dto::RuleDto;
use crate::error::RuleError;
use crate::matching::{MatchingRule, TxStatus};
use crate::range::YoctoAmount;

/// Project a stored matching rule back to the public DTO shape.
///
/// Impossible tag/status/comparator combinations surface as
/// [`RuleError::CorruptMatchingRule`]: fatal to this record only, logged
/// so a missed migration shows up in service logs.
pub fn deserialize_rule(rule: &MatchingRule) -> Result<RuleDto, RuleError> {
    let dto = project(rule);
    if let Err(e) = &dto {
        log::warn!(
            "failed to read stored matching rule for {}: {e}",
            rule.affected_account_id()
        );
    }
    dto
}

fn project(rule: &MatchingRule) -> Result<RuleDto, RuleError> {
    match rule {
        MatchingRule::ActionAny {
            affected_account_id,
            status,
        } => match status {
            TxStatus::Success => Ok(RuleDto::TxSuccess {
                contract: affected_account_id.clone(),
            }),
            TxStatus::Fail => Ok(RuleDto::TxFailure {
                contract: affected_account_id.clone(),
            }),
            TxStatus::Any => Err(RuleError::CorruptMatchingRule(
                "ACTION_ANY requires status SUCCESS or FAIL".to_string(),
            )),
        },
        MatchingRule::ActionFunctionCall {
            affected_account_id,
            function,
            ..
        } => Ok(RuleDto::FnCall {
            contract: affected_account_id.clone(),
            function: function.clone(),
        }),
        MatchingRule::EventAny {
            affected_account_id,
            standard,
            version,
            event,
            ..
        } => Ok(RuleDto::Event {
            contract: affected_account_id.clone(),
            standard: standard.clone(),
            version: version.clone(),
            event: event.clone(),
        }),
        MatchingRule::StateChangeAccountBalance {
            affected_account_id,
            amount,
            amount_to,
            comparator,
            percentage,
            ..
        } => {
            let (from, to) = bounds(amount, amount_to.as_deref(), *comparator)?;
            if *percentage {
                Ok(RuleDto::AcctBalPct {
                    contract: affected_account_id.clone(),
                    from: from.map(parse_percent).transpose()?,
                    to: to.map(parse_percent).transpose()?,
                })
            } else {
                Ok(RuleDto::AcctBalNum {
                    contract: affected_account_id.clone(),
                    from: from.map(parse_yocto).transpose()?,
                    to: to.map(parse_yocto).transpose()?,
                })
            }
        }
    }
}

/// Reconstruct the DTO bound pair from the stored comparator form.
fn bounds<'a>(
    amount: &'a str,
    amount_to: Option<&'a str>,
    comparator: MatchingComparator,
) -> Result<(Option<&'a str>, Option<&'a str>), RuleError> {
    match comparator {
        MatchingComparator::GreaterThanOrEqual => Ok((Some(amount), None)),
        MatchingComparator::LessThanOrEqual => Ok((None, Some(amount))),
        MatchingComparator::Equal => Ok((Some(amount), Some(amount))),
        MatchingComparator::Range => {
            let to = amount_to.ok_or_else(|| {
                RuleError::CorruptMatchingRule("RANGE comparator without amount_to".to_string())
            })?;
            Ok((Some(amount), Some(to)))
        }
        // No serializer version writes strict comparators, and they have no
        // faithful projection onto the DTO's inclusive bounds.
        MatchingComparator::GreaterThan | MatchingComparator::LessThan => {
            Err(RuleError::CorruptMatchingRule(format!(
                "strict comparator {comparator} on a balance rule"
            )))
        }
    }
}

fn parse_percent(raw: &str) -> Result<u8, RuleError> {
    raw.parse::<u8>()
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| {
            RuleError::CorruptMatchingRule(format!("percentage amount {raw:?} outside 0..=100"))
        })
}

fn parse_yocto(raw: &str) -> Result<YoctoAmount, RuleError> {
    YoctoAmount::from_str(raw).map_err(|e| RuleError::CorruptMatchingRule(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{sample_rule, RuleKind};
    use crate::serializer::serialize_rule;
    use serde_json::json;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_round_trips() {
        // Samples use single-sided bounds for the balance kinds, so the
        // projection is exact for all six.
        for kind in RuleKind::iter() {
            let dto = sample_rule(kind);
            let stored = serialize_rule(&dto).unwrap();
            assert_eq!(deserialize_rule(&stored).unwrap(), dto, "round trip for {kind}");
        }
    }

    #[test]
    fn test_end_to_end_acct_bal_num() {
        let dto: RuleDto = serde_json::from_value(json!({
            "type": "ACCT_BAL_NUM",
            "contract": "alice.near",
            "to": "1000000000000000000000000",
        }))
        .unwrap();
        let stored = serialize_rule(&dto).unwrap();
        assert_eq!(
            stored.to_json(),
            json!({
                "rule": "STATE_CHANGE_ACCOUNT_BALANCE",
                "affected_account_id": "alice.near",
                "status": "ANY",
                "amount": "1000000000000000000000000",
                "comparator": "LESS_THAN_OR_EQUAL",
                "percentage": false,
            })
        );
        assert_eq!(deserialize_rule(&stored).unwrap(), dto);
    }

    #[test]
    fn test_equal_comparator_reconstructs_both_bounds() {
        let dto = RuleDto::AcctBalPct {
            contract: "alice.near".to_string(),
            from: Some(50),
            to: Some(50),
        };
        let stored = serialize_rule(&dto).unwrap();
        assert_eq!(deserialize_rule(&stored).unwrap(), dto);
    }

    #[test]
    fn test_range_comparator_round_trips_two_sided() {
        let dto = RuleDto::AcctBalNum {
            contract: "alice.near".to_string(),
            from: Some("100".parse().unwrap()),
            to: Some("200".parse().unwrap()),
        };
        let stored = serialize_rule(&dto).unwrap();
        assert_eq!(deserialize_rule(&stored).unwrap(), dto);
    }

    #[test]
    fn test_action_any_with_status_any_is_corrupt() {
        let _ = env_logger::builder().is_test(true).try_init();
        let rule = MatchingRule::ActionAny {
            affected_account_id: "alice.near".to_string(),
            status: TxStatus::Any,
        };
        assert!(matches!(
            deserialize_rule(&rule),
            Err(RuleError::CorruptMatchingRule(_))
        ));
    }

    #[test]
    fn test_strict_comparator_is_corrupt() {
        let rule = MatchingRule::StateChangeAccountBalance {
            affected_account_id: "alice.near".to_string(),
            status: TxStatus::Any,
            amount: "10".to_string(),
            amount_to: None,
            comparator: MatchingComparator::GreaterThan,
            percentage: true,
        };
        assert!(matches!(
            deserialize_rule(&rule),
            Err(RuleError::CorruptMatchingRule(_))
        ));
    }

    #[test]
    fn test_range_without_amount_to_is_corrupt() {
        let rule = MatchingRule::StateChangeAccountBalance {
            affected_account_id: "alice.near".to_string(),
            status: TxStatus::Any,
            amount: "10".to_string(),
            amount_to: None,
            comparator: MatchingComparator::Range,
            percentage: true,
        };
        assert!(matches!(
            deserialize_rule(&rule),
            Err(RuleError::CorruptMatchingRule(_))
        ));
    }

    #[test]
    fn test_percentage_amount_above_100_is_corrupt() {
        let rule = MatchingRule::StateChangeAccountBalance {
            affected_account_id: "alice.near".to_string(),
            status: TxStatus::Any,
            amount: "250".to_string(),
            amount_to: None,
            comparator: MatchingComparator::GreaterThanOrEqual,
            percentage: true,
        };
        assert!(matches!(
            deserialize_rule(&rule),
            Err(RuleError::CorruptMatchingRule(_))
        ));
    }

    #[test]
    fn test_legacy_record_with_numeric_amount() {
        // Early writers stored percentage amounts as bare JSON numbers.
        let stored = MatchingRule::from_json(json!({
            "rule": "STATE_CHANGE_ACCOUNT_BALANCE",
            "affected_account_id": "alice.near",
            "amount": 30,
            "comparator": "GREATER_THAN_OR_EQUAL",
            "percentage": true,
        }))
        .unwrap();
        assert_eq!(
            deserialize_rule(&stored).unwrap(),
            RuleDto::AcctBalPct {
                contract: "alice.near".to_string(),
                from: Some(30),
                to: None,
            }
        );
    }

    #[test]
    fn test_function_call_ignores_stored_status() {
        // Status is not central to kind selection for FN_CALL reads.
        let rule = MatchingRule::ActionFunctionCall {
            affected_account_id: "ft.near".to_string(),
            status: TxStatus::Success,
            function: "ft_transfer".to_string(),
        };
        assert_eq!(
            deserialize_rule(&rule).unwrap(),
            RuleDto::FnCall {
                contract: "ft.near".to_string(),
                function: "ft_transfer".to_string(),
            }
        );
    }
}
