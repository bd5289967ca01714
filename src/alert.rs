//! Alert entity: the translated rule plus its mutable display metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::deserializer::deserialize_rule;
use crate::dto::RuleDto;
use crate::error::RuleError;
use crate::matching::MatchingRule;
use crate::naming;
use crate::serializer::serialize_rule;

/// Create-operation input as accepted from clients.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlertInput {
    /// Optional display name; defaulted from the rule when absent.
    #[serde(default)]
    pub name: Option<String>,
    pub rule: RuleDto,
}

/// A configured alert. The matching rule is fixed at creation and owned by
/// the alert for its lifetime; only `name` and `is_paused` change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub name: String,
    pub is_paused: bool,
    pub matching_rule: MatchingRule,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Validate, name, and translate a new alert, in that order.
    ///
    /// `resolved_address` is the display address for the rule's contract,
    /// resolved by the caller before this point (the engine does not retry
    /// that lookup). Naming runs only when no name was supplied.
    pub fn create(input: CreateAlertInput, resolved_address: &str) -> Result<Self, RuleError> {
        input.rule.validate()?;
        let name = match input.name {
            Some(name) => name,
            None => {
                let name = naming::default_name(&input.rule, resolved_address);
                log::debug!("defaulted alert name to {name:?}");
                name
            }
        };
        let matching_rule = serialize_rule(&input.rule)?;
        Ok(Alert {
            name,
            is_paused: false,
            matching_rule,
            created_at: Utc::now(),
        })
    }

    /// Project the stored rule back to the client-facing DTO shape.
    pub fn rule_dto(&self) -> Result<RuleDto, RuleError> {
        deserialize_rule(&self.matching_rule)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::matching::TxStatus;

    fn fn_call_input(name: Option<&str>) -> CreateAlertInput {
        CreateAlertInput {
            name: name.map(String::from),
            rule: RuleDto::FnCall {
                contract: "dev-1234.testnet".to_string(),
                function: "ft_transfer".to_string(),
            },
        }
    }

    #[test]
    fn test_create_defaults_name() {
        let alert = Alert::create(fn_call_input(None), "dev-1234.testnet").unwrap();
        assert_eq!(alert.name, "Function ft_transfer called in dev-1234.testnet");
        assert!(!alert.is_paused);
    }

    #[test]
    fn test_create_keeps_supplied_name() {
        let alert = Alert::create(fn_call_input(Some("my transfer alert")), "dev-1234.testnet")
            .unwrap();
        assert_eq!(alert.name, "my transfer alert");
    }

    #[test]
    fn test_create_translates_rule() {
        let alert = Alert::create(fn_call_input(None), "dev-1234.testnet").unwrap();
        assert_eq!(
            alert.matching_rule,
            MatchingRule::ActionFunctionCall {
                affected_account_id: "dev-1234.testnet".to_string(),
                status: TxStatus::Any,
                function: "ft_transfer".to_string(),
            }
        );
    }

    #[test]
    fn test_create_rejects_invalid_range() {
        let input = CreateAlertInput {
            name: None,
            rule: RuleDto::AcctBalNum {
                contract: "alice.near".to_string(),
                from: None,
                to: None,
            },
        };
        assert_eq!(
            Alert::create(input, "alice.near"),
            Err(RuleError::Validation(ValidationError::MissingBound))
        );
    }

    #[test]
    fn test_read_path_round_trips() {
        let input = CreateAlertInput {
            name: None,
            rule: RuleDto::AcctBalPct {
                contract: "alice.near".to_string(),
                from: Some(10),
                to: None,
            },
        };
        let alert = Alert::create(input.clone(), "alice.near").unwrap();
        assert_eq!(alert.rule_dto().unwrap(), input.rule);
    }

    #[test]
    fn test_rename_and_pause() {
        let mut alert = Alert::create(fn_call_input(None), "dev-1234.testnet").unwrap();
        let rule_before = alert.matching_rule.clone();

        alert.rename("renamed");
        alert.set_paused(true);

        assert_eq!(alert.name, "renamed");
        assert!(alert.is_paused);
        // The rule itself is immutable across metadata changes.
        assert_eq!(alert.matching_rule, rule_before);
    }

    #[test]
    fn test_create_input_json() {
        let input: CreateAlertInput = serde_json::from_str(
            r#"{"rule":{"type":"TX_SUCCESS","contract":"counter.near"}}"#,
        )
        .unwrap();
        assert_eq!(input.name, None);
        assert_eq!(
            input.rule,
            RuleDto::TxSuccess {
                contract: "counter.near".to_string(),
            }
        );
    }
}
