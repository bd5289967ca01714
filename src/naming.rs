//! Default alert names.

use crate::dto::RuleDto;

/// Build the default alert name used when the caller supplies none.
///
/// `address` is the display form of the rule's contract, resolved by the
/// caller beforehand; the engine performs no on-chain lookups. The match is
/// exhaustive, so a kind without a template cannot exist.
pub fn default_name(rule: &RuleDto, address: &str) -> String {
    match rule {
        RuleDto::TxSuccess { .. } => format!("Successful action in {address}"),
        RuleDto::TxFailure { .. } => format!("Failed action in {address}"),
        RuleDto::FnCall { function, .. } => format!("Function {function} called in {address}"),
        RuleDto::Event { event, .. } => format!("Event {event} logged in {address}"),
        RuleDto::AcctBalPct { .. } | RuleDto::AcctBalNum { .. } => {
            format!("Account balance changed in {address}")
        }
    }
}
