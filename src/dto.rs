//! Public, client-facing rule shapes.
//!
//! `RuleDto` is the versioned wire contract with dashboard clients: field
//! names and optionality are stable and must not drift as kinds are added.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::range::{self, YoctoAmount};

/// Discriminant of the closed set of alert rule kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKind {
    TxSuccess,
    TxFailure,
    FnCall,
    Event,
    AcctBalPct,
    AcctBalNum,
}

/// A user-facing alert condition, tagged by `type` on the wire.
///
/// For the two balance kinds, bounds read back from storage reflect the
/// bound that was active when the rule was written. Rules persisted before
/// the two-amount `RANGE` comparator existed collapsed a two-sided range to
/// a single bound, so reads of such records are not a strict inverse of the
/// original input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleDto {
    /// Any successful action under the contract.
    #[serde(rename = "TX_SUCCESS")]
    TxSuccess { contract: String },
    /// Any failed action under the contract.
    #[serde(rename = "TX_FAILURE")]
    TxFailure { contract: String },
    /// A specific function called on the contract, any outcome.
    #[serde(rename = "FN_CALL")]
    FnCall { contract: String, function: String },
    /// A standard event logged by the contract.
    #[serde(rename = "EVENT")]
    Event {
        contract: String,
        standard: String,
        version: String,
        event: String,
    },
    /// Account balance change, as a percentage of the prior balance.
    #[serde(rename = "ACCT_BAL_PCT")]
    AcctBalPct {
        contract: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<u8>,
    },
    /// Account balance change, as an absolute yocto amount.
    #[serde(rename = "ACCT_BAL_NUM")]
    AcctBalNum {
        contract: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<YoctoAmount>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<YoctoAmount>,
    },
}

impl RuleDto {
    pub fn kind(&self) -> RuleKind {
        match self {
            RuleDto::TxSuccess { .. } => RuleKind::TxSuccess,
            RuleDto::TxFailure { .. } => RuleKind::TxFailure,
            RuleDto::FnCall { .. } => RuleKind::FnCall,
            RuleDto::Event { .. } => RuleKind::Event,
            RuleDto::AcctBalPct { .. } => RuleKind::AcctBalPct,
            RuleDto::AcctBalNum { .. } => RuleKind::AcctBalNum,
        }
    }

    /// The on-chain account the rule is scoped to.
    pub fn contract(&self) -> &str {
        match self {
            RuleDto::TxSuccess { contract }
            | RuleDto::TxFailure { contract }
            | RuleDto::FnCall { contract, .. }
            | RuleDto::Event { contract, .. }
            | RuleDto::AcctBalPct { contract, .. }
            | RuleDto::AcctBalNum { contract, .. } => contract,
        }
    }

    /// Check the balance-range invariants at the input boundary, before
    /// serialization. Non-balance kinds carry no numeric invariants and
    /// always pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            RuleDto::AcctBalPct { from, to, .. } => range::validate_percent_range(*from, *to),
            RuleDto::AcctBalNum { from, to, .. } => range::validate_yocto_bounds(*from, *to),
            RuleDto::TxSuccess { .. }
            | RuleDto::TxFailure { .. }
            | RuleDto::FnCall { .. }
            | RuleDto::Event { .. } => Ok(()),
        }
    }
}

/// A representative well-formed rule for each kind, used by the
/// kind-enumeration tests in this crate.
#[cfg(test)]
pub(crate) fn sample_rule(kind: RuleKind) -> RuleDto {
    let contract = "counter.near".to_string();
    match kind {
        RuleKind::TxSuccess => RuleDto::TxSuccess { contract },
        RuleKind::TxFailure => RuleDto::TxFailure { contract },
        RuleKind::FnCall => RuleDto::FnCall {
            contract,
            function: "increment".to_string(),
        },
        RuleKind::Event => RuleDto::Event {
            contract,
            standard: "nep171".to_string(),
            version: "1.0.0".to_string(),
            event: "nft_mint".to_string(),
        },
        RuleKind::AcctBalPct => RuleDto::AcctBalPct {
            contract,
            from: Some(10),
            to: None,
        },
        RuleKind::AcctBalNum => RuleDto::AcctBalNum {
            contract,
            from: None,
            to: Some("2500000000000000000000000".parse().unwrap()),
        },
    }
}
