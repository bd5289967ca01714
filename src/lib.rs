//! Alert rule translation & matching-condition engine.
//!
//! Converts the closed set of user-facing alert conditions (transaction
//! success/failure, function call, event log, account balance change) into
//! the normalized matching rule consumed by the external chain indexer, and
//! projects stored matching rules back to the client-facing shape on reads.
//!
//! The engine is pure and synchronous: no I/O, no shared mutable state, and
//! every function is referentially transparent, so callers may invoke it
//! concurrently without coordination. Validation happens at the input
//! boundary ([`RuleDto::validate`]); translation does not fail on validated
//! input, and corrupt stored rules surface as per-record
//! [`RuleError::CorruptMatchingRule`] errors rather than crashing the read
//! path.
//!
//! Both rule models are closed tagged unions, so adding an alert kind
//! without a serializer, deserializer, or naming branch is a compile
//! failure, not a silent runtime default.

pub mod alert;
pub mod comparator;
pub mod deserializer;
pub mod dto;
pub mod error;
pub mod matching;
pub mod naming;
pub mod range;
pub mod serializer;

pub use alert::{Alert, CreateAlertInput};
pub use comparator::{InternalComparator, MatchingComparator, PublicComparator};
pub use deserializer::deserialize_rule;
pub use dto::{RuleDto, RuleKind};
pub use error::{RuleError, ValidationError};
pub use matching::{MatchingRule, TxStatus};
pub use naming::default_name;
pub use range::{validate_percent_range, validate_yocto_bounds, validate_yocto_range, YoctoAmount};
pub use serializer::serialize_rule;
