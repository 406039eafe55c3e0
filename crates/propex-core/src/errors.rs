use propex_core_types::{MemberId, TitleId};
use thiserror::Error;

/// Result type alias using PropexError
pub type Result<T> = std::result::Result<T, PropexError>;

/// Canonical error kind taxonomy
///
/// A stable, structured classification of all errors in the transfer
/// workflow. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropexErrorKind {
    // Workflow preconditions
    NotTransferable,
    UnknownParticipant,

    // Registry lookup
    NotFound,
    AlreadyExists,

    // Integration/IO
    Persistence,
    Conflict,

    // Internal
    Internal,
}

impl PropexErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            PropexErrorKind::NotTransferable => "ERR_NOT_TRANSFERABLE",
            PropexErrorKind::UnknownParticipant => "ERR_UNKNOWN_PARTICIPANT",
            PropexErrorKind::NotFound => "ERR_NOT_FOUND",
            PropexErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            PropexErrorKind::Persistence => "ERR_PERSISTENCE",
            PropexErrorKind::Conflict => "ERR_CONFLICT",
            PropexErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Comprehensive error taxonomy for transfer-workflow operations
///
/// None of these are recovered locally: each aborts the current transaction
/// and is surfaced to the submitting caller. The display strings for the two
/// workflow rejections are the exact reasons shown to the transaction
/// submitter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropexError {
    // ===== Workflow Errors =====
    /// Transfer execution attempted on a property that is not listed
    #[error("Property not for transfer.")]
    NotTransferable { title_id: TitleId },

    /// Proposed new owner is not present in the participant registry
    #[error("Invalid participant. Use a predefined participant.")]
    UnknownParticipant { member_id: MemberId },

    // ===== Registry Errors =====
    /// Property not found in the asset registry
    #[error("Property not found: {title_id}")]
    PropertyNotFound { title_id: TitleId },

    /// Member not found in the participant registry
    #[error("Member not found: {member_id}")]
    MemberNotFound { member_id: MemberId },

    /// Property already present in the asset registry (duplicate title id)
    #[error("Property already registered: {title_id}")]
    PropertyAlreadyExists { title_id: TitleId },

    /// Member already present in the participant registry (duplicate id)
    #[error("Member already registered: {member_id}")]
    MemberAlreadyExists { member_id: MemberId },

    // ===== Integration Errors =====
    /// A registry update or event emission failed at the persistence layer
    #[error("Persistence failure in {op}: {reason}")]
    Persistence { op: String, reason: String },

    /// Concurrent update detected by the ledger's concurrency control.
    /// Retryable: re-read the record and resubmit the transaction.
    #[error("Conflicting update on property {title_id}: expected revision {expected}, found {found}")]
    ConflictingUpdate {
        title_id: TitleId,
        expected: u64,
        found: u64,
    },
}

impl PropexError {
    /// Get the canonical kind of this error
    pub fn kind(&self) -> PropexErrorKind {
        match self {
            PropexError::NotTransferable { .. } => PropexErrorKind::NotTransferable,
            PropexError::UnknownParticipant { .. } => PropexErrorKind::UnknownParticipant,
            PropexError::PropertyNotFound { .. } | PropexError::MemberNotFound { .. } => {
                PropexErrorKind::NotFound
            }
            PropexError::PropertyAlreadyExists { .. } | PropexError::MemberAlreadyExists { .. } => {
                PropexErrorKind::AlreadyExists
            }
            PropexError::Persistence { .. } => PropexErrorKind::Persistence,
            PropexError::ConflictingUpdate { .. } => PropexErrorKind::Conflict,
        }
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Whether the submitting caller may retry the transaction as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), PropexErrorKind::Conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_rejection_messages() {
        // The submitter-facing reasons are part of the contract
        let err = PropexError::NotTransferable {
            title_id: TitleId::new("dp_00001"),
        };
        assert_eq!(err.to_string(), "Property not for transfer.");

        let err = PropexError::UnknownParticipant {
            member_id: MemberId::new("ghost"),
        };
        assert_eq!(
            err.to_string(),
            "Invalid participant. Use a predefined participant."
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        let err = PropexError::NotTransferable {
            title_id: TitleId::new("dp_00001"),
        };
        assert_eq!(err.code(), "ERR_NOT_TRANSFERABLE");

        let err = PropexError::ConflictingUpdate {
            title_id: TitleId::new("dp_00001"),
            expected: 2,
            found: 3,
        };
        assert_eq!(err.code(), "ERR_CONFLICT");
    }

    #[test]
    fn test_only_conflicts_are_retryable() {
        let conflict = PropexError::ConflictingUpdate {
            title_id: TitleId::new("dp_00001"),
            expected: 1,
            found: 2,
        };
        assert!(conflict.is_retryable());

        let persistence = PropexError::Persistence {
            op: "update_property".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(!persistence.is_retryable());
    }

    #[test]
    fn test_kind_mapping() {
        let err = PropexError::PropertyNotFound {
            title_id: TitleId::new("dp_00001"),
        };
        assert_eq!(err.kind(), PropexErrorKind::NotFound);

        let err = PropexError::MemberAlreadyExists {
            member_id: MemberId::new("member1"),
        };
        assert_eq!(err.kind(), PropexErrorKind::AlreadyExists);
    }
}
