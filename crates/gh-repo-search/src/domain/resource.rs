//! Tagged outcome of a single remote operation
//!
//! Exactly one variant is active per value. `Success` always carries
//! data; the failure variants carry a display message and, optionally,
//! partial data. Values are created per use-case invocation, consumed
//! immediately by the pager and then discarded.

/// Outcome of one remote call: success, error, or end-of-list
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// The call succeeded and produced data
    Success(T),

    /// The call failed; `message` is ready for display
    Error { data: Option<T>, message: String },

    /// A soft pagination boundary (e.g., the upstream's result-window
    /// limit) rather than a hard failure
    EndOfList { data: Option<T>, message: String },
}

impl<T> Resource<T> {
    /// Build an `Error` without partial data
    pub fn error(message: impl Into<String>) -> Self {
        Resource::Error {
            data: None,
            message: message.into(),
        }
    }

    /// Build an `EndOfList` without partial data
    pub fn end_of_list(message: impl Into<String>) -> Self {
        Resource::EndOfList {
            data: None,
            message: message.into(),
        }
    }

    /// The carried data, for any variant
    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            Resource::Error { data, .. } | Resource::EndOfList { data, .. } => data.as_ref(),
        }
    }

    /// The display message, absent for `Success`
    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Success(_) => None,
            Resource::Error { message, .. } | Resource::EndOfList { message, .. } => {
                Some(message.as_str())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }
}
