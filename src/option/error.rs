//! Error types for optional values.
//!
//! Every fallible operation of this crate reports an [`OptionError`]. The
//! error carries the message shown to the caller and a coarse
//! [`OptionErrorKind`] that distinguishes bad input from an operation the
//! receiver cannot support.

use std::fmt;

/// Message reported when a value is requested from an empty option.
pub const NONE_HAS_NO_VALUE: &str = "None has no value";

/// Message reported when a lazy option is built from a non-invocable target.
pub const INVALID_CALLBACK: &str = "Invalid callback given";

/// Message reported when a lazy option is observed after its computation panicked.
pub const POISONED: &str = "LazyOption computation panicked during resolution";

/// Message reported when a lazy option is observed from inside its own computation.
pub const REENTRANT: &str = "LazyOption observed from inside its own computation";

/// The category of an [`OptionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionErrorKind {
    /// The caller supplied an unusable argument.
    InvalidArgument,
    /// The receiver cannot perform the requested operation.
    UnsupportedOperation,
}

/// Represents errors raised by option operations.
///
/// # Examples
///
/// ```rust
/// use maybers::option::{Maybe, OptionErrorKind, OptionLike};
///
/// let empty: Maybe<i32> = Maybe::none();
/// let error = empty.get().unwrap_err();
///
/// assert_eq!(error.kind(), OptionErrorKind::UnsupportedOperation);
/// assert_eq!(error.to_string(), "None has no value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// A constructor received an argument it cannot use.
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },
    /// The operation is not supported by the receiver's current state.
    UnsupportedOperation {
        /// Description of the unsupported operation.
        message: String,
    },
}

impl OptionError {
    /// The error returned by `get` on an empty option.
    pub fn none_has_no_value() -> Self {
        Self::UnsupportedOperation {
            message: NONE_HAS_NO_VALUE.to_string(),
        }
    }

    /// The error returned when a lazy option target is not invocable.
    pub fn invalid_callback() -> Self {
        Self::InvalidArgument {
            message: INVALID_CALLBACK.to_string(),
        }
    }

    /// The error returned when a lazy computation produced something other
    /// than an option.
    pub fn unexpected_result(type_name: &str) -> Self {
        Self::UnsupportedOperation {
            message: format!("Expected instance of Option. Got: {type_name}"),
        }
    }

    /// The error reported by a lazy option whose computation panicked.
    pub fn poisoned() -> Self {
        Self::UnsupportedOperation {
            message: POISONED.to_string(),
        }
    }

    /// The error reported when a lazy option is observed while its
    /// computation is still running.
    pub fn reentrant() -> Self {
        Self::UnsupportedOperation {
            message: REENTRANT.to_string(),
        }
    }

    /// Returns the category of this error.
    pub const fn kind(&self) -> OptionErrorKind {
        match self {
            Self::InvalidArgument { .. } => OptionErrorKind::InvalidArgument,
            Self::UnsupportedOperation { .. } => OptionErrorKind::UnsupportedOperation,
        }
    }

    /// Returns the message of this error.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument { message } | Self::UnsupportedOperation { message } => message,
        }
    }
}

impl fmt::Display for OptionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl std::error::Error for OptionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn none_has_no_value_is_unsupported_operation() {
        let error = OptionError::none_has_no_value();
        assert_eq!(error.kind(), OptionErrorKind::UnsupportedOperation);
        assert_eq!(error.to_string(), "None has no value");
    }

    #[rstest]
    fn invalid_callback_is_invalid_argument() {
        let error = OptionError::invalid_callback();
        assert_eq!(error.kind(), OptionErrorKind::InvalidArgument);
        assert_eq!(error.message(), "Invalid callback given");
    }

    #[rstest]
    #[case("i32", "Expected instance of Option. Got: i32")]
    #[case("()", "Expected instance of Option. Got: ()")]
    fn unexpected_result_names_the_type(#[case] type_name: &str, #[case] expected: &str) {
        assert_eq!(OptionError::unexpected_result(type_name).to_string(), expected);
    }

    #[rstest]
    fn reentrant_differs_from_poisoned() {
        assert_ne!(OptionError::reentrant(), OptionError::poisoned());
        assert_eq!(OptionError::reentrant().kind(), OptionErrorKind::UnsupportedOperation);
    }

    #[rstest]
    fn error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&OptionError::poisoned());
    }
}
