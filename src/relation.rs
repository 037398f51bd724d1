use std::fmt::Display;

use crate::logger::InvocationLogger;

/// An order relation between the invocations of two behaviors.
///
/// Each behavior is summarized by its first and last invocation only, so the
/// relations are approximations of "happened before" and "happened after"
/// for behaviors that were invoked more than once.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Relation {
    /// See [InvocationLogger::was_called_before].
    CalledBefore,
    /// See [InvocationLogger::was_called_after].
    CalledAfter,
    /// See [InvocationLogger::was_not_called_before].
    NotCalledBefore,
    /// See [InvocationLogger::was_not_called_after].
    NotCalledAfter,
    /// See [InvocationLogger::was_only_called_before].
    OnlyCalledBefore,
    /// See [InvocationLogger::was_only_called_after].
    OnlyCalledAfter,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Self::CalledBefore,
        Self::CalledAfter,
        Self::NotCalledBefore,
        Self::NotCalledAfter,
        Self::OnlyCalledBefore,
        Self::OnlyCalledAfter,
    ];

    /// Evaluate the relation of `logger` to `other`.
    pub fn holds(self, logger: &InvocationLogger, other: &InvocationLogger) -> bool {
        match self {
            Self::CalledBefore => logger.was_called_before(other),
            Self::CalledAfter => logger.was_called_after(other),
            Self::NotCalledBefore => logger.was_not_called_before(other),
            Self::NotCalledAfter => logger.was_not_called_after(other),
            Self::OnlyCalledBefore => logger.was_only_called_before(other),
            Self::OnlyCalledAfter => logger.was_only_called_after(other),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CalledBefore => write!(f, "to be called before"),
            Self::CalledAfter => write!(f, "to be called after"),
            Self::NotCalledBefore => write!(f, "to not be called before"),
            Self::NotCalledAfter => write!(f, "to not be called after"),
            Self::OnlyCalledBefore => write!(f, "to be only called before"),
            Self::OnlyCalledAfter => write!(f, "to be only called after"),
        }
    }
}
