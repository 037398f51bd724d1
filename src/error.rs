use crate::debug::BehaviorDebug;
use crate::relation::Relation;

/// Result of tracking and verifying call order.
pub type OrderResult<T> = Result<T, OrderError>;

/// Errors produced by an [OrderTracker](crate::OrderTracker) and the verification functions.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum OrderError {
    /// A [BehaviorKey](crate::BehaviorKey) was built without a subject or a behavior.
    MissingArgument { name: &'static str },
    /// No setup with order was registered for a behavior that was looked up.
    SetupMissing { behavior: BehaviorDebug },
    /// An invocation was logged for a behavior that was never registered.
    NotRegistered { behavior: BehaviorDebug },
    /// The relation between two behaviors did not hold.
    VerificationFailed {
        behavior: BehaviorDebug,
        other: BehaviorDebug,
        relation: Relation,
    },
}

impl std::fmt::Display for OrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArgument { name } => {
                write!(f, "Cannot identify a behavior without a {name}.")
            }
            Self::SetupMissing { behavior } => {
                write!(f, "{behavior}: There was no setup with order for this behavior.")
            }
            Self::NotRegistered { behavior } => {
                write!(
                    f,
                    "{behavior}: Invocation logged for a behavior that was never registered."
                )
            }
            Self::VerificationFailed {
                behavior,
                other,
                relation,
            } => {
                write!(f, "Expected {behavior} {relation} {other}.")
            }
        }
    }
}

impl std::error::Error for OrderError {}
