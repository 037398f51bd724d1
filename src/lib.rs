//!
//! `callorder` verifies the relative order in which stubbed behaviors fired during a test,
//! regardless of how many times each of them fired.
//!
//! Behaviors are arranged on a subject (a mock handle) through [ArrangeWithOrder::arrange_with_order],
//! which registers them with an [OrderTracker]. Every time an arranged behavior fires, the tracker
//! logs the next ordinal for it. Afterwards, the order of two behaviors is verified using one of the
//! [VerifyOrder] methods:
//!
//! ```rust
//! use callorder::*;
//!
//! trait Store {}
//!
//! let order = OrderTracker::new();
//! let store = Stub::<dyn Store>::new();
//!
//! store.arrange_with_order(behavior!(open()), &order).returns(true);
//! store.arrange_with_order(behavior!(write(_)), &order);
//!
//! assert_eq!(Some(true), store.invoke::<bool>(&behavior!(open())));
//! store.invoke::<()>(&behavior!(write("hello")));
//! store.invoke::<()>(&behavior!(write("world")));
//!
//! store
//!     .verify_was_only_called_before(&behavior!(open()), &store, &behavior!(write(_)), &order)
//!     .unwrap();
//! ```
//!
//! # Identity
//! A tracked behavior is identified by the runtime _type_ of its subject together with its
//! [Descriptor]. Two instances of the same subject type share their history within one tracker.
//!
//! # Relations
//! Each behavior is summarized by its first and last invocation. See [Relation] for the
//! available comparisons.
//!
//! # Frameworks
//! [Stub] is a minimal stubbing framework bundled with the crate. Other frameworks plug in by
//! implementing [Subject], [Arrange] and [OnCall].

#![forbid(unsafe_code)]

mod behavior;
mod debug;
mod error;
mod key;
mod logger;
mod relation;
mod stub;
mod subject;
mod tracker;
mod verify;

pub use behavior::{Arg, Behavior, Descriptor, MemberKind};
pub use debug::BehaviorDebug;
pub use error::{OrderError, OrderResult};
pub use key::BehaviorKey;
pub use logger::{InvocationLogger, Ordinal};
pub use relation::Relation;
pub use stub::{Setup, Stub};
pub use subject::{Subject, SubjectType};
pub use tracker::OrderTracker;
pub use verify::{Arrange, ArrangeWithOrder, Hook, OnCall, VerifyOrder};

///
/// Build a [Behavior] descriptor.
///
/// A bare identifier describes a property access, an identifier followed by parentheses
/// describes a method call. Method arguments are either `_`, matching anything, or an
/// expression that is evaluated and captured by its `Debug` representation.
///
/// # Example
///
/// ```rust
/// use callorder::*;
///
/// assert_eq!(Behavior::property("len"), behavior!(len));
/// assert_eq!(
///     Behavior::method("get", vec![Arg::Any, Arg::exact(&3)]),
///     behavior!(get(_, 1 + 2))
/// );
/// assert!(behavior!(get(_, 3)).matches(&behavior!(get("key", 3))));
/// ```
pub use callorder_macros::behavior;
