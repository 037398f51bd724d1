use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::HashMap;
use std::sync::Arc;

use spin::Mutex;

use crate::behavior::{Behavior, Descriptor};
use crate::error::{OrderError, OrderResult};
use crate::key::BehaviorKey;
use crate::logger::{InvocationLogger, Ordinal};
use crate::relation::Relation;
use crate::subject::Subject;

/// Records the relative order in which tracked behaviors are invoked.
///
/// One tracker is meant for one test scenario. It owns a counter that hands out a
/// distinct, increasing [Ordinal] to every logged invocation, and one
/// [InvocationLogger] for every registered behavior.
///
/// `OrderTracker` is a handle: clones share the same counter and registry,
/// while separately created trackers are independent of each other.
pub struct OrderTracker<B = Behavior> {
    shared: Arc<SharedOrder<B>>,
}

struct SharedOrder<B> {
    next_ordinal: AtomicUsize,
    loggers: Mutex<HashMap<BehaviorKey<B>, InvocationLogger>>,
}

impl<B: Descriptor> OrderTracker<B> {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(SharedOrder {
                next_ordinal: AtomicUsize::new(1),
                loggers: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// The ordinal the next logged invocation will get.
    pub fn next_ordinal(&self) -> Ordinal {
        self.shared.next_ordinal.load(Ordering::SeqCst)
    }

    /// Register a behavior of a subject, starting with a fresh logger.
    ///
    /// Registering the same behavior again resets its logger.
    pub fn register<S: Subject + ?Sized>(&self, subject: &S, behavior: B) {
        self.register_key(BehaviorKey::new(subject, behavior));
    }

    /// Log an invocation of a registered behavior, returning the ordinal it got.
    pub fn log_invocation<S: Subject + ?Sized>(
        &self,
        subject: &S,
        behavior: &B,
    ) -> OrderResult<Ordinal> {
        self.log_key(&BehaviorKey::new(subject, behavior.clone()))
    }

    /// A snapshot of the logger of a registered behavior.
    pub fn logger<S: Subject + ?Sized>(
        &self,
        subject: &S,
        behavior: &B,
    ) -> OrderResult<InvocationLogger> {
        self.logger_by_key(&BehaviorKey::new(subject, behavior.clone()))
    }

    /// Verify that `relation` holds between the behavior of `subject` and the behavior of `other`.
    pub fn verify<S: Subject + ?Sized, O: Subject + ?Sized>(
        &self,
        relation: Relation,
        subject: &S,
        behavior: &B,
        other: &O,
        other_behavior: &B,
    ) -> OrderResult<()> {
        let key = BehaviorKey::new(subject, behavior.clone());
        let other_key = BehaviorKey::new(other, other_behavior.clone());

        let logger = self.logger_by_key(&key)?;
        let other_logger = self.logger_by_key(&other_key)?;

        if relation.holds(&logger, &other_logger) {
            Ok(())
        } else {
            Err(OrderError::VerificationFailed {
                behavior: key.debug(),
                other: other_key.debug(),
                relation,
            })
        }
    }

    pub(crate) fn register_key(&self, key: BehaviorKey<B>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            subject = key.subject_type().name(),
            behavior = ?key.behavior(),
            "registered behavior"
        );

        self.shared
            .loggers
            .lock()
            .insert(key, InvocationLogger::new());
    }

    pub(crate) fn log_key(&self, key: &BehaviorKey<B>) -> OrderResult<Ordinal> {
        let mut loggers = self.shared.loggers.lock();
        let logger = loggers
            .get_mut(key)
            .ok_or_else(|| OrderError::NotRegistered {
                behavior: key.debug(),
            })?;

        let ordinal = self.shared.next_ordinal.fetch_add(1, Ordering::SeqCst);
        logger.log(ordinal);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            subject = key.subject_type().name(),
            behavior = ?key.behavior(),
            ordinal,
            "logged invocation"
        );

        Ok(ordinal)
    }

    fn logger_by_key(&self, key: &BehaviorKey<B>) -> OrderResult<InvocationLogger> {
        self.shared
            .loggers
            .lock()
            .get(key)
            .copied()
            .ok_or_else(|| OrderError::SetupMissing {
                behavior: key.debug(),
            })
    }
}

impl<B: Descriptor> Default for OrderTracker<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Clone for OrderTracker<B> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}
