use crate::behavior::Descriptor;
use crate::error::OrderResult;
use crate::key::BehaviorKey;
use crate::relation::Relation;
use crate::subject::Subject;
use crate::tracker::OrderTracker;

/// A side effect attached to an arranged behavior, run every time it fires.
pub type Hook = Box<dyn Fn() + Send + Sync + 'static>;

/// A stub configuration that accepts side-effect hooks.
pub trait OnCall {
    fn on_call(&mut self, hook: Hook);
}

/// A subject that can have its behaviors stubbed by a mocking framework.
///
/// This is the seam between order tracking and the framework that actually
/// arranges stubbed responses. [Stub](crate::Stub) is the bundled implementation.
pub trait Arrange<B>: Subject {
    /// The stub configuration handle of the framework.
    type Setup: OnCall;

    /// Arrange a stub for `behavior`.
    fn arrange(&self, behavior: &B) -> Self::Setup;
}

/// Arrange stubs that log their invocations to an [OrderTracker].
pub trait ArrangeWithOrder<B: Descriptor>: Arrange<B> {
    /// Arrange a stub for `behavior` and register it with `order`.
    ///
    /// Every firing of the stub logs an invocation in `order`. The setup handle of
    /// the framework is returned unchanged, for further configuration.
    ///
    /// If more than one setup is arranged for the same behavior, the latest one
    /// resets the logged history of that behavior.
    fn arrange_with_order(&self, behavior: B, order: &OrderTracker<B>) -> Self::Setup;
}

impl<B: Descriptor, T: Arrange<B> + ?Sized> ArrangeWithOrder<B> for T {
    fn arrange_with_order(&self, behavior: B, order: &OrderTracker<B>) -> Self::Setup {
        let mut setup = self.arrange(&behavior);

        let key = BehaviorKey::new(self, behavior);
        order.register_key(key.clone());

        let order = order.clone();
        setup.on_call(Box::new(move || {
            if let Err(error) = order.log_key(&key) {
                panic!("{error}");
            }
        }));

        setup
    }
}

/// Assert-style verification of the invocation order of two behaviors.
///
/// Every method fetches the loggers of both behaviors from `order` and fails with
/// [OrderError::VerificationFailed](crate::OrderError::VerificationFailed) when the
/// relation does not hold. Behaviors that were never set up fail with
/// [OrderError::SetupMissing](crate::OrderError::SetupMissing).
pub trait VerifyOrder: Subject {
    fn verify_was_called_before<B: Descriptor, O: Subject + ?Sized>(
        &self,
        behavior: &B,
        other: &O,
        other_behavior: &B,
        order: &OrderTracker<B>,
    ) -> OrderResult<()> {
        order.verify(Relation::CalledBefore, self, behavior, other, other_behavior)
    }

    fn verify_was_called_after<B: Descriptor, O: Subject + ?Sized>(
        &self,
        behavior: &B,
        other: &O,
        other_behavior: &B,
        order: &OrderTracker<B>,
    ) -> OrderResult<()> {
        order.verify(Relation::CalledAfter, self, behavior, other, other_behavior)
    }

    fn verify_was_not_called_before<B: Descriptor, O: Subject + ?Sized>(
        &self,
        behavior: &B,
        other: &O,
        other_behavior: &B,
        order: &OrderTracker<B>,
    ) -> OrderResult<()> {
        order.verify(Relation::NotCalledBefore, self, behavior, other, other_behavior)
    }

    fn verify_was_not_called_after<B: Descriptor, O: Subject + ?Sized>(
        &self,
        behavior: &B,
        other: &O,
        other_behavior: &B,
        order: &OrderTracker<B>,
    ) -> OrderResult<()> {
        order.verify(Relation::NotCalledAfter, self, behavior, other, other_behavior)
    }

    fn verify_was_only_called_before<B: Descriptor, O: Subject + ?Sized>(
        &self,
        behavior: &B,
        other: &O,
        other_behavior: &B,
        order: &OrderTracker<B>,
    ) -> OrderResult<()> {
        order.verify(Relation::OnlyCalledBefore, self, behavior, other, other_behavior)
    }

    fn verify_was_only_called_after<B: Descriptor, O: Subject + ?Sized>(
        &self,
        behavior: &B,
        other: &O,
        other_behavior: &B,
        order: &OrderTracker<B>,
    ) -> OrderResult<()> {
        order.verify(Relation::OnlyCalledAfter, self, behavior, other, other_behavior)
    }
}

impl<T: Subject + ?Sized> VerifyOrder for T {}
