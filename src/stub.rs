use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use spin::Mutex;

use crate::behavior::Behavior;
use crate::subject::Subject;
use crate::verify::{Arrange, Hook, OnCall};

type AnyBox = Box<dyn Any + Send + Sync + 'static>;

type SharedHook = Arc<dyn Fn() + Send + Sync + 'static>;

/// A minimal stub for the API `T`, usually a trait object type like `Stub<dyn MyTrait>`.
///
/// Behaviors are arranged with [Stub::setup] and fired with [Stub::invoke]. When several
/// arrangements match a call, the one arranged last is selected.
pub struct Stub<T: ?Sized> {
    arrangements: Mutex<Vec<Arc<Arrangement>>>,
    api: PhantomData<fn() -> Box<T>>,
}

struct Arrangement {
    pattern: Behavior,
    response: Mutex<Option<AnyBox>>,
    hooks: Mutex<Vec<SharedHook>>,
}

/// Configuration handle of one arranged behavior of a [Stub].
pub struct Setup {
    arrangement: Arc<Arrangement>,
}

impl<T: ?Sized> Stub<T> {
    pub fn new() -> Self {
        Self {
            arrangements: Mutex::new(vec![]),
            api: PhantomData,
        }
    }

    /// Arrange a behavior. The pattern may contain wildcard arguments.
    pub fn setup(&self, pattern: Behavior) -> Setup {
        let arrangement = Arc::new(Arrangement {
            pattern,
            response: Mutex::new(None),
            hooks: Mutex::new(vec![]),
        });
        self.arrangements.lock().push(arrangement.clone());

        Setup { arrangement }
    }

    /// Fire the arrangement matching `call`.
    ///
    /// Runs the hooks of the arrangement, then returns a clone of its response.
    /// Returns `None` when no arrangement matches, or when the matched arrangement
    /// has no response of type `R`.
    pub fn invoke<R: Clone + 'static>(&self, call: &Behavior) -> Option<R> {
        let arrangement = self
            .arrangements
            .lock()
            .iter()
            .rev()
            .find(|arrangement| arrangement.pattern.matches(call))
            .cloned()?;

        // hooks may call back into this stub
        let hooks: Vec<SharedHook> = arrangement.hooks.lock().clone();
        for hook in hooks {
            hook();
        }

        let response = arrangement.response.lock();
        response
            .as_ref()
            .and_then(|response| response.downcast_ref::<R>())
            .cloned()
    }
}

impl<T: ?Sized> Default for Stub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup {
    /// Respond with a clone of `value` every time the behavior fires.
    pub fn returns<R: Clone + Send + Sync + 'static>(self, value: R) -> Self {
        *self.arrangement.response.lock() = Some(Box::new(value));
        self
    }

    /// Run `f` every time the behavior fires.
    pub fn callback(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_call(Box::new(f));
        self
    }
}

impl OnCall for Setup {
    fn on_call(&mut self, hook: Hook) {
        self.arrangement.hooks.lock().push(Arc::from(hook));
    }
}

impl<T: ?Sized + 'static> Subject for Stub<T> {}

impl<T: ?Sized + 'static> Arrange<Behavior> for Stub<T> {
    type Setup = Setup;

    fn arrange(&self, behavior: &Behavior) -> Setup {
        self.setup(behavior.clone())
    }
}
