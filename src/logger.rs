/// Position of a logged invocation in the global order of a tracker.
///
/// Ordinals start at 1. The value 0 means "never invoked".
pub type Ordinal = usize;

const NEVER: Ordinal = 0;

/// The first and last invocation of one tracked behavior.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct InvocationLogger {
    first_call: Ordinal,
    last_call: Ordinal,
}

impl InvocationLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordinal of the first invocation, or 0.
    pub fn first_call(&self) -> Ordinal {
        self.first_call
    }

    /// The ordinal of the last invocation, or 0.
    pub fn last_call(&self) -> Ordinal {
        self.last_call
    }

    pub fn was_ever_called(&self) -> bool {
        !self.was_never_called()
    }

    pub fn was_never_called(&self) -> bool {
        self.first_call == NEVER
    }

    /// Log an invocation at `ordinal`.
    ///
    /// Ordinals must be supplied in non-decreasing order.
    pub fn log(&mut self, ordinal: Ordinal) {
        self.last_call = ordinal;
        if self.first_call == NEVER {
            self.first_call = ordinal;
        }
    }

    /// Evaluate `relation` of this logger to `other`.
    pub fn relates(&self, relation: crate::Relation, other: &InvocationLogger) -> bool {
        relation.holds(self, other)
    }

    /// Whether this behavior was called at least once before the last call of `other`.
    pub fn was_called_before(&self, other: &InvocationLogger) -> bool {
        self.was_ever_called() && self.first_call < other.last_call
    }

    /// Whether this behavior was called at least once after the first call of `other`.
    pub fn was_called_after(&self, other: &InvocationLogger) -> bool {
        other.was_ever_called() && self.last_call > other.first_call
    }

    /// Whether this behavior was not called before `other`.
    ///
    /// Trivially true when either behavior was never called.
    pub fn was_not_called_before(&self, other: &InvocationLogger) -> bool {
        self.first_call > other.first_call || self.was_never_called() || other.was_never_called()
    }

    /// Whether this behavior was not called after `other`.
    ///
    /// Trivially true when either behavior was never called.
    pub fn was_not_called_after(&self, other: &InvocationLogger) -> bool {
        self.last_call < other.last_call || self.was_never_called() || other.was_never_called()
    }

    /// Whether every call of this behavior happened before the first call of `other`.
    pub fn was_only_called_before(&self, other: &InvocationLogger) -> bool {
        (self.was_ever_called() && self.last_call < other.first_call) || self.was_never_called()
    }

    /// Whether every call of this behavior happened after the last call of `other`.
    pub fn was_only_called_after(&self, other: &InvocationLogger) -> bool {
        self.first_call > other.last_call || self.was_never_called() || other.was_never_called()
    }
}
