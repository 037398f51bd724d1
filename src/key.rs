use crate::behavior::Descriptor;
use crate::debug::BehaviorDebug;
use crate::error::{OrderError, OrderResult};
use crate::subject::{Subject, SubjectType};

/// Identifies a behavior of a subject type.
///
/// Keys are equal when their subject types are equal and their descriptors are
/// structurally equal. The identity of the subject _instance_ is ignored, so
/// two instances of the same type share their history within one tracker.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct BehaviorKey<B> {
    subject: SubjectType,
    behavior: B,
}

impl<B: Descriptor> BehaviorKey<B> {
    pub fn new<S: Subject + ?Sized>(subject: &S, behavior: B) -> Self {
        Self {
            subject: subject.subject_type(),
            behavior,
        }
    }

    /// Build a key from parts that may be absent.
    pub fn try_new<S: Subject + ?Sized>(
        subject: Option<&S>,
        behavior: Option<B>,
    ) -> OrderResult<Self> {
        let subject = subject.ok_or(OrderError::MissingArgument { name: "subject" })?;
        let behavior = behavior.ok_or(OrderError::MissingArgument { name: "behavior" })?;

        Ok(Self::new(subject, behavior))
    }

    pub fn subject_type(&self) -> SubjectType {
        self.subject
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub(crate) fn debug(&self) -> BehaviorDebug {
        BehaviorDebug::new(self.subject.name(), format!("{:?}", self.behavior))
    }
}
