use std::fmt;

/// A rendered behavior of a subject type, as shown in error messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BehaviorDebug {
    subject: &'static str,
    behavior: String,
}

impl BehaviorDebug {
    pub(crate) fn new(subject: &'static str, behavior: String) -> Self {
        Self { subject, behavior }
    }

    /// Type name of the subject.
    pub fn subject(&self) -> &'static str {
        self.subject
    }

    pub fn behavior(&self) -> &str {
        &self.behavior
    }
}

impl fmt::Display for BehaviorDebug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.behavior, self.subject)
    }
}
