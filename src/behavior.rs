use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

/// Descriptor of a behavior that can be tracked by an [OrderTracker](crate::OrderTracker).
///
/// Any type with structural equality and hashing qualifies. Independently constructed
/// descriptors that compare equal identify the same behavior.
pub trait Descriptor: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T> Descriptor for T where T: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static {}

/// The bundled behavior descriptor: a member of a subject plus its argument pattern.
///
/// Usually built with the [behavior](crate::behavior) macro.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Behavior {
    member: Cow<'static, str>,
    kind: MemberKind,
    args: Vec<Arg>,
}

/// Whether a [Behavior] is a method call or a property access.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MemberKind {
    Method,
    Property,
}

/// One argument of a method [Behavior].
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Arg {
    /// Matches any argument. Written `_` in the [behavior](crate::behavior) macro.
    Any,
    /// A concrete argument, captured by its `Debug` representation.
    Exact(String),
}

impl Arg {
    pub fn exact<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Exact(format!("{value:?}"))
    }

    fn matches(&self, actual: &Arg) -> bool {
        match (self, actual) {
            (Self::Any, _) => true,
            (Self::Exact(expected), Self::Exact(actual)) => expected == actual,
            (Self::Exact(_), Self::Any) => false,
        }
    }
}

impl Behavior {
    /// A method call with the given argument pattern.
    pub fn method(member: impl Into<Cow<'static, str>>, args: Vec<Arg>) -> Self {
        Self {
            member: member.into(),
            kind: MemberKind::Method,
            args,
        }
    }

    /// A property access.
    pub fn property(member: impl Into<Cow<'static, str>>) -> Self {
        Self {
            member: member.into(),
            kind: MemberKind::Property,
            args: vec![],
        }
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Whether this behavior, used as a pattern, matches the concrete `call`.
    ///
    /// Members and arity must be equal, and every [Arg::Exact] in the pattern
    /// must equal the corresponding argument of the call.
    pub fn matches(&self, call: &Behavior) -> bool {
        self.kind == call.kind
            && self.member == call.member
            && self.args.len() == call.args.len()
            && self
                .args
                .iter()
                .zip(call.args.iter())
                .all(|(pattern, actual)| pattern.matches(actual))
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "_"),
            Self::Exact(debug) => write!(f, "{debug}"),
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.member)?;

        if self.kind == MemberKind::Method {
            write!(f, "(")?;
            for (index, arg) in self.args.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
