use core::any::{Any, TypeId};
use core::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

/// Something whose behaviors can be stubbed and observed, typically a mock handle.
///
/// The default [Subject::subject_type] is the implementing type itself, so a mock handle
/// usually only needs an empty `impl Subject for MyMock {}`. Smart pointers forward to the
/// subject they point to: an `Arc<Stub<dyn Api>>` is the same subject as the `Stub<dyn Api>`
/// inside it. Calling through a `&dyn Subject` still yields the concrete runtime type.
pub trait Subject: Any {
    /// The runtime type of this subject.
    fn subject_type(&self) -> SubjectType {
        SubjectType::of::<Self>()
    }
}

impl<S: Subject + ?Sized> Subject for Box<S> {
    fn subject_type(&self) -> SubjectType {
        (**self).subject_type()
    }
}

impl<S: Subject + ?Sized> Subject for Rc<S> {
    fn subject_type(&self) -> SubjectType {
        (**self).subject_type()
    }
}

impl<S: Subject + ?Sized> Subject for Arc<S> {
    fn subject_type(&self) -> SubjectType {
        (**self).subject_type()
    }
}

/// The runtime type of a [Subject].
///
/// Two subject types are equal when their [TypeId]s are equal.
/// The type name is only carried along for error messages.
#[derive(Clone, Copy, Debug)]
pub struct SubjectType {
    id: TypeId,
    name: &'static str,
}

impl SubjectType {
    /// The subject type of `T`.
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for SubjectType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SubjectType {}

impl Hash for SubjectType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
