//! Checked parameters
//!
//! Every value a check captures, the value under test as well as any
//! auxiliary argument, is stored as a type-erased [`Parameter`]. Parameters
//! feed message rendering and are reported back on the [`Verdict`].
//!
//! [`Verdict`]: crate::chain::Verdict

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Bound shared by every value that can be checked or passed as an argument.
///
/// The value must be printable for messages and shareable between threads,
/// since a built chain may be evaluated concurrently.
pub trait Checkable: fmt::Debug + Send + Sync + 'static {}

impl<T> Checkable for T where T: fmt::Debug + Send + Sync + 'static {}

/// Object-safe view over a captured value.
pub trait ParamValue: fmt::Debug + Send + Sync {
    /// Returns the value as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Checkable> ParamValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// ROLE & TYPE TAG
// ============================================================================

/// What a parameter is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// The object under test.
    Checked,
    /// An auxiliary argument, only used for message formatting.
    Argument,
}

/// Semantic type tag of a captured value.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Returns the tag for `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the `TypeId` of the tagged type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the type name, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the tagged type is `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// PARAMETER
// ============================================================================

/// A captured value with its type tag and role.
///
/// Cloning a parameter is cheap: the value itself is shared. Two parameters
/// are equal when they share the same captured value and role, which makes
/// re-evaluations of one chain compare equal.
#[derive(Clone)]
pub struct Parameter {
    value: Arc<dyn ParamValue>,
    tag: TypeTag,
    role: Role,
}

impl Parameter {
    /// Captures the value under test.
    pub fn checked<T: Checkable>(value: Arc<T>) -> Self {
        Self {
            value,
            tag: TypeTag::of::<T>(),
            role: Role::Checked,
        }
    }

    /// Captures an auxiliary argument.
    pub fn argument<T: Checkable>(value: T) -> Self {
        Self::shared_argument(Arc::new(value))
    }

    /// Captures an auxiliary argument that is also held by a predicate.
    pub fn shared_argument<T: Checkable>(value: Arc<T>) -> Self {
        Self {
            value,
            tag: TypeTag::of::<T>(),
            role: Role::Argument,
        }
    }

    /// Returns the role of this parameter.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the type tag of the captured value.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns true if this is the value under test.
    pub fn is_checked(&self) -> bool {
        self.role == Role::Checked
    }

    /// Downcasts the captured value.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        ParamValue::as_any(&*self.value).downcast_ref::<T>()
    }

    /// Renders the captured value for messages.
    pub fn render(&self) -> String {
        format!("{:?}", self.value)
    }

    /// Returns true if both parameters share the same captured value.
    pub(crate) fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.role == other.role && self.same_value(other)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("value", &self.value)
            .field("type", &self.tag)
            .field("role", &self.role)
            .finish()
    }
}

/// Appends `parameter` unless the same captured value with the same role is
/// already present.
pub(crate) fn push_unique(parameters: &mut Vec<Parameter>, parameter: &Parameter) {
    if !parameters.iter().any(|p| p == parameter) {
        parameters.push(parameter.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_parameter() {
        let param = Parameter::checked(Arc::new(42_i32));
        assert!(param.is_checked());
        assert_eq!(param.role(), Role::Checked);
        assert!(param.type_tag().is::<i32>());
        assert_eq!(param.downcast_ref::<i32>(), Some(&42));
        assert_eq!(param.downcast_ref::<i64>(), None);
    }

    #[test]
    fn test_render_uses_debug() {
        assert_eq!(Parameter::argument("abc").render(), "\"abc\"");
        assert_eq!(Parameter::argument(vec![1, 2]).render(), "[1, 2]");
        assert_eq!(Parameter::argument(None::<u8>).render(), "None");
    }

    #[test]
    fn test_equality_is_identity() {
        let shared = Arc::new(String::from("x"));
        let a = Parameter::checked(Arc::clone(&shared));
        let b = Parameter::checked(shared);
        let c = Parameter::checked(Arc::new(String::from("x")));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_push_unique() {
        let shared = Arc::new(1_u8);
        let mut params = Vec::new();
        push_unique(&mut params, &Parameter::checked(Arc::clone(&shared)));
        push_unique(&mut params, &Parameter::checked(Arc::clone(&shared)));
        push_unique(&mut params, &Parameter::shared_argument(shared));
        assert_eq!(params.len(), 2);
    }
}
