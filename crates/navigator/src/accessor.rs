//! Capability set the navigator needs from a tree element
//!
//! A node type either implements [`Element`] itself, or the caller supplies an
//! [`Accessor`] (usually three closures wrapped in [`FnAccessor`]) that reads
//! name, value and children out of a foreign type.

use crate::value::Value;

/// Reads the name, scalar value and children of an element of type `E`
///
/// All three operations must be total. `children` returning `None` marks a
/// true leaf; `Some(&[])` marks a composite that happens to be empty.
pub trait Accessor<E> {
    /// The element's name (not required to be unique among siblings)
    fn name<'e>(&self, element: &'e E) -> &'e str;

    /// The element's scalar, absent for composites
    fn value(&self, element: &E) -> Option<Value>;

    /// The element's ordered children, absent for leaves
    fn children<'e>(&self, element: &'e E) -> Option<&'e [E]>;
}

/// A node type that exposes its own name, value and children
pub trait Element: Sized {
    fn name(&self) -> &str;

    fn value(&self) -> Option<Value>;

    fn children(&self) -> Option<&[Self]>;
}

/// Accessor for types implementing [`Element`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfAccess;

impl<E: Element> Accessor<E> for SelfAccess {
    fn name<'e>(&self, element: &'e E) -> &'e str {
        element.name()
    }

    fn value(&self, element: &E) -> Option<Value> {
        element.value()
    }

    fn children<'e>(&self, element: &'e E) -> Option<&'e [E]> {
        element.children()
    }
}

/// Accessor built from three caller-supplied functions
///
/// # Example
///
/// ```
/// use composite_navigator::{FnAccessor, Navigator, Value};
///
/// struct Field {
///     tag: String,
///     data: Option<i32>,
///     subfields: Option<Vec<Field>>,
/// }
///
/// let fields = vec![Field { tag: "RCID".into(), data: Some(7), subfields: None }];
/// let accessor = FnAccessor::new(
///     |f: &Field| f.tag.as_str(),
///     |f: &Field| f.data.map(Value::from),
///     |f: &Field| f.subfields.as_deref(),
/// );
/// let nav = Navigator::with_accessor(&fields, accessor);
/// assert_eq!(nav.get_value::<i32>("RCID").unwrap(), 7);
/// ```
#[derive(Clone, Copy)]
pub struct FnAccessor<N, V, C> {
    name_fn: N,
    value_fn: V,
    children_fn: C,
}

impl<N, V, C> FnAccessor<N, V, C> {
    /// Wrap the three accessor functions
    ///
    /// The bounds live on the constructor so closures passed here get their
    /// higher-ranked signatures inferred.
    pub fn new<E>(name_fn: N, value_fn: V, children_fn: C) -> Self
    where
        N: Fn(&E) -> &str,
        V: Fn(&E) -> Option<Value>,
        C: Fn(&E) -> Option<&[E]>,
    {
        Self {
            name_fn,
            value_fn,
            children_fn,
        }
    }
}

impl<E, N, V, C> Accessor<E> for FnAccessor<N, V, C>
where
    N: Fn(&E) -> &str,
    V: Fn(&E) -> Option<Value>,
    C: Fn(&E) -> Option<&[E]>,
{
    fn name<'e>(&self, element: &'e E) -> &'e str {
        (self.name_fn)(element)
    }

    fn value(&self, element: &E) -> Option<Value> {
        (self.value_fn)(element)
    }

    fn children<'e>(&self, element: &'e E) -> Option<&'e [E]> {
        (self.children_fn)(element)
    }
}

impl<N, V, C> std::fmt::Debug for FnAccessor<N, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAccessor").finish_non_exhaustive()
    }
}
