use std::fmt;

use crate::accessor::{Accessor, Element, FnAccessor, SelfAccess};
use crate::engine::Engine;
use crate::error::{NavigationError, Result};
use crate::iter::{Descend, DescendWith, Split};
use crate::member::Member;
use crate::value::{FromValue, Value};

/// Read-only, name-indexed view over one level of a composite tree
///
/// Every query looks only at the current sibling scope. Descending or
/// splitting returns a new navigator; nothing is ever mutated, so a navigator
/// can be cloned and shared freely.
///
/// # Example
///
/// ```ignore
/// let nav = Navigator::new(&records);
/// let coords = nav.descend_single("PRID", |prid| {
///     prid.descend_single("C2IT", |c2it| {
///         Ok::<_, NavigationError>((c2it.get_value::<i32>("YCOO")?, c2it.get_value::<i32>("XCOO")?))
///     })
/// })?;
/// ```
pub struct Navigator<'a, E, A = SelfAccess> {
    core: Engine<'a, E, A>,
}

impl<'a, E: Element> Navigator<'a, E, SelfAccess> {
    /// Navigate a sequence of top-level elements that describe themselves
    pub fn new(elements: &'a [E]) -> Self {
        Self::with_accessor(elements, SelfAccess)
    }

    /// Navigate from a single root element
    pub fn from_root(root: &'a E) -> Self {
        Self::new(std::slice::from_ref(root))
    }
}

impl<'a, E, N, V, C> Navigator<'a, E, FnAccessor<N, V, C>>
where
    N: Fn(&E) -> &str + Clone,
    V: Fn(&E) -> Option<Value> + Clone,
    C: Fn(&E) -> Option<&[E]> + Clone,
{
    /// Navigate using three accessor functions for name, value and children
    pub fn from_fns(elements: &'a [E], name_fn: N, value_fn: V, children_fn: C) -> Self {
        Self::with_accessor(elements, FnAccessor::new(name_fn, value_fn, children_fn))
    }
}

impl<'a, E, A> Navigator<'a, E, A>
where
    A: Accessor<E> + Clone,
{
    /// Navigate a sequence of top-level elements through `accessor`
    pub fn with_accessor(elements: &'a [E], accessor: A) -> Self {
        Self::from_engine(Engine::new(elements, accessor))
    }

    /// Navigate from a single root element through `accessor`
    pub fn with_accessor_root(root: &'a E, accessor: A) -> Self {
        Self::with_accessor(std::slice::from_ref(root), accessor)
    }

    pub(crate) fn from_engine(core: Engine<'a, E, A>) -> Self {
        Self { core }
    }

    /// The elements in the current scope
    pub fn scope(&self) -> &'a [E] {
        self.core.elements()
    }

    pub fn len(&self) -> usize {
        self.core.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.elements().is_empty()
    }

    /// Number of elements in scope named `name`
    pub fn count(&self, name: &str) -> usize {
        self.core.count(name)
    }

    /// The first element named `name`, if any
    pub fn extract(&self, name: &str) -> Option<&'a E> {
        self.core.extract(name)
    }

    /// The value of the only element named `name`
    ///
    /// Fails with `Multiplicity` unless exactly one element matches, and with
    /// `TypeMismatch` if the value is not a `T`. Ask for `Option<T>` to accept
    /// an element without a value.
    pub fn get_value<T: FromValue>(&self, name: &str) -> Result<T> {
        self.core.get_value(name)
    }

    /// The value of the first element named `name`, or `Ok(None)` when no
    /// element has that name
    pub fn try_get_value<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        self.core.try_get_value(name)
    }

    /// Values of every element named `name`, in order
    pub fn get_values<T: FromValue>(&self, name: &str) -> Result<Vec<T>> {
        self.core.get_values(name)
    }

    /// Navigator over the children of the only element named `name`
    pub fn child(&self, name: &str) -> Result<Navigator<'a, E, A>> {
        self.core.descend_single(name)
    }

    /// Descend into the only element named `name` and run `f` on its children
    ///
    /// Any error type that can absorb a [`NavigationError`] works for `f`,
    /// so nested descents compose with `?`.
    pub fn descend_single<R, Er, F>(&self, name: &str, f: F) -> std::result::Result<R, Er>
    where
        F: FnOnce(Navigator<'a, E, A>) -> std::result::Result<R, Er>,
        Er: From<NavigationError>,
    {
        let child = self.child(name)?;
        f(child)
    }

    /// Lazily yields a navigator for each element named `name`
    pub fn children(&self, name: &str) -> Descend<'a, E, A> {
        self.core.descend_multiple(name)
    }

    /// Lazily run `f` on the children of each element named `name`
    pub fn descend_multiple<R, Er, F>(&self, name: &str, f: F) -> DescendWith<'a, E, A, F>
    where
        F: FnMut(Navigator<'a, E, A>) -> std::result::Result<R, Er>,
        Er: From<NavigationError>,
    {
        self.children(name).with(f)
    }

    /// Lazily regroup the scope into windows of `group_size` elements
    pub fn split(&self, group_size: usize) -> Split<'a, E, A> {
        self.core.split(group_size)
    }

    /// Resolve `name` against the first matching element
    pub fn member(&self, name: &str) -> Member<'a, E> {
        self.core.member(name)
    }

    /// Typed form of [`Navigator::member`]
    ///
    /// Unknown names fail with `UnknownMember`; composites and value-less
    /// leaves give `Ok(None)`.
    pub fn member_value<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        match self.member(name).into_result(name)? {
            Some(value) => self.core.convert(name, Some(value)).map(Some),
            None => Ok(None),
        }
    }
}

impl<'a, E, A: Clone> Clone for Navigator<'a, E, A> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
        }
    }
}

impl<'a, E, A> fmt::Debug for Navigator<'a, E, A>
where
    A: Accessor<E> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accessor = self.core.accessor();
        let names: Vec<&str> = self
            .scope()
            .iter()
            .map(|element| accessor.name(element))
            .collect();
        f.debug_struct("Navigator").field("scope", &names).finish()
    }
}
