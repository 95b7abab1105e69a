use log::{debug, trace};

use crate::accessor::Accessor;
use crate::error::{NavigationError, Result};
use crate::iter::{Descend, Split};
use crate::member::Member;
use crate::navigator::Navigator;
use crate::value::{FromValue, Value};

/// Search and extraction over one sibling scope
///
/// The scope is borrowed from the caller's tree and never changes; descending
/// or splitting builds a fresh engine over a different slice with a clone of
/// the same accessor.
pub(crate) struct Engine<'a, E, A> {
    /// The current sibling set, in document order
    elements: &'a [E],

    /// Reads name, value and children of each element
    accessor: A,
}

impl<'a, E, A: Clone> Clone for Engine<'a, E, A> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            accessor: self.accessor.clone(),
        }
    }
}

impl<'a, E, A> Engine<'a, E, A>
where
    A: Accessor<E> + Clone,
{
    pub(crate) fn new(elements: &'a [E], accessor: A) -> Self {
        Self { elements, accessor }
    }

    pub(crate) fn elements(&self) -> &'a [E] {
        self.elements
    }

    pub(crate) fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Elements in scope whose name equals `name`, in order
    fn matching<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'a E> + 's {
        self.elements
            .iter()
            .filter(move |element| self.accessor.name(element) == name)
    }

    pub(crate) fn count(&self, name: &str) -> usize {
        self.matching(name).count()
    }

    pub(crate) fn extract(&self, name: &str) -> Option<&'a E> {
        self.matching(name).next()
    }

    /// The one element named `name`; zero or several matches is an error
    fn single(&self, name: &str) -> Result<&'a E> {
        let mut matches = self.matching(name);
        match (matches.next(), matches.next()) {
            (Some(element), None) => Ok(element),
            (first, _) => {
                let found = if first.is_some() {
                    2 + matches.count()
                } else {
                    0
                };
                debug!("Expected one `{}` in scope, found {}", name, found);
                Err(NavigationError::multiplicity(name, found))
            }
        }
    }

    /// Convert the scalar of an element named `name` into `T`
    pub(crate) fn convert<T: FromValue>(&self, name: &str, value: Option<Value>) -> Result<T> {
        match value {
            Some(value) => {
                let found = value.kind();
                T::from_value(value)
                    .ok_or_else(|| NavigationError::type_mismatch(name, T::expected(), found))
            }
            None => T::from_absent()
                .ok_or_else(|| NavigationError::type_mismatch(name, T::expected(), "nothing")),
        }
    }

    pub(crate) fn single_value(&self, name: &str) -> Result<Option<Value>> {
        let element = self.single(name)?;
        Ok(self.accessor.value(element))
    }

    pub(crate) fn get_value<T: FromValue>(&self, name: &str) -> Result<T> {
        let value = self.single_value(name)?;
        self.convert(name, value)
    }

    pub(crate) fn try_get_value<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        match self.extract(name) {
            Some(element) => self.convert(name, self.accessor.value(element)).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn get_values<T: FromValue>(&self, name: &str) -> Result<Vec<T>> {
        self.matching(name)
            .map(|element| self.convert(name, self.accessor.value(element)))
            .collect()
    }

    /// A navigator over the children of `element`
    pub(crate) fn descend(&self, element: &'a E) -> Result<Navigator<'a, E, A>> {
        let name = self.accessor.name(element);
        match self.accessor.children(element) {
            Some(children) => {
                trace!("Descending into `{}` ({} children)", name, children.len());
                Ok(Navigator::from_engine(Engine::new(
                    children,
                    self.accessor.clone(),
                )))
            }
            None => {
                debug!("Cannot descend into leaf `{}`", name);
                Err(NavigationError::not_composite(name))
            }
        }
    }

    pub(crate) fn descend_single(&self, name: &str) -> Result<Navigator<'a, E, A>> {
        let element = self.single(name)?;
        self.descend(element)
    }

    pub(crate) fn descend_multiple(&self, name: &str) -> Descend<'a, E, A> {
        Descend::new(self.clone(), name)
    }

    pub(crate) fn split(&self, group_size: usize) -> Split<'a, E, A> {
        trace!(
            "Splitting {} elements into groups of {}",
            self.elements.len(),
            group_size
        );
        Split::new(self.elements, group_size, self.accessor.clone())
    }

    pub(crate) fn member(&self, name: &str) -> Member<'a, E> {
        match self.extract(name) {
            Some(element) => match self.accessor.children(element) {
                Some(children) => Member::Composite(children),
                None => Member::Leaf(self.accessor.value(element)),
            },
            None => Member::Unknown,
        }
    }
}
