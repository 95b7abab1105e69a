//! Lazy sequences of child navigators
//!
//! Both iterators borrow the immutable scope and build each navigator on
//! demand. Cloning an iterator gives an independent cursor; calling the
//! producing method again starts over from the first element.

use std::iter::FusedIterator;
use std::slice::{Chunks, Iter};

use crate::accessor::Accessor;
use crate::engine::Engine;
use crate::error::{NavigationError, Result};
use crate::navigator::Navigator;

/// Navigators over the children of every element with a given name
///
/// A matched leaf yields `Err(NotComposite)` when it is reached; elements
/// past the point where iteration stops are never inspected.
pub struct Descend<'a, E, A> {
    remaining: Iter<'a, E>,
    name: String,
    engine: Engine<'a, E, A>,
}

impl<'a, E, A> Descend<'a, E, A>
where
    A: Accessor<E> + Clone,
{
    pub(crate) fn new(engine: Engine<'a, E, A>, name: &str) -> Self {
        Self {
            remaining: engine.elements().iter(),
            name: name.to_string(),
            engine,
        }
    }

    /// Apply a continuation to every navigator, still lazily
    pub fn with<R, Er, F>(self, f: F) -> DescendWith<'a, E, A, F>
    where
        F: FnMut(Navigator<'a, E, A>) -> std::result::Result<R, Er>,
        Er: From<NavigationError>,
    {
        DescendWith { inner: self, f }
    }
}

impl<'a, E, A> Iterator for Descend<'a, E, A>
where
    A: Accessor<E> + Clone,
{
    type Item = Result<Navigator<'a, E, A>>;

    fn next(&mut self) -> Option<Self::Item> {
        let accessor = self.engine.accessor();
        let name = self.name.as_str();
        let element = self
            .remaining
            .by_ref()
            .find(|element| accessor.name(element) == name)?;
        Some(self.engine.descend(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.remaining.size_hint().1)
    }
}

impl<'a, E, A> FusedIterator for Descend<'a, E, A> where A: Accessor<E> + Clone {}

impl<'a, E, A: Clone> Clone for Descend<'a, E, A> {
    fn clone(&self) -> Self {
        Self {
            remaining: self.remaining.clone(),
            name: self.name.clone(),
            engine: self.engine.clone(),
        }
    }
}

/// [`Descend`] with a continuation applied to each child navigator
pub struct DescendWith<'a, E, A, F> {
    inner: Descend<'a, E, A>,
    f: F,
}

impl<'a, E, A, F, R, Er> Iterator for DescendWith<'a, E, A, F>
where
    A: Accessor<E> + Clone,
    F: FnMut(Navigator<'a, E, A>) -> std::result::Result<R, Er>,
    Er: From<NavigationError>,
{
    type Item = std::result::Result<R, Er>;

    fn next(&mut self) -> Option<Self::Item> {
        let child = self.inner.next()?;
        Some(child.map_err(Er::from).and_then(&mut self.f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, E, A, F, R, Er> FusedIterator for DescendWith<'a, E, A, F>
where
    A: Accessor<E> + Clone,
    F: FnMut(Navigator<'a, E, A>) -> std::result::Result<R, Er>,
    Er: From<NavigationError>,
{
}

impl<'a, E, A: Clone, F: Clone> Clone for DescendWith<'a, E, A, F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            f: self.f.clone(),
        }
    }
}

/// Navigators over consecutive fixed-size windows of a scope
///
/// The last window is shorter when the scope length is not a multiple of the
/// group size. A group size of zero yields nothing.
pub struct Split<'a, E, A> {
    windows: Option<Chunks<'a, E>>,
    accessor: A,
}

impl<'a, E, A> Split<'a, E, A> {
    pub(crate) fn new(elements: &'a [E], group_size: usize, accessor: A) -> Self {
        let windows = (group_size > 0).then(|| elements.chunks(group_size));
        Self { windows, accessor }
    }
}

impl<'a, E, A> Iterator for Split<'a, E, A>
where
    A: Accessor<E> + Clone,
{
    type Item = Navigator<'a, E, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let window = self.windows.as_mut()?.next()?;
        Some(Navigator::from_engine(Engine::new(
            window,
            self.accessor.clone(),
        )))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.windows {
            Some(windows) => windows.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<'a, E, A> ExactSizeIterator for Split<'a, E, A> where A: Accessor<E> + Clone {}

impl<'a, E, A> FusedIterator for Split<'a, E, A> where A: Accessor<E> + Clone {}

impl<'a, E, A: Clone> Clone for Split<'a, E, A> {
    fn clone(&self) -> Self {
        Self {
            windows: self.windows.clone(),
            accessor: self.accessor.clone(),
        }
    }
}
