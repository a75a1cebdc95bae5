//! Lazy, restartable sequences over array nodes.

use std::fmt;
use std::marker::PhantomData;
use std::slice;

use serde_json::Value;

use super::adaptor::Adaptor;

/// A sequence view over an array node, converting each element with `A`.
///
/// Nothing is converted until the sequence is iterated, and a `Range` is
/// `Copy`, so it can be iterated any number of times. A node that is not an
/// array is treated as a collection of one element; a null node (including
/// an absent key read through a required accessor) is empty.
pub struct Range<'a, A> {
    node: &'a Value,
    _adaptor: PhantomData<fn() -> A>,
}

impl<'a, A> Clone for Range<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A> Copy for Range<'a, A> {}

impl<'a, A> fmt::Debug for Range<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range").field("node", self.node).finish()
    }
}

impl<'a, A: Adaptor<'a>> Range<'a, A> {
    /// Wraps `node`.
    pub fn new(node: &'a Value) -> Self {
        Self {
            node,
            _adaptor: PhantomData,
        }
    }

    /// The tree node this sequence reads from.
    pub fn node(&self) -> &'a Value {
        self.node
    }

    fn elements(&self) -> &'a [Value] {
        match self.node {
            Value::Array(items) => items.as_slice(),
            Value::Null => &[],
            other => slice::from_ref(other),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements().len()
    }

    /// Returns true if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Converts the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<A::Output> {
        self.elements().get(index).map(A::adapt)
    }

    /// Starts a fresh iteration.
    pub fn iter(&self) -> RangeIter<'a, A> {
        RangeIter {
            inner: self.elements().iter(),
            _adaptor: PhantomData,
        }
    }
}

impl<'a, A: Adaptor<'a>> Adaptor<'a> for Range<'a, A> {
    type Output = Self;

    fn adapt(node: &'a Value) -> Self {
        Self::new(node)
    }
}

impl<'a, A: Adaptor<'a>> IntoIterator for Range<'a, A> {
    type Item = A::Output;
    type IntoIter = RangeIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'r, A: Adaptor<'a>> IntoIterator for &'r Range<'a, A> {
    type Item = A::Output;
    type IntoIter = RangeIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Range::iter`].
pub struct RangeIter<'a, A> {
    inner: slice::Iter<'a, Value>,
    _adaptor: PhantomData<fn() -> A>,
}

impl<'a, A: Adaptor<'a>> Iterator for RangeIter<'a, A> {
    type Item = A::Output;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(A::adapt)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, A: Adaptor<'a>> DoubleEndedIterator for RangeIter<'a, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(A::adapt)
    }
}

impl<'a, A: Adaptor<'a>> ExactSizeIterator for RangeIter<'a, A> {}
