use core::fmt;
use core::iter::FusedIterator;

use super::BlockDeque;

/// Owning iterator over a [`BlockDeque`], popping from either end.
#[derive(Clone)]
pub struct IntoIter<T, const B: usize> {
    inner: BlockDeque<T, B>,
}

impl<T, const B: usize> IntoIter<T, B> {
    pub(super) fn new(inner: BlockDeque<T, B>) -> Self {
        IntoIter { inner }
    }

    /// The elements not yet yielded.
    pub fn into_inner(self) -> BlockDeque<T, B> {
        self.inner
    }
}

impl<T: fmt::Debug, const B: usize> fmt::Debug for IntoIter<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T, const B: usize> Iterator for IntoIter<T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.inner.pop_back()
    }
}

impl<T, const B: usize> DoubleEndedIterator for IntoIter<T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, const B: usize> FusedIterator for IntoIter<T, B> {}

impl<T, const B: usize> ExactSizeIterator for IntoIter<T, B> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len
    }
}
