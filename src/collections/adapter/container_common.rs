use std::collections::VecDeque;

use crate::collections::BlockDeque;

pub trait ContainerCommon {
    fn len(&self) -> usize;

    /// Elements the container can hold. Growable containers report `usize::MAX`.
    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T, const B: usize> ContainerCommon for BlockDeque<T, B> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl<T> ContainerCommon for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl<T> ContainerCommon for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}
