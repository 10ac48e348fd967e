use core::{fmt, iter::FusedIterator, mem, mem::MaybeUninit, slice};

use super::block::{Slot, live_block};

/// Borrowing iterator over a [`BlockDeque`](super::BlockDeque).
///
/// Walks the live part of the first block, then every block in between, then
/// the live part of the last block.
pub struct Iter<'a, T, const B: usize> {
    blocks: slice::Iter<'a, Slot<T, B>>,
    front: slice::Iter<'a, MaybeUninit<T>>,
    back: slice::Iter<'a, MaybeUninit<T>>,
    len: usize,
}

impl<'a, T, const B: usize> Iter<'a, T, B> {
    /// # Safety
    ///
    /// `slots` must be the live span of a deque: every slot owns a block, the
    /// first block is live from `head_offset` on, the last one up to
    /// `tail_offset`, and there are exactly `len` live elements.
    pub(super) unsafe fn new(
        slots: &'a [Slot<T, B>],
        head_offset: usize,
        tail_offset: usize,
        len: usize,
    ) -> Self {
        let Some((first, rest)) = slots.split_first() else {
            return Self::empty();
        };
        let first = unsafe { live_block(first) }.as_uninit_slice();
        match rest.split_last() {
            None => Self {
                blocks: Default::default(),
                front: first[head_offset..tail_offset].iter(),
                back: Default::default(),
                len,
            },
            Some((last, middle)) => Self {
                blocks: middle.iter(),
                front: first[head_offset..].iter(),
                back: unsafe { live_block(last) }.as_uninit_slice()[..tail_offset].iter(),
                len,
            },
        }
    }

    fn empty() -> Self {
        Self {
            blocks: Default::default(),
            front: Default::default(),
            back: Default::default(),
            len: 0,
        }
    }
}

impl<T, const B: usize> Clone for Iter<'_, T, B> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, const B: usize> fmt::Debug for Iter<'_, T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T, const B: usize> Iterator for Iter<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        loop {
            if let Some(x) = self.front.next() {
                self.len -= 1;
                return Some(unsafe { x.assume_init_ref() });
            }
            match self.blocks.next() {
                Some(slot) => self.front = unsafe { live_block(slot) }.as_uninit_slice().iter(),
                None if self.back.len() == 0 => return None,
                None => self.front = mem::take(&mut self.back),
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<T, const B: usize> DoubleEndedIterator for Iter<'_, T, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        loop {
            if let Some(x) = self.back.next_back() {
                self.len -= 1;
                return Some(unsafe { x.assume_init_ref() });
            }
            match self.blocks.next_back() {
                Some(slot) => self.back = unsafe { live_block(slot) }.as_uninit_slice().iter(),
                None if self.front.len() == 0 => return None,
                None => self.back = mem::take(&mut self.front),
            }
        }
    }
}

impl<T, const B: usize> ExactSizeIterator for Iter<'_, T, B> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const B: usize> FusedIterator for Iter<'_, T, B> {}
