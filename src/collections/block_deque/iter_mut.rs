use core::{fmt, iter::FusedIterator, mem, mem::MaybeUninit, slice};

use super::block::{Slot, live_block_mut};

/// Mutable iterator over a [`BlockDeque`](super::BlockDeque).
pub struct IterMut<'a, T, const B: usize> {
    blocks: slice::IterMut<'a, Slot<T, B>>,
    front: slice::IterMut<'a, MaybeUninit<T>>,
    back: slice::IterMut<'a, MaybeUninit<T>>,
    len: usize,
}

impl<'a, T, const B: usize> IterMut<'a, T, B> {
    /// # Safety
    ///
    /// Same contract as [`Iter::new`](super::iter::Iter).
    pub(super) unsafe fn new(
        slots: &'a mut [Slot<T, B>],
        head_offset: usize,
        tail_offset: usize,
        len: usize,
    ) -> Self {
        let Some((first, rest)) = slots.split_first_mut() else {
            return Self {
                blocks: Default::default(),
                front: Default::default(),
                back: Default::default(),
                len: 0,
            };
        };
        let first = unsafe { live_block_mut(first) }.as_uninit_slice_mut();
        match rest.split_last_mut() {
            None => Self {
                blocks: Default::default(),
                front: first[head_offset..tail_offset].iter_mut(),
                back: Default::default(),
                len,
            },
            Some((last, middle)) => Self {
                blocks: middle.iter_mut(),
                front: first[head_offset..].iter_mut(),
                back: unsafe { live_block_mut(last) }.as_uninit_slice_mut()[..tail_offset].iter_mut(),
                len,
            },
        }
    }
}

impl<T, const B: usize> fmt::Debug for IterMut<'_, T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.len).finish()
    }
}

impl<'a, T, const B: usize> Iterator for IterMut<'a, T, B> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        loop {
            if let Some(x) = self.front.next() {
                self.len -= 1;
                return Some(unsafe { x.assume_init_mut() });
            }
            match self.blocks.next() {
                Some(slot) => {
                    self.front = unsafe { live_block_mut(slot) }.as_uninit_slice_mut().iter_mut()
                }
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
    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<T, const B: usize> DoubleEndedIterator for IterMut<'_, T, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        loop {
            if let Some(x) = self.back.next_back() {
                self.len -= 1;
                return Some(unsafe { x.assume_init_mut() });
            }
            match self.blocks.next_back() {
                Some(slot) => {
                    self.back = unsafe { live_block_mut(slot) }.as_uninit_slice_mut().iter_mut()
                }
                None if self.front.len() == 0 => return None,
                None => self.back = mem::take(&mut self.front),
            }
        }
    }
}

impl<T, const B: usize> ExactSizeIterator for IterMut<'_, T, B> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const B: usize> FusedIterator for IterMut<'_, T, B> {}
