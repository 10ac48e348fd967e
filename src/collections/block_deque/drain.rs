use core::{
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use super::BlockDeque;

/// Draining iterator returned by [`BlockDeque::drain`].
pub struct Drain<'a, T: 'a, const B: usize> {
    // We can't just use a &mut BlockDeque<T, B>, as that would make Drain invariant over T
    // and we want it to be covariant instead
    deque: NonNull<BlockDeque<T, B>>,
    // drain_start is stored in deque.len
    drain_len: usize,
    // index into the logical array of the next element yielded from the front
    index: usize,
    // length of the deque before draining
    orig_len: usize,
    remaining: usize,
    // Needed to make Drain covariant over T
    _marker: PhantomData<&'a T>,
}

impl<'a, T, const B: usize> Drain<'a, T, B> {
    /// # Safety
    ///
    /// `drain_start + drain_len` must not exceed `deque.len()`.
    pub(super) unsafe fn new(
        deque: &'a mut BlockDeque<T, B>,
        drain_start: usize,
        drain_len: usize,
    ) -> Self {
        // The deque is cut down to the elements before the drain, so a leaked
        // Drain leaves nothing moved-from or dropped reachable.
        //
        //        H   s   e   T
        // [. . . o o x x o o . . .]
        //
        // H = deque.head, T = deque.tail, s..e = drained range
        let orig_len = mem::replace(&mut deque.len, drain_start);
        deque.tail = deque.head + drain_start;
        Self {
            deque: NonNull::from(deque),
            drain_len,
            index: drain_start,
            orig_len,
            remaining: drain_len,
            _marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, const B: usize> fmt::Debug for Drain<'_, T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain")
            .field(&self.drain_len)
            .field(&self.index)
            .field(&self.orig_len)
            .field(&self.remaining)
            .finish()
    }
}

unsafe impl<T: Sync, const B: usize> Sync for Drain<'_, T, B> {}
unsafe impl<T: Send, const B: usize> Send for Drain<'_, T, B> {}

impl<T, const B: usize> Drop for Drain<'_, T, B> {
    fn drop(&mut self) {
        struct DropGuard<'r, 'a, T, const B: usize>(&'r mut Drain<'a, T, B>);

        let guard = DropGuard(self);

        if mem::needs_drop::<T>() && guard.0.remaining != 0 {
            unsafe {
                let deque = guard.0.deque.as_mut();
                let start = deque.head + guard.0.index;
                let end = start + guard.0.remaining;
                guard.0.remaining = 0;
                deque.drop_span(start, end);
            }
        }

        // Dropping `guard` puts the tail back and closes the hole.
        impl<T, const B: usize> Drop for DropGuard<'_, '_, T, B> {
            fn drop(&mut self) {
                let drain = &mut *self.0;
                let deque = unsafe { drain.deque.as_mut() };
                let drain_start = deque.head + deque.len;
                deque.tail = deque.head + drain.orig_len;
                deque.len = drain.orig_len;
                unsafe { deque.close_gap(drain_start, drain.drain_len) };
            }
        }
    }
}

impl<T, const B: usize> Iterator for Drain<'_, T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let deque = unsafe { self.deque.as_mut() };
        let at = deque.head + self.index;
        self.index += 1;
        self.remaining -= 1;
        Some(unsafe { deque.ptr_at(at).read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining;
        (len, Some(len))
    }
}

impl<T, const B: usize> DoubleEndedIterator for Drain<'_, T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        let deque = unsafe { self.deque.as_mut() };
        self.remaining -= 1;
        let at = deque.head + (self.index + self.remaining);
        Some(unsafe { deque.ptr_at(at).read() })
    }
}

impl<T, const B: usize> ExactSizeIterator for Drain<'_, T, B> {}

impl<T, const B: usize> FusedIterator for Drain<'_, T, B> {}
