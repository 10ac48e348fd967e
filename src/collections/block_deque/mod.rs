pub mod cursor;
pub mod drain;
pub mod into_iter;
pub mod iter;
pub mod iter_mut;

mod block;
#[cfg(test)]
mod tests;

use core::{
    cmp::Ordering,
    fmt, hash, iter as core_iter, mem,
    ops::{self, Range, RangeBounds},
    ptr,
};

use block::SlotMap;
pub use cursor::{Cursor, End, closer_to};
use drain::Drain;
use into_iter::IntoIter;
use iter::Iter;
use iter_mut::IterMut;

use crate::slice::RangeError;

/// Elements per block when no block length is given.
pub const DEFAULT_BLOCK_LEN: usize = 8;

/// Slots in the block map of a freshly created deque.
pub const DEFAULT_MAP_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DequeError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cursor (block {block}, offset {offset}) is outside the live range")]
    CursorOutOfRange { block: usize, offset: usize },
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl<const B: usize> From<Cursor<B>> for DequeError {
    #[inline]
    fn from(cursor: Cursor<B>) -> Self {
        Self::CursorOutOfRange {
            block: cursor.block(),
            offset: cursor.offset(),
        }
    }
}

/// A double-ended queue stored in fixed-size blocks of `B` elements.
///
/// Blocks are owned by a growable map of slots. Pushing at either end only
/// ever allocates a new block or grows the map, so elements already stored are
/// never moved by `push_front`/`push_back`. Inserting or erasing in the middle
/// moves whichever side of the position is shorter.
///
/// Positions can be addressed by logical index or by [`Cursor`].
pub struct BlockDeque<T, const B: usize = DEFAULT_BLOCK_LEN> {
    map: SlotMap<T, B>,
    head: Cursor<B>,
    tail: Cursor<B>,
    len: usize,
}

impl<T, const B: usize> BlockDeque<T, B> {
    pub fn new() -> Self {
        const { assert!(B > 0, "block length must be non-zero") };
        let map = SlotMap::with_middle_block(DEFAULT_MAP_SLOTS);
        let middle = Cursor::new(DEFAULT_MAP_SLOTS / 2, B / 2);
        Self {
            map,
            head: middle,
            tail: middle,
            len: 0,
        }
    }

    /// Creates an empty deque whose map has room for `capacity` elements on
    /// either side of the middle. No block besides the middle one is allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut deque = Self::new();
        deque.reallocate(capacity.saturating_mul(2));
        deque
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn block_len(&self) -> usize {
        B
    }

    /// Number of slots in the block map, allocated or not.
    #[inline]
    pub fn map_len(&self) -> usize {
        self.map.len()
    }

    /// Number of blocks currently owned by the map, including spare ones.
    pub fn allocated_blocks(&self) -> usize {
        self.map.allocated()
    }

    /// Cursor to the first element.
    #[inline]
    pub fn begin(&self) -> Cursor<B> {
        self.head
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<B> {
        self.tail
    }

    /// Cursor to the element at `index`. Not checked against the length.
    #[inline]
    pub fn cursor(&self, index: usize) -> Cursor<B> {
        self.head + index
    }

    /// Logical index of `cursor`, which may be [`end`](Self::end).
    pub fn position(&self, cursor: Cursor<B>) -> Result<usize, DequeError> {
        if cursor < self.head || cursor > self.tail {
            return Err(cursor.into());
        }
        Ok((cursor - self.head) as usize)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        Some(unsafe { self.get_unchecked_at(self.head + index) })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        Some(unsafe { self.get_unchecked_mut_at(self.head + index) })
    }

    pub fn get_at(&self, cursor: Cursor<B>) -> Option<&T> {
        if !self.is_live(cursor) {
            return None;
        }
        Some(unsafe { self.get_unchecked_at(cursor) })
    }

    pub fn get_at_mut(&mut self, cursor: Cursor<B>) -> Option<&mut T> {
        if !self.is_live(cursor) {
            return None;
        }
        Some(unsafe { self.get_unchecked_mut_at(cursor) })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.wrapping_sub(1))
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.wrapping_sub(1))
    }

    pub fn iter(&self) -> Iter<'_, T, B> {
        let slots = self.map.slots(self.head.block()..=self.tail.block());
        unsafe { Iter::new(slots, self.head.offset(), self.tail.offset(), self.len) }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T, B> {
        let (head, tail, len) = (self.head, self.tail, self.len);
        let slots = self.map.slots_mut(head.block()..=tail.block());
        unsafe { IterMut::new(slots, head.offset(), tail.offset(), len) }
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), DequeError> {
        let len = self.len;
        if i >= len {
            return Err(DequeError::IndexOutOfBounds { index: i, len });
        }
        if j >= len {
            return Err(DequeError::IndexOutOfBounds { index: j, len });
        }
        unsafe { self.swap_unchecked(self.head + i, self.head + j) };
        Ok(())
    }

    pub fn push_back(&mut self, value: T) {
        self.ensure_vacancy(End::Back, 1);
        unsafe { self.ptr_at(self.tail).write(value) };
        self.tail += 1;
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        self.ensure_vacancy(End::Front, 1);
        self.head -= 1;
        unsafe { self.ptr_at(self.head).write(value) };
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail -= 1;
        self.len -= 1;
        Some(unsafe { self.ptr_at(self.tail).read() })
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let old_head = self.head;
        self.head += 1;
        self.len -= 1;
        Some(unsafe { self.ptr_at(old_head).read() })
    }

    /// Inserts `value` right before `pos` and returns a cursor to it.
    ///
    /// Only the elements between `pos` and the nearer end are moved.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside [`begin`](Self::begin)..=[`end`](Self::end).
    #[track_caller]
    pub fn insert(&mut self, pos: Cursor<B>, value: T) -> Cursor<B> {
        self.assert_position(pos);
        let gap = unsafe { self.open_gap(pos, 1) };
        unsafe { self.ptr_at(gap).write(value) };
        gap
    }

    /// Inserts `count` clones of `value` right before `pos`.
    /// Returns a cursor to the first inserted element, or `pos` if `count == 0`.
    #[track_caller]
    pub fn insert_n(&mut self, pos: Cursor<B>, count: usize, value: T) -> Cursor<B>
    where
        T: Clone,
    {
        self.insert_iter(pos, core_iter::repeat_n(value, count))
    }

    /// Inserts every item of `iter`, in order, right before `pos`.
    ///
    /// Room for `iter.len()` elements is made up front. An iterator that
    /// yields fewer items than it reported leaves no hole behind.
    #[track_caller]
    pub fn insert_iter<I>(&mut self, pos: Cursor<B>, iter: I) -> Cursor<B>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.assert_position(pos);
        let mut iter = iter.into_iter();
        let count = iter.len();
        let index = (pos - self.head) as usize;

        struct GapGuard<'a, T, const B: usize> {
            deque: &'a mut BlockDeque<T, B>,
            start: Cursor<B>,
            count: usize,
            filled: usize,
        }

        impl<T, const B: usize> Drop for GapGuard<'_, T, B> {
            fn drop(&mut self) {
                // whatever was not written is not live, squeeze it out.
                let unfilled = self.count - self.filled;
                unsafe { self.deque.close_gap(self.start + self.filled, unfilled) };
            }
        }

        let start = unsafe { self.open_gap(pos, count) };
        let mut guard = GapGuard {
            deque: self,
            start,
            count,
            filled: 0,
        };
        while guard.filled < count {
            let Some(value) = iter.next() else { break };
            let at = guard.start + guard.filled;
            unsafe { guard.deque.ptr_at(at).write(value) };
            guard.filled += 1;
        }
        drop(guard);

        self.head + index
    }

    /// Like [`insert`](Self::insert), by logical index. Gives the value back
    /// when `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<Cursor<B>, (T, DequeError)> {
        let len = self.len;
        if index > len {
            return Err((value, DequeError::IndexOutOfBounds { index, len }));
        }
        Ok(self.insert(self.head + index, value))
    }

    /// returns `None` if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let pos = self.head + index;
        let value = unsafe { self.ptr_at(pos).read() };
        unsafe { self.close_gap(pos, 1) };
        Some(value)
    }

    /// Erases the element at `pos` and returns a cursor to the element that
    /// followed it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not address a live element.
    #[track_caller]
    pub fn erase(&mut self, pos: Cursor<B>) -> Cursor<B> {
        assert!(
            self.is_live(pos),
            "erase position {pos:?} is outside {:?}..{:?}",
            self.head,
            self.tail
        );
        let index = (pos - self.head) as usize;
        drop(self.remove(index));
        self.head + index
    }

    /// Erases `first..last` and returns a cursor to the element that followed
    /// the range, which is `first` itself when the range is empty.
    ///
    /// # Panics
    ///
    /// Panics unless `begin() <= first <= last <= end()`.
    #[track_caller]
    pub fn erase_range(&mut self, first: Cursor<B>, last: Cursor<B>) -> Cursor<B> {
        assert!(
            self.head <= first && first <= last && last <= self.tail,
            "erase range {first:?}..{last:?} is outside {:?}..{:?}",
            self.head,
            self.tail
        );
        let start = (first - self.head) as usize;
        let end = (last - self.head) as usize;
        drop(self.drain(start..end));
        self.head + start
    }

    /// Removes `range` from the deque, yielding the removed elements.
    ///
    /// Elements not consumed are dropped with the iterator; the gap is closed
    /// from whichever side is shorter. If the iterator is leaked, the deque is
    /// left holding only the elements before `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, B>
    where
        R: RangeBounds<usize>,
    {
        match self.try_drain(range) {
            Ok(drain) => drain,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_drain<R>(&mut self, range: R) -> Result<Drain<'_, T, B>, DequeError>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = crate::slice::range(range, ..self.len)?;
        Ok(unsafe { Drain::new(self, start, end - start) })
    }

    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_tail = self.tail;
        // forget the elements first, so a panicking destructor can't cause a double drop.
        self.tail = self.head + len;
        self.len = len;
        unsafe { self.drop_span(self.tail, old_tail) };
    }

    /// Drops every element and moves head and tail back to the middle of the
    /// map. Blocks are kept for reuse.
    pub fn clear(&mut self) {
        self.truncate(0);
        let middle = self.map.len() / 2;
        self.map.allocate(middle);
        self.head = Cursor::new(middle, B / 2);
        self.tail = self.head;
    }

    /// Frees every block outside the span between the head and tail blocks and
    /// returns how many were freed. The map itself keeps its size.
    pub fn shrink_to_fit(&mut self) -> usize {
        let (first, last) = (self.head.block(), self.tail.block());
        let map_len = self.map.len();
        let released = (0..first)
            .chain(last + 1..map_len)
            .filter(|&index| self.map.release(index))
            .count();
        crate::event!(debug, released, map_len, "released spare blocks");
        released
    }

    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    pub fn resize_with(&mut self, new_len: usize, mut f: impl FnMut() -> T) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.ensure_vacancy(End::Back, new_len - self.len);
        while self.len < new_len {
            self.push_back(f());
        }
    }

    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain_mut(|elem| f(elem));
    }

    pub fn retain_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        let len = self.len;
        let mut index = 0;
        let mut current_index = 0;

        // Stage 1: All values are retained.
        while current_index < len {
            let current = self.head + current_index;
            if !f(unsafe { self.get_unchecked_mut_at(current) }) {
                current_index += 1;
                break;
            }
            current_index += 1;
            index += 1;
        }
        // Stage 2: Swap retained value into current idx.
        while current_index < len {
            let current = self.head + current_index;
            if !f(unsafe { self.get_unchecked_mut_at(current) }) {
                current_index += 1;
                continue;
            }
            unsafe { self.swap_unchecked(self.head + index, current) };
            current_index += 1;
            index += 1;
        }
        // Stage 3: Truncate all values after idx.
        if current_index != index {
            self.truncate(index);
        }
    }

    /// Moves every element of `other` to the back of `self`, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        self.extend(other.drain(..));
    }
}

impl<T, const B: usize> BlockDeque<T, B> {
    #[inline]
    fn is_live(&self, cursor: Cursor<B>) -> bool {
        self.head <= cursor && cursor < self.tail
    }

    #[inline]
    #[track_caller]
    fn assert_position(&self, pos: Cursor<B>) {
        assert!(
            self.head <= pos && pos <= self.tail,
            "position {pos:?} is outside {:?}..={:?}",
            self.head,
            self.tail
        );
    }

    /// Free element slots before `head` in its block, or after `tail` in its
    /// block. `tail` itself is not counted: it must stay addressable.
    #[inline]
    fn block_vacancy(&self, end: End) -> usize {
        match end {
            End::Front => self.head.offset(),
            End::Back => B - 1 - self.tail.offset(),
        }
    }

    /// Slots between the edge of the map and the head or tail block.
    #[inline]
    fn map_vacancy(&self, end: End) -> usize {
        match end {
            End::Front => self.head.block(),
            End::Back => self.map.len() - 1 - self.tail.block(),
        }
    }

    /// Makes sure `count` more elements fit at `end` without touching the
    /// current ones.
    fn ensure_vacancy(&mut self, end: End, count: usize) {
        let vacancy = self.block_vacancy(end);
        if count <= vacancy {
            return;
        }
        let required = (count - vacancy).div_ceil(B);
        if self.map_vacancy(end) < required {
            self.make_map_room(end, required, count);
        }
        self.allocate_blocks(end, required);
    }

    fn make_map_room(&mut self, end: End, required: usize, count: usize) {
        let live = self.tail.block() - self.head.block() + 1;
        let slots = self.map.len();
        if 2 * (live + required) <= slots {
            self.recenter(end, required);
        } else {
            let doubled = (2 * slots + 2 * required).saturating_mul(B);
            self.reallocate((2 * self.len + count).max(doubled));
        }
        debug_assert!(self.map_vacancy(end) >= required);
    }

    /// Grows the map so it spans at least `capacity` elements, keeping the
    /// current slots centered. Does nothing if it is already large enough.
    fn reallocate(&mut self, capacity: usize) {
        let old_len = self.map.len();
        let new_len = capacity.div_ceil(B);
        if new_len <= old_len {
            return;
        }
        let pad = self.map.grow_centered(new_len);
        self.head = self.head.with_block(self.head.block() + pad);
        self.tail = self.tail.with_block(self.tail.block() + pad);
        crate::event!(debug, old_len, new_len, pad, "reallocated block map");
    }

    /// Slides the live span inside the map so `required` free slots open up at
    /// `end`. The map keeps its size; spare blocks wrap around to the other end.
    fn recenter(&mut self, end: End, required: usize) {
        let live = self.tail.block() - self.head.block() + 1;
        let mut new_head = (self.map.len() - live - required) / 2;
        if end == End::Front {
            new_head += required;
        }
        let shift = new_head as isize - self.head.block() as isize;
        self.map.rotate(shift);
        self.head = self.head.with_block(new_head);
        self.tail = self.tail.with_block(new_head + live - 1);
        crate::event!(trace, shift, live, "recentered block map");
    }

    fn allocate_blocks(&mut self, end: End, count: usize) {
        for i in 1..=count {
            let index = match end {
                End::Front => self.head.block() - i,
                End::Back => self.tail.block() + i,
            };
            self.map.allocate(index);
        }
    }

    /// Opens `count` uninitialized positions right before `pos` and returns
    /// the first of them. The gap is already counted in `len`.
    ///
    /// # Safety
    ///
    /// `pos` must lie in `head..=tail`, and the gap must be filled or closed
    /// before anything reads from it or the deque is dropped.
    unsafe fn open_gap(&mut self, pos: Cursor<B>, count: usize) -> Cursor<B> {
        if count == 0 {
            return pos;
        }
        let index = (pos - self.head) as usize;
        let end = closer_to(self.head, pos, self.tail);
        // may reallocate, `pos` is re-derived from `index` below.
        self.ensure_vacancy(end, count);
        match end {
            End::Front => {
                let new_head = self.head - count;
                unsafe { self.copy(self.head, new_head, index) };
                self.head = new_head;
            }
            End::Back => {
                let pos = self.head + index;
                unsafe { self.copy(pos, pos + count, self.len - index) };
                self.tail += count;
            }
        }
        self.len += count;
        self.head + index
    }

    /// Removes `count` positions starting at `start`, moving the shorter side
    /// over them. Ties move the back side.
    ///
    /// # Safety
    ///
    /// `start..start + count` must lie in `head..tail` and hold nothing that
    /// still needs dropping.
    unsafe fn close_gap(&mut self, start: Cursor<B>, count: usize) {
        if count == 0 {
            return;
        }
        let front_len = (start - self.head) as usize;
        let back_len = (self.tail - start) as usize - count;
        if front_len < back_len {
            let new_head = self.head + count;
            unsafe { self.copy(self.head, new_head, front_len) };
            self.head = new_head;
        } else {
            unsafe { self.copy(start + count, start, back_len) };
            self.tail -= count;
        }
        self.len -= count;
    }

    /// Moves `len` elements from `src` to `dst`; the ranges may overlap.
    ///
    /// # Safety
    ///
    /// Every position of both ranges must be inside an allocated block.
    unsafe fn copy(&mut self, src: Cursor<B>, dst: Cursor<B>, len: usize) {
        if mem::size_of::<T>() == 0 || src == dst || len == 0 {
            return;
        }
        if dst < src {
            // front to back, so no source is overwritten before it is read.
            let (mut src, mut dst, mut left) = (src, dst, len);
            while left > 0 {
                let run = left.min(B - src.offset()).min(B - dst.offset());
                unsafe { self.copy_run(src, dst, run) };
                src += run;
                dst += run;
                left -= run;
            }
        } else {
            let (mut src_end, mut dst_end, mut left) = (src + len, dst + len, len);
            while left > 0 {
                let run = left.min(run_before(src_end)).min(run_before(dst_end));
                src_end -= run;
                dst_end -= run;
                unsafe { self.copy_run(src_end, dst_end, run) };
                left -= run;
            }
        }
    }

    /// Copies `len` elements that don't cross a block boundary on either side.
    #[inline]
    unsafe fn copy_run(&mut self, src: Cursor<B>, dst: Cursor<B>, len: usize) {
        debug_assert!(src.offset() + len <= B && dst.offset() + len <= B);
        unsafe {
            if src.block() == dst.block() {
                let base = self.map.block_ptr(src.block());
                ptr::copy(base.add(src.offset()), base.add(dst.offset()), len);
            } else {
                let from = self.map.block_ptr(src.block()).add(src.offset());
                let to = self.map.block_ptr(dst.block()).add(dst.offset());
                ptr::copy_nonoverlapping(from, to, len);
            }
        }
    }

    /// Drops the elements in `start..end` in place.
    ///
    /// # Safety
    ///
    /// The range must hold initialized elements that the deque no longer
    /// considers live.
    unsafe fn drop_span(&mut self, mut start: Cursor<B>, end: Cursor<B>) {
        while start < end {
            let run = ((end - start) as usize).min(B - start.offset());
            unsafe {
                let first = self.ptr_at(start);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, run));
            }
            start += run;
        }
    }

    #[inline]
    unsafe fn ptr_at(&mut self, cursor: Cursor<B>) -> *mut T {
        unsafe { self.map.block_ptr(cursor.block()).add(cursor.offset()) }
    }

    #[inline]
    unsafe fn get_unchecked_at(&self, cursor: Cursor<B>) -> &T {
        debug_assert!(self.is_live(cursor));
        unsafe {
            self.map
                .get(cursor.block())
                .unwrap_unchecked()
                .as_uninit_slice()
                .get_unchecked(cursor.offset())
                .assume_init_ref()
        }
    }

    #[inline]
    unsafe fn get_unchecked_mut_at(&mut self, cursor: Cursor<B>) -> &mut T {
        debug_assert!(self.is_live(cursor));
        unsafe {
            self.map
                .get_mut(cursor.block())
                .unwrap_unchecked()
                .as_uninit_slice_mut()
                .get_unchecked_mut(cursor.offset())
                .assume_init_mut()
        }
    }

    unsafe fn swap_unchecked(&mut self, a: Cursor<B>, b: Cursor<B>) {
        if a == b {
            return;
        }
        unsafe {
            let x = self.ptr_at(a).read();
            let y = self.ptr_at(b).read();
            self.ptr_at(a).write(y);
            self.ptr_at(b).write(x);
        }
    }
}

/// Elements between `cursor` and the start of the block run that ends at it.
#[inline]
fn run_before<const B: usize>(cursor: Cursor<B>) -> usize {
    if cursor.offset() == 0 {
        B
    } else {
        cursor.offset()
    }
}

impl<T, const B: usize> Default for BlockDeque<T, B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const B: usize> Clone for BlockDeque<T, B> {
    fn clone(&self) -> Self {
        let mut deque = Self::with_capacity(self.len);
        deque.extend(self.iter().cloned());
        deque
    }
}

impl<T, const B: usize> Drop for BlockDeque<T, B> {
    fn drop(&mut self) {
        let (head, tail) = (self.head, self.tail);
        self.tail = head;
        self.len = 0;
        unsafe { self.drop_span(head, tail) };
    }
}

impl<T: PartialEq, const B: usize> PartialEq for BlockDeque<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, U, const B: usize> PartialEq<[U]> for BlockDeque<T, B>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, const B: usize> PartialEq<&[U]> for BlockDeque<T, B>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        PartialEq::eq(self, *other)
    }
}

impl<T, U, const B: usize> PartialEq<Vec<U>> for BlockDeque<T, B>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        PartialEq::eq(self, other.as_slice())
    }
}

impl<T, U, const B: usize, const M: usize> PartialEq<[U; M]> for BlockDeque<T, B>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        PartialEq::eq(self, other.as_slice())
    }
}

impl<T, U, const B: usize, const M: usize> PartialEq<&[U; M]> for BlockDeque<T, B>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; M]) -> bool {
        PartialEq::eq(self, other.as_slice())
    }
}

impl<T: Eq, const B: usize> Eq for BlockDeque<T, B> {}

impl<T: PartialOrd, const B: usize> PartialOrd for BlockDeque<T, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const B: usize> Ord for BlockDeque<T, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: hash::Hash, const B: usize> hash::Hash for BlockDeque<T, B> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T, const B: usize> ops::Index<usize> for BlockDeque<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Out of bounds access")
    }
}

impl<T, const B: usize> ops::IndexMut<usize> for BlockDeque<T, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Out of bounds access")
    }
}

impl<T, const B: usize> ops::Index<Cursor<B>> for BlockDeque<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, cursor: Cursor<B>) -> &Self::Output {
        self.get_at(cursor).expect("Cursor outside the live range")
    }
}

impl<T, const B: usize> ops::IndexMut<Cursor<B>> for BlockDeque<T, B> {
    #[inline]
    fn index_mut(&mut self, cursor: Cursor<B>) -> &mut Self::Output {
        self.get_at_mut(cursor)
            .expect("Cursor outside the live range")
    }
}

impl<T, const B: usize> Extend<T> for BlockDeque<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.ensure_vacancy(End::Back, iter.size_hint().0);
        iter.for_each(|value| self.push_back(value));
    }
}

impl<'a, T: Copy + 'a, const B: usize> Extend<&'a T> for BlockDeque<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const B: usize> FromIterator<T> for BlockDeque<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}

impl<T, const B: usize> IntoIterator for BlockDeque<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const B: usize> IntoIterator for &'a BlockDeque<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, B>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const B: usize> IntoIterator for &'a mut BlockDeque<T, B> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, B>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const B: usize> fmt::Debug for BlockDeque<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const B: usize> From<Vec<T>> for BlockDeque<T, B> {
    #[inline]
    fn from(other: Vec<T>) -> Self {
        Self::from_iter(other)
    }
}

impl<T, const B: usize, const N: usize> From<[T; N]> for BlockDeque<T, B> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_iter(value)
    }
}
