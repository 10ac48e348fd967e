use core::{cmp::Ordering, fmt, ops};

/// A position inside a [`BlockDeque`](super::BlockDeque): a slot index in the
/// block map plus an offset inside that slot's block.
///
/// Cursors are plain values. They hold no borrow of the deque, so they stay
/// usable across mutations, but any operation that reallocates the block map
/// or shifts elements past the addressed position makes them point somewhere
/// else. Dereferencing always goes through the deque, which checks the cursor
/// against the live range.
///
/// The one-past-the-end position of a full block is written as offset `0` of
/// the next block, so `offset < B` always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<const B: usize> {
    block: usize,
    offset: usize,
}

impl<const B: usize> Cursor<B> {
    #[inline]
    pub(super) const fn new(block: usize, offset: usize) -> Self {
        debug_assert!(offset < B);
        Self { block, offset }
    }

    #[inline]
    const fn from_flat(flat: usize) -> Self {
        Self {
            block: flat / B,
            offset: flat % B,
        }
    }

    /// Index of the block-map slot this cursor addresses.
    #[inline]
    pub const fn block(&self) -> usize {
        self.block
    }

    /// Offset inside the addressed block, always `< B`.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Position as if every block of the map were laid out back to back.
    #[inline]
    pub const fn flat(&self) -> usize {
        self.block * B + self.offset
    }

    /// Moves the cursor by `n` positions, crossing block boundaries as needed.
    ///
    /// Moving before the first slot of the map is a caller error; it panics in
    /// debug builds.
    #[inline]
    pub fn advance(&mut self, n: isize) {
        let flat = self.flat().checked_add_signed(n);
        debug_assert!(flat.is_some(), "cursor moved before the start of the map");
        *self = Self::from_flat(flat.unwrap_or(0));
    }

    #[inline]
    pub fn retreat(&mut self) {
        self.advance(-1);
    }

    /// Signed number of elements from `origin` to `self`.
    #[inline]
    pub fn distance_from(&self, origin: Self) -> isize {
        let blocks = self.block as isize - origin.block as isize;
        blocks * B as isize + (self.offset as isize - origin.offset as isize)
    }

    /// Same offset, different slot. Used when the block map moves its slots.
    #[inline]
    pub(super) const fn with_block(self, block: usize) -> Self {
        Self { block, ..self }
    }
}

impl<const B: usize> fmt::Debug for Cursor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor")
            .field(&self.block)
            .field(&self.offset)
            .finish()
    }
}

impl<const B: usize> PartialOrd for Cursor<B> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const B: usize> Ord for Cursor<B> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.block, self.offset).cmp(&(other.block, other.offset))
    }
}

impl<const B: usize> ops::Add<usize> for Cursor<B> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: usize) -> Self {
        Self::from_flat(self.flat() + rhs)
    }
}

impl<const B: usize> ops::AddAssign<usize> for Cursor<B> {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl<const B: usize> ops::Sub<usize> for Cursor<B> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: usize) -> Self {
        let flat = self.flat().checked_sub(rhs);
        debug_assert!(flat.is_some(), "cursor moved before the start of the map");
        Self::from_flat(flat.unwrap_or(0))
    }
}

impl<const B: usize> ops::SubAssign<usize> for Cursor<B> {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        *self = *self - rhs;
    }
}

impl<const B: usize> ops::Sub for Cursor<B> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        self.distance_from(rhs)
    }
}

/// One of the two ends of a deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    Front,
    Back,
}

/// Picks the end whose side of `pos` holds fewer elements. Ties go to the back.
#[inline]
pub fn closer_to<const B: usize>(head: Cursor<B>, pos: Cursor<B>, tail: Cursor<B>) -> End {
    if pos - head < tail - pos {
        End::Front
    } else {
        End::Back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_advance_crosses_blocks() {
        let mut c = Cursor::<3>::new(2, 1);
        c.advance(2);
        assert_eq!((c.block(), c.offset()), (3, 0));
        c.advance(7);
        assert_eq!((c.block(), c.offset()), (5, 1));
        c.advance(-5);
        assert_eq!((c.block(), c.offset()), (3, 2));
        c.retreat();
        c.retreat();
        c.retreat();
        assert_eq!((c.block(), c.offset()), (2, 2));
    }

    #[test]
    fn t_difference_and_order() {
        let a = Cursor::<4>::new(1, 3);
        let b = Cursor::<4>::new(4, 1);
        assert_eq!(b - a, 10);
        assert_eq!(a - b, -10);
        assert_eq!(a + 10, b);
        assert_eq!(b - 10usize, a);
        assert!(a < b);
        assert!(Cursor::<4>::new(1, 2) < a);
        assert_eq!(a - a, 0);
    }

    #[test]
    fn t_single_slot_blocks() {
        let mut c = Cursor::<1>::new(5, 0);
        c += 3;
        assert_eq!((c.block(), c.offset()), (8, 0));
        c -= 8;
        assert_eq!((c.block(), c.offset()), (0, 0));
    }

    #[test]
    fn t_closer_to() {
        let head = Cursor::<2>::new(1, 0);
        let tail = head + 6;
        assert_eq!(closer_to(head, head, tail), End::Front);
        assert_eq!(closer_to(head, head + 2, tail), End::Front);
        assert_eq!(closer_to(head, head + 3, tail), End::Back);
        assert_eq!(closer_to(head, tail, tail), End::Back);
        assert_eq!(closer_to(head, head, head), End::Back);
    }
}
