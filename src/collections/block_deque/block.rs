use core::mem::MaybeUninit;

/// Fixed-capacity storage for up to `B` elements.
///
/// A block never knows which of its elements are initialized; the owning deque
/// tracks that through its head and tail cursors.
pub(super) struct Block<T, const B: usize> {
    buf: [MaybeUninit<T>; B],
}

impl<T, const B: usize> Block<T, B> {
    #[inline]
    pub(super) fn new_boxed() -> Box<Self> {
        Box::new(Self {
            buf: [const { MaybeUninit::uninit() }; B],
        })
    }

    #[inline]
    pub(super) fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast()
    }

    #[inline]
    pub(super) fn as_uninit_slice(&self) -> &[MaybeUninit<T>; B] {
        &self.buf
    }

    #[inline]
    pub(super) fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>; B] {
        &mut self.buf
    }
}

/// A slot of the block map: either empty, or owning exactly one block.
///
/// An owned block may hold live elements (inside the deque's head..tail span)
/// or be a spare kept around for reuse until the map is shrunk.
pub(super) type Slot<T, const B: usize> = Option<Box<Block<T, B>>>;

/// # Safety
///
/// `slot` must own a block, which holds for every slot of a live span.
#[inline]
pub(super) unsafe fn live_block<T, const B: usize>(slot: &Slot<T, B>) -> &Block<T, B> {
    debug_assert!(slot.is_some());
    unsafe { slot.as_deref().unwrap_unchecked() }
}

/// # Safety
///
/// Same as [`live_block`].
#[inline]
pub(super) unsafe fn live_block_mut<T, const B: usize>(slot: &mut Slot<T, B>) -> &mut Block<T, B> {
    debug_assert!(slot.is_some());
    unsafe { slot.as_deref_mut().unwrap_unchecked() }
}

/// The ordered, growable sequence of block slots backing a deque.
pub(super) struct SlotMap<T, const B: usize> {
    slots: Vec<Slot<T, B>>,
}

impl<T, const B: usize> SlotMap<T, B> {
    /// A map of `len` slots with only the middle one holding a block.
    pub(super) fn with_middle_block(len: usize) -> Self {
        debug_assert!(len > 0);
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        slots[len / 2] = Some(Block::new_boxed());
        Self { slots }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(super) fn is_allocated(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    pub(super) fn allocated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Gives slot `index` a block unless it already owns one.
    /// Returns `true` if a fresh block was allocated.
    pub(super) fn allocate(&mut self, index: usize) -> bool {
        let slot = &mut self.slots[index];
        if slot.is_some() {
            return false;
        }
        *slot = Some(Block::new_boxed());
        crate::event!(trace, slot = index, "allocated block");
        true
    }

    /// Frees the block owned by slot `index`, if any.
    ///
    /// The block must not hold live elements; they would be leaked.
    pub(super) fn release(&mut self, index: usize) -> bool {
        self.slots[index].take().is_some()
    }

    /// Grows the map to `new_len` slots, keeping the existing ones centered.
    /// Returns how many slots were added in front.
    pub(super) fn grow_centered(&mut self, new_len: usize) -> usize {
        let old_len = self.slots.len();
        debug_assert!(new_len > old_len);
        let pad = (new_len - old_len) / 2;
        let mut slots = Vec::with_capacity(new_len);
        slots.resize_with(pad, || None);
        slots.append(&mut self.slots);
        slots.resize_with(new_len, || None);
        self.slots = slots;
        pad
    }

    /// Moves the content of every slot `shift` positions towards the back
    /// (towards the front if negative), wrapping around the map's ends.
    pub(super) fn rotate(&mut self, shift: isize) {
        let len = self.slots.len();
        let k = shift.unsigned_abs() % len;
        if shift >= 0 {
            self.slots.rotate_right(k);
        } else {
            self.slots.rotate_left(k);
        }
    }

    #[inline]
    pub(super) fn get(&self, index: usize) -> Option<&Block<T, B>> {
        self.slots.get(index)?.as_deref()
    }

    #[inline]
    pub(super) fn get_mut(&mut self, index: usize) -> Option<&mut Block<T, B>> {
        self.slots.get_mut(index)?.as_deref_mut()
    }

    /// Raw pointer to the first element of the block at `index`.
    ///
    /// # Safety
    ///
    /// Slot `index` must own a block.
    #[inline]
    pub(super) unsafe fn block_ptr(&mut self, index: usize) -> *mut T {
        debug_assert!(self.is_allocated(index), "slot {index} has no block");
        unsafe {
            self.slots
                .get_unchecked_mut(index)
                .as_deref_mut()
                .unwrap_unchecked()
                .as_mut_ptr()
        }
    }

    /// The slots in `range`, for iterators walking a live span.
    #[inline]
    pub(super) fn slots(&self, range: core::ops::RangeInclusive<usize>) -> &[Slot<T, B>] {
        &self.slots[range]
    }

    #[inline]
    pub(super) fn slots_mut(
        &mut self,
        range: core::ops::RangeInclusive<usize>,
    ) -> &mut [Slot<T, B>] {
        &mut self.slots[range]
    }
}
