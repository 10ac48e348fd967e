use std::ops;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RangeError {
    #[error("attempted to index from after maximum usize")]
    StartOverflow,
    #[error("attempted to index up to maximum usize")]
    EndOverflow,
    #[error("range starts at {start} but ends at {end}")]
    StartAfterEnd { start: usize, end: usize },
    #[error("range end index {end} out of range for length {len}")]
    EndOutOfBounds { end: usize, len: usize },
}

/// Resolves `range` against `..len` into a concrete half-open range.
pub fn range<R>(range: R, bounds: ops::RangeTo<usize>) -> Result<ops::Range<usize>, RangeError>
where
    R: ops::RangeBounds<usize>,
{
    let len = bounds.end;

    let start = match range.start_bound() {
        ops::Bound::Included(&start) => start,
        ops::Bound::Excluded(start) => start.checked_add(1).ok_or(RangeError::StartOverflow)?,
        ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        ops::Bound::Included(end) => end.checked_add(1).ok_or(RangeError::EndOverflow)?,
        ops::Bound::Excluded(&end) => end,
        ops::Bound::Unbounded => len,
    };

    if start > end {
        return Err(RangeError::StartAfterEnd { start, end });
    }
    if end > len {
        return Err(RangeError::EndOutOfBounds { end, len });
    }

    Ok(ops::Range { start, end })
}
