//! Circular buffer with independent read/write cursors.
//!
//! The write cursor points to the next slot eligible for a write attempt,
//! the read cursor to the next slot eligible for a read attempt; both
//! advance modulo the capacity.

use crate::error::{RingError, RingResult};

/// Fixed-capacity ring storage with configurable overwrite and
/// chronological-read policies.
///
/// Reads are destructive: [`CircularBuffer::pop`] clears the slot it reads
/// from. An empty slot yields `None` rather than an error, so "no data" is
/// never conflated with a rejected operation.
///
/// # Example
///
/// ```
/// use opencontrol_ringbuf::CircularBuffer;
///
/// // Length 3, overwrite enabled, chronological reads enabled.
/// let mut buf = CircularBuffer::new(3, true, true)?;
/// buf.push(1)?;
/// buf.push(2)?;
/// buf.push(3)?;
/// // Buffer is full; this write evicts the oldest unread entry and the
/// // read cursor jumps to the newest data.
/// buf.push(4)?;
/// assert_eq!(buf.pop(), Some(4));
/// # Ok::<(), opencontrol_ringbuf::RingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    slots: Box<[Option<T>]>,
    reader: usize,
    writer: usize,
    overwrite: bool,
    read_chronological: bool,
}

impl<T> CircularBuffer<T> {
    /// Create a buffer with `length` slots and the given policies.
    ///
    /// `overwrite` controls whether a write to an occupied slot evicts the
    /// unread entry; `read_chronological` controls whether such an eviction
    /// relocates the read cursor to the newest entry.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::ZeroCapacity`] if `length` is 0.
    pub fn new(length: usize, overwrite: bool, read_chronological: bool) -> RingResult<Self> {
        if length == 0 {
            return Err(RingError::ZeroCapacity);
        }
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(length).collect(),
            reader: 0,
            writer: 0,
            overwrite,
            read_chronological,
        })
    }

    /// Store `data` at the write cursor.
    ///
    /// If the slot is empty the value is stored and the write cursor
    /// advances. If the slot is occupied and overwrite is enabled, the
    /// unread entry is evicted; with chronological reads also enabled, the
    /// read cursor relocates to the slot just written so the next
    /// [`CircularBuffer::pop`] returns the newest entry.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Full`] if the slot is occupied and overwrite is
    /// disabled. Neither cursor moves in that case.
    pub fn push(&mut self, data: T) -> RingResult<()> {
        if self.slots[self.writer].is_some() && !self.overwrite {
            return Err(RingError::Full);
        }
        let written = self.writer;
        let evicted = self.slots[written].replace(data).is_some();
        self.writer = self.advance(written);
        if evicted && self.read_chronological {
            self.reader = written;
        }
        Ok(())
    }

    /// Take the value at the read cursor, clearing the slot.
    ///
    /// Returns `None` when the slot is empty; the read cursor only advances
    /// when a value was taken.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.slots[self.reader].take()?;
        self.reader = self.advance(self.reader);
        Some(value)
    }

    /// Whether the read cursor currently points at stored data.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.slots[self.reader].is_some()
    }

    /// Whether a write attempt would currently be accepted.
    #[must_use]
    pub fn is_writeable(&self) -> bool {
        self.overwrite || self.slots[self.writer].is_none()
    }

    /// Discard the backlog, keeping only the most recently written entry.
    ///
    /// The read cursor relocates to the slot most recently written and
    /// every other slot is cleared. On a buffer that has never been written
    /// this leaves the read cursor on an empty slot.
    pub fn jump_to_latest(&mut self) {
        let latest = self.retreat(self.writer);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if index != latest {
                *slot = None;
            }
        }
        self.reader = latest;
    }

    /// Clear all slots and return both cursors to slot 0.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.reader = 0;
        self.writer = 0;
    }

    /// Flip the overwrite policy. Stored data and cursors are untouched.
    pub fn toggle_overwrite(&mut self) {
        self.overwrite = !self.overwrite;
    }

    /// Flip the chronological-read policy. Stored data and cursors are
    /// untouched.
    pub fn toggle_read_chronological(&mut self) {
        self.read_chronological = !self.read_chronological;
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether no slot holds data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Whether every slot holds data.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Current overwrite policy.
    #[must_use]
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Current chronological-read policy.
    #[must_use]
    pub fn read_chronological(&self) -> bool {
        self.read_chronological
    }

    fn advance(&self, cursor: usize) -> usize {
        (cursor + 1) % self.slots.len()
    }

    fn retreat(&self, cursor: usize) -> usize {
        (cursor + self.slots.len() - 1) % self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            CircularBuffer::<u32>::new(0, false, false).unwrap_err(),
            RingError::ZeroCapacity
        );
    }

    #[test]
    fn test_round_trip_in_order() {
        let mut buf = CircularBuffer::new(4, false, false).unwrap();
        for value in 1..=4 {
            buf.push(value).unwrap();
        }
        for expected in 1..=4 {
            assert_eq!(buf.pop(), Some(expected));
        }
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_full_without_overwrite_rejects_write() {
        let mut buf = CircularBuffer::new(2, false, false).unwrap();
        buf.push(1).unwrap();
        buf.push(2).unwrap();
        assert_eq!(buf.push(3), Err(RingError::Full));
        // The rejected write moved nothing; the backlog reads out intact.
        assert_eq!(buf.pop(), Some(1));
        assert_eq!(buf.pop(), Some(2));
    }

    #[test]
    fn test_overwrite_chronological_reads_newest() {
        let mut buf = CircularBuffer::new(3, true, true).unwrap();
        for value in [1, 2, 3] {
            buf.push(value).unwrap();
        }
        buf.push(4).unwrap();
        assert_eq!(buf.pop(), Some(4));
    }

    #[test]
    fn test_overwrite_without_chronological_keeps_reader() {
        let mut buf = CircularBuffer::new(3, true, false).unwrap();
        for value in [1, 2, 3] {
            buf.push(value).unwrap();
        }
        buf.push(4).unwrap();
        // Reader stayed on slot 0, which now holds the overwriting value.
        assert_eq!(buf.pop(), Some(4));
        assert_eq!(buf.pop(), Some(2));
        assert_eq!(buf.pop(), Some(3));
    }

    #[test]
    fn test_pop_empty_is_no_data_not_failure() {
        let mut buf = CircularBuffer::<u32>::new(3, false, false).unwrap();
        assert_eq!(buf.pop(), None);
        assert!(!buf.is_readable());
        // An empty read did not advance the cursor.
        buf.push(7).unwrap();
        assert_eq!(buf.pop(), Some(7));
    }

    #[test]
    fn test_jump_to_latest_discards_backlog() {
        let mut buf = CircularBuffer::new(4, false, false).unwrap();
        for value in [10, 20, 30] {
            buf.push(value).unwrap();
        }
        buf.jump_to_latest();
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.pop(), Some(30));
        assert_eq!(buf.pop(), None);
    }

    #[test]
    fn test_jump_to_latest_on_unwritten_buffer() {
        let mut buf = CircularBuffer::<u32>::new(3, false, false).unwrap();
        buf.jump_to_latest();
        assert_eq!(buf.pop(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_reset_clears_slots_and_cursors() {
        let mut buf = CircularBuffer::new(3, false, false).unwrap();
        buf.push(1).unwrap();
        buf.push(2).unwrap();
        assert_eq!(buf.pop(), Some(1));
        buf.reset();
        assert!(buf.is_empty());
        buf.push(5).unwrap();
        assert_eq!(buf.pop(), Some(5));
    }

    #[test]
    fn test_toggle_policies() {
        let mut buf = CircularBuffer::new(1, false, false).unwrap();
        buf.push(1).unwrap();
        assert_eq!(buf.push(2), Err(RingError::Full));
        assert!(!buf.is_writeable());

        buf.toggle_overwrite();
        assert!(buf.is_writeable());
        buf.push(2).unwrap();
        assert_eq!(buf.pop(), Some(2));

        assert!(!buf.read_chronological());
        buf.toggle_read_chronological();
        assert!(buf.read_chronological());
    }

    #[test]
    fn test_occupancy_accessors() {
        let mut buf = CircularBuffer::new(2, false, false).unwrap();
        assert!(buf.is_empty());
        assert!(!buf.is_full());
        assert_eq!(buf.capacity(), 2);

        buf.push(1).unwrap();
        assert_eq!(buf.len(), 1);
        buf.push(2).unwrap();
        assert!(buf.is_full());
        assert!(buf.is_readable());
    }

    #[test]
    fn test_wrap_around_reuse() {
        let mut buf = CircularBuffer::new(2, false, false).unwrap();
        for round in 0..5 {
            buf.push(round * 2).unwrap();
            buf.push(round * 2 + 1).unwrap();
            assert_eq!(buf.pop(), Some(round * 2));
            assert_eq!(buf.pop(), Some(round * 2 + 1));
        }
    }
}
