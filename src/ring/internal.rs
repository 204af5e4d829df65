use crate::logic::CircularBuffer;
use crate::utils::*;

use super::RingStore;

impl RingStore {
    #[inline]
    pub(crate) fn is_contiguous_from(&self, internal_index: usize) -> bool {
        self.tail > internal_index
    }

    #[inline]
    pub(crate) fn slot(&self, slot: usize) -> &[u8] {
        &self.buf[slot_range(slot, self.element_size)]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut [u8] {
        let range = slot_range(slot, self.element_size);
        &mut self.buf[range]
    }

    #[inline]
    pub(crate) fn buffer_write(&mut self, slot: usize, value: &[u8]) {
        self.slot_mut(slot).copy_from_slice(value);
    }

    /// Physical slot of logical position `index`.
    #[inline]
    pub(crate) fn internal_index(&self, index: usize) -> usize {
        wrap_add(self.head, index, self.capacity)
    }
}

impl CircularBuffer for RingStore {
    #[inline]
    fn array_len(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    fn set_head(&mut self, head: usize) {
        debug_assert!(head < self.capacity);
        self.head = head;
    }

    #[inline]
    fn set_tail(&mut self, tail: usize) {
        debug_assert!(tail < self.capacity);
        self.tail = tail;
    }

    /// Copies a contiguous block of `len` slots from `src` to `dst`.
    #[inline]
    fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(dst + len <= self.capacity,
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.capacity);
        debug_assert!(src + len <= self.capacity,
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.capacity);
        let size = self.element_size;
        self.buf.copy_within(src * size..(src + len) * size, dst * size);
    }

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity)
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.capacity)
    }
}
