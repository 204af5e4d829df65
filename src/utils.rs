#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Byte range of slot `slot` in a buffer of `element_size`-byte slots.
#[inline]
pub fn slot_range(slot: usize, element_size: usize) -> core::ops::Range<usize> {
    let start = slot * element_size;
    start..start + element_size
}
