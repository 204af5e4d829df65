//! Slot-shifting case analysis for the ring store.
//!
//! Every case moves only runs of slots that do not cross the physical end
//! of the buffer, so each step is a single contiguous `copy`.

pub mod insert;
pub mod remove;

pub trait CircularBuffer {
    /// Number of physical slots.
    fn array_len(&self) -> usize;

    fn head(&self) -> usize;
    fn tail(&self) -> usize;

    fn set_head(&mut self, head: usize);
    fn set_tail(&mut self, tail: usize);

    /// Copies `len` slots starting at slot `src` onto slot `dst`.
    /// Both runs must lie inside the buffer; they may overlap.
    fn copy(&mut self, dst: usize, src: usize, len: usize);

    fn wrap_add(&self, index: usize, addend: usize) -> usize;
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize;
}

/// Where an interior insert or remove lands.
pub struct Parameters {
    /// Logical position.
    pub index: usize,
    /// Physical slot of `index`.
    pub internal_index: usize,
}
