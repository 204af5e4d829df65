//! Growable ring of fixed-size byte slots.

use alloc::vec::Vec;

use crate::error::{Error, Result, SetOutcome};
use crate::logic::{insert, remove, CircularBuffer, Parameters};

mod internal;

/// Contiguous ring of `capacity` slots, each `element_size` bytes.
///
/// Logical position `p` lives in physical slot `(head + p) % capacity`.
/// `head == tail` means either empty or full; `len` tells them apart.
///
/// Positions handed to `insert`, `remove`, `get` and `set` are assumed to
/// be validated by the caller.
#[derive(Clone)]
pub(crate) struct RingStore {
    buf: Vec<u8>,
    element_size: usize,
    capacity: usize,
    head: usize,
    tail: usize,
    len: usize,
}

impl RingStore {
    /// # Panics
    ///
    /// Panics if `capacity * element_size` overflows `usize`.
    pub(crate) fn with_capacity(capacity: usize, element_size: usize) -> RingStore {
        let bytes = capacity
            .checked_mul(element_size)
            .expect("capacity overflow");
        RingStore {
            buf: alloc::vec![0; bytes],
            element_size,
            capacity,
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub(crate) fn try_with_capacity(capacity: usize, element_size: usize) -> Result<RingStore> {
        let bytes = capacity.checked_mul(element_size).ok_or(Error::Failure)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes).map_err(|_| Error::Failure)?;
        buf.resize(bytes, 0);
        Ok(RingStore {
            buf,
            element_size,
            capacity,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Doubles the slot count (minimum 1).
    ///
    /// A wrapped sequence has its low section `[0, tail)` relocated to
    /// `[old_capacity, old_capacity + tail)` so that it continues straight
    /// on from the high section. Nothing changes if memory is unavailable.
    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.capacity;
        let new_capacity = if old_capacity > 0 {
            old_capacity.checked_mul(2).ok_or(Error::Failure)?
        } else {
            1
        };
        let new_bytes = new_capacity
            .checked_mul(self.element_size)
            .ok_or(Error::Failure)?;
        self.buf
            .try_reserve_exact(new_bytes - self.buf.len())
            .map_err(|_| Error::Failure)?;
        self.buf.resize(new_bytes, 0);
        self.capacity = new_capacity;

        // Called only when full, so head == tail here.
        //
        //          T H                     T H
        //      [o o o o]    ->    [. . o o o o o o]
        //                                        T
        //
        //      [o o o o . . . .]
        //       M M     M M
        if self.len > 0 && self.head >= self.tail {
            let tail = self.tail;
            self.copy(old_capacity, 0, tail);
            self.tail = old_capacity + tail;
        }
        Ok(())
    }

    /// Inserts `value` so that it ends up at logical position `index`.
    pub(crate) fn insert(&mut self, index: usize, value: &[u8]) -> Result<()> {
        debug_assert!(index <= self.len);
        debug_assert_eq!(value.len(), self.element_size);

        if self.is_full() {
            self.grow()?;
        }

        let slot = if index == self.len {
            // push_back
            let tail = self.tail;
            self.tail = self.wrap_add(tail, 1);
            tail
        } else if index == 0 {
            // push_front
            self.head = self.wrap_sub(self.head, 1);
            self.head
        } else {
            let internal_index = self.internal_index(index);
            let params = Parameters { index, internal_index };
            if self.is_contiguous_from(internal_index) {
                insert::Contiguous::insert(self, params);
            } else {
                insert::Discontiguous::insert(self, params);
            }
            internal_index
        };

        self.buffer_write(slot, value);
        self.len += 1;
        Ok(())
    }

    /// Removes logical position `index`, copying its bytes into `removed`
    /// when given.
    pub(crate) fn remove(&mut self, index: usize, removed: Option<&mut [u8]>) {
        debug_assert!(index < self.len);

        let internal_index = self.internal_index(index);
        if let Some(out) = removed {
            out.copy_from_slice(self.slot(internal_index));
        }

        if index == self.len - 1 {
            // pop_back
            self.tail = self.wrap_sub(self.tail, 1);
        } else if index == 0 {
            // pop_front
            self.head = self.wrap_add(self.head, 1);
        } else {
            let params = Parameters { index, internal_index };
            if self.is_contiguous_from(internal_index) {
                remove::Contiguous::remove(self, params);
            } else {
                remove::Discontiguous::remove(self, params);
            }
        }

        self.len -= 1;
    }

    #[inline]
    pub(crate) fn get(&self, index: usize, out: &mut [u8]) {
        debug_assert!(index < self.len);
        out.copy_from_slice(self.element(index));
    }

    pub(crate) fn set(&mut self, index: usize, value: &[u8]) -> SetOutcome {
        debug_assert!(index < self.len);
        let slot = self.internal_index(index);
        if self.slot(slot) == value {
            return SetOutcome::Unchanged;
        }
        self.buffer_write(slot, value);
        SetOutcome::Applied
    }

    /// Bytes at logical position `index`.
    #[inline]
    pub(crate) fn element(&self, index: usize) -> &[u8] {
        self.slot(self.internal_index(index))
    }

    /// Drops every element, keeping the allocated slots.
    pub(crate) fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}
