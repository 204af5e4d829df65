//! The container's single position-tracking cursor.

use crate::container::{Container, Store};
use crate::error::{Error, Result, SetOutcome};
use crate::list::{ListStore, Position};

/// Cursor state embedded in its container.
///
/// For a linked list `at` always equals what a walk of `position` steps
/// from the first node would produce. A ring buffer only uses `position`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CursorState {
    pub position: usize,
    pub at: Position,
}

impl CursorState {
    #[inline]
    pub(crate) fn reset_list(&mut self, list: &ListStore) {
        self.position = 0;
        list.reset(&mut self.at);
    }

    /// Walks to `target`, replaying from the first node when `target` lies
    /// behind the current position.
    pub(crate) fn seek_list(&mut self, list: &ListStore, target: usize) {
        debug_assert!(target <= list.len());
        if target < self.position {
            self.reset_list(list);
        }
        while self.position < target {
            list.step(&mut self.at);
            self.position += 1;
        }
    }

    /// Pulls the position back to after-last if elements were removed
    /// from under it.
    #[inline]
    pub(crate) fn clamp(&mut self, len: usize) {
        if self.position > len {
            self.position = len;
        }
    }
}

/// Position handle for sequential traversal and in-place mutation,
/// borrowed from a [`Container`] with [`Container::cursor`].
///
/// The position ranges over `0..=len()`; `len()` is the after-last
/// position, where only [`add`], [`seek`] and [`reset`] succeed.
///
/// Moving forward is `O(1)` on both strategies. On a linked list, moving
/// backward replays the walk from the first node.
///
/// [`add`]: #method.add
/// [`seek`]: #method.seek
/// [`reset`]: #method.reset
pub struct Cursor<'a> {
    container: &'a mut Container,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub(crate) fn new(container: &'a mut Container) -> Cursor<'a> {
        Cursor { container }
    }

    /// Current position, in `0..=len()`.
    #[inline]
    pub fn position(&self) -> usize {
        self.container.cursor.position
    }

    /// `true` unless the cursor is after the last element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.position() < self.container.len()
    }

    #[inline]
    fn check_not_after_last(&self) -> Result<()> {
        if self.has_next() {
            Ok(())
        } else {
            Err(Error::PositionOutOfRange)
        }
    }

    /// Moves to position 0.
    pub fn reset(&mut self) {
        let Container { store, cursor, .. } = &mut *self.container;
        match store {
            Store::Ring(_) => cursor.position = 0,
            Store::List(list) => cursor.reset_list(list),
        }
    }

    /// Moves to `target`, which may be `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::{Container, Error};
    ///
    /// let mut container = Container::linked_list(1);
    /// for v in 0..4u8 {
    ///     container.insert_last(&[v]).unwrap();
    /// }
    ///
    /// let mut cursor = container.cursor();
    /// cursor.seek(2).unwrap();
    /// let mut out = [0];
    /// cursor.get(&mut out).unwrap();
    /// assert_eq!(out, [2]);
    ///
    /// assert_eq!(cursor.seek(5), Err(Error::PositionOutOfRange));
    /// ```
    pub fn seek(&mut self, target: usize) -> Result<()> {
        if target > self.container.len() {
            return Err(Error::PositionOutOfRange);
        }
        let Container { store, cursor, .. } = &mut *self.container;
        match store {
            Store::Ring(_) => cursor.position = target,
            Store::List(list) => cursor.seek_list(list, target),
        }
        Ok(())
    }

    /// Advances one position.
    pub fn move_next(&mut self) -> Result<()> {
        self.check_not_after_last()?;
        let Container { store, cursor, .. } = &mut *self.container;
        if let Store::List(list) = store {
            list.step(&mut cursor.at);
        }
        cursor.position += 1;
        Ok(())
    }

    /// Copies the element under the cursor into `out`.
    pub fn get(&self, out: &mut [u8]) -> Result<()> {
        self.container.check_element(out)?;
        self.check_not_after_last()?;
        let Container { store, cursor, .. } = &*self.container;
        match store {
            Store::Ring(ring) => {
                ring.get(cursor.position, out);
                Ok(())
            }
            Store::List(list) => list.get(&cursor.at, out),
        }
    }

    /// Overwrites the element under the cursor.
    pub fn set(&mut self, value: &[u8]) -> Result<SetOutcome> {
        self.container.check_element(value)?;
        self.check_not_after_last()?;
        let Container { store, cursor, .. } = &mut *self.container;
        let result = match store {
            Store::Ring(ring) => Ok(ring.set(cursor.position, value)),
            Store::List(list) => list.set(&cursor.at, value),
        };
        self.container.trace("cursor set");
        result
    }

    /// Inserts a copy of `value` at the cursor's position.
    ///
    /// The position does not move, so the cursor now sees the new element.
    /// At the after-last position this appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::Container;
    ///
    /// let mut container = Container::array_backed(4, 1);
    /// container.insert_last(&[1]).unwrap();
    ///
    /// let mut cursor = container.cursor();
    /// cursor.add(&[0]).unwrap();
    /// cursor.seek(2).unwrap();
    /// cursor.add(&[2]).unwrap();
    /// assert_eq!(cursor.position(), 2);
    ///
    /// let mut out = [0];
    /// cursor.get(&mut out).unwrap();
    /// assert_eq!(out, [2]);
    /// assert_eq!(container.len(), 3);
    /// ```
    pub fn add(&mut self, value: &[u8]) -> Result<()> {
        self.container.check_element(value)?;
        let Container { store, cursor, .. } = &mut *self.container;
        let result = match store {
            Store::Ring(ring) => ring.insert(cursor.position, value),
            Store::List(list) => list.insert(&mut cursor.at, value),
        };
        self.container.trace("cursor add");
        result
    }

    fn remove_at_cursor(&mut self, removed: Option<&mut [u8]>) -> Result<()> {
        self.check_not_after_last()?;
        let Container { store, cursor, .. } = &mut *self.container;
        let result = match store {
            Store::Ring(ring) => {
                ring.remove(cursor.position, removed);
                Ok(())
            }
            Store::List(list) => list.remove(&mut cursor.at, removed),
        };
        self.container.trace("cursor remove");
        result
    }

    /// Removes the element under the cursor, copying it into `out`.
    ///
    /// The position does not move, so the cursor now sees the element that
    /// followed, or is after the last element.
    pub fn remove(&mut self, out: &mut [u8]) -> Result<()> {
        self.container.check_element(out)?;
        self.remove_at_cursor(Some(out))
    }

    /// Removes the element under the cursor without copying it anywhere.
    pub fn discard(&mut self) -> Result<()> {
        self.remove_at_cursor(None)
    }
}
