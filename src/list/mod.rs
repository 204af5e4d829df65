//! Singly-linked chain of heap nodes kept in a slab arena.
//!
//! Links are slab keys rather than references, so a cursor holding a key
//! can never alias a released node.
//!
//! The chain has no random-access algorithm of its own: every operation
//! acts at a [`Position`], the `(current, previous)` key pair that a walk
//! of `position` steps from `first` would produce. Callers move the
//! position with `reset` and `step` first.

use alloc::boxed::Box;
use alloc::vec::Vec;

use slab::Slab;

use crate::error::{Error, Result, SetOutcome};

#[derive(Clone, Debug)]
pub(crate) struct Node {
    data: Box<[u8]>,
    next: Option<usize>,
}

/// Node keys at a logical position.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Position {
    /// Node at the position, `None` after the last element.
    pub current: Option<usize>,
    /// Node before `current`, `None` at position 0.
    pub previous: Option<usize>,
}

#[derive(Clone)]
pub(crate) struct ListStore {
    nodes: Slab<Node>,
    first: Option<usize>,
    last: Option<usize>,
    element_size: usize,
}

impl ListStore {
    pub(crate) fn new(element_size: usize) -> ListStore {
        ListStore {
            nodes: Slab::new(),
            first: None,
            last: None,
            element_size,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Position 0.
    #[inline]
    pub(crate) fn reset(&self, at: &mut Position) {
        at.current = self.first;
        at.previous = None;
    }

    /// Moves `at` one node forward. Has no effect after the last element.
    #[inline]
    pub(crate) fn step(&self, at: &mut Position) {
        if let Some(current) = at.current {
            at.previous = Some(current);
            at.current = self.nodes[current].next;
        }
    }

    /// Splices a copy of `value` in before `at.current`; `at.current`
    /// becomes the new node.
    pub(crate) fn insert(&mut self, at: &mut Position, value: &[u8]) -> Result<()> {
        debug_assert_eq!(value.len(), self.element_size);

        let mut data = Vec::new();
        data.try_reserve_exact(value.len()).map_err(|_| Error::Failure)?;
        data.extend_from_slice(value);

        let key = self.nodes.insert(Node {
            data: data.into_boxed_slice(),
            next: at.current,
        });

        match at.previous {
            Some(previous) => self.nodes[previous].next = Some(key),
            None => self.first = Some(key),
        }
        if at.current.is_none() {
            self.last = Some(key);
        }
        at.current = Some(key);
        Ok(())
    }

    /// Unlinks and releases `at.current`, copying its bytes into `removed`
    /// when given; `at.current` becomes the following node.
    pub(crate) fn remove(&mut self, at: &mut Position, removed: Option<&mut [u8]>) -> Result<()> {
        let current = at.current.ok_or(Error::PositionOutOfRange)?;
        let node = self.nodes.remove(current);

        match at.previous {
            Some(previous) => self.nodes[previous].next = node.next,
            None => self.first = node.next,
        }
        if self.last == Some(current) {
            self.last = at.previous;
        }
        at.current = node.next;

        if let Some(out) = removed {
            out.copy_from_slice(&node.data);
        }
        Ok(())
    }

    pub(crate) fn get(&self, at: &Position, out: &mut [u8]) -> Result<()> {
        let current = at.current.ok_or(Error::PositionOutOfRange)?;
        out.copy_from_slice(&self.nodes[current].data);
        Ok(())
    }

    pub(crate) fn set(&mut self, at: &Position, value: &[u8]) -> Result<SetOutcome> {
        let current = at.current.ok_or(Error::PositionOutOfRange)?;
        let data = &mut self.nodes[current].data;
        if **data == *value {
            return Ok(SetOutcome::Unchanged);
        }
        data.copy_from_slice(value);
        Ok(SetOutcome::Applied)
    }

    /// Releases every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.first = None;
        self.last = None;
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            next: self.first,
        }
    }
}

/// Front-to-back walk over node payloads.
#[derive(Clone)]
pub(crate) struct Iter<'a> {
    nodes: &'a Slab<Node>,
    next: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        let node = &self.nodes[self.next?];
        self.next = node.next;
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn contents(list: &ListStore) -> Vec<u8> {
        list.iter().map(|data| data[0]).collect()
    }

    fn seek(list: &ListStore, target: usize) -> Position {
        let mut at = Position::default();
        list.reset(&mut at);
        for _ in 0..target {
            list.step(&mut at);
        }
        at
    }

    #[test]
    fn splice_tracks_first_and_last() {
        let mut list = ListStore::new(1);
        let mut at = seek(&list, 0);
        list.insert(&mut at, &[2]).unwrap();
        assert_eq!(list.first, at.current);
        assert_eq!(list.last, at.current);

        let mut at = seek(&list, 0);
        list.insert(&mut at, &[1]).unwrap();
        assert_eq!(list.first, at.current);

        let mut at = seek(&list, 2);
        assert_eq!(at.current, None);
        list.insert(&mut at, &[3]).unwrap();
        assert_eq!(list.last, at.current);

        let mut at = seek(&list, 1);
        list.insert(&mut at, &[9]).unwrap();
        assert_eq!(contents(&list), vec![1, 9, 2, 3]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn unlink_tracks_first_and_last() {
        let mut list = ListStore::new(1);
        for v in 0..4 {
            let mut at = seek(&list, list.len());
            list.insert(&mut at, &[v]).unwrap();
        }

        let mut removed = [0];
        let mut at = seek(&list, 3);
        list.remove(&mut at, Some(&mut removed)).unwrap();
        assert_eq!(removed, [3]);
        assert_eq!(at.current, None);
        assert_eq!(list.last, at.previous);

        let mut at = seek(&list, 0);
        list.remove(&mut at, None).unwrap();
        assert_eq!(list.first, at.current);
        assert_eq!(contents(&list), vec![1, 2]);

        let mut at = seek(&list, 2);
        assert_eq!(list.remove(&mut at, None), Err(Error::PositionOutOfRange));

        let mut at = seek(&list, 0);
        list.remove(&mut at, None).unwrap();
        list.remove(&mut at, None).unwrap();
        assert_eq!(list.first, None);
        assert_eq!(list.last, None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn step_stops_after_last() {
        let mut list = ListStore::new(1);
        let mut at = seek(&list, 0);
        list.insert(&mut at, &[5]).unwrap();
        let mut at = seek(&list, 1);
        list.step(&mut at);
        assert_eq!(at.current, None);
        assert_eq!(at.previous, list.last);
    }

    #[test]
    fn set_and_get_in_place() {
        let mut list = ListStore::new(2);
        let mut at = seek(&list, 0);
        list.insert(&mut at, &[1, 2]).unwrap();
        assert_eq!(list.set(&at, &[1, 2]), Ok(SetOutcome::Unchanged));
        assert_eq!(list.set(&at, &[3, 4]), Ok(SetOutcome::Applied));
        let mut out = [0; 2];
        list.get(&at, &mut out).unwrap();
        assert_eq!(out, [3, 4]);

        let at = seek(&list, 1);
        assert_eq!(list.get(&at, &mut out), Err(Error::PositionOutOfRange));
    }
}
