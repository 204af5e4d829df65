//! The container façade: validation, strategy dispatch and cursor upkeep.

use crate::cursor::{Cursor, CursorState};
use crate::error::{Error, Result, SetOutcome};
use crate::list::{self, ListStore};
use crate::ring::RingStore;

#[cfg(feature = "std")]
use std::io;

#[cfg(feature = "std")]
use crate::trace::Trace;

mod trait_impls;

/// Storage strategy of a [`Container`], fixed at construction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Growable ring buffer over contiguous memory.
    ArrayBacked,
    /// Singly-linked chain of nodes.
    LinkedList,
}

#[derive(Clone)]
pub(crate) enum Store {
    Ring(RingStore),
    List(ListStore),
}

impl Store {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Store::Ring(ring) => ring.len(),
            Store::List(list) => list.len(),
        }
    }

    pub(crate) fn elements(&self) -> Elements<'_> {
        match self {
            Store::Ring(ring) => Elements::Ring { ring, index: 0 },
            Store::List(list) => Elements::List(list.iter()),
        }
    }
}

/// Front-to-back walk over element bytes.
#[derive(Clone)]
pub(crate) enum Elements<'a> {
    Ring { ring: &'a RingStore, index: usize },
    List(list::Iter<'a>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        match self {
            Elements::Ring { ring, index } => {
                if *index == ring.len() {
                    return None;
                }
                let element = ring.element(*index);
                *index += 1;
                Some(element)
            }
            Elements::List(iter) => iter.next(),
        }
    }
}

/// An ordered, indexable sequence of fixed-size elements.
///
/// Elements are opaque blocks of exactly [`element_size`] bytes. They are
/// copied in on insertion and copied out on retrieval; the container never
/// hands out a reference into its storage.
///
/// The storage strategy is chosen at construction: [`array_backed`] for a
/// growable ring buffer with `O(1)` indexing and amortized `O(1)` inserts at
/// both ends, or [`linked_list`] for a singly-linked chain where every
/// positional operation walks the container's cursor to the target.
///
/// Each container owns exactly one cursor, lent out through [`cursor`].
/// Because the lend is an exclusive borrow, the cursor and the positional
/// interface can never be used at the same time, and the positional
/// interface keeps the cursor's state valid between lends.
///
/// [`element_size`]: #method.element_size
/// [`array_backed`]: #method.array_backed
/// [`linked_list`]: #method.linked_list
/// [`cursor`]: #method.cursor
pub struct Container {
    pub(crate) store: Store,
    pub(crate) element_size: usize,
    pub(crate) cursor: CursorState,
    #[cfg(feature = "std")]
    pub(crate) trace: Option<Trace>,
}

impl Container {
    fn with_store(store: Store, element_size: usize) -> Container {
        Container {
            store,
            element_size,
            cursor: CursorState::default(),
            #[cfg(feature = "std")]
            trace: None,
        }
    }

    /// Creates an empty ring-buffer container with room for
    /// `initial_capacity` elements of `element_size` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `initial_capacity * element_size` overflows `usize`, or if
    /// the buffer cannot be allocated. See
    /// [`try_array_backed`](#method.try_array_backed).
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::{Container, Kind};
    ///
    /// let container = Container::array_backed(10, 4);
    /// assert_eq!(container.kind(), Kind::ArrayBacked);
    /// assert_eq!(container.capacity(), Some(10));
    /// ```
    pub fn array_backed(initial_capacity: usize, element_size: usize) -> Container {
        let ring = RingStore::with_capacity(initial_capacity, element_size);
        Container::with_store(Store::Ring(ring), element_size)
    }

    /// Like [`array_backed`](#method.array_backed), but reports
    /// `Error::Failure` instead of panicking when the buffer cannot be
    /// allocated.
    pub fn try_array_backed(initial_capacity: usize, element_size: usize) -> Result<Container> {
        let ring = RingStore::try_with_capacity(initial_capacity, element_size)?;
        Ok(Container::with_store(Store::Ring(ring), element_size))
    }

    /// Creates an empty linked-list container for elements of
    /// `element_size` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::{Container, Kind};
    ///
    /// let container = Container::linked_list(8);
    /// assert_eq!(container.kind(), Kind::LinkedList);
    /// assert_eq!(container.capacity(), None);
    /// ```
    pub fn linked_list(element_size: usize) -> Container {
        Container::with_store(Store::List(ListStore::new(element_size)), element_size)
    }

    /// Storage strategy chosen at construction.
    #[inline]
    pub fn kind(&self) -> Kind {
        match self.store {
            Store::Ring(_) => Kind::ArrayBacked,
            Store::List(_) => Kind::LinkedList,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slots currently allocated by the ring buffer; `None` for a linked
    /// list, which has no fixed capacity.
    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        match &self.store {
            Store::Ring(ring) => Some(ring.capacity()),
            Store::List(_) => None,
        }
    }

    /// Size in bytes of every element.
    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Position of the container's cursor, in `0..=len()`.
    #[inline]
    pub fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Lends out the container's cursor.
    ///
    /// The cursor keeps its position between lends.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::Container;
    ///
    /// let mut list = Container::linked_list(1);
    /// for v in 1..=3u8 {
    ///     list.insert_last(&[v]).unwrap();
    /// }
    ///
    /// let mut seen = Vec::new();
    /// let mut cursor = list.cursor();
    /// cursor.reset();
    /// while cursor.has_next() {
    ///     let mut out = [0];
    ///     cursor.get(&mut out).unwrap();
    ///     seen.push(out[0]);
    ///     cursor.move_next().unwrap();
    /// }
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::new(self)
    }

    #[inline]
    pub(crate) fn check_element(&self, buf: &[u8]) -> Result<()> {
        if buf.len() == self.element_size {
            Ok(())
        } else {
            Err(Error::Null)
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::PositionOutOfRange)
        }
    }

    /// Inserts a copy of `value` at `index`, shifting later elements back.
    ///
    /// `index` may equal `len()`, which appends. A full ring buffer
    /// doubles its capacity first; if that allocation fails the call
    /// reports `Error::Failure` and nothing changes.
    ///
    /// On a linked list only the element's payload allocation can report
    /// `Error::Failure`. The node arena grows infallibly and aborts if
    /// memory is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::{Container, Error};
    ///
    /// let mut container = Container::array_backed(2, 1);
    /// container.insert(0, &[10]).unwrap();
    /// container.insert(0, &[30]).unwrap();
    /// container.insert(1, &[20]).unwrap();
    /// assert_eq!(container.capacity(), Some(4));
    ///
    /// assert_eq!(container.insert(9, &[0]), Err(Error::PositionOutOfRange));
    /// assert_eq!(container.insert(0, &[1, 2]), Err(Error::Null));
    /// ```
    pub fn insert(&mut self, index: usize, value: &[u8]) -> Result<()> {
        self.check_element(value)?;
        if index > self.len() {
            return Err(Error::PositionOutOfRange);
        }
        let result = match &mut self.store {
            Store::Ring(ring) => ring.insert(index, value),
            Store::List(list) => {
                self.cursor.seek_list(list, index);
                list.insert(&mut self.cursor.at, value)
            }
        };
        self.trace("insert");
        result
    }

    /// Appends a copy of `value`.
    #[inline]
    pub fn insert_last(&mut self, value: &[u8]) -> Result<()> {
        let len = self.len();
        self.insert(len, value)
    }

    /// Copies the element at `index` into `out`.
    ///
    /// On a linked list this moves the cursor to `index`.
    pub fn get(&mut self, index: usize, out: &mut [u8]) -> Result<()> {
        self.check_element(out)?;
        self.check_index(index)?;
        match &self.store {
            Store::Ring(ring) => {
                ring.get(index, out);
                Ok(())
            }
            Store::List(list) => {
                self.cursor.seek_list(list, index);
                list.get(&self.cursor.at, out)
            }
        }
    }

    /// Copies the last element into `out`.
    pub fn get_last(&mut self, out: &mut [u8]) -> Result<()> {
        self.check_element(out)?;
        let index = self.len().checked_sub(1).ok_or(Error::PositionOutOfRange)?;
        self.get(index, out)
    }

    /// Overwrites the element at `index` with `value`.
    ///
    /// Returns `SetOutcome::Unchanged` without writing when the stored
    /// bytes already equal `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::{Container, SetOutcome};
    ///
    /// let mut container = Container::linked_list(2);
    /// container.insert_last(&[1, 2]).unwrap();
    /// assert_eq!(container.set(0, &[1, 2]), Ok(SetOutcome::Unchanged));
    /// assert_eq!(container.set(0, &[3, 4]), Ok(SetOutcome::Applied));
    /// ```
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<SetOutcome> {
        self.check_element(value)?;
        self.check_index(index)?;
        let result = match &mut self.store {
            Store::Ring(ring) => Ok(ring.set(index, value)),
            Store::List(list) => {
                self.cursor.seek_list(list, index);
                list.set(&self.cursor.at, value)
            }
        };
        self.trace("set");
        result
    }

    fn remove_at(&mut self, index: usize, removed: Option<&mut [u8]>) -> Result<()> {
        self.check_index(index)?;
        let result = match &mut self.store {
            Store::Ring(ring) => {
                ring.remove(index, removed);
                self.cursor.clamp(ring.len());
                Ok(())
            }
            Store::List(list) => {
                self.cursor.seek_list(list, index);
                list.remove(&mut self.cursor.at, removed)
            }
        };
        self.trace("remove");
        result
    }

    /// Removes the element at `index`, copying it into `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::Container;
    ///
    /// let mut container = Container::array_backed(4, 4);
    /// for v in [10u32, 20, 30].iter() {
    ///     container.insert(0, &v.to_le_bytes()).unwrap();
    /// }
    ///
    /// let mut out = [0; 4];
    /// container.remove(1, &mut out).unwrap();
    /// assert_eq!(u32::from_le_bytes(out), 20);
    /// assert_eq!(container.len(), 2);
    /// ```
    pub fn remove(&mut self, index: usize, out: &mut [u8]) -> Result<()> {
        self.check_element(out)?;
        self.remove_at(index, Some(out))
    }

    /// Removes the element at `index` without copying it anywhere.
    pub fn discard(&mut self, index: usize) -> Result<()> {
        self.remove_at(index, None)
    }

    /// Removes the last element, copying it into `out`.
    pub fn remove_last(&mut self, out: &mut [u8]) -> Result<()> {
        self.check_element(out)?;
        let index = self.len().checked_sub(1).ok_or(Error::PositionOutOfRange)?;
        self.remove_at(index, Some(out))
    }

    /// Removes the last element without copying it anywhere.
    pub fn discard_last(&mut self) -> Result<()> {
        let index = self.len().checked_sub(1).ok_or(Error::PositionOutOfRange)?;
        self.remove_at(index, None)
    }

    /// Removes every element and puts the cursor back at position 0.
    ///
    /// A ring buffer keeps its allocated capacity.
    pub fn clear(&mut self) {
        match &mut self.store {
            Store::Ring(ring) => ring.clear(),
            Store::List(list) => list.clear(),
        }
        self.cursor = CursorState::default();
        self.trace("clear");
    }

    /// Stack push: inserts at the front.
    ///
    /// Stack and queue operations share the front slot, so interleaving
    /// them on one container mixes the two disciplines.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::Container;
    ///
    /// let mut stack = Container::linked_list(1);
    /// stack.push(&[1]).unwrap();
    /// stack.push(&[2]).unwrap();
    ///
    /// let mut top = [0];
    /// stack.peek(&mut top).unwrap();
    /// assert_eq!(top, [2]);
    /// stack.pop(&mut top).unwrap();
    /// stack.pop(&mut top).unwrap();
    /// assert_eq!(top, [1]);
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    pub fn push(&mut self, value: &[u8]) -> Result<()> {
        self.insert(0, value)
    }

    /// Stack pop: removes the front element into `out`.
    #[inline]
    pub fn pop(&mut self, out: &mut [u8]) -> Result<()> {
        self.remove(0, out)
    }

    /// Stack peek: copies the front element into `out`.
    #[inline]
    pub fn peek(&mut self, out: &mut [u8]) -> Result<()> {
        self.get(0, out)
    }

    /// Queue enqueue: appends at the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use linearseq::Container;
    ///
    /// let mut queue = Container::array_backed(2, 1);
    /// for v in 1..=3u8 {
    ///     queue.enqueue(&[v]).unwrap();
    /// }
    ///
    /// let mut out = [0];
    /// queue.front(&mut out).unwrap();
    /// assert_eq!(out, [1]);
    /// queue.dequeue(&mut out).unwrap();
    /// queue.dequeue(&mut out).unwrap();
    /// assert_eq!(out, [2]);
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn enqueue(&mut self, value: &[u8]) -> Result<()> {
        self.insert_last(value)
    }

    /// Queue dequeue: removes the front element into `out`.
    #[inline]
    pub fn dequeue(&mut self, out: &mut [u8]) -> Result<()> {
        self.remove(0, out)
    }

    /// Queue peek: copies the front element into `out`.
    #[inline]
    pub fn front(&mut self, out: &mut [u8]) -> Result<()> {
        self.get(0, out)
    }

    /// Attaches a trace sink.
    ///
    /// Every later mutating operation writes a structural dump to `sink`,
    /// rendering each element with `fmt`. Write errors are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Write;
    /// use linearseq::Container;
    ///
    /// let mut container = Container::array_backed(2, 1);
    /// container.attach_trace(std::io::sink(), |out: &mut dyn Write, v: &[u8]| {
    ///     write!(out, "{} ", v[0])
    /// });
    /// container.insert_last(&[7]).unwrap();
    /// assert!(container.detach_trace());
    /// ```
    #[cfg(feature = "std")]
    pub fn attach_trace<W, F>(&mut self, sink: W, fmt: F)
    where
        W: io::Write + 'static,
        F: Fn(&mut dyn io::Write, &[u8]) -> io::Result<()> + 'static,
    {
        self.trace = Some(Trace::new(sink, fmt));
    }

    /// Detaches the trace sink. Returns `false` if none was attached.
    #[cfg(feature = "std")]
    pub fn detach_trace(&mut self) -> bool {
        self.trace.take().is_some()
    }

    #[cfg(feature = "std")]
    #[inline]
    pub(crate) fn trace(&mut self, action: &str) {
        if let Some(trace) = self.trace.as_mut() {
            trace.dump(action, &self.store);
        }
    }

    #[cfg(not(feature = "std"))]
    #[inline]
    pub(crate) fn trace(&mut self, _action: &str) {}
}
