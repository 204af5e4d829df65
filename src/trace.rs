//! Structural dumps written after each mutating operation.

use std::io::{self, Write};

use crate::container::Store;
use crate::logic::CircularBuffer;

const RULE: usize = 80;

type Formatter = dyn Fn(&mut dyn Write, &[u8]) -> io::Result<()>;

pub(crate) struct Trace {
    sink: Box<dyn Write>,
    fmt: Box<Formatter>,
}

impl Trace {
    pub(crate) fn new<W, F>(sink: W, fmt: F) -> Trace
    where
        W: Write + 'static,
        F: Fn(&mut dyn Write, &[u8]) -> io::Result<()> + 'static,
    {
        Trace {
            sink: Box::new(sink),
            fmt: Box::new(fmt),
        }
    }

    /// Diagnostics never fail the operation being traced.
    pub(crate) fn dump(&mut self, action: &str, store: &Store) {
        let _ = self.write_dump(action, store);
    }

    fn write_dump(&mut self, action: &str, store: &Store) -> io::Result<()> {
        let out = &mut *self.sink;

        let header = format!("({}) ", action);
        writeln!(out)?;
        writeln!(out, "{}{}", header, "=".repeat(RULE.saturating_sub(header.len())))?;
        match store {
            Store::Ring(ring) => writeln!(
                out,
                "kind: ArrayBacked; size: {}; capacity: {}; head: {}; tail: {}",
                ring.len(),
                ring.capacity(),
                ring.head(),
                ring.tail()
            )?,
            Store::List(list) => writeln!(out, "kind: LinkedList; size: {}", list.len())?,
        }
        writeln!(out, "{}", "-".repeat(RULE))?;

        for element in store.elements() {
            (self.fmt)(&mut *out, element)?;
        }

        writeln!(out)?;
        writeln!(out, "{}", "=".repeat(RULE))?;
        out.flush()
    }
}
