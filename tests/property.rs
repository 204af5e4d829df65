//! Differential tests: both storage strategies against a `Vec` oracle.
//!
//! Random operation sequences run through a container and a plain
//! `Vec<Vec<u8>>` side by side. After every call the results, the
//! contents, and the cursor position must agree.

use linearseq::{Container, Error, Kind, SetOutcome};
use proptest::prelude::*;

const ELEMENT_SIZE: usize = 2;

fn element(v: u8) -> [u8; ELEMENT_SIZE] {
    [v, v.wrapping_mul(3)]
}

#[derive(Clone, Debug)]
enum Op {
    Insert(usize, u8),
    InsertLast(u8),
    Get(usize),
    Set(usize, u8),
    Remove(usize),
    Discard(usize),
    Push(u8),
    Pop,
    Enqueue(u8),
    Dequeue,
    GetLast,
    RemoveLast,
    Clear,
    CursorSeek(usize),
    CursorNext,
    CursorReset,
    CursorAdd(u8),
    CursorGet,
    CursorSet(u8),
    CursorRemove,
    CursorDiscard,
}

impl Op {
    fn is_cursor_op(&self) -> bool {
        matches!(
            self,
            Op::CursorSeek(_)
                | Op::CursorNext
                | Op::CursorReset
                | Op::CursorAdd(_)
                | Op::CursorGet
                | Op::CursorSet(_)
                | Op::CursorRemove
                | Op::CursorDiscard
        )
    }
}

// ============================================================================
// STRATEGIES
// ============================================================================

fn direct_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..12usize, any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        any::<u8>().prop_map(Op::InsertLast),
        (0..12usize).prop_map(Op::Get),
        (0..12usize, 0..4u8).prop_map(|(i, v)| Op::Set(i, v)),
        (0..12usize).prop_map(Op::Remove),
        (0..12usize).prop_map(Op::Discard),
        any::<u8>().prop_map(Op::Push),
        Just(Op::Pop),
        any::<u8>().prop_map(Op::Enqueue),
        Just(Op::Dequeue),
    ]
}

fn cursor_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..12usize).prop_map(Op::CursorSeek),
        Just(Op::CursorNext),
        Just(Op::CursorReset),
        any::<u8>().prop_map(Op::CursorAdd),
        Just(Op::CursorGet),
        (0..4u8).prop_map(Op::CursorSet),
        Just(Op::CursorRemove),
        Just(Op::CursorDiscard),
    ]
}

fn rare_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::GetLast),
        4 => Just(Op::RemoveLast),
        1 => Just(Op::Clear),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => direct_op(),
        5 => cursor_op(),
        1 => rare_op(),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..120)
}

// ============================================================================
// ORACLE
// ============================================================================

struct Oracle {
    items: Vec<Vec<u8>>,
    cursor: usize,
    kind: Kind,
}

impl Oracle {
    fn new(kind: Kind) -> Oracle {
        Oracle {
            items: Vec::new(),
            cursor: 0,
            kind,
        }
    }

    /// A direct operation at `index` that left the length alone or grew it.
    fn touched(&mut self, index: usize) {
        if self.kind == Kind::LinkedList {
            self.cursor = index;
        }
    }

    /// A direct removal at `index`.
    fn removed(&mut self, index: usize) {
        match self.kind {
            Kind::LinkedList => self.cursor = index,
            Kind::ArrayBacked => self.cursor = self.cursor.min(self.items.len()),
        }
    }

    fn insert(&mut self, index: usize, v: u8) -> Result<(), Error> {
        if index > self.items.len() {
            return Err(Error::PositionOutOfRange);
        }
        self.items.insert(index, element(v).to_vec());
        self.touched(index);
        Ok(())
    }

    fn get(&mut self, index: usize) -> Result<Vec<u8>, Error> {
        let value = self.items.get(index).cloned().ok_or(Error::PositionOutOfRange)?;
        self.touched(index);
        Ok(value)
    }

    fn set(&mut self, index: usize, v: u8) -> Result<SetOutcome, Error> {
        let slot = self.items.get_mut(index).ok_or(Error::PositionOutOfRange)?;
        let outcome = if slot[..] == element(v) {
            SetOutcome::Unchanged
        } else {
            *slot = element(v).to_vec();
            SetOutcome::Applied
        };
        self.touched(index);
        Ok(outcome)
    }

    fn remove(&mut self, index: usize) -> Result<Vec<u8>, Error> {
        if index >= self.items.len() {
            return Err(Error::PositionOutOfRange);
        }
        let value = self.items.remove(index);
        self.removed(index);
        Ok(value)
    }

    fn last(&self) -> usize {
        // only used when non-empty
        self.items.len().wrapping_sub(1)
    }
}

// ============================================================================
// HARNESS
// ============================================================================

fn read(result: Result<(), Error>, out: [u8; ELEMENT_SIZE]) -> Result<Vec<u8>, Error> {
    result.map(|()| out.to_vec())
}

fn apply(container: &mut Container, oracle: &mut Oracle, op: &Op) -> Result<(), TestCaseError> {
    let mut out = [0u8; ELEMENT_SIZE];
    let len = oracle.items.len();

    match *op {
        Op::Insert(i, v) => {
            prop_assert_eq!(container.insert(i, &element(v)), oracle.insert(i, v));
        }
        Op::InsertLast(v) | Op::Enqueue(v) => {
            let got = match *op {
                Op::Enqueue(_) => container.enqueue(&element(v)),
                _ => container.insert_last(&element(v)),
            };
            prop_assert_eq!(got, oracle.insert(len, v));
        }
        Op::Push(v) => {
            prop_assert_eq!(container.push(&element(v)), oracle.insert(0, v));
        }
        Op::Get(i) => {
            let got = container.get(i, &mut out);
            prop_assert_eq!(read(got, out), oracle.get(i));
        }
        Op::GetLast => {
            let got = container.get_last(&mut out);
            let expected = if len == 0 {
                Err(Error::PositionOutOfRange)
            } else {
                let last = oracle.last();
                oracle.get(last)
            };
            prop_assert_eq!(read(got, out), expected);
        }
        Op::Set(i, v) => {
            prop_assert_eq!(container.set(i, &element(v)), oracle.set(i, v));
        }
        Op::Remove(i) => {
            let got = container.remove(i, &mut out);
            prop_assert_eq!(read(got, out), oracle.remove(i));
        }
        Op::Discard(i) => {
            let expected = oracle.remove(i).map(|_| ());
            prop_assert_eq!(container.discard(i), expected);
        }
        Op::Pop | Op::Dequeue => {
            let got = match *op {
                Op::Pop => container.pop(&mut out),
                _ => container.dequeue(&mut out),
            };
            prop_assert_eq!(read(got, out), oracle.remove(0));
        }
        Op::RemoveLast => {
            let got = container.remove_last(&mut out);
            let expected = if len == 0 {
                Err(Error::PositionOutOfRange)
            } else {
                let last = oracle.last();
                oracle.remove(last)
            };
            prop_assert_eq!(read(got, out), expected);
        }
        Op::Clear => {
            container.clear();
            oracle.items.clear();
            oracle.cursor = 0;
        }
        Op::CursorSeek(target) => {
            let got = container.cursor().seek(target);
            if target > len {
                prop_assert_eq!(got, Err(Error::PositionOutOfRange));
            } else {
                prop_assert_eq!(got, Ok(()));
                oracle.cursor = target;
            }
        }
        Op::CursorNext => {
            let got = container.cursor().move_next();
            if oracle.cursor < len {
                prop_assert_eq!(got, Ok(()));
                oracle.cursor += 1;
            } else {
                prop_assert_eq!(got, Err(Error::PositionOutOfRange));
            }
        }
        Op::CursorReset => {
            container.cursor().reset();
            oracle.cursor = 0;
        }
        Op::CursorAdd(v) => {
            prop_assert_eq!(container.cursor().add(&element(v)), Ok(()));
            oracle.items.insert(oracle.cursor, element(v).to_vec());
        }
        Op::CursorGet => {
            let got = container.cursor().get(&mut out);
            let expected = oracle.items.get(oracle.cursor).cloned().ok_or(Error::PositionOutOfRange);
            prop_assert_eq!(read(got, out), expected);
        }
        Op::CursorSet(v) => {
            let got = container.cursor().set(&element(v));
            let expected = match oracle.items.get_mut(oracle.cursor) {
                None => Err(Error::PositionOutOfRange),
                Some(slot) if slot[..] == element(v) => Ok(SetOutcome::Unchanged),
                Some(slot) => {
                    *slot = element(v).to_vec();
                    Ok(SetOutcome::Applied)
                }
            };
            prop_assert_eq!(got, expected);
        }
        Op::CursorRemove | Op::CursorDiscard => {
            let got = match *op {
                Op::CursorRemove => read(container.cursor().remove(&mut out), out),
                _ => container.cursor().discard().map(|()| out.to_vec()),
            };
            if oracle.cursor < len {
                let value = oracle.items.remove(oracle.cursor);
                if let Op::CursorRemove = *op {
                    prop_assert_eq!(got, Ok(value));
                } else {
                    prop_assert!(got.is_ok());
                }
            } else {
                prop_assert_eq!(got, Err(Error::PositionOutOfRange));
            }
        }
    }

    check(container, oracle)
}

fn check(container: &mut Container, oracle: &Oracle) -> Result<(), TestCaseError> {
    prop_assert_eq!(container.len(), oracle.items.len());
    prop_assert_eq!(container.is_empty(), oracle.items.is_empty());
    prop_assert_eq!(format!("{:?}", container), format!("{:?}", oracle.items));
    prop_assert_eq!(container.cursor_position(), oracle.cursor);

    if let Some(capacity) = container.capacity() {
        prop_assert!(capacity >= container.len());
    }

    // the cursor reads what the oracle holds at its position
    let cursor = container.cursor();
    prop_assert_eq!(cursor.has_next(), oracle.cursor < oracle.items.len());
    if let Some(expected) = oracle.items.get(oracle.cursor) {
        let mut out = [0u8; ELEMENT_SIZE];
        prop_assert_eq!(cursor.get(&mut out), Ok(()));
        prop_assert_eq!(&out[..], &expected[..]);
    }
    Ok(())
}

fn run(mut container: Container, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut oracle = Oracle::new(container.kind());
    for op in ops {
        apply(&mut container, &mut oracle, op)?;
    }
    Ok(())
}

/// Runs `ops` through a ring and a list in lockstep, comparing the two
/// after every call.
fn run_both(capacity: usize, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut ring = Container::array_backed(capacity, ELEMENT_SIZE);
    let mut list = Container::linked_list(ELEMENT_SIZE);
    let mut ring_oracle = Oracle::new(Kind::ArrayBacked);
    let mut list_oracle = Oracle::new(Kind::LinkedList);

    for op in ops {
        // direct operations leave the two cursors in different places
        if op.is_cursor_op() {
            let seek = Op::CursorSeek(ring_oracle.cursor);
            apply(&mut list, &mut list_oracle, &seek)?;
        }
        apply(&mut ring, &mut ring_oracle, op)?;
        apply(&mut list, &mut list_oracle, op)?;
        prop_assert_eq!(&ring, &list);
    }
    prop_assert_eq!(ring.clone(), list.clone());
    Ok(())
}

#[test]
fn strategies_agree_after_cursor_diverges() {
    // the ring's cursor stays at 0 while the list's follows the last insert
    let ops = [Op::InsertLast(0), Op::InsertLast(0), Op::CursorSet(1)];
    run_both(0, &ops).unwrap();
    run_both(2, &ops).unwrap();
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Ring buffer matches the oracle, including across growth and wrap.
    #[test]
    fn diff_array_backed(capacity in 0..5usize, ops in ops_strategy()) {
        run(Container::array_backed(capacity, ELEMENT_SIZE), &ops)?;
    }

    /// Linked list matches the oracle.
    #[test]
    fn diff_linked_list(ops in ops_strategy()) {
        run(Container::linked_list(ELEMENT_SIZE), &ops)?;
    }

    /// The same operations leave both strategies holding equal sequences.
    #[test]
    fn diff_strategies_agree(capacity in 0..5usize, ops in ops_strategy()) {
        run_both(capacity, &ops)?;
    }

    /// Seeking to `k` and reading gives element `k`, from any start.
    #[test]
    fn cursor_seek_reads_element(
        values in prop::collection::vec(any::<u8>(), 0..20),
        targets in prop::collection::vec(0..24usize, 1..20),
    ) {
        for mut container in [
            Container::array_backed(1, ELEMENT_SIZE),
            Container::linked_list(ELEMENT_SIZE),
        ] {
            for &v in &values {
                container.enqueue(&element(v)).unwrap();
            }

            let mut cursor = container.cursor();
            for &target in &targets {
                if target > values.len() {
                    prop_assert_eq!(cursor.seek(target), Err(Error::PositionOutOfRange));
                    continue;
                }
                prop_assert_eq!(cursor.seek(target), Ok(()));
                prop_assert_eq!(cursor.position(), target);
                let mut out = [0u8; ELEMENT_SIZE];
                if target < values.len() {
                    prop_assert_eq!(cursor.get(&mut out), Ok(()));
                    prop_assert_eq!(out, element(values[target]));
                } else {
                    prop_assert_eq!(cursor.get(&mut out), Err(Error::PositionOutOfRange));
                }
            }
        }
    }

    /// Pushing at the front and appending at the back through repeated
    /// growth keeps logical order.
    #[test]
    fn growth_keeps_order(capacity in 0..4usize, fronts in prop::collection::vec(any::<bool>(), 0..64)) {
        let mut ring = Container::array_backed(capacity, ELEMENT_SIZE);
        let mut expected = std::collections::VecDeque::new();
        for (i, &front) in fronts.iter().enumerate() {
            let v = i as u8;
            if front {
                ring.push(&element(v)).unwrap();
                expected.push_front(element(v).to_vec());
            } else {
                ring.enqueue(&element(v)).unwrap();
                expected.push_back(element(v).to_vec());
            }
        }
        let expected: Vec<Vec<u8>> = expected.into_iter().collect();
        prop_assert_eq!(format!("{:?}", ring), format!("{:?}", expected));
    }
}
