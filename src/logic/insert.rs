use super::{CircularBuffer, Parameters};

/// Interior insert where the run `[I, T)` does not cross the buffer end.
pub struct Contiguous;

impl Contiguous {
    #[inline]
    pub fn insert<B: CircularBuffer>(buffer: &mut B, params: Parameters) {
        // contiguous run after the insertion point:
        //
        //             H       I     T
        //      [. . . o o o o A o o . . . . . .]
        //
        //             H               T
        //      [. . . o o o o I A o o . . . . .]
        //                       M M M
        //
        // or the same inside the low section of a wrapped buffer:
        //
        //           I     T           H
        //      [o o A o o . . . . . . o o o o o]
        //
        //           I       T         H
        //      [o o I A o o . . . . . o o o o o]
        //             M M M

        let Parameters { internal_index, .. } = params;
        let tail = buffer.tail();
        buffer.copy(internal_index + 1, internal_index, tail - internal_index);
        let new_tail = buffer.wrap_add(tail, 1);
        buffer.set_tail(new_tail);
    }
}

/// Interior insert where the run `[I, T)` crosses the buffer end.
pub struct Discontiguous;

impl Discontiguous {
    #[inline]
    pub fn insert<B: CircularBuffer>(buffer: &mut B, params: Parameters) {
        // discontiguous, insertion point in the high section:
        //
        //           T           H       I
        //      [o o . . . . . . o o o o A o o Z]
        //
        //             T         H       I
        //      [Z o o . . . . . o o o o I A o o]
        //       M M M                     M M M
        //
        // The low section [0, T) steps forward into the spare slot, the
        // last physical slot moves to 0, then [I, len - 1) steps forward.
        //
        // A sequence ending exactly at the buffer end (T == 0) takes the
        // same path with an empty low section.

        let Parameters { internal_index, .. } = params;
        let array_len = buffer.array_len();
        let tail = buffer.tail();

        // move the low section up by one
        buffer.copy(1, 0, tail);

        // copy last element into the slot vacated at the bottom
        buffer.copy(0, array_len - 1, 1);

        // open the insertion slot
        buffer.copy(internal_index + 1, internal_index, array_len - 1 - internal_index);

        let new_tail = buffer.wrap_add(tail, 1);
        buffer.set_tail(new_tail);
    }
}
