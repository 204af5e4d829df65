use super::{CircularBuffer, Parameters};

/// Interior removal where the run `(R, T)` does not cross the buffer end.
pub struct Contiguous;

impl Contiguous {
    #[inline]
    pub fn remove<B: CircularBuffer>(buffer: &mut B, params: Parameters) {
        // contiguous, draw the following elements back:
        //
        //             H       R     T
        //      [. . . o o o o x o o . . . . . .]
        //
        //             H           T
        //      [. . . o o o o o o . . . . . . .]
        //                     M M

        let Parameters { internal_index, .. } = params;
        let tail = buffer.tail();
        buffer.copy(internal_index, internal_index + 1, tail - internal_index - 1);
        let new_tail = buffer.wrap_sub(tail, 1);
        buffer.set_tail(new_tail);
    }
}

/// Interior removal where the run `(R, T)` crosses the buffer end, so the
/// leading run `[H, R)` is shifted instead.
pub struct Discontiguous;

impl Discontiguous {
    #[inline]
    pub fn remove<B: CircularBuffer>(buffer: &mut B, params: Parameters) {
        // discontiguous, removal in the high section:
        //
        //           T         H     R
        //      [o o . . . . . o o o x o o o o o]
        //
        //           T           H
        //      [o o . . . . . . o o o o o o o o]
        //                       M M M

        let Parameters { index, .. } = params;
        let head = buffer.head();
        buffer.copy(head + 1, head, index);
        let new_head = buffer.wrap_add(head, 1);
        buffer.set_head(new_head);
    }
}
