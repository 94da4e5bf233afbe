use alloc::{string::String, vec::Vec};

/// Characters produced by the last refill, consumed left to right.
///
/// The buffer is rebuilt wholesale on every refill rather than appended to;
/// any unconsumed tail is carried over to the front of the replacement.
#[derive(Debug, Default)]
pub(crate) struct ReassemblyBuffer {
    chars: Vec<char>,
    // Invariant: cursor <= chars.len()
    cursor: usize,
}

impl ReassemblyBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Unconsumed characters remaining.
    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.chars.len() - self.cursor
    }

    #[inline]
    pub(crate) fn is_drained(&self) -> bool {
        self.cursor == self.chars.len()
    }

    /// Copy the unconsumed tail into `acc`, preserving order.
    pub(crate) fn copy_tail_into(&self, acc: &mut String) {
        acc.extend(&self.chars[self.cursor..]);
    }

    /// Replace the contents with `acc`; the cursor returns to the front.
    pub(crate) fn rebuild(&mut self, acc: &str) {
        self.chars.clear();
        // Reserve the byte length as an upper bound on additional chars
        self.chars.reserve(acc.len());
        self.chars.extend(acc.chars());
        self.cursor = 0;
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<char> {
        let c = self.chars.get(self.cursor).copied();
        if c.is_some() {
            self.cursor += 1;
        }
        c
    }

    /// Copy up to `len` characters into `dst` starting at `offset`, advance
    /// the cursor past them, and return how many were copied.
    ///
    /// The caller has already validated `offset` and `len` against `dst`.
    pub(crate) fn copy_into(&mut self, dst: &mut [char], offset: usize, len: usize) -> usize {
        let n = core::cmp::min(len, self.available());
        let end = self.cursor + n;
        dst[offset..offset + n].copy_from_slice(&self.chars[self.cursor..end]);
        self.cursor = end;
        n
    }
}
