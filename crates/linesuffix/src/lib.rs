//! Streaming line-suffix injection.
//!
//! `linesuffix` wraps a line-oriented text source and re-emits it as a single
//! forward-only character stream in which a configurable suffix follows every
//! non-empty line, with an optional distinct suffix reserved for the first
//! line. The input is never materialized: characters are produced on demand
//! from a small reassembly buffer that is refilled one line at a time.
//!
//! The motivating use case is appending a synthetic trailing field to every
//! row of a delimited file while it streams through:
//!
//! ```rust
//! use linesuffix::{StrLineSource, SuffixedLineStream};
//!
//! let source = StrLineSource::new("A,B,C\n1,2,3\n4,5,6\n");
//! let mut stream =
//!     SuffixedLineStream::new(source, ",x\n", Some(",D\n".into())).unwrap();
//!
//! let out: String = stream.chars().map(Result::unwrap).collect();
//! assert_eq!(out, "A,B,C,D\n1,2,3,x\n4,5,6,x\n");
//! ```
//!
//! The stream is strictly single-pass: it exposes no seek, mark/reset, skip,
//! or whole-line reads, because the transformed output has no stable notion
//! of "line" or position once the source has been consumed and rewritten.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod error;
#[cfg(feature = "std")]
mod io;
mod source;
mod stream;

#[cfg(test)]
mod tests;

pub use error::{Operation, StreamError};
#[cfg(feature = "std")]
pub use io::BufReadLineSource;
pub use source::{LineSource, StrLineSource};
pub use stream::{Chars, SuffixedLineStream};
