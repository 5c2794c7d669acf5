//! Convert collections of tune records into [ABC notation](https://abcnotation.com/).
//!
//! Tune-sharing sites publish their databases as JSON arrays of tune settings. This crate decodes
//! such an array, turns every setting into an ABC block (header fields followed by the verbatim
//! notation body) and writes the blocks to disk, either one file per tune or all of them
//! concatenated into a single tunebook.

pub mod abc;
pub mod mode;
pub mod name;
pub mod tune;
pub mod writer;

pub use tune::{Tune, Tunes};
