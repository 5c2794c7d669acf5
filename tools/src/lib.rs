//! # Tunebook Tools
//!
//! Tune-sharing sites such as [The Session](https://thesession.org) publish their collections as
//! JSON dumps, where every tune setting is an object carrying a title, rhythm, meter, mode and the
//! body of its [ABC notation](https://abcnotation.com/). This crate provides a command-line
//! utility that turns such a dump into ABC files any ABC-aware software can open.
//!
//! ## Usage
//!
//! ```console
//! tunebook-tools 0.1.0
//! Convert a JSON array of tunes into ABC notation
//!
//! USAGE:
//!     tunebook-tools [OPTIONS] --input <INPUT>
//!
//! OPTIONS:
//!     -h, --help                 Print help information
//!         --input <INPUT>        Path to the input JSON file
//!         --outfile <OUTFILE>    Name of the single output file, relative to the output directory (used with -single) [default: all_tunes.abc]
//!         --output <OUTPUT>      Directory for output ABC files [default: .]
//!         --single               Output to a single file instead of multiple files
//!     -v, --verbose              Log more details (can be repeated)
//!     -V, --version              Print version information
//! ```
//!
//! The long flags may also be written with a single dash (`-input tunes.json`).
//!
//! ### Example
//!
//! ```console
//! $ tunebook-tools -input tunes.json -output abc
//! Found 3 tunes in the input file
//! Created output directory: abc
//! Successfully wrote 3 tunes to individual files in abc
//! $ ls abc
//! 1_The Kesh.abc  2_Cooley's.abc  3_Tune_ The_Best_.abc
//! ```
//!
//! ```console
//! $ tunebook-tools -input tunes.json -output abc -single -outfile session.abc
//! Found 3 tunes in the input file
//! Successfully wrote 3 tunes to abc/session.abc
//! ```

pub mod convert;
pub mod utils;
