//! General file I/O helpers plus the engine's buffered writers, histogram/snapshot/checkpoint
//! persistence and PRNG state persistence.
//!
//! # Opening an input stream, which might be gzip'ed
//!
//! The [open_file()] function opens a file of a given name. If that file name
//! has ``.gz`` suffix, the returned ``BufRead`` is automatically uncompressed:
//!
//! ```
//! use pimc_io::open_file;
//! # use std::io;
//! # fn main() -> Result<(), io::Error> {
//! let reader = open_file("tests/test_files/f64.csv")?;
//! let reader_gzipped = open_file("tests/test_files/f64.csv.gz")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Unified opening an output stream.
//!
//! [out_writer()] opens a file for writing. If the given file name is ``"stdout"`` or ``"stderr"``, writes to the appropriate
//! stream rather than to a file:
//!
//! ```
//! use std::fs;
//! use pimc_io::out_writer;
//! // This will print on stdout
//! let mut to_stream = out_writer("", true);
//! // This will also print on stdout
//! to_stream = out_writer("stdout", true);
//! // "stdout" file should not exist
//! assert!(fs::metadata("stdout").is_err());
//! // now let's open a regular file for writing
//! let mut to_file = out_writer("file.out", false);
//! assert!(fs::metadata("file.out").is_ok());
//! # fs::remove_file("file.out").expect("Can't remove a test file: file.out");
//! ```
//!
//! # Reading ``.csv`` and ``.tsv`` files
//!
//! [read_tsv()] and [read_csv()] lean on the ``csv`` crate, adding automated parsing to a
//! statically defined type, e.g. ``f64``:
//!
//! ```
//! # use std::io;
//! # fn main() -> Result<(), io::Error> {
//! use pimc_io::{open_file, read_csv};
//! let reader = open_file("tests/test_files/f64.csv")?;
//! let data_f64: Vec<Vec<f64>> = read_csv(reader)?;
//! # assert_eq!(data_f64.len(), 2);
//! # assert_eq!(data_f64[1].len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! # Splitting a string into tokens by whitespace, quote-aware
//!
//! ```
//! use pimc_io::split_into_strings;
//! let tokens = split_into_strings("A   'RNA linking'       y \"ADENOSINE-5'-MONOPHOSPHATE\" ? 'C10 H14 N5 O7 P' 347.221", false);
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[3], "\"ADENOSINE-5'-MONOPHOSPHATE\"".to_string());
//! ```
#![allow(clippy::needless_return)]

mod atomic_write;
mod block_writer;
mod checkpoint;
mod error;
mod histogram_io;
mod prng_state;
mod split_into_strings;
mod utils;
mod worldline_snapshot;

pub use atomic_write::write_atomic;
pub use block_writer::BufferedBlockWriter;
pub use checkpoint::Checkpoint;
pub use error::EngineError;
pub use histogram_io::{read_histogram, write_histogram_atomic};
pub use prng_state::{read_prng_state, write_prng_state};
pub use split_into_strings::split_into_strings;
pub use utils::*;
pub use worldline_snapshot::{read_worldline_snapshot, write_worldline_snapshot};
