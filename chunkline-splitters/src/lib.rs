//! Recursive, separator-aware text splitting.
//!
//! ```
//! use chunkline_splitters::RecursiveCharacterTextSplitter;
//!
//! let splitter = RecursiveCharacterTextSplitter::builder()
//!     .chunk_size(5)
//!     .chunk_overlap(0)
//!     .separators(["\n\n", ""])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     splitter.split_text("aaaa\n\nbbbb\n\ncccc"),
//!     vec!["aaaa", "bbbb", "cccc"]
//! );
//! ```

mod chunk;
mod config;
mod error;
mod language;
mod merge;
mod recursive;
mod split;

pub use chunk::TextChunk;
pub use config::{
    KeepSeparator, RecursiveSplitterBuilder, SplitterConfig, DEFAULT_CHUNK_OVERLAP,
    DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS,
};
pub use error::SplitterConfigError;
pub use language::Language;
pub use recursive::RecursiveCharacterTextSplitter;
