//! Lazy, allocation-free splitting of a string on a single delimiter
//! character, in the two usual flavours: keep empty tokens or drop them.

pub mod error;
pub mod ext;
pub mod split_strings;

pub use error::{Result, SplitError};
pub use ext::LazySplit;
pub use split_strings::{SplitMode, Splitter, Tokens};
