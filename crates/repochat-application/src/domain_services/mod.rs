//! Domain services used by the use cases

pub mod chunking;

pub use chunking::TextSplitter;
