//! Reference-data code tables, cached for the process lifetime.

pub mod cache;

pub use cache::CodeTableCache;
