pub mod header;
pub mod summary;
pub mod warning;
