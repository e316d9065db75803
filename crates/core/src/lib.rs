//! Core library for webuser.
//!
//! Pure types and traits shared by the storage backends and the HTTP layer.
//! Nothing in this crate performs I/O.

pub mod storage;
pub mod user;
