//! Functional core for the bookreview service.
//!
//! Pure domain types, validation, cache keys and serialization, plus the
//! repository and cache traits that the server crate implements. Nothing in
//! this crate performs I/O.

pub mod cache;
pub mod catalog;
pub mod storage;
