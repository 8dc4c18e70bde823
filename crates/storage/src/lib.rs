//! Storage abstraction and implementations for Paceboard.
//!
//! This crate provides a trait-based storage interface with a single-file
//! JSON reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;

pub use trait_::{LoadSource, Result, Storage, StorageError};
pub use json_storage::JsonStorage;
