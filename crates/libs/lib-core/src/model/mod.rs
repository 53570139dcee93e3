//! # Model Layer
//!
//! Persistence store and entity types.

pub mod store;
