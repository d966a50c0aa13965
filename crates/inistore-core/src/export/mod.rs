//! Projections of a [`crate::Document`] into other shapes.
//!
//! The exporters are read-only: they never modify the document and can be
//! called any number of times.

pub mod tree;
