//! Flyweight pattern: forests of shared tree types
//!
//! The state that repeats across many trees (name, color, texture) lives in
//! a [`TreeType`] shared through `Arc`. Each [`Tree`] stores only its own
//! position and a pointer to its type.

#![warn(missing_docs)]

pub mod factory;
pub mod forest;
pub mod tree;

pub use factory::TreeFactory;
pub use forest::Forest;
pub use tree::{Canvas, Tree, TreeType};
