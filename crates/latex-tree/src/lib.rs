//! The document tree produced by structurally parsing LaTeX, together with
//! the visitors that consume it.
//!
//! The tree is a closed set of [`Node`] variants with strictly hierarchical
//! ownership: every non-leaf node owns its children, and a finished node is
//! never mutated in place. Transformations build new trees.
//!
//! Consumers walk the tree through the [`Mapper`] trait, which dispatches a
//! node to the handler for its variant. Two implementations ship with this
//! crate: [`Renderer`] serializes a tree back to LaTeX source (see
//! [`render`]), and [`TreeCopier`] rebuilds a structurally identical tree.
//!
//! # Features
//!
//! - `serde`: `Node` implements serde's `Serialize`.

pub mod ast;
mod render;
mod visit;

pub use ast::Node;
pub use render::{Renderer, render};
pub use visit::{Mapper, TreeCopier};
