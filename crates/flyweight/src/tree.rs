//! Intrinsic and extrinsic tree state

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Surface trees are drawn onto
pub trait Canvas {
    /// Draw one tree of `kind` at `(x, y)`
    fn draw_tree(&mut self, x: i32, y: i32, kind: &TreeType);
}

/// State shared by every tree of one kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeType {
    /// Species name
    pub name: String,
    /// Foliage color
    pub color: String,
    /// Texture asset
    pub texture: String,
}

impl TreeType {
    /// Create a tree type
    pub fn new(name: impl Into<String>, color: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            texture: texture.into(),
        }
    }

    /// Draw a tree of this kind at a position
    pub fn draw(&self, canvas: &mut impl Canvas, x: i32, y: i32) {
        canvas.draw_tree(x, y, self);
    }
}

/// One planted tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    /// Horizontal position
    pub x: i32,
    /// Vertical position
    pub y: i32,
    /// Shared kind
    pub kind: Arc<TreeType>,
}

impl Tree {
    /// Plant a tree of `kind` at `(x, y)`
    pub fn new(x: i32, y: i32, kind: Arc<TreeType>) -> Self {
        Self { x, y, kind }
    }

    /// Draw this tree
    pub fn draw(&self, canvas: &mut impl Canvas) {
        self.kind.draw(canvas, self.x, self.y);
    }
}
