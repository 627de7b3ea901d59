//! Forest of trees sharing their types

use crate::factory::TreeFactory;
use crate::tree::{Canvas, Tree};

/// A collection of trees and the factory owning their types
#[derive(Debug, Default)]
pub struct Forest {
    trees: Vec<Tree>,
    factory: TreeFactory,
}

impl Forest {
    /// Create an empty forest
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a tree, reusing an existing type when one matches
    pub fn plant_tree(&mut self, x: i32, y: i32, name: &str, color: &str, texture: &str) -> &mut Self {
        let kind = self.factory.tree_type(name, color, texture);
        self.trees.push(Tree::new(x, y, kind));
        self
    }

    /// Draw every tree in planting order
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for tree in &self.trees {
            tree.draw(canvas);
        }
    }

    /// Trees planted
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Distinct tree types backing the forest
    pub fn type_count(&self) -> usize {
        self.factory.len()
    }

    /// Planted trees
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeType;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingCanvas {
        drawn: usize,
        kinds: HashSet<String>,
    }

    impl Canvas for CountingCanvas {
        fn draw_tree(&mut self, _x: i32, _y: i32, kind: &TreeType) {
            self.drawn += 1;
            self.kinds.insert(kind.name.clone());
        }
    }

    #[test]
    fn test_sixty_thousand_trees_share_three_types() {
        let mut forest = Forest::new();
        for i in 0..20_000 {
            forest
                .plant_tree(i + 1, i, "Pine Tree", "dark_green", "texture_01.jpg")
                .plant_tree(i + 1, i, "Oak Tree", "light_green", "texture_02.jpg")
                .plant_tree(i + 1, i, "Maple Tree", "orange", "texture_03.jpg");
        }

        let mut canvas = CountingCanvas::default();
        forest.draw(&mut canvas);

        assert_eq!(forest.tree_count(), 60_000);
        assert_eq!(forest.type_count(), 3);
        assert_eq!(canvas.drawn, 60_000);
        assert_eq!(canvas.kinds.len(), 3);
    }

    #[test]
    fn test_trees_point_at_the_same_type() {
        let mut forest = Forest::new();
        forest
            .plant_tree(0, 0, "Oak Tree", "green", "oak.jpg")
            .plant_tree(5, 5, "Oak Tree", "green", "oak.jpg");

        let trees = forest.trees();
        assert!(Arc::ptr_eq(&trees[0].kind, &trees[1].kind));
        assert_eq!((trees[1].x, trees[1].y), (5, 5));
    }

    #[test]
    fn test_empty_forest_draws_nothing() {
        let forest = Forest::new();
        let mut canvas = CountingCanvas::default();
        forest.draw(&mut canvas);

        assert_eq!(canvas.drawn, 0);
        assert_eq!(forest.type_count(), 0);
    }
}
