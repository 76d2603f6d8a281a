use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub height: i32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}
