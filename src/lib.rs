//! Ordered collections backed by an avl tree.

pub mod avl_tree;
