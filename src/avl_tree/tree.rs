use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::fmt::Display;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

//      x               y
//     / \             / \
//    a   y    =>     x   c
//       / \         / \
//      b   c       a   b
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the balance of a node whose left subtree may be two levels taller than its right.
fn rebalance_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if node.balance() > 1 {
        let child = match node.left.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if child.balance() >= 0 {
            trace!("rebalancing left-left case");
            node.left = Some(child);
        } else {
            trace!("rebalancing left-right case");
            node.left = Some(rotate_left(child));
        }
        node = rotate_right(node);
    }
    node
}

fn rebalance_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if node.balance() < -1 {
        let child = match node.right.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        if child.balance() <= 0 {
            trace!("rebalancing right-right case");
            node.right = Some(child);
        } else {
            trace!("rebalancing right-left case");
            node.right = Some(rotate_right(child));
        }
        node = rotate_left(node);
    }
    node
}

// precondition: the tree is not empty
fn remove_max<T>(tree: &mut Tree<T>) -> T {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.right.is_some() {
        let ret = remove_max(&mut node.right);
        node.update();
        *tree = Some(rebalance_left(node));
        ret
    } else {
        let Node { value, left, .. } = *node;
        *tree = left;
        value
    }
}

/// Returns the node holding `value` if it exists. Otherwise returns the node that would become
/// the parent of `value` if it were inserted, or `None` if the tree is empty.
pub fn find<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    let mut curr: &Node<T> = tree.as_ref()?;
    loop {
        let next = match curr.value.cmp(value) {
            Ordering::Equal => return Some(curr),
            Ordering::Less => &curr.right,
            Ordering::Greater => &curr.left,
        };
        match next {
            Some(ref node) => curr = &**node,
            None => return Some(curr),
        }
    }
}

/// Inserts `value` into the tree. Returns `false` and leaves the tree untouched if an equal value
/// already exists.
pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    let ret = match value.cmp(&node.value) {
        Ordering::Less => {
            let ret = insert(&mut node.left, value);
            node.update();
            node = rebalance_left(node);
            ret
        },
        Ordering::Greater => {
            let ret = insert(&mut node.right, value);
            node.update();
            node = rebalance_right(node);
            ret
        },
        Ordering::Equal => false,
    };

    *tree = Some(node);
    ret
}

/// Removes the value equal to `value` from the tree and returns it, if it exists.
pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<T>
where
    T: Ord,
{
    let mut node = tree.take()?;

    let ret = match node.value.cmp(value) {
        Ordering::Less => {
            let ret = remove(&mut node.right, value);
            node.update();
            node = rebalance_left(node);
            ret
        },
        Ordering::Greater => {
            let ret = remove(&mut node.left, value);
            node.update();
            node = rebalance_right(node);
            ret
        },
        Ordering::Equal => {
            if node.left.is_none() || node.right.is_none() {
                let Node { value, left, right, .. } = *node;
                *tree = left.or(right);
                return Some(value);
            }

            // the in-order predecessor takes the place of the removed value
            let predecessor = remove_max(&mut node.left);
            let ret = mem::replace(&mut node.value, predecessor);
            node.update();
            node = rebalance_right(node);
            Some(ret)
        },
    };

    *tree = Some(node);
    ret
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Appends a pre-order dump of the tree to `out`, indenting each node by two spaces per level.
pub fn render<T>(tree: &Tree<T>, depth: usize, out: &mut String)
where
    T: Display,
{
    if let Some(ref node) = tree {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&format!("({}){}\n", node.height, node.value));
        render(&node.left, depth + 1, out);
        render(&node.right, depth + 1, out);
    }
}
