//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

use std::error;
use std::fmt;
use std::result;

/// Errors returned by operations that need at least one element in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation was applied to a collection without a root.
    EmptyCollection,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "operation requires a non-empty collection"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
