//! The investigator's notebook: an ordered, duplicate-free set of clues.
//!
//! Backed by an unbalanced binary search tree keyed by the clue text. Cases
//! hold a handful of clues, so no rebalancing is done.

use std::cmp::Ordering;
use std::fmt;

struct Node {
    clue: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(clue: String) -> Box<Self> {
        Box::new(Self {
            clue,
            left: None,
            right: None,
        })
    }
}

fn insert_at(mut slot: &mut Option<Box<Node>>, clue: String) -> bool {
    while let Some(node) = slot {
        slot = match clue.cmp(&node.clue) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => return false,
        };
    }
    *slot = Some(Node::new(clue));
    true
}

/// Clues collected during a session, kept in lexicographic order.
///
/// Sorted input degenerates the tree into a chain, so every walk over it
/// (insert, drop, clone) uses a loop rather than recursion.
#[derive(Default)]
pub struct ClueBook {
    root: Option<Box<Node>>,
    len: usize,
}

impl ClueBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue. Returns `false` if it was already recorded.
    pub fn insert(&mut self, clue: impl Into<String>) -> bool {
        let inserted = insert_at(&mut self.root, clue.into());
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clues in ascending lexicographic order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Number of clues satisfying `predicate`.
    pub fn count_matching<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&str) -> bool,
    {
        self.iter().filter(|clue| predicate(*clue)).count()
    }

    /// Clues satisfying `predicate`, in ascending order.
    pub fn list_matching<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = &'a str> + 'a
    where
        P: FnMut(&str) -> bool + 'a,
    {
        self.iter().filter(move |clue| predicate(*clue))
    }

    /// Clues paired with their 1-based position in the listing.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate().map(|(i, clue)| (i + 1, clue))
    }
}

impl Drop for ClueBook {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Clone for ClueBook {
    /// Re-inserts in pre-order, which rebuilds the same tree shape.
    fn clone(&self) -> Self {
        let mut book = ClueBook::new();
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            book.insert(node.clue.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        book
    }
}

impl fmt::Debug for ClueBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ClueBook {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for ClueBook {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut book = ClueBook::new();
        for clue in iter {
            book.insert(clue);
        }
        book
    }
}

/// In-order walk over a `ClueBook`.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.clue.as_str())
    }
}
