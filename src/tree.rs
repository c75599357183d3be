//! A Left-Leaning Red-Black tree (LLRB). Like the classic red-black tree,
//! an LLRB encodes a 2-3 tree inside a binary tree by coloring links, but it
//! additionally requires every red link to lean left. That extra constraint
//! shrinks the balancing machinery down to a small set of local rotations and
//! color flips applied on the way back up the recursion.
//!
//! The tree stores plain values under a caller-supplied total order. Values
//! that compare equal are routed to the right on insertion, so inserting the
//! same value twice stores two elements (multiset behavior).
//!
//! # Examples
//!
//! ```
//! use llrb::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.insert(1);
//! assert!(tree.contains(&1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was actually removed.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An absent child. `None` reads as a black link with nothing below it.
type Link<T> = Option<Box<Node<T>>>;

/// A self-balancing ordered collection of values (specifically, a
/// left-leaning red-black tree). Values are ordered by a comparator fixed at
/// construction; [`Tree::new`] uses the natural [`Ord`] order.
///
/// After every public operation the tree satisfies the LLRB invariants:
/// the usual binary-search order, no two consecutive red links down a left
/// chain, and the same number of black links on every path from the root to
/// an absent child. Together these bound the height at `2 * log2(n + 1)`.
#[derive(Clone)]
pub struct Tree<T, C> {
    root: Link<T>,
    cmp: C,
    len: usize,
}

impl<T: Ord> Tree<T, fn(&T, &T) -> Ordering> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Ord::cmp)
    }
}

impl<T: Ord> Default for Tree<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Generates a new, empty `Tree` ordered by the given comparator. The
    /// comparator must be a stable total order over `T`; the balancing
    /// invariants do not survive an inconsistent one.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::tree::Tree;
    ///
    /// // Order values largest-first.
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(tree.contains(&2));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            cmp,
            len: 0,
        }
    }

    /// The number of elements currently stored. Equal values inserted more
    /// than once each count separately.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(7);
    /// tree.insert(7);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given value. Insertion always succeeds; a value comparing
    /// equal to one already stored is placed in its right subtree, so the
    /// tree accumulates duplicates rather than replacing them.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let root = self.root.take();
        let mut root = self.insert_at(root, value);
        root.red = false;
        self.root = Some(root);
        self.len += 1;
    }

    /// Returns whether a value comparing equal to the given one is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match (self.cmp)(value, &node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Removes one element comparing equal to the given value. Returns
    /// `false` and leaves the tree untouched when no such element is stored.
    /// When duplicates are stored, exactly one of them is removed per call.
    ///
    /// # Examples
    ///
    /// ```
    /// use llrb::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.contains(&1));
    ///
    /// // Already gone.
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        if !self.contains(value) {
            return false;
        }

        let root = self.root.take().expect("`contains` implies a root");
        self.root = self.remove_at(root, value);
        if let Some(root) = self.root.as_mut() {
            root.red = false;
        }

        true
    }

    fn insert_at(&self, link: Link<T>, value: T) -> Box<Node<T>> {
        let mut node = match link {
            Some(node) => node,
            None => return Box::new(Node::new(value)),
        };

        // Split a virtual 4-node on the way down. This briefly surfaces a
        // red-red violation which the checks below clean up on the way back.
        if is_red(&node.right) {
            node.flip_colors();
        }

        if let Ordering::Less = (self.cmp)(&value, &node.value) {
            node.left = Some(self.insert_at(node.left.take(), value));
        } else {
            node.right = Some(self.insert_at(node.right.take(), value));
        }

        if is_red(&node.right) {
            node = Node::rotate(node, Direction::Left);
        }

        if is_red(&node.left) && node.left.as_ref().map_or(false, |left| is_red(&left.left)) {
            node = Node::rotate(node, Direction::Right);
        }

        node
    }

    /// Removes one element comparing equal to `value` from the subtree rooted
    /// at `node`, returning the replacement subtree. The caller has already
    /// established that such an element exists down this path.
    fn remove_at(&mut self, mut node: Box<Node<T>>, value: &T) -> Link<T> {
        if (self.cmp)(value, &node.value) == Ordering::Less {
            // Never step left into a 2-node: push a red link down first so
            // the removal below never has to delete through a black link.
            if is_two_node(&node.left) {
                node = Node::move_red(node, Direction::Left);
            }

            if let Some(left) = node.left.take() {
                node.left = self.remove_at(left, value);
            }
        } else {
            // Restore the left lean before deciding to stop here or go right.
            if is_red(&node.left) {
                node = Node::rotate(node, Direction::Right);
            }

            if (self.cmp)(value, &node.value) == Ordering::Equal
                && node.left.is_none()
                && node.right.is_none()
            {
                self.len -= 1;
                return None;
            }

            if node.right.is_some() {
                if is_two_node(&node.right) {
                    node = Node::move_red(node, Direction::Right);
                }

                if (self.cmp)(value, &node.value) == Ordering::Equal {
                    // Two children: lift the successor's value into this node
                    // and unlink the successor from the right subtree instead.
                    let right = node.right.take().expect("right child checked above");
                    let (right, successor) = self.remove_min_at(right);
                    node.value = successor;
                    node.right = right;
                } else {
                    let right = node.right.take().expect("right child checked above");
                    node.right = self.remove_at(right, value);
                }
            }
        }

        Some(Node::fixup(node))
    }

    /// Unlinks the minimum node of the subtree rooted at `node`, returning
    /// the replacement subtree and the unlinked value.
    fn remove_min_at(&mut self, mut node: Box<Node<T>>) -> (Link<T>, T) {
        if node.left.is_some() {
            if is_two_node(&node.left) {
                node = Node::move_red(node, Direction::Left);
            }

            let left = node.left.take().expect("moving red keeps the left child");
            let (left, min) = self.remove_min_at(left);
            node.left = left;

            (Some(Node::fixup(node)), min)
        } else {
            self.len -= 1;
            let Node { value, right, .. } = *node;
            (right, value)
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

/// Which of the two single rotations to perform. There is no third case; an
/// exhaustive `match` on this enum is the whole "invalid direction" story.
#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// The color of the link from this node's parent. New nodes always hang
    /// off a red link; the tree forces the root link black afterwards.
    red: bool,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            red: true,
        }
    }

    /// Single rotation in the given direction. The promoted child inherits
    /// this node's link color and this node turns red underneath it; without
    /// the color transfer a rotation would break the black balance.
    fn rotate(mut node: Box<Self>, direction: Direction) -> Box<Self> {
        let mut pivot = match direction {
            Direction::Left => {
                let mut pivot = node.right.take().expect("rotating left requires a right child");
                node.right = pivot.left.take();
                pivot
            }
            Direction::Right => {
                let mut pivot = node.left.take().expect("rotating right requires a left child");
                node.left = pivot.right.take();
                pivot
            }
        };

        pivot.red = node.red;
        node.red = true;

        match direction {
            Direction::Left => pivot.left = Some(node),
            Direction::Right => pivot.right = Some(node),
        }

        pivot
    }

    /// Inverts the color of this node's own link and of both children's
    /// links. An absent child is left alone.
    fn flip_colors(&mut self) {
        self.red = !self.red;

        if let Some(left) = self.left.as_mut() {
            left.red = !left.red;
        }
        if let Some(right) = self.right.as_mut() {
            right.red = !right.red;
        }
    }

    /// Pushes a red link down into the child in the given direction so that
    /// the removal descending there never deletes through a black link. The
    /// color flip may overshoot; the grandchild checks rotate the surplus
    /// redness back out.
    fn move_red(mut node: Box<Self>, direction: Direction) -> Box<Self> {
        node.flip_colors();

        match direction {
            Direction::Left => {
                if node.right.as_ref().map_or(false, |right| is_red(&right.left)) {
                    let right = node.right.take().expect("red grandchild implies a right child");
                    node.right = Some(Self::rotate(right, Direction::Right));
                    node = Self::rotate(node, Direction::Left);
                    node.flip_colors();
                }
            }
            Direction::Right => {
                if node.left.as_ref().map_or(false, |left| is_red(&left.left)) {
                    node = Self::rotate(node, Direction::Right);
                    node.flip_colors();
                }
            }
        }

        node
    }

    /// Restores the LLRB invariants at this node after a removal step, in
    /// this order: lean a red right link left, straighten a left-left double
    /// red, split a node with two red children, then re-fix the left child
    /// if the rotations left it with a right-leaning red link.
    fn fixup(mut node: Box<Self>) -> Box<Self> {
        if is_red(&node.right) {
            node = Self::rotate(node, Direction::Left);
        }

        if is_red(&node.left) && node.left.as_ref().map_or(false, |left| is_red(&left.left)) {
            node = Self::rotate(node, Direction::Right);
        }

        if is_red(&node.left) && is_red(&node.right) {
            node.flip_colors();
        }

        if node.left.as_ref().map_or(false, |left| is_red(&left.right)) {
            let left = node.left.take().expect("red grandchild implies a left child");
            node.left = Some(Self::fixup(left));
        }

        node
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("red", &self.red)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

/// An absent child is black.
fn is_red<T>(link: &Link<T>) -> bool {
    link.as_ref().map_or(false, |node| node.red)
}

/// A present node whose left link is not red. The LLRB analogue of a 2-node
/// in a 2-3 tree: it cannot donate a key without rebalancing.
fn is_two_node<T>(link: &Link<T>) -> bool {
    link.as_ref().map_or(false, |node| !is_red(&node.left))
}
