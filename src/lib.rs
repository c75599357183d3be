//! This crate exposes a self-balancing ordered set built on a Left-Leaning
//! Red-Black tree (LLRB).
//!
//! ## Left-Leaning Red-Black Tree
//!
//! An LLRB is a Binary Search Tree whose links carry a color, red or black,
//! encoding a 2-3 tree inside the binary structure. On top of the usual BST
//! ordering invariants, an LLRB maintains:
//!
//! 1. Every red link leans left: a red link never ends up pointing at a
//!    right child once an operation returns.
//! 2. No two consecutive red links appear down a left chain.
//! 3. Every path from the root to an absent child crosses the same number
//!    of black links.
//!
//! > The third invariant is the load-bearing one: it bounds the height of a
//! > tree with `N` nodes at `2 * log2(N + 1)`, so inserts, removals, and
//! > membership checks all run in `O(lg N)`.
//!
//! The interesting part is keeping those invariants true across arbitrary
//! insert/remove sequences. The LLRB discipline does it with a small set of
//! local operations, rotations and color flips, applied bottom-up as each
//! recursive call hands its possibly-replaced subtree back to its parent.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;
