//! This crate provides a queue of owned strings, implemented as a cyclic
//! doubly-linked list.
//!
//! The [`Queue`] supports insertion and removal at both ends in constant
//! time, plus a set of whole-structure transforms: middle deletion,
//! duplicate pruning on a sorted queue, pairwise value swapping, reversal,
//! and a stable in-place merge sort. Querying the number of elements takes
//! *O*(*n*) time.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//!
//! queue.push_back("bravo");
//! queue.push_back("alpha");
//! queue.push_front("charlie"); // queue is [charlie, bravo, alpha]
//!
//! queue.sort(); // queue is [alpha, bravo, charlie]
//! assert_eq!(queue.front(), Some("alpha"));
//!
//! assert_eq!(queue.pop_front(), Some(String::from("alpha")));
//! assert_eq!(queue.pop_back(), Some(String::from("charlie")));
//! assert_eq!(queue.len(), 1);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║  String   ║           ║  String   ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     Queue
//! ```
//!
//! Each node of the queue is allocated on the heap and contains:
//! - the `next` pointer that points to the next node (or the ghost node if
//!   it is the last element in the queue);
//! - the `prev` pointer that points to the previous node (or the ghost node
//!   if it is the first element in the queue);
//! - one owned `String` value, copied from the caller at insertion time,
//!   except the ghost node.
//!
//! Note that the ghost node has *NO* payload.
//!
//! Initially, there is a ghost node in an empty queue, of which the `next`
//! and `prev` pointer point to itself. Traversal never meets a null link;
//! it is complete when it returns to the ghost node.
//!
//! As elements are inserted, `ghost.next` points to the first element, and
//! `ghost.prev` points to the last element of the queue. Removing an element
//! re-links its former neighbours and hands the owned value back to the
//! caller; the queue keeps exclusive ownership of everything still linked.
//!
//! # Iteration
//!
//! Iterating over a queue is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the queue like an array
//! (fused and non-cyclic). [`IterMut`] provides mutability of the values
//! (but not the linked structure of the queue).
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["a", "b", "c"]);
//! let mut iter = queue.iter();
//! assert_eq!(iter.next(), Some("a"));
//! assert_eq!(iter.next(), Some("b"));
//! assert_eq!(iter.next(), Some("c"));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! queue.iter_mut().for_each(|value| value.push('!'));
//! assert_eq!(queue, Queue::from_iter(["a!", "b!", "c!"]));
//! ```
//!
//! # Transforms
//!
//! The structural transforms rewire or rewrite the existing nodes in place;
//! none of them allocates new elements.
//!
//! - [`sort`]: stable ascending merge sort by byte-wise comparison;
//! - [`remove_duplicates`]: on a sorted queue, removes every value that
//!   appears more than once;
//! - [`remove_middle`]: removes the element at index `n / 2`;
//! - [`swap_pairs`]: swaps the values of each adjacent pair;
//! - [`reverse`]: reverses the order of the values.
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["cc", "aa", "bb", "aa"]);
//!
//! queue.sort(); // becomes [aa, aa, bb, cc]
//! queue.remove_duplicates(); // becomes [bb, cc]
//! queue.reverse(); // becomes [cc, bb]
//!
//! assert_eq!(queue, Queue::from_iter(["cc", "bb"]));
//! ```
//!
//! [`Queue`]: crate::Queue
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`sort`]: crate::Queue::sort
//! [`remove_duplicates`]: crate::Queue::remove_duplicates
//! [`remove_middle`]: crate::Queue::remove_middle
//! [`swap_pairs`]: crate::Queue::swap_pairs
//! [`reverse`]: crate::Queue::reverse

#[doc(inline)]
pub use queue::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use queue::Queue;

pub mod queue;

mod experiments;
