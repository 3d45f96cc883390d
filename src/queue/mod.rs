use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Iter, IterMut};

pub mod iterator;

mod algorithms;

/// The `Queue` is a queue of owned strings, implemented as a cyclic
/// doubly-linked list. It supports inserting and removing elements at both
/// ends in constant time, and a set of in-place structural transforms.
///
/// The `Queue` contains a pointer `ghost` that points to the ghost node,
/// the anchor of the cycle. The ghost node is never a data element: an empty
/// queue is the ghost node linked to itself in both directions, and every
/// traversal is complete when it returns to the ghost node.
///
/// There is no cached element count; [`len`](Queue::len) walks the ring in
/// *O*(*n*) time.
pub struct Queue {
    ghost: Box<Node<Erased>>,
    _marker: PhantomData<Box<Node<String>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

// private methods
impl Queue {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<String>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<String>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or
        // the first element in the queue).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() })
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<String>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or
        // the last element in the queue).
        NonNull::from(unsafe { self.ghost_node().as_ref().prev.as_ref() })
    }

    /// Detach a single node `node` from the queue, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// queue, or whether it is a data node (detaching the ghost node is
    /// never valid).
    ///
    /// If `node` does not belong to the queue, this function call will make
    /// the queue ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<String>>) -> Box<Node<String>> {
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the queue, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the queue, or whether `prev` and `next` are adjacent (only
    /// in `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the queue, or they are not
    /// adjacent nodes, this function call will make the queue ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<String>>,
        next: NonNull<Node<String>>,
        node: NonNull<Node<String>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }
}

impl Queue {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = new_ghost();
        let _marker = PhantomData;
        Self { ghost, _marker }
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.push_front("foo");
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the number of elements in the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation computes in *O*(*n*) time: there is no cached counter,
    /// so the ring is walked from the ghost node back to itself. Callers that
    /// query the size frequently must budget for the traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.len(), 0);
    ///
    /// queue.push_back("a");
    /// queue.push_back("b");
    /// assert_eq!(queue.len(), 2);
    ///
    /// queue.pop_front();
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        let ghost = self.ghost_node();
        let mut len = 0;
        let mut node = self.front_node();
        while node != ghost {
            len += 1;
            // SAFETY: `node` is a data node of the queue; its `next` link is
            // always valid.
            node = unsafe { node.as_ref() }.next;
        }
        len
    }

    /// Removes all elements from the `Queue`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("b");
    /// queue.push_front("a");
    /// assert_eq!(queue.front(), Some("a"));
    ///
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a view of the front value, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.push_front("one");
    /// assert_eq!(queue.front(), Some("one"));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so `ghost.next` is a data node.
        Some(unsafe { self.front_node().as_ref() }.element.as_str())
    }

    /// Provides a view of the back value, or `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.back(), None);
    ///
    /// queue.push_back("one");
    /// assert_eq!(queue.back(), Some("one"));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so `ghost.prev` is a data node.
        Some(unsafe { self.back_node().as_ref() }.element.as_str())
    }

    /// Inserts an element first in the queue, copying `value` into a fresh
    /// exactly-sized owned buffer.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_front("two");
    /// assert_eq!(queue.front(), Some("two"));
    ///
    /// queue.push_front("one");
    /// assert_eq!(queue.front(), Some("one"));
    /// ```
    pub fn push_front(&mut self, value: &str) {
        let node = Node::new_detached(value.to_owned());
        // SAFETY: `ghost` and `ghost.next` are adjacent nodes of the queue.
        unsafe { self.attach_node(self.ghost_node(), self.front_node(), node) };
    }

    /// Appends an element to the back of the queue, copying `value` into a
    /// fresh exactly-sized owned buffer.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("one");
    /// queue.push_back("three");
    /// assert_eq!(queue.back(), Some("three"));
    /// ```
    pub fn push_back(&mut self, value: &str) {
        let node = Node::new_detached(value.to_owned());
        // SAFETY: `ghost.prev` and `ghost` are adjacent nodes of the queue.
        unsafe { self.attach_node(self.back_node(), self.ghost_node(), node) };
    }

    /// Removes the first element and returns its owned value, or `None` if
    /// the queue is empty. On `None` the queue is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop_front(), None);
    ///
    /// queue.push_front("one");
    /// queue.push_front("three");
    /// assert_eq!(queue.pop_front().as_deref(), Some("three"));
    /// assert_eq!(queue.pop_front().as_deref(), Some("one"));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so `ghost.next` is a data node.
        let node = unsafe { self.detach_node(self.front_node()) };
        Some(Node::into_element(node))
    }

    /// Removes the last element and returns its owned value, or `None` if
    /// the queue is empty. On `None` the queue is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.pop_back(), None);
    /// queue.push_back("one");
    /// queue.push_back("three");
    /// assert_eq!(queue.pop_back().as_deref(), Some("three"));
    /// ```
    pub fn pop_back(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the queue is not empty, so `ghost.prev` is a data node.
        let node = unsafe { self.detach_node(self.back_node()) };
        Some(Node::into_element(node))
    }

    /// Removes the first element and copies its value into `buf`, truncated
    /// to `buf.len() - 1` bytes and followed by a NUL terminator; nothing is
    /// written if `buf` is empty. Returns the number of value bytes copied,
    /// or `None` if the queue is empty.
    ///
    /// This is for callers that hand in a fixed scratch buffer; the element
    /// itself is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("alphabet");
    ///
    /// let mut buf = [0u8; 4];
    /// assert_eq!(queue.pop_front_into(&mut buf), Some(3));
    /// assert_eq!(&buf, b"alp\0");
    /// assert!(queue.is_empty());
    /// ```
    pub fn pop_front_into(&mut self, buf: &mut [u8]) -> Option<usize> {
        let value = self.pop_front()?;
        Some(copy_truncated(&value, buf))
    }

    /// Removes the last element and copies its value into `buf`, with the
    /// same truncation contract as [`pop_front_into`](Queue::pop_front_into).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.push_back("one");
    /// queue.push_back("two");
    ///
    /// let mut buf = [0u8; 16];
    /// assert_eq!(queue.pop_back_into(&mut buf), Some(3));
    /// assert_eq!(&buf[..4], b"two\0");
    /// assert_eq!(queue.len(), 1);
    /// ```
    pub fn pop_back_into(&mut self, buf: &mut [u8]) -> Option<usize> {
        let value = self.pop_back()?;
        Some(copy_truncated(&value, buf))
    }

    /// Removes the element at index `n / 2` (0-indexed) and returns its
    /// value, or `None` if the queue is empty. A single-element queue becomes
    /// empty; a two-element queue loses its second element.
    ///
    /// The middle is found with a slow/fast cursor walk, so this computes in
    /// one pass without knowing `n` up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e"]);
    /// assert_eq!(queue.remove_middle().as_deref(), Some("c"));
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "d", "e"]));
    ///
    /// let mut queue = Queue::from_iter(["a", "b"]);
    /// assert_eq!(queue.remove_middle().as_deref(), Some("b"));
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.remove_middle(), None);
    /// ```
    pub fn remove_middle(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let ghost = self.ghost_node();
        let mut slow = self.front_node();
        let mut fast = slow;
        // SAFETY: `slow` and `fast` only ever hold data nodes of the queue;
        // both walks stop at the ghost node.
        unsafe {
            while fast != ghost && fast.as_ref().next != ghost {
                slow = slow.as_ref().next;
                fast = fast.as_ref().next.as_ref().next;
            }
            let node = self.detach_node(slow);
            Some(Node::into_element(node))
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.push_back("a");
    /// queue.push_back("b");
    ///
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next(), Some("b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b"]);
    ///
    /// for value in queue.iter_mut() {
    ///     value.make_ascii_uppercase();
    /// }
    ///
    /// assert_eq!(queue, Queue::from_iter(["A", "B"]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. The links are dangling
    /// placeholders and must be set before they are read; attaching the node
    /// does so.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY: `ghost.next`, `ghost.prev` are initialized immediately after
    // creating `ghost`, and `ghost.element` carries no data.
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let len = value.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&value.as_bytes()[..len]);
    buf[len] = 0;
    len
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

// The raw node pointers are an implementation detail; the queue exclusively
// owns its nodes and the `String` payload is both `Send` and `Sync`.
unsafe impl Send for Queue {}

unsafe impl Sync for Queue {}

#[cfg(test)]
pub(crate) fn check_links(queue: &Queue) {
    // Walk the full ring (ghost included) and verify that every forward link
    // is mirrored by the matching backward link, and that the data-node
    // count agrees with `len`.
    unsafe {
        let ghost = queue.ghost_node();
        let mut count = 0;
        let mut node = ghost;
        loop {
            let next = node.as_ref().next;
            assert_eq!(next.as_ref().prev, node);
            node = next;
            if node == ghost {
                break;
            }
            count += 1;
        }
        assert_eq!(count, queue.len());
    }
}
