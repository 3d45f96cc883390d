use crate::queue::Queue;
use std::mem;

mod sort;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl Clone for Queue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl Queue {
    /// Returns `true` if the `Queue` contains a value equal to the given
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["a", "b"]);
    ///
    /// assert_eq!(queue.contains("a"), true);
    /// assert_eq!(queue.contains("z"), false);
    /// ```
    pub fn contains(&self, value: &str) -> bool {
        self.iter().any(|e| e == value)
    }

    /// Removes every element whose value appears more than once, leaving
    /// only the values that were unique. The queue **must already be sorted**
    /// (as produced by [`sort`](Queue::sort)): duplicates are detected by
    /// comparing adjacent elements only, so equal values that are not
    /// adjacent survive.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c", "c"]);
    /// queue.remove_duplicates();
    /// assert_eq!(queue, Queue::from_iter(["b"]));
    /// ```
    pub fn remove_duplicates(&mut self) {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        // SAFETY: `node` and `next` only ever hold data nodes of the queue;
        // a node is detached only after the walk has moved past it.
        unsafe {
            while node != ghost {
                let mut next = node.as_ref().next;
                if next != ghost && next.as_ref().element == node.as_ref().element {
                    // Release the whole equal run, first node included.
                    while next != ghost && next.as_ref().element == node.as_ref().element {
                        let after = next.as_ref().next;
                        drop(self.detach_node(next));
                        next = after;
                    }
                    drop(self.detach_node(node));
                }
                node = next;
            }
        }
    }

    /// Swaps the values of each adjacent pair of elements: the first with
    /// the second, the third with the fourth, and so on. The nodes stay in
    /// place; only the values move. A trailing unpaired element is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3"]);
    /// queue.swap_pairs();
    /// assert_eq!(queue, Queue::from_iter(["2", "1", "3"]));
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        // SAFETY: `node` and its successor are data nodes whenever the loop
        // body runs; the walk stops at the ghost node.
        unsafe {
            while node != ghost && node.as_ref().next != ghost {
                let mut next = node.as_ref().next;
                mem::swap(&mut node.as_mut().element, &mut next.as_mut().element);
                node = next.as_ref().next;
            }
        }
    }

    /// Reverses the order of the values by walking two cursors inward from
    /// both ends, swapping values until the cursors meet or become adjacent.
    /// No links are rewired.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.reverse();
    /// assert_eq!(queue, Queue::from_iter(["5", "4", "3", "2", "1"]));
    /// ```
    pub fn reverse(&mut self) {
        if self.is_empty() {
            return;
        }
        let mut front = self.front_node();
        let mut back = self.back_node();
        // SAFETY: `front` and `back` are data nodes of a non-empty queue and
        // approach each other one step per swap, so neither crosses the
        // ghost node.
        unsafe {
            while front != back {
                mem::swap(&mut front.as_mut().element, &mut back.as_mut().element);
                if front.as_ref().next == back {
                    break;
                }
                front = front.as_ref().next;
                back = back.as_ref().prev;
            }
        }
    }

    /// Sorts the queue in ascending byte-wise order.
    ///
    /// This sort is stable (i.e., does not reorder equal values).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) additional space (the recursion). No elements are
    /// allocated or copied; only links are rewired.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort over the forward
    /// links; the backward links are reconstructed in one pass at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["e", "b", "d", "c", "a"]);
    ///
    /// queue.sort();
    ///
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "c", "d", "e"]));
    /// ```
    pub fn sort(&mut self) {
        sort::merge_sort(self);
    }
}

#[cfg(test)]
mod tests {
    use crate::queue::{check_links, Node, Queue};
    use rand::{thread_rng, Rng};
    use std::iter::FromIterator;

    /// Node addresses of every element equal to `value`, in queue order.
    fn addresses_of(queue: &Queue, value: &str) -> Vec<*const Node<String>> {
        let ghost = queue.ghost_node();
        let mut out = Vec::new();
        let mut node = queue.front_node();
        while node != ghost {
            let current = unsafe { node.as_ref() };
            if current.element == value {
                out.push(node.as_ptr() as *const _);
            }
            node = current.next;
        }
        out
    }

    #[test]
    fn contains_value() {
        let queue = Queue::from_iter(["a", "b", "c"]);
        assert!(queue.contains("b"));
        assert!(!queue.contains("d"));
        assert!(!Queue::new().contains("a"));
    }

    #[test]
    fn remove_duplicates_keeps_unique_values() {
        let mut queue = Queue::from_iter(["a", "a", "b", "c", "c", "c"]);
        queue.remove_duplicates();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["b"]));
    }

    #[test]
    fn remove_duplicates_on_unique_input_is_noop() {
        let mut queue = Queue::from_iter(["a", "b", "c"]);
        queue.remove_duplicates();
        assert_eq!(queue, Queue::from_iter(["a", "b", "c"]));
    }

    #[test]
    fn remove_duplicates_on_all_equal_input_empties() {
        let mut queue = Queue::from_iter(["a", "a", "a", "a"]);
        queue.remove_duplicates();
        check_links(&queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn remove_duplicates_with_run_at_tail() {
        let mut queue = Queue::from_iter(["a", "b", "b"]);
        queue.remove_duplicates();
        assert_eq!(queue, Queue::from_iter(["a"]));

        let mut queue = Queue::new();
        queue.remove_duplicates();
        assert!(queue.is_empty());
    }

    #[test]
    fn swap_pairs_even_and_odd() {
        let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
        queue.swap_pairs();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["2", "1", "4", "3"]));

        let mut queue = Queue::from_iter(["1", "2", "3"]);
        queue.swap_pairs();
        assert_eq!(queue, Queue::from_iter(["2", "1", "3"]));

        let mut queue = Queue::from_iter(["1"]);
        queue.swap_pairs();
        assert_eq!(queue, Queue::from_iter(["1"]));

        let mut queue = Queue::new();
        queue.swap_pairs();
        assert!(queue.is_empty());
    }

    #[test]
    fn reverse_queue() {
        let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
        queue.reverse();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["5", "4", "3", "2", "1"]));

        let mut queue = Queue::from_iter(["1", "2", "3", "4"]);
        queue.reverse();
        assert_eq!(queue, Queue::from_iter(["4", "3", "2", "1"]));

        let mut queue = Queue::from_iter(["1"]);
        queue.reverse();
        assert_eq!(queue, Queue::from_iter(["1"]));

        let mut queue = Queue::new();
        queue.reverse();
        assert!(queue.is_empty());
    }

    #[test]
    fn sort_orders_bytewise() {
        let mut queue = Queue::from_iter(["pear", "apple", "Banana", "fig"]);
        queue.sort();
        check_links(&queue);
        // Byte-wise comparison puts uppercase before lowercase.
        assert_eq!(
            queue,
            Queue::from_iter(["Banana", "apple", "fig", "pear"])
        );
    }

    #[test]
    fn sort_short_queues() {
        let mut queue = Queue::new();
        queue.sort();
        assert!(queue.is_empty());

        let mut queue = Queue::from_iter(["only"]);
        queue.sort();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["only"]));

        let mut queue = Queue::from_iter(["b", "a"]);
        queue.sort();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["a", "b"]));
    }

    #[test]
    fn sort_is_idempotent() {
        let mut queue = Queue::from_iter(["c", "a", "b"]);
        queue.sort();
        let sorted = queue.clone();
        queue.sort();
        assert_eq!(queue, sorted);
    }

    #[test]
    fn sort_is_stable() {
        let mut queue = Queue::from_iter(["b", "a", "b", "a", "a"]);
        let a_before = addresses_of(&queue, "a");
        let b_before = addresses_of(&queue, "b");

        queue.sort();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["a", "a", "a", "b", "b"]));

        // Equal values keep their original relative node order.
        assert_eq!(addresses_of(&queue, "a"), a_before);
        assert_eq!(addresses_of(&queue, "b"), b_before);
    }

    #[test]
    fn sort_matches_slice_sort() {
        let mut rng = thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(0..40);
            let mut values: Vec<String> = (0..len)
                .map(|_| format!("s{}", rng.gen_range(0..10)))
                .collect();
            let mut queue = Queue::from_iter(values.iter());
            queue.sort();
            check_links(&queue);
            values.sort();
            assert_eq!(Vec::from_iter(queue), values);
        }
    }

    #[test]
    fn sort_then_remove_duplicates() {
        let mut queue = Queue::from_iter(["c", "a", "c", "b", "a", "c"]);
        queue.sort();
        queue.remove_duplicates();
        check_links(&queue);
        assert_eq!(queue, Queue::from_iter(["b"]));
    }
}
