//! An experimental, fully safe rendition of the string queue: the two link
//! halves of every node are fractional [`StaticRc`]s, and node interiors are
//! only reachable through a [`GhostToken`]. It supports the end primitives
//! but none of the structural transforms, and is kept as a correctness
//! oracle for the pointer-based engine.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

const HEAD: usize = 0;
const TAIL: usize = 1;

/// A safe string deque. `links[HEAD]`/`links[TAIL]` hold one half of the end
/// node on that side; a node's `links[side]` holds one half of its neighbour
/// toward `side`, or `None` at the ends. Every node therefore has exactly
/// two halves held somewhere, and joining them releases it.
pub struct SafeQueue<'id> {
    links: [Option<NodePtr<'id>>; 2],
    len: usize,
}

struct Node<'id> {
    links: [Option<NodePtr<'id>>; 2],
    value: String,
}

type NodePtr<'id> = Half<GhostCell<'id, Node<'id>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id> Node<'id> {
    fn new(value: String) -> Self {
        let links = [None, None];
        Self { links, value }
    }
}

impl<'id> Default for SafeQueue<'id> {
    fn default() -> Self {
        let links = [None, None];
        Self { links, len: 0 }
    }
}

impl<'id> SafeQueue<'id> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.links[HEAD].is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push_front(&mut self, value: &str, token: &mut GhostToken<'id>) {
        self.push_at(HEAD, value, token);
    }

    pub fn push_back(&mut self, value: &str, token: &mut GhostToken<'id>) {
        self.push_at(TAIL, value, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<String> {
        self.pop_at(HEAD, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<String> {
        self.pop_at(TAIL, token)
    }

    fn push_at(&mut self, side: usize, value: &str, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (a, b) = Full::split(Full::new(GhostCell::new(Node::new(value.to_owned()))));
        match self.links[side].take() {
            Some(old_end) => {
                // The old end gains the new node as its `side` neighbour;
                // the new node's `oppo` neighbour is the old end.
                old_end.deref().borrow_mut(token).links[side] = Some(b);
                a.deref().borrow_mut(token).links[oppo] = Some(old_end);
            }
            None => self.links[oppo] = Some(b),
        }
        self.links[side] = Some(a);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<String> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let end = self.links[side].take()?;
        let other = match end.deref().borrow_mut(token).links[oppo].take() {
            Some(neighbour) => {
                // The neighbour's `side` link holds the end node's other
                // half; the neighbour becomes the new end.
                let other = neighbour.deref().borrow_mut(token).links[side]
                    .take()
                    .unwrap();
                self.links[side] = Some(neighbour);
                other
            }
            None => self.links[oppo].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(end, other)).into_inner().value)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::SafeQueue;
    use crate::Queue;
    use ghost_cell::GhostToken;
    use rand::{thread_rng, Rng};

    #[test]
    fn safe_queue_push_pop() {
        GhostToken::new(|mut token| {
            let mut queue = SafeQueue::new();
            assert!(queue.is_empty());
            queue.push_back("1", &mut token);
            queue.push_front("2", &mut token);
            assert_eq!(queue.len(), 2);
            assert_eq!(queue.pop_back(&mut token).as_deref(), Some("1"));
            assert_eq!(queue.pop_front(&mut token).as_deref(), Some("2"));
            assert!(queue.is_empty());
            assert_eq!(queue.pop_front(&mut token), None);
        })
    }

    #[test]
    fn safe_queue_matches_pointer_queue() {
        GhostToken::new(|mut token| {
            let mut rng = thread_rng();
            let mut safe = SafeQueue::new();
            let mut queue = Queue::new();
            for _ in 0..1000 {
                let value = format!("v{}", rng.gen_range(0..10));
                match rng.gen_range(0..4) {
                    0 => {
                        safe.push_front(&value, &mut token);
                        queue.push_front(&value);
                    }
                    1 => {
                        safe.push_back(&value, &mut token);
                        queue.push_back(&value);
                    }
                    2 => assert_eq!(safe.pop_front(&mut token), queue.pop_front()),
                    _ => assert_eq!(safe.pop_back(&mut token), queue.pop_back()),
                }
                assert_eq!(safe.len(), queue.len());
                assert_eq!(safe.is_empty(), queue.is_empty());
            }
            // Drain both and compare the leftovers.
            while let Some(value) = safe.pop_front(&mut token) {
                assert_eq!(queue.pop_front(), Some(value));
            }
            assert!(queue.is_empty());
        })
    }
}
