use crate::queue::{Node, Queue};
use std::ptr::NonNull;

type NodePtr = NonNull<Node<String>>;

/// Stable merge sort over the forward links.
///
/// The ring is treated as a forward-linked chain terminated by the ghost
/// node: the chain is split top-down at the midpoint (slow/fast traversal),
/// each half is sorted recursively, and the halves are merged by repeatedly
/// taking the smaller front node, ties taking the left operand. The `prev`
/// links are garbage while this runs; [`relink`] rebuilds them and restores
/// circularity in a single forward pass at the end.
pub(super) fn merge_sort(queue: &mut Queue) {
    let ghost = queue.ghost_node();
    let head = queue.front_node();
    // Nothing to do with fewer than two elements.
    if head == ghost || unsafe { head.as_ref() }.next == ghost {
        return;
    }
    // SAFETY: `head..ghost` is the whole chain of data nodes, and the queue
    // is not touched again until `relink` restores the invariant.
    unsafe {
        let head = sort_chain(head, ghost);
        relink(queue, head);
    }
}

/// Sort the chain `head..ghost` by its forward links only, returning the new
/// head. Recursion depth is logarithmic in the chain length.
unsafe fn sort_chain(head: NodePtr, ghost: NodePtr) -> NodePtr {
    if head == ghost || head.as_ref().next == ghost {
        return head;
    }
    // `slow` ends on the last node of the first half: `fast` starts one
    // ahead and advances two nodes per step of `slow`.
    let mut slow = head;
    let mut fast = head.as_ref().next;
    while fast != ghost && fast.as_ref().next != ghost {
        slow = slow.as_ref().next;
        fast = fast.as_ref().next.as_ref().next;
    }
    let second = slow.as_ref().next;
    slow.as_mut().next = ghost; // cut the first half's forward link

    let left = sort_chain(head, ghost);
    let right = sort_chain(second, ghost);
    merge_chains(left, right, ghost)
}

/// Merge two sorted chains, both terminated by the ghost node, into one.
/// Ties take the node from `left`, which keeps the sort stable.
unsafe fn merge_chains(mut left: NodePtr, mut right: NodePtr, ghost: NodePtr) -> NodePtr {
    let head = if right.as_ref().element < left.as_ref().element {
        take_front(&mut right)
    } else {
        take_front(&mut left)
    };
    let mut tail = head;
    loop {
        if left == ghost {
            tail.as_mut().next = right;
            break;
        }
        if right == ghost {
            tail.as_mut().next = left;
            break;
        }
        let node = if right.as_ref().element < left.as_ref().element {
            take_front(&mut right)
        } else {
            take_front(&mut left)
        };
        tail.as_mut().next = node;
        tail = node;
    }
    head
}

/// Detach and return the front node of a chain, advancing the chain to its
/// successor.
unsafe fn take_front(chain: &mut NodePtr) -> NodePtr {
    let node = *chain;
    *chain = node.as_ref().next;
    node
}

/// Splice the sorted forward chain back onto the ghost node, then rebuild
/// every `prev` link from its predecessor in one forward pass, restoring
/// circularity.
unsafe fn relink(queue: &mut Queue, head: NodePtr) {
    let mut ghost = queue.ghost_node();
    ghost.as_mut().next = head;
    let mut prev = ghost;
    let mut node = head;
    while node != ghost {
        node.as_mut().prev = prev;
        prev = node;
        node = node.as_ref().next;
    }
    ghost.as_mut().prev = prev;
}
