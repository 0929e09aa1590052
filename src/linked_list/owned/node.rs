use core::alloc::Layout;
use core::ptr::NonNull;

use alloc::alloc::{alloc, dealloc};

/// A heap-allocated element of a singly linked list.
/// The list creates nodes on insertion and frees them on removal; callers
/// only ever hold `NonNull<Node<T>>` positions into the chain.
pub struct Node<T> {
    data: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Allocates a node holding `data`, already linked to `next`.
    ///
    /// Hands `data` back on allocation failure so the caller keeps
    /// ownership of the payload.
    pub(crate) fn try_alloc(
        data: T,
        next: Option<NonNull<Node<T>>>,
    ) -> Result<NonNull<Node<T>>, T> {
        // The link field is pointer sized, so the layout is never zero sized.
        let layout = Layout::new::<Node<T>>();
        let ptr = unsafe { alloc(layout) }.cast::<Node<T>>();
        let Some(node) = NonNull::new(ptr) else {
            return Err(data);
        };
        unsafe { node.as_ptr().write(Node { data, next }) };
        Ok(node)
    }

    /// Frees the node wrapper and moves the payload out.
    ///
    /// # Safety
    ///
    /// `node` must have been produced by [`Node::try_alloc`] and must no
    /// longer be reachable from any list.
    pub(crate) unsafe fn reclaim(node: NonNull<Node<T>>) -> T {
        let layout = Layout::new::<Node<T>>();
        unsafe {
            let Node { data, .. } = node.as_ptr().read();
            dealloc(node.as_ptr().cast(), layout);
            data
        }
    }

    /// Get the payload stored in the node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get a mutable reference to the payload stored in the node.
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Get the successor of the node, `None` when the node is the tail.
    pub fn next(&self) -> Option<NonNull<Node<T>>> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.next = next;
    }
}
