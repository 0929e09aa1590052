use core::fmt;
use core::ptr::NonNull;

use alloc::boxed::Box;

use super::{
    error::{InsertError, RemoveError},
    node::Node,
};

/// An owned singly linked list.
///
/// The list exclusively owns every node in its chain. `head` and `tail`
/// are aliases into that chain, kept consistent by every mutating
/// operation; payload ownership moves into the list on insert and back
/// out on removal.
///
/// Two callbacks can be injected at construction: a matcher for payload
/// equality, stored purely for algorithms layered on top of the list (no
/// operation here ever calls it), and a destructor that [`clear`] and
/// `Drop` run on each payload still owned by the list.
///
/// [`clear`]: SinglyLinkedList::clear
pub struct SinglyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    matcher: Option<Box<dyn Fn(&T, &T) -> bool>>,
    destroy: Option<Box<dyn FnMut(T)>>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty linked list with no callbacks attached.
    pub const fn new() -> Self {
        SinglyLinkedList {
            head: None,
            tail: None,
            len: 0,
            matcher: None,
            destroy: None,
        }
    }

    /// Attach an equality matcher for the payload type.
    ///
    /// The matcher is configuration for structures built on top of the
    /// list; no list operation invokes it.
    pub fn with_matcher(mut self, matcher: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    /// Attach a destructor that consumes payloads still owned by the list
    /// when it is cleared or dropped.
    ///
    /// Payloads returned by [`remove_after`](Self::remove_after) or
    /// [`pop_front`](Self::pop_front) bypass the destructor; ownership of
    /// those goes back to the caller.
    pub fn with_destructor(mut self, destroy: impl FnMut(T) + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }

    /// Get the stored equality matcher, if one was attached.
    pub fn matcher(&self) -> Option<&(dyn Fn(&T, &T) -> bool)> {
        self.matcher.as_deref()
    }

    /// Insert `data` immediately after `position`, or at the head when
    /// `position` is `None`.
    ///
    /// The node is allocated before the chain is touched, so a failed
    /// insertion leaves the list unmodified and returns the payload
    /// inside the error.
    ///
    /// # Safety
    ///
    /// `position`, when `Some`, must be a node of this list.
    pub unsafe fn insert_after(
        &mut self,
        position: Option<NonNull<Node<T>>>,
        data: T,
    ) -> Result<(), InsertError<T>> {
        let next = match position {
            None => self.head,
            Some(pos) => unsafe { pos.as_ref().next() },
        };
        let node = match Node::try_alloc(data, next) {
            Ok(node) => node,
            Err(data) => return Err(InsertError::new(data)),
        };
        match position {
            None => {
                self.head = Some(node);
                if self.tail.is_none() {
                    self.tail = Some(node);
                }
            }
            Some(mut pos) => {
                unsafe { pos.as_mut().set_next(Some(node)) };
                if self.tail == Some(pos) {
                    self.tail = Some(node);
                }
            }
        }
        self.len += 1;
        Ok(())
    }

    /// Remove the node immediately after `position` and return its
    /// payload, or remove the head when `position` is `None`.
    ///
    /// Fails with [`RemoveError::Empty`] on an empty list and with
    /// [`RemoveError::NoSuccessor`] when `position` is the tail; either
    /// way the list is untouched. The stored destructor is not run, the
    /// payload goes back to the caller.
    ///
    /// # Safety
    ///
    /// `position`, when `Some`, must be a node of this list.
    pub unsafe fn remove_after(
        &mut self,
        position: Option<NonNull<Node<T>>>,
    ) -> Result<T, RemoveError> {
        let Some(head) = self.head else {
            return Err(RemoveError::Empty);
        };
        match position {
            None => unsafe {
                self.head = head.as_ref().next();
                if self.head.is_none() {
                    self.tail = None;
                }
                self.len -= 1;
                Ok(Node::reclaim(head))
            },
            Some(mut pos) => unsafe {
                let Some(removed) = pos.as_ref().next() else {
                    return Err(RemoveError::NoSuccessor);
                };
                pos.as_mut().set_next(removed.as_ref().next());
                if self.tail == Some(removed) {
                    self.tail = Some(pos);
                }
                self.len -= 1;
                Ok(Node::reclaim(removed))
            },
        }
    }

    /// Insert `data` at the head of the list.
    pub fn push_front(&mut self, data: T) -> Result<(), InsertError<T>> {
        unsafe { self.insert_after(None, data) }
    }

    /// Insert `data` after the tail of the list.
    pub fn push_back(&mut self, data: T) -> Result<(), InsertError<T>> {
        unsafe { self.insert_after(self.tail, data) }
    }

    /// Remove the head of the list and return its payload.
    pub fn pop_front(&mut self) -> Result<T, RemoveError> {
        unsafe { self.remove_after(None) }
    }

    /// Remove every node, running the stored destructor on each payload
    /// in head-to-tail order. The list stays usable afterwards.
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            unsafe {
                self.head = head.as_ref().next();
                if self.head.is_none() {
                    self.tail = None;
                }
                self.len -= 1;
                let data = Node::reclaim(head);
                if let Some(destroy) = self.destroy.as_mut() {
                    destroy(data);
                }
            }
        }
    }

    /// Get the head of the list.
    pub fn head(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    /// Get the tail of the list.
    pub fn tail(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Check whether `node` is the head of this list.
    pub fn is_head(&self, node: NonNull<Node<T>>) -> bool {
        self.head == Some(node)
    }

    /// Check whether `node` is the tail of this list.
    pub fn is_tail(&self, node: NonNull<Node<T>>) -> bool {
        self.tail == Some(node)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
