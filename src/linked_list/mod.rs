//! Linked list containers.
//!
//! The lists in this module own their nodes: inserting moves the payload
//! into a heap-allocated node, and removing moves it back out to the
//! caller. This is in contrast to an intrusive linked list, where the link
//! is embedded in the caller's own structure and the list never allocates.
//!
//! # Examples
//!
//! ```
//! use slink_collections::linked_list::owned::list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! list.push_back(1).unwrap();
//! list.push_back(2).unwrap();
//! list.push_back(3).unwrap();
//!
//! assert_eq!(list.len(), 3);
//!
//! let mut values = vec![];
//! let mut current = list.head();
//! while let Some(node) = current {
//!     let node_ref = unsafe { node.as_ref() };
//!     values.push(*node_ref.data());
//!     current = node_ref.next();
//! }
//! assert_eq!(values, vec![1, 2, 3]);
//! ```
pub mod owned;
