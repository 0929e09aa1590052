//! # Owned Singly Linked List
//!
//! This module provides a singly linked list that owns its elements.
//!
//! ## Core Components
//!
//! - [`list::SinglyLinkedList`]: the list itself, with positional insert
//!   and remove plus `push`/`pop` conveniences for the ends it tracks.
//! - [`node::Node`]: a heap-allocated chain element holding one payload.
//! - [`error`]: failure types for insertion and removal.
//!
//! ## Safety
//!
//! Positional operations take raw node pointers. The user of this module
//! is responsible for upholding several invariants:
//!
//! - A position passed to `insert_after` or `remove_after` must be a node
//!   of that same list.
//! - A node pointer must not be used after the node has been removed or
//!   the list has been cleared or dropped.
//! - Payloads read through a node pointer must not outlive the node.

pub mod error;
pub mod list;
pub mod node;
