//! Foundational collection types.
//!
//! The crate is `no_std`; containers that allocate pull in [`alloc`].

#![no_std]

extern crate alloc;

pub mod linked_list;
