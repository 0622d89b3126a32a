//! Store Module
//!
//! The in-memory list and its persistence.
//!
//! ## Responsibilities
//! - Keep items in insertion order
//! - O(1) existence checks through a value index kept in sync with the items
//! - Track `changed` and `last_modified` across mutations
//! - Load from and save to the line format in `codec`
//!
//! ## Data Structure Choice
//! `Vec<Item>` for order plus `HashMap<String, usize>` counting how many
//! items carry each value. Counting keeps `exists` correct when a duplicate
//! added with `add` is removed while another copy remains.
//!
//! Single-writer, single-reader. Nothing here locks.

mod list;
mod persist;

pub use list::FileList;
