//! A red-black tree ordered map for Rust.
//!
//! This crate provides [`RedBlackTree`], an ordered key-value container that keeps itself balanced
//! with the classic red-black rules, so insert, remove and search are O(log n) worst case.
//!
//! # Example
//!
//! ```
//! use beni_tree::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [13, 8, 17, 1, 11, 15, 25, 22, 27, 6] {
//!     assert!(tree.insert(key, key * 10));
//! }
//!
//! // Keys are unique: a second insert is refused and the first value is kept.
//! assert!(!tree.insert(13, 0));
//! assert_eq!(tree.search(&13), Some(&130));
//!
//! assert!(tree.remove(&25));
//! assert_eq!(tree.len(), 9);
//!
//! let keys: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(keys, [1, 6, 8, 11, 13, 15, 17, 22, 27]);
//!
//! // The shape of the tree can be inspected read-only.
//! assert_eq!(tree.root().map(|root| root.color()), Some(Color::Black));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Insert if absent** - [`insert`](RedBlackTree::insert) never overwrites an existing entry
//! - **Arena storage** - Nodes live in one vector and link to each other by index; freed slots
//!   are reused
//! - **Structural view** - [`NodeRef`] exposes colors and parent/sibling/uncle links for
//!   printers and auditors
//!
//! # Logging
//!
//! Rebalancing steps are reported through the [`log`](https://docs.rs/log) facade at `trace`
//! level, and refused inserts and removes at `debug` level. Nothing is printed unless the host
//! installs a logger.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod color;
mod error;
mod raw;

pub mod red_black_tree;

pub use color::Color;
pub use error::Error;
pub use red_black_tree::{NodeRef, RedBlackTree};
