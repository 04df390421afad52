//! This library provides singly-linked lists built from shared, mutable cons cells.
//!
//! A list is a chain of cells, each holding a value and a reference to the next cell. The
//! empty list is the absence of a cell, so lists are passed around as `Option<Cons<T>>`.
//! Cells are reference counted and can be shared by several lists at once, a mutation made
//! through one handle is visible through every list reaching the mutated cell.
//!
//! There are two kinds of cells:
//!  * [`Cons`] - eager cells, whose tail is always known
//!  * [`LazyCons`] - cells whose tail is computed on first access and cached afterwards
//!
//! Both implement [`Chain`], which is all the [`fold`] module needs to fold them. [`Stack`] is a
//! last-in first-out stack on top of a [`Cons`] chain.
//!
//! Cells are not thread-safe and are meant to be used from a single thread.

pub mod fold;

mod chain;
mod cons;
mod error;
mod lazy;
mod stack;

pub use chain::{Chain, Iter};
pub use cons::Cons;
pub use error::{Error, Result};
pub use lazy::LazyCons;
pub use stack::Stack;
