use std::any;

use tracing::trace;

use crate::{Cons, Error, Result};

/// Last-in first-out stack built on a [`Cons`] chain.
///
/// The stack holds the head of a chain: pushing puts a new cell in front of it, popping
/// moves the head one cell further. The chain is never mutated, only the head is replaced,
/// so a chain obtained through [`Stack::chain`] keeps its contents whatever happens to the
/// stack afterwards.
pub struct Stack<T> {
    top: Option<Cons<T>>,
}

impl<T> Stack<T>
where
    T: Clone,
{
    /// Create a new, empty [`Stack`].
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Put `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.top = Some(Cons::new(value, self.top.take()));

        trace!("pushed a value");
    }

    /// Remove the value on top of the stack and return it.
    ///
    /// Fails with [`Error::EmptyContainer`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        let top = self.top.take().ok_or(Error::EmptyContainer {
            container: any::type_name::<Self>(),
        })?;

        self.top = top.tail();
        trace!("popped a value");

        Ok(top.value())
    }

    /// Remove the value on top of the stack and return it, or return `default` if the stack is
    /// empty.
    pub fn pop_or(&mut self, default: T) -> T {
        self.pop().unwrap_or(default)
    }

    /// Value on top of the stack, if any, without removing it.
    pub fn peek(&self) -> Option<T> {
        self.top.as_ref().map(Cons::value)
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// The chain currently held by the stack, from the top to the bottom.
    pub fn chain(&self) -> Option<Cons<T>> {
        self.top.clone()
    }
}

impl<T> Default for Stack<T>
where
    T: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
