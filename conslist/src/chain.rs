//! This module defines the traversal contract shared by eager and lazy chains.

/// A handle to the head cell of a non-empty chain.
///
/// The empty chain is never represented by a `Chain` value, it is the absence of one
/// (`Option::None`). Both [`crate::Cons`] and [`crate::LazyCons`] implement this trait,
/// which allows [`Iter`] and the folds in [`crate::fold`] to be written once for both.
pub trait Chain: Clone {
    type Item;

    /// Value stored in this cell.
    fn head(&self) -> Self::Item;

    /// The cell following this one, or `None` at the end of the chain.
    ///
    /// For lazy chains this may evaluate a deferred tail.
    fn rest(&self) -> Option<Self>;
}

/// Iterator over the values of a chain.
///
/// Iteration is a pure read of the chain, so the same head can be iterated any number
/// of times. Each step reads the current state of the cell it visits, mutations made
/// between two steps are therefore visible to the iterator.
///
/// A cell's tail is only read once the value after it is requested, so taking the first
/// `n` values of a lazy chain evaluates no more than `n - 1` tails.
///
/// Iterating a hand-built cyclic chain never terminates.
pub struct Iter<C> {
    next: Option<C>,

    /// Cell whose value was yielded last, its tail is not read yet.
    yielded: Option<C>,
}

impl<C> Iter<C> {
    pub(crate) fn new(head: Option<C>) -> Self {
        Self {
            next: head,
            yielded: None,
        }
    }
}

impl<C> Iterator for Iter<C>
where
    C: Chain,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(previous) = self.yielded.take() {
            self.next = previous.rest();
        }

        let cell = self.next.take()?;
        let head = cell.head();
        self.yielded = Some(cell);

        Some(head)
    }
}
