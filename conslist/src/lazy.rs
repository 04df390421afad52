use std::{cell::RefCell, fmt, rc::Rc};

use tracing::debug;

use crate::chain::{Chain, Iter};

/// Deferred computation producing the tail of a [`LazyCons`].
type Thunk<T> = Box<dyn FnOnce() -> Option<LazyCons<T>>>;

/// Handle to a singly-linked list cell whose tail is computed on first access.
///
/// The tail of a lazy cell is either deferred, that is a thunk which produces the next cell
/// when invoked, or realized. The first read of a deferred tail invokes the thunk, caches its
/// result and drops the thunk. Every later read returns the cached cell without invoking
/// anything, so each cell is evaluated at most once no matter how many times the chain is
/// traversed. Every evaluation emits a `debug` level `tracing` event with the message
/// `"evaluated lazy tail"`.
///
/// Like [`crate::Cons`], cloning the handle aliases the cell, and both value and tail can be
/// replaced in place.
pub struct LazyCons<T>(Rc<LazyNode<T>>);

struct LazyNode<T> {
    value: RefCell<T>,
    tail: RefCell<Tail<T>>,
}

enum Tail<T> {
    Deferred(Thunk<T>),

    /// The thunk has been taken out of the slot and is running.
    Evaluating,

    Realized(Option<LazyCons<T>>),
}

impl<T> LazyCons<T> {
    /// Create a new cell holding `value`, with its tail produced by `thunk` on first access.
    pub fn new<F>(value: T, thunk: F) -> Self
    where
        F: 'static + FnOnce() -> Option<Self>,
    {
        Self::with_tail(value, Tail::Deferred(Box::new(thunk)))
    }

    /// Create a new cell holding `value`, with an already realized `tail`.
    pub fn strict(value: T, tail: Option<Self>) -> Self {
        Self::with_tail(value, Tail::Realized(tail))
    }

    fn with_tail(value: T, tail: Tail<T>) -> Self {
        Self(Rc::new(LazyNode {
            value: RefCell::new(value),
            tail: RefCell::new(tail),
        }))
    }

    /// Build a lazy chain over the values of `source`.
    ///
    /// Only the first value is taken from `source` here. The rest of it is captured by the
    /// thunk of the returned cell and advanced by one value each time a tail is evaluated,
    /// which makes it possible to wrap infinite or expensive sources.
    pub fn from_sequence<I>(source: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::unfold(source.into_iter())
    }

    fn unfold<I>(mut source: I) -> Option<Self>
    where
        I: 'static + Iterator<Item = T>,
    {
        let value = source.next()?;

        Some(Self::new(value, move || Self::unfold(source)))
    }

    /// Value stored in this cell.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }

    /// Replace the value stored in this cell, returning the previous one.
    pub fn set_value(&self, value: T) -> T {
        self.0.value.replace(value)
    }

    /// Update the value stored in this cell in place.
    pub fn update_value<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.0.value.borrow_mut())
    }

    /// The cell following this one, evaluating it first if it is still deferred.
    ///
    /// # Panics
    ///
    /// Panics if called on a cell from within the thunk computing that same cell's tail.
    pub fn tail(&self) -> Option<Self> {
        if let Tail::Realized(tail) = &*self.0.tail.borrow() {
            return tail.clone();
        }

        let thunk = match self.0.tail.replace(Tail::Evaluating) {
            Tail::Deferred(thunk) => thunk,
            _ => panic!("lazy tail read while it is being evaluated"),
        };

        let tail = thunk();
        debug!(has_next = tail.is_some(), "evaluated lazy tail");

        self.0.tail.replace(Tail::Realized(tail.clone()));
        tail
    }

    /// Replace the tail of this cell with a realized one.
    ///
    /// A pending thunk is dropped without being invoked.
    pub fn set_tail(&self, tail: Option<Self>) {
        self.0.tail.replace(Tail::Realized(tail));
    }

    /// Whether the tail of this cell has already been realized.
    pub fn is_realized(&self) -> bool {
        matches!(&*self.0.tail.borrow(), Tail::Realized(_))
    }

    /// Whether both handles point to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Iterate over the values of the chain starting at this cell.
    ///
    /// Tails are evaluated as the iteration reaches them.
    pub fn iter(&self) -> Iter<Self>
    where
        T: Clone,
    {
        Iter::new(Some(self.clone()))
    }
}

impl<T> Chain for LazyCons<T>
where
    T: Clone,
{
    type Item = T;

    fn head(&self) -> T {
        self.value()
    }

    fn rest(&self) -> Option<Self> {
        self.tail()
    }
}

impl<T> Clone for LazyCons<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for LazyCons<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::strict(T::default(), None)
    }
}

impl<'a, T> IntoIterator for &'a LazyCons<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = Iter<LazyCons<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Prints the realized prefix of the chain, a deferred tail is shown as `..` and is not forced.
impl<T> fmt::Debug for LazyCons<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut cell = Some(self.clone());

        while let Some(current) = cell {
            list.entry(&*current.0.value.borrow());

            cell = match &*current.0.tail.borrow() {
                Tail::Realized(next) => next.clone(),
                _ => {
                    list.entry(&format_args!(".."));
                    None
                }
            };
        }

        list.finish()
    }
}

impl<T> LazyNode<T> {
    /// Take the realized tail out of this node, dropping a pending thunk.
    fn take_tail(&mut self) -> Option<LazyCons<T>> {
        match std::mem::replace(self.tail.get_mut(), Tail::Realized(None)) {
            Tail::Realized(tail) => tail,
            _ => None,
        }
    }
}

impl<T> Drop for LazyNode<T> {
    fn drop(&mut self) {
        let mut next = self.take_tail();

        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell.0) {
                Ok(mut node) => node.take_tail(),
                Err(_) => None,
            };
        }
    }
}
