use std::{cell::RefCell, fmt, rc::Rc};

use crate::chain::{Chain, Iter};

/// Handle to a mutable singly-linked list cell.
///
/// A chain is a sequence of cells linked through their tails, the empty chain being the
/// absence of a cell (`None`). Cloning a `Cons` does not copy the cell, it creates another
/// handle to the same one: any number of chains may share a tail, and a mutation made
/// through one handle is visible through every other handle reaching that cell.
///
/// The last handle to go away releases the cell together with the part of the chain
/// below it that is not held by anyone else.
///
/// Nothing prevents a cycle from being built with [`Cons::set_tail`]. Iterating or folding
/// such a chain never terminates, and the cells of the cycle are never released.
pub struct Cons<T>(Rc<RefCell<Node<T>>>);

struct Node<T> {
    value: T,
    next: Option<Cons<T>>,
}

impl<T> Cons<T> {
    /// Create a new cell holding `value`, followed by `tail`.
    pub fn new(value: T, tail: Option<Cons<T>>) -> Self {
        Self(Rc::new(RefCell::new(Node { value, next: tail })))
    }

    /// Build a chain holding the values of `source` in their original order.
    ///
    /// Returns `None` if `source` yields nothing. The source is consumed entirely before
    /// returning.
    pub fn from_sequence<I>(source: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut source = source.into_iter();

        let head = Self::new(source.next()?, None);
        let mut last = head.clone();

        for value in source {
            let cell = Self::new(value, None);
            last.set_tail(Some(cell.clone()));
            last = cell;
        }

        Some(head)
    }

    /// Value stored in this cell.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }

    /// Replace the value stored in this cell, returning the previous one.
    pub fn set_value(&self, value: T) -> T {
        std::mem::replace(&mut self.0.borrow_mut().value, value)
    }

    /// Update the value stored in this cell in place.
    pub fn update_value<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.0.borrow_mut().value)
    }

    /// The cell following this one.
    pub fn tail(&self) -> Option<Self> {
        self.0.borrow().next.clone()
    }

    /// Replace the tail of this cell, returning the previous one.
    pub fn set_tail(&self, tail: Option<Self>) -> Option<Self> {
        std::mem::replace(&mut self.0.borrow_mut().next, tail)
    }

    /// Whether both handles point to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Iterate over the values of the chain starting at this cell.
    pub fn iter(&self) -> Iter<Self>
    where
        T: Clone,
    {
        Iter::new(Some(self.clone()))
    }
}

impl<T> Chain for Cons<T>
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

impl<T> Clone for Cons<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for Cons<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new(T::default(), None)
    }
}

impl<'a, T> IntoIterator for &'a Cons<T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = Iter<Cons<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Cons<T>
where
    T: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Unlinks the chain cell by cell, so that dropping a long chain doesn't recurse once per cell.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();

        while let Some(cell) = next {
            next = match Rc::try_unwrap(cell.0) {
                Ok(node) => node.into_inner().next.take(),
                Err(_) => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cons;

    #[test]
    fn constructed_list_is_traversable() {
        let lst = Cons::new(1, Some(Cons::new(2, Some(Cons::new(3, None)))));

        let mut iter = lst.iter();

        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn default_cell_has_default_value_and_no_tail() {
        let cell = Cons::<i32>::default();

        assert_eq!(cell.value(), 0);
        assert!(cell.tail().is_none());
    }

    #[test]
    fn from_sequence_keeps_original_order() {
        let xs = Cons::from_sequence(vec![1, 2, 3, 4]).unwrap();

        assert_eq!(xs.iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn from_empty_sequence_is_empty() {
        assert!(Cons::<i32>::from_sequence(Vec::new()).is_none());
    }

    #[test]
    fn traversal_is_repeatable() {
        let xs = Cons::from_sequence("abc".chars()).unwrap();

        let first = xs.iter().collect::<String>();
        let second = xs.iter().collect::<String>();

        assert_eq!(first, "abc");
        assert_eq!(first, second);
    }

    #[test]
    fn mutation_through_one_alias_is_visible_through_another() {
        let xs = Cons::from_sequence(vec![1, 2, 3]).unwrap();
        let ys = xs.tail().unwrap();

        xs.tail().unwrap().update_value(|v| *v = -*v);

        assert!(ys.ptr_eq(&xs.tail().unwrap()));
        assert_eq!(ys.value(), -2);
        assert_eq!(ys.iter().collect::<Vec<_>>(), [-2, 3]);
        assert_eq!(xs.iter().collect::<Vec<_>>(), [1, -2, 3]);
    }

    #[test]
    fn second_traversal_reflects_mutation_in_between() {
        let xs = Cons::from_sequence(vec![1, 2, 3]).unwrap();

        assert_eq!(xs.iter().collect::<Vec<_>>(), [1, 2, 3]);

        xs.set_value(10);
        xs.tail().unwrap().set_tail(None);

        assert_eq!(xs.iter().collect::<Vec<_>>(), [10, 2]);
    }

    #[test]
    fn chains_share_tail() {
        let shared = Cons::from_sequence(vec![3, 4]);
        let a = Cons::new(1, shared.clone());
        let b = Cons::new(2, shared.clone());

        shared.as_ref().unwrap().set_value(30);

        assert_eq!(a.iter().collect::<Vec<_>>(), [1, 30, 4]);
        assert_eq!(b.iter().collect::<Vec<_>>(), [2, 30, 4]);
    }

    #[test]
    fn set_tail_returns_previous_tail() {
        let xs = Cons::from_sequence(vec![1, 2]).unwrap();
        let second = xs.tail().unwrap();

        let previous = xs.set_tail(None);

        assert!(previous.unwrap().ptr_eq(&second));
        assert_eq!(xs.iter().count(), 1);
    }

    #[test]
    fn debug_prints_values() {
        let xs = Cons::from_sequence(vec![1, 2, 3]).unwrap();

        assert_eq!(format!("{:?}", xs), "[1, 2, 3]");
    }

    #[test]
    fn dropping_long_chain_does_not_overflow() {
        let xs = Cons::from_sequence(0..1_000_000).unwrap();

        assert_eq!(xs.iter().count(), 1_000_000);
        std::mem::drop(xs);
    }

    #[test]
    fn dropping_head_keeps_aliased_suffix() {
        let xs = Cons::from_sequence(vec![1, 2, 3]).unwrap();
        let ys = xs.tail().unwrap();

        std::mem::drop(xs);

        assert_eq!(ys.iter().collect::<Vec<_>>(), [2, 3]);
    }
}
