use std::collections::VecDeque;
use std::fmt;

use crate::CircularArrayDeque;

/// The operations shared by every double-ended queue.
///
/// Indices count from the front: index 0 is the front element. Absence is always reported with
/// `None`, never with a panic.
///
/// The trait is object safe, so code can hold a `Box<dyn Deque<T>>` without knowing which
/// implementation is behind it.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use circular_deque::{CircularArrayDeque, Deque};
///
/// fn fill(deque: &mut dyn Deque<i32>) {
///     deque.add_back(2);
///     deque.add_front(1);
/// }
///
/// let mut a: CircularArrayDeque<i32> = CircularArrayDeque::new();
/// let mut b: VecDeque<i32> = VecDeque::new();
/// fill(&mut a);
/// fill(&mut b);
/// assert_eq!(Deque::get(&a, 0), Deque::get(&b, 0));
/// assert_eq!(a.size(), b.size());
/// ```
pub trait Deque<T> {
    /// Adds an item to the front.
    fn add_front(&mut self, item: T);

    /// Adds an item to the back.
    fn add_back(&mut self, item: T);

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of items.
    fn size(&self) -> usize;

    /// Prints the items from front to back on one line of stdout, separated by a space.
    fn print_deque(&self)
    where
        T: fmt::Display;

    /// Removes and returns the item at the front, or `None` if there is none.
    fn remove_front(&mut self) -> Option<T>;

    /// Removes and returns the item at the back, or `None` if there is none.
    fn remove_back(&mut self) -> Option<T>;

    /// Returns the item at `index`, or `None` if `index` is out of bounds.
    fn get(&self, index: usize) -> Option<&T>;
}

impl<T> Deque<T> for CircularArrayDeque<T> {
    fn add_front(&mut self, item: T) {
        CircularArrayDeque::add_front(self, item);
    }

    fn add_back(&mut self, item: T) {
        CircularArrayDeque::add_back(self, item);
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn print_deque(&self)
    where
        T: fmt::Display,
    {
        println!("{}", self);
    }

    fn remove_front(&mut self) -> Option<T> {
        CircularArrayDeque::remove_front(self)
    }

    fn remove_back(&mut self) -> Option<T> {
        CircularArrayDeque::remove_back(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        CircularArrayDeque::get(self, index)
    }
}

impl<T> Deque<T> for VecDeque<T> {
    fn add_front(&mut self, item: T) {
        self.push_front(item);
    }

    fn add_back(&mut self, item: T) {
        self.push_back(item);
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn print_deque(&self)
    where
        T: fmt::Display,
    {
        let line = self.iter().map(|item| item.to_string()).collect::<Vec<_>>().join(" ");
        println!("{}", line);
    }

    fn remove_front(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn remove_back(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}
