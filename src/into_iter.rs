use std::fmt;
use std::iter::FusedIterator;

use super::CircularArrayDeque;

/// An owning iterator over the elements of a `CircularArrayDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`CircularArrayDeque`] (provided by
/// the [`IntoIterator`] trait). It takes over the buffer of the deque and moves the elements out
/// of their slots, so the buffer is never resized while iterating. Elements not yet yielded are
/// dropped together with the iterator.
///
/// [`into_iter`]: CircularArrayDeque::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Clone)]
pub struct IntoIter<T> {
    slots: Box<[Option<T>]>,
    // the slot `.next()` takes from
    head: usize,
    // the slot after the one `.next_back()` takes from
    tail: usize,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(deque: CircularArrayDeque<T>) -> Self {
        let head = deque.wrap_add(deque.front, 1);
        let CircularArrayDeque { buf, len, back, .. } = deque;
        IntoIter { slots: buf, head, tail: back, len }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cap = self.slots.len();
        let remaining = (0..self.len).filter_map(|i| self.slots[(self.head + i) % cap].as_ref());
        f.debug_list().entries(remaining).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.tail = (self.tail + self.slots.len() - 1) % self.slots.len();
        self.len -= 1;
        self.slots[self.tail].take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
