use std::fmt;
use std::iter::{Chain, FusedIterator};
use std::slice;

/// An iterator over the elements of a `CircularArrayDeque`.
///
/// This `struct` is created by the [`iter`] method on [`CircularArrayDeque`]. See its
/// documentation for more information.
///
/// [`iter`]: crate::CircularArrayDeque::iter
/// [`CircularArrayDeque`]: crate::CircularArrayDeque
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    // the slot `.next()` reads
    head: usize,
    // the slot after the one `.next_back()` reads, starts at the back cursor
    tail: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(slots: &'a [Option<T>], head: usize, tail: usize) -> Self {
        debug_assert!(head < slots.len() && tail < slots.len());
        Iter { slots, head, tail }
    }

    #[inline]
    fn remaining(&self) -> usize {
        (self.tail + self.slots.len() - self.head) % self.slots.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { slots: self.slots, head: self.head, tail: self.tail }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let slots = self.slots;
        let slot = &slots[self.head];
        self.head = (self.head + 1) % slots.len();
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.head == self.tail {
            return None;
        }
        let slots = self.slots;
        self.tail = (self.tail + slots.len() - 1) % slots.len();
        slots[self.tail].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a `CircularArrayDeque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`CircularArrayDeque`]. See its
/// documentation for more information.
///
/// [`iter_mut`]: crate::CircularArrayDeque::iter_mut
/// [`CircularArrayDeque`]: crate::CircularArrayDeque
#[derive(Debug)]
pub struct IterMut<'a, T> {
    // the live slots before and after the wrap point
    inner: Chain<slice::IterMut<'a, Option<T>>, slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(front: &'a mut [Option<T>], back: &'a mut [Option<T>]) -> Self {
        IterMut { inner: front.iter_mut().chain(back.iter_mut()) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
