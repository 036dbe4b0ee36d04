//! A double-ended queue backed by a single circular array.
//!
//! [`CircularArrayDeque`] keeps its elements in one heap allocated buffer and
//! lets the front and the back grow towards each other, wrapping around the
//! ends of the buffer. Two cursors mark the boundaries: `front` is the slot
//! one before the first element and `back` is the slot one after the last
//! element. Pushing writes into the cursor slot and moves the cursor outwards,
//! popping moves it back inwards.
//!
//! ```text
//!         back    front
//!           |       |
//!           v       v
//! +---+---+---+---+---+---+---+---+
//! | 5 | 6 |   |   | 1 | 2 | 3 | 4 |
//! +---+---+---+---+---+---+---+---+
//!   0   1   2   3   4   5   6   7
//! ```
//!
//! Every slot is an `Option<T>`: `None` marks a slot that holds no element,
//! so there is no need for `unsafe` code or for a sentinel value of `T`.
//!
//! The buffer starts with a capacity of 8. It is doubled as soon as an
//! insertion fills it, and quartered before a removal when less than a
//! quarter of it is in use and the deque holds more than 16 elements. Both
//! resizes move the elements to the start of the new buffer, so insertion and
//! removal at both ends are amortized *O(1)*. Indexing is always *O(1)*.
//!
//! The queue operations themselves are described by the [`Deque`] trait,
//! which is also implemented for [`VecDeque`] so that code written against it
//! can swap implementations.
//!
//! [`VecDeque`]: std::collections::VecDeque

use core::cmp::{self, Ordering};
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use std::fmt;
use std::iter::repeat_with;
use std::mem;
use std::ptr;

mod deque;
mod into_iter;
mod iter;

pub use deque::Deque;
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};


/// Capacity of a new deque. The buffer never shrinks below it.
const MIN_CAPACITY: usize = 8;

/// A shrink reduces the capacity by this factor, and only happens when less than
/// `1 / SHRINK_DIVISOR` of the buffer is in use.
const SHRINK_DIVISOR: usize = 4;

/// Deques holding this many elements or fewer are never shrunk.
const SHRINK_MIN_LEN: usize = 16;

/// A double-ended queue implemented with a growable circular buffer.
///
/// See the [crate-level documentation](./index.html) for the layout and the
/// resizing policy.
///
/// # Examples
///
/// ```
/// use circular_deque::CircularArrayDeque;
///
/// let mut deque = CircularArrayDeque::new();
/// deque.add_back(1);
/// deque.add_back(2);
/// deque.add_front(0);
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(deque.remove_front(), Some(0));
/// assert_eq!(deque.get(0), Some(&1));
/// assert_eq!(deque.get(5), None);
/// ```
pub struct CircularArrayDeque<T> {
    // Front and back are cursors into the buffer.
    // Front is the slot the next add_front writes to, back the slot the next add_back writes to.
    // The live elements are in front + 1 .. back (wrapping), every other slot is None.
    // back == (front + len + 1) % cap
    // The buffer is never full between two operations: an insertion that fills it doubles it.
    buf: Box<[Option<T>]>,
    len: usize,
    front: usize,
    back: usize,
}

impl<T> CircularArrayDeque<T> {
    /// Creates an empty deque with a capacity of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_deque::CircularArrayDeque;
    ///
    /// let deque: CircularArrayDeque<i32> = CircularArrayDeque::new();
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        Self { buf: empty_slots(MIN_CAPACITY), len: 0, front: 0, back: 1 }
    }

    /// Returns the number of slots in the underlying buffer.
    ///
    /// The capacity is always at least 8 and always larger than [`len`].
    ///
    /// [`len`]: CircularArrayDeque::len
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// deque.extend(1..=7);
    /// assert_eq!(deque.capacity(), 8);
    /// deque.add_back(8);
    /// assert_eq!(deque.capacity(), 16);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap()
    }

    /// Returns the number of elements in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let deque = CircularArrayDeque::from([1, 2, 3]);
    /// assert_eq!(deque.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns wether the deque is empty or not.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// assert!(deque.is_empty());
    /// deque.add_back(42);
    /// assert!(!deque.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides a reference to the element at the given index, or `None` if the index is out of
    /// bounds.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let deque = CircularArrayDeque::from([1, 2, 3]);
    /// assert_eq!(deque.get(1), Some(&2));
    /// assert_eq!(deque.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buf[self.physical(index)].as_ref()
        } else {
            None
        }
    }

    /// Provides a mutable reference to the element at the given index, or `None` if the index is
    /// out of bounds.
    ///
    /// Element at index 0 is the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::from([1, 2, 3]);
    /// if let Some(x) = deque.get_mut(1) {
    ///     *x += 40;
    /// }
    /// assert_eq!(deque.get(1), Some(&42));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.physical(index);
            self.buf[slot].as_mut()
        } else {
            None
        }
    }

    /// Provides a reference to the front element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// assert_eq!(deque.front(), None);
    /// deque.add_back(1);
    /// deque.add_back(2);
    /// assert_eq!(deque.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// assert_eq!(deque.back(), None);
    /// deque.add_back(1);
    /// deque.add_back(2);
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Provides a mutable reference to the back element, or `None` if the deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    ///
    /// This operation is *O(n)*.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let deque = CircularArrayDeque::from([0, 1]);
    /// assert!(deque.contains(&1));
    /// assert!(!deque.contains(&4));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|elem| elem == x)
    }

    /// Prepends an element to the front of the deque.
    ///
    /// If this fills the buffer, its capacity is doubled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// deque.add_front(1);
    /// deque.add_front(2);
    /// deque.add_front(3);
    /// assert!(deque.iter().eq(&[3, 2, 1]));
    /// ```
    pub fn add_front(&mut self, item: T) {
        debug_assert!(self.buf[self.front].is_none());
        self.buf[self.front] = Some(item);
        self.len += 1;
        self.front = self.wrap_sub(self.front, 1);
        if self.is_full() {
            self.grow();
        }
    }

    /// Appends an element to the back of the deque.
    ///
    /// If this fills the buffer, its capacity is doubled.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// deque.add_back(1);
    /// deque.add_back(2);
    /// deque.add_back(3);
    /// assert!(deque.iter().eq(&[1, 2, 3]));
    /// ```
    pub fn add_back(&mut self, item: T) {
        debug_assert!(self.buf[self.back].is_none());
        self.buf[self.back] = Some(item);
        self.len += 1;
        self.back = self.wrap_add(self.back, 1);
        if self.is_full() {
            self.grow();
        }
    }

    /// Removes the first element and returns it, or `None` if the deque is empty.
    ///
    /// If less than a quarter of the buffer is in use and the deque holds more than 16 elements,
    /// the capacity is reduced to a quarter before the element is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::from([1, 2]);
    /// assert_eq!(deque.remove_front(), Some(1));
    /// assert_eq!(deque.remove_front(), Some(2));
    /// assert_eq!(deque.remove_front(), None);
    /// ```
    pub fn remove_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.shrink_if_sparse();

        let first = self.wrap_add(self.front, 1);
        let item = self.buf[first].take();
        debug_assert!(item.is_some());
        self.front = first;
        self.len -= 1;
        item
    }

    /// Removes the last element and returns it, or `None` if the deque is empty.
    ///
    /// Shrinks the buffer under the same condition as [`remove_front`].
    ///
    /// [`remove_front`]: CircularArrayDeque::remove_front
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::from([1, 2]);
    /// assert_eq!(deque.remove_back(), Some(2));
    /// assert_eq!(deque.remove_back(), Some(1));
    /// assert_eq!(deque.remove_back(), None);
    /// ```
    pub fn remove_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.shrink_if_sparse();

        let last = self.wrap_sub(self.back, 1);
        let item = self.buf[last].take();
        debug_assert!(item.is_some());
        self.back = last;
        self.len -= 1;
        item
    }

    /// Clears the deque, removing all elements and releasing the buffer.
    ///
    /// Afterwards the deque is in the same state as a new one, with a capacity of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque: CircularArrayDeque<_> = (0..100).collect();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns a front-to-back iterator.
    ///
    /// The iterator starts at the slot after the front cursor and ends when it reaches the back
    /// cursor. It borrows the deque, so the deque cannot be modified while iterating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::new();
    /// deque.add_back(5);
    /// deque.add_back(3);
    /// deque.add_front(4);
    /// let b: &[_] = &[&4, &5, &3];
    /// let c: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf, self.wrap_add(self.front, 1), self.back)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circular_deque::CircularArrayDeque;
    /// let mut deque = CircularArrayDeque::from([5, 3]);
    /// deque.add_front(4);
    /// for num in deque.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert!(deque.iter().eq(&[2, 3, 1]));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slot_slices();
        IterMut::new(front, back)
    }

    #[inline]
    fn cap(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    #[inline]
    fn wrap_add(&self, idx: usize, addend: usize) -> usize {
        (idx + addend) % self.cap()
    }

    #[inline]
    fn wrap_sub(&self, idx: usize, subtrahend: usize) -> usize {
        debug_assert!(subtrahend <= self.cap());
        (idx + self.cap() - subtrahend) % self.cap()
    }

    /// Maps a logical index (0 is the front) to its slot in the buffer.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        self.wrap_add(self.front, index + 1)
    }

    /// Returns the slots holding live elements, in order, as at most two slices.
    fn as_mut_slot_slices(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let start = self.wrap_add(self.front, 1);
        let len = self.len;
        let (wrapped, head) = self.buf.split_at_mut(start);
        if len <= head.len() {
            (&mut head[..len], &mut wrapped[..0])
        } else {
            let rest = len - head.len();
            (head, &mut wrapped[..rest])
        }
    }

    #[inline(never)]
    fn grow(&mut self) {
        debug_assert!(self.is_full());
        let new_cap = self.cap().checked_mul(2).unwrap_or_else(|| capacity_overflow());
        self.resize(new_cap);
        debug_assert!(!self.is_full());
    }

    fn shrink_if_sparse(&mut self) {
        let cap = self.cap();
        if self.len < cap / SHRINK_DIVISOR && self.len > SHRINK_MIN_LEN {
            self.resize(cmp::max(MIN_CAPACITY, cap / SHRINK_DIVISOR));
        }
    }

    /// Moves all elements into a new buffer of `new_cap` slots.
    ///
    /// The elements end up in slots `0..len` in front-to-back order, with the front cursor in the
    /// last slot and the back cursor right after the last element.
    fn resize(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= MIN_CAPACITY);
        debug_assert!(new_cap > self.len);

        let mut old = mem::replace(&mut self.buf, empty_slots(new_cap));
        let old_cap = old.len();
        let mut src = (self.front + 1) % old_cap;
        for dst in 0..self.len {
            self.buf[dst] = old[src].take();
            src = (src + 1) % old_cap;
        }
        self.front = new_cap - 1;
        self.back = self.len;
    }
}

impl<T: Clone> Clone for CircularArrayDeque<T> {
    /// Returns a deep copy with the same capacity and the same elements in the same slots.
    fn clone(&self) -> Self {
        Self { buf: self.buf.clone(), len: self.len, front: self.front, back: self.back }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Writes the elements from front to back, separated by a single space.
///
/// ```
/// # use circular_deque::CircularArrayDeque;
/// let deque = CircularArrayDeque::from([1, 2, 3]);
/// assert_eq!(deque.to_string(), "1 2 3");
/// ```
impl<T: fmt::Display> fmt::Display for CircularArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
            for elem in iter {
                f.write_str(" ")?;
                fmt::Display::fmt(elem, f)?;
            }
        }
        Ok(())
    }
}

impl<T> Default for CircularArrayDeque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CircularArrayDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add_back(elem);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for CircularArrayDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for CircularArrayDeque<T> {
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T> From<CircularArrayDeque<T>> for Vec<T> {
    fn from(other: CircularArrayDeque<T>) -> Self {
        let mut vec = Vec::with_capacity(other.len());
        vec.extend(other);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for CircularArrayDeque<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> FromIterator<T> for CircularArrayDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T: Hash> Hash for CircularArrayDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<T> Index<usize> for CircularArrayDeque<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|| index_out_of_bounds(self.len, index))
    }
}

impl<T> IndexMut<usize> for CircularArrayDeque<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        self.get_mut(index).unwrap_or_else(|| index_out_of_bounds(len, index))
    }
}

impl<T> IntoIterator for CircularArrayDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a CircularArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CircularArrayDeque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: PartialOrd> PartialOrd for CircularArrayDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for CircularArrayDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// Two deques are equal if they hold equal elements in the same order.
///
/// Capacity and the position of the elements inside the buffer do not matter. A deque is always
/// equal to itself, even if it holds elements that are not equal to themselves.
impl<T: PartialEq> PartialEq for CircularArrayDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularArrayDeque<T> {}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    repeat_with(|| None).take(cap).collect()
}

fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the len is {} but the index is {}", len, index);
}

fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
