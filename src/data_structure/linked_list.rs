use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use log::{debug, trace};

use crate::data_structure::error::{ListError, Result};
use crate::data_structure::position::Position;

/// Owning edge to the next node. Dropping it releases the rest of the chain
/// one node at a time, so long chains never recurse through `Box` drops.
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Deref for Link<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Link<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut link = self.0.take();
        while let Some(mut node) = link {
            link = node.next.0.take();
        }
    }
}

/// A single link cell. Each node owns its successor, so a chain can never
/// contain a cycle or a node shared between two positions.
pub struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Option<Box<Node<T>>>) -> Self {
        Node {
            value,
            next: Link(next),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.as_deref_mut()
    }

    /// Replaces the successor, handing back the one that was linked before.
    pub fn set_next(&mut self, next: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        mem::replace(&mut self.next.0, next)
    }

    pub fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }
}

/// Renders as `Node(3, Node(1, None))`, values in their `Debug` form, so a
/// string value shows quoted: `Node("x", None)`.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let mut current = Some(self);
        while let Some(node) = current {
            write!(f, "Node({:?}, ", node.value)?;
            depth += 1;
            current = node.next();
        }
        f.write_str("None")?;
        for _ in 0..depth {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Singly linked list addressed by position.
///
/// Every positional operation walks the chain from `head`, so `get`, `set`,
/// `insert` and `append` are O(n). `len` is cached and O(1).
///
/// The list does no locking of its own; sharing it between threads for
/// mutation needs an outer `Mutex` or similar.
pub struct LinkedList<T> {
    head: Link<T>,
    length: usize,
}

/// Owning iterator; hands values out front to back, releasing each node as
/// it goes.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// Borrowing walk from head to tail. Each call to [`LinkedList::iter`]
/// starts a fresh traversal.
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IterMut<'a, T> {
    cursor: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.take()?;
        self.cursor = node.next.as_deref_mut();
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: Link(None),
            length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn push_front(&mut self, value: T) {
        self.head = Link(Some(Box::new(Node::new(value, self.head.take()))));
        self.length += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.length -= 1;
            node.value
        })
    }

    pub fn get<I: Position>(&self, index: I) -> Result<&T> {
        let offset = self.offset(index)?;
        self.node(offset)
            .map(|node| &node.value)
            .ok_or_else(|| self.out_of_range(offset))
    }

    pub fn get_mut<I: Position>(&mut self, index: I) -> Result<&mut T> {
        let offset = self.offset(index)?;
        let error = self.out_of_range(offset);
        self.node_mut(offset)
            .map(|node| &mut node.value)
            .ok_or(error)
    }

    pub fn set<I: Position>(&mut self, index: I, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Links a new node after the current tail.
    pub fn append(&mut self, value: T) {
        *self.tail_link() = Link(Some(Box::new(Node::new(value, None))));
        self.length += 1;
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// Any index at or past the end appends. A negative index is rejected with
    /// [`ListError::IndexOutOfRange`] and leaves the list untouched.
    pub fn insert<I: Position>(&mut self, index: I, value: T) -> Result<()> {
        let index = index.position()?;
        let length = self.length;
        let offset =
            usize::try_from(index).map_err(|_| ListError::IndexOutOfRange { index, len: length })?;

        if offset >= length {
            self.append(value);
            return Ok(());
        }
        if offset == 0 {
            self.push_front(value);
            return Ok(());
        }

        let previous = self
            .node_mut(offset - 1)
            .ok_or(ListError::IndexOutOfRange { index, len: length })?;
        let next = previous.next.take();
        previous.next = Link(Some(Box::new(Node::new(value, next))));
        self.length += 1;
        Ok(())
    }

    pub fn remove_at<I: Position>(&mut self, index: I) -> Result<T> {
        let offset = self.offset(index)?;
        let error = self.out_of_range(offset);
        let removed = self.unlink(offset).ok_or(error)?;
        debug!("removed node at {}, {} left", offset, self.length);
        Ok(removed)
    }

    pub fn clear(&mut self) {
        let released = self.length;
        self.head = Link(None);
        self.length = 0;
        debug!("cleared list, released {} nodes", released);
    }

    pub fn index(&self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .position(|candidate| candidate == value)
            .ok_or(ListError::ValueNotFound { op: "index" })
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == value)
    }

    /// Unlinks the first node equal to `value` and returns its value.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let not_found = ListError::ValueNotFound { op: "remove" };
        let offset = self
            .iter()
            .position(|candidate| candidate == value)
            .ok_or(not_found.clone())?;
        let removed = self.unlink(offset).ok_or(not_found)?;
        debug!("removed first match at {}, {} left", offset, self.length);
        Ok(removed)
    }

    /// Bubble sort over the values, ascending. Nodes stay where they are and
    /// only their values move.
    ///
    /// Equal values keep their relative order. If any two values cannot be
    /// ordered against each other the list is left as it was and
    /// [`ListError::TypeMismatch`] is returned.
    pub fn sort(&mut self) -> Result<()>
    where
        T: PartialOrd,
    {
        // Values may only move once every pair is known to be comparable. A
        // list already in order needs no pairwise scan: PartialOrd is
        // transitive, so ordered neighbours imply ordered pairs.
        if self.is_ordered() {
            debug!("sort skipped, {} values already in order", self.length);
            return Ok(());
        }
        self.ensure_comparable()?;

        let mut passes = 0;
        let mut swaps = 0;
        for pass in 0..self.length.saturating_sub(1) {
            let mut swapped = false;
            let mut current = self.head.as_deref_mut();
            for _ in 0..self.length - 1 - pass {
                let Some(node) = current else { break };
                let Some(next) = node.next.as_deref_mut() else { break };
                if node.value > next.value {
                    mem::swap(&mut node.value, &mut next.value);
                    swapped = true;
                    swaps += 1;
                }
                current = node.next.as_deref_mut();
            }
            passes += 1;
            trace!("sort pass {} done, swapped: {}", pass, swapped);
            if !swapped {
                break;
            }
        }

        debug!("sorted {} values in {} passes, {} swaps", self.length, passes, swaps);
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.head.as_deref(),
            remaining: self.length,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            cursor: self.head.as_deref_mut(),
            remaining: self.length,
        }
    }

    fn offset<I: Position>(&self, index: I) -> Result<usize> {
        let index = index.position()?;
        usize::try_from(index)
            .ok()
            .filter(|&offset| offset < self.length)
            .ok_or(ListError::IndexOutOfRange { index, len: self.length })
    }

    fn out_of_range(&self, offset: usize) -> ListError {
        ListError::IndexOutOfRange {
            index: offset as i128,
            len: self.length,
        }
    }

    fn node(&self, offset: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..offset {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_mut(&mut self, offset: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..offset {
            current = current?.next.as_deref_mut();
        }
        current
    }

    fn tail_link(&mut self) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        while let Link(Some(node)) = cursor {
            cursor = &mut node.next;
        }
        cursor
    }

    // caller has checked offset < length
    fn unlink(&mut self, offset: usize) -> Option<T> {
        let removed = if offset == 0 {
            let node = self.head.take()?;
            self.head = node.next;
            node.value
        } else {
            let previous = self.node_mut(offset - 1)?;
            let node = previous.next.take()?;
            previous.next = node.next;
            node.value
        };
        self.length -= 1;
        Some(removed)
    }

    fn is_ordered(&self) -> bool
    where
        T: PartialOrd,
    {
        self.iter().zip(self.iter().skip(1)).all(|(left, right)| {
            matches!(
                left.partial_cmp(right),
                Some(Ordering::Less | Ordering::Equal)
            )
        })
    }

    fn ensure_comparable(&self) -> Result<()>
    where
        T: PartialOrd,
    {
        for (offset, left) in self.iter().enumerate() {
            if self.iter().skip(offset + 1).any(|right| left.partial_cmp(right).is_none()) {
                return Err(ListError::TypeMismatch {
                    expected: "mutually comparable values",
                    found: "incomparable pair",
                });
            }
        }
        Ok(())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut cursor = self.tail_link();
        for value in iter {
            let node = cursor.0.insert(Box::new(Node::new(value, None)));
            cursor = &mut node.next;
            added += 1;
        }
        self.length += added;
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkedList(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}
