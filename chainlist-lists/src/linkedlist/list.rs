/*
   Linked List: A singly linked list that owns its nodes through a
   chain of forward links and keeps a shortcut to the tail for
   constant time appends.

   Copyright 2026 The chainlist Authors

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use crate::linkedlist::{iter::IntoIter, iter::Iter, iter::IterMut, node::Node};
use core::fmt;
use core::iter::FromIterator;
use core::ptr;

/// A singly linked list that owns its nodes. Every node is allocated
/// by the list and linked only from the node before it (or from the
/// list itself for the head), so dropping the list releases the whole
/// chain. The list also keeps a shortcut to the tail which
/// allows appending in constant time.
///
/// Nodes only link forward. Prepending, appending and popping the
/// head complete in *O*(*1*) time while popping the tail, indexed
/// access, indexed inserts and indexed removes walk the list from the
/// head and complete in *O*(*n*) time.
///
/// Every boundary condition is reported with `None` (or `false` for
/// [`insert_at`](#method.insert_at)) rather than a panic.
///
/// # Getting Started
///
/// To get started add the chainlist dependency to Cargo.toml and the
/// use declaration in your source.
///
/// ```text
/// [dependencies]
/// chainlist = "0.1.0"
/// ```
///
/// ```
/// use chainlist::lists::LinkedList;
///
/// let mut list = LinkedList::<u8>::new();
/// list.append(10);
/// list.append(20);
/// list.prepend(5);
/// list.insert_at(15, 2);
///
/// assert_eq!(list.to_string(), "(5) -> (10) -> (15) -> (20) -> null");
/// assert_eq!(list.size(), 4);
/// ```
pub struct LinkedList<T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
}

// SAFETY: the list uniquely owns every node reachable from `head`; the
// raw links are never shared outside the list.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
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

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.append(elem);
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `(v1) -> (v2) -> ... -> null`. An empty list
/// renders as `null`.
///
/// # Examples
/// ```
/// use chainlist::lists::LinkedList;
/// let mut list = LinkedList::<u8>::new();
/// assert_eq!(list.to_string(), "null");
///
/// list.append(1);
/// list.append(2);
/// assert_eq!(list.to_string(), "(1) -> (2) -> null");
/// ```
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in self.iter() {
            write!(f, "({}) -> ", e)?;
        }
        write!(f, "null")
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty linked list.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let list = LinkedList::<u8>::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Returns an iterator over the list from head to tail.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    /// list.append(3);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.head, self.len)
    }

    /// Returns an iterator over the list from head to tail with
    /// mutable references that allows the values to be modified.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// for e in list.iter_mut() {
    ///     *e += 100;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&101));
    /// assert_eq!(iter.next(), Some(&102));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut::new(self.head, self.len)
    }

    /// Removes and drops all the elements from this list.
    ///
    /// The nodes are released one at a time from the head.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.head(), None);
    /// ```
    pub fn clear(&mut self) {
        let mut cur = self.head;
        while !cur.is_null() {
            // SAFETY: every node in the chain was allocated with
            // `Box::into_raw` and is released exactly once here.
            let node = unsafe { Box::from_raw(cur) };
            cur = node.next;
        }
        self.head = ptr::null_mut();
        self.tail = ptr::null_mut();
        self.len = 0;
    }

    /// Returns a reference to the value at the head of the list or
    /// `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.head(), None);
    ///
    /// list.prepend(1);
    /// assert_eq!(list.head(), Some(&1));
    /// ```
    pub fn head(&self) -> Option<&T> {
        self.head_node().map(|node| &node.val)
    }

    /// Returns a mutable reference to the value at the head of the
    /// list or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.prepend(1);
    /// match list.head_mut() {
    ///     None => {},
    ///     Some(x) => *x = 5,
    /// }
    /// assert_eq!(list.head(), Some(&5));
    /// ```
    pub fn head_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a non-null head is a live node owned by this list,
        // which is borrowed mutably for the returned lifetime.
        unsafe { self.head.as_mut().map(|node| &mut node.val) }
    }

    /// Returns a reference to the value at the tail of the list or
    /// `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.tail(), None);
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.tail(), Some(&2));
    /// ```
    pub fn tail(&self) -> Option<&T> {
        self.tail_node().map(|node| &node.val)
    }

    /// Returns a mutable reference to the value at the tail of the
    /// list or `None` if the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// match list.tail_mut() {
    ///     None => {},
    ///     Some(x) => *x = 5,
    /// }
    /// assert_eq!(list.tail(), Some(&5));
    /// ```
    pub fn tail_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a non-null tail is the last live node of this list,
        // which is borrowed mutably for the returned lifetime.
        unsafe { self.tail.as_mut().map(|node| &mut node.val) }
    }

    /// Returns a reference to the head node of the list or `None` if
    /// the list is empty.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert!(list.head_node().is_none());
    ///
    /// list.append(1);
    /// list.append(2);
    /// let head = list.head_node().unwrap();
    /// assert_eq!(head.val(), &1);
    /// assert!(head.has_next());
    /// ```
    pub fn head_node(&self) -> Option<&Node<T>> {
        // SAFETY: a non-null head is a live node owned by this list.
        unsafe { self.head.as_ref() }
    }

    /// Returns a reference to the tail node of the list or `None` if
    /// the list is empty. The tail node never has a next node.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert!(list.tail_node().is_none());
    ///
    /// list.append(1);
    /// list.append(2);
    /// let tail = list.tail_node().unwrap();
    /// assert_eq!(tail.val(), &2);
    /// assert!(!tail.has_next());
    /// ```
    pub fn tail_node(&self) -> Option<&Node<T>> {
        // SAFETY: a non-null tail is the last live node of this list.
        unsafe { self.tail.as_ref() }
    }

    /// Returns a reference to the node at the specified index or
    /// `None` if the index is out of bounds. The head is at index 0.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    /// list.append(3);
    ///
    /// assert_eq!(list.at(1).map(|n| n.val()), Some(&2));
    /// assert!(list.at(3).is_none());
    /// ```
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        // SAFETY: node_ptr only returns live nodes of this list.
        self.node_ptr(index).map(|n_ptr| unsafe { &*n_ptr })
    }

    /// Returns a reference to the value at the specified index or
    /// `None` if the index is out of bounds.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).map(|node| &node.val)
    }

    /// Returns a mutable reference to the value at the specified
    /// index or `None` if the index is out of bounds.
    ///
    /// This method should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// if let Some(x) = list.get_mut(1) {
    ///     *x = 20;
    /// }
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get_mut(2), None);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: node_ptr only returns live nodes of this list, which
        // is borrowed mutably for the returned lifetime.
        self.node_ptr(index)
            .map(|n_ptr| unsafe { &mut (*n_ptr).val })
    }

    /// Returns `true` if the list is empty and `false` otherwise.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert!(list.is_empty());
    ///
    /// list.append(1);
    /// assert!(!list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Returns the number of elements in the list.
    ///
    /// This method should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.size(), 0);
    ///
    /// list.append(1);
    /// list.prepend(2);
    /// assert_eq!(list.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of elements in the list. This method simply
    /// calls [`self.size()`](#method.size)
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Adds an element to the tail of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.tail(), Some(&2));
    /// ```
    pub fn append(&mut self, elem: T) {
        let raw_n = Box::into_raw(Box::new(Node::new(elem)));

        if self.tail.is_null() {
            self.head = raw_n;
        } else {
            // SAFETY: a non-null tail is the last live node of this list.
            unsafe {
                (*self.tail).next = raw_n;
            }
        }
        self.tail = raw_n;
        self.len += 1;
    }

    /// Adds an element to the head of the list.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.prepend(1);
    /// list.prepend(2);
    /// assert_eq!(list.head(), Some(&2));
    /// assert_eq!(list.tail(), Some(&1));
    /// ```
    pub fn prepend(&mut self, elem: T) {
        let mut node = Node::new(elem);
        node.next = self.head;
        let raw_n = Box::into_raw(Box::new(node));

        if self.tail.is_null() {
            self.tail = raw_n;
        }
        self.head = raw_n;
        self.len += 1;
    }

    /// Removes and returns the value at the head of the list or
    /// `None` if the list is empty.
    ///
    /// This operation should complete in *O*(*1*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.pop_head(), None);
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.pop_head(), Some(1));
    /// assert_eq!(list.pop_head(), Some(2));
    /// assert_eq!(list.pop_head(), None);
    /// ```
    pub fn pop_head(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        // SAFETY: the head was allocated with `Box::into_raw` and is
        // unlinked from the list before its box is dropped.
        let node = unsafe { Box::from_raw(self.head) };
        self.head = node.next;
        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        Some(node.val)
    }

    /// Removes and returns the value at the tail of the list or
    /// `None` if the list is empty.
    ///
    /// Nodes only link forward, so this walks from the head to the
    /// node preceding the tail and makes it the new tail.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// assert_eq!(list.pop(), None);
    ///
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.pop(), Some(2));
    /// assert_eq!(list.tail(), Some(&1));
    /// assert_eq!(list.pop(), Some(1));
    /// assert_eq!(list.tail(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_head();
        }

        let prev = self.node_ptr(self.len - 2)?;
        // SAFETY: with at least two nodes the node before the tail is
        // live and its next link is the tail, which was allocated with
        // `Box::into_raw` and is unlinked before its box is dropped.
        let old_tail = unsafe {
            let old_tail = Box::from_raw((*prev).next);
            (*prev).next = ptr::null_mut();
            old_tail
        };
        self.tail = prev;
        self.len -= 1;
        Some(old_tail.val)
    }

    /// Returns `true` if the list contains an element equal to the
    /// given value.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    ///
    /// list.append(0);
    /// list.append(1);
    /// list.append(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to the given
    /// value or `None` if there is no such element.
    ///
    /// This operation should complete in *O*(*n*) time
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    ///
    /// list.append(7);
    /// list.append(8);
    /// list.append(7);
    ///
    /// assert_eq!(list.find(&7), Some(0));
    /// assert_eq!(list.find(&8), Some(1));
    /// assert_eq!(list.find(&9), None);
    /// ```
    pub fn find(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Inserts an element at the specified index, shifting the
    /// element at that index and every element after it towards the
    /// tail. Any index from 0 to [`len()`](#method.len) inclusive is
    /// valid: index 0 prepends and an index equal to the length
    /// appends.
    ///
    /// Returns `true` if the element was inserted. If the index is out
    /// of bounds the list is left unchanged, the element is dropped
    /// and this method returns `false`.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(10);
    /// list.append(20);
    ///
    /// assert!(list.insert_at(15, 1));
    /// assert!(list.insert_at(5, 0));
    /// assert!(list.insert_at(25, 4));
    /// assert!(!list.insert_at(99, 6));
    ///
    /// assert_eq!(list.to_string(), "(5) -> (10) -> (15) -> (20) -> (25) -> null");
    /// ```
    pub fn insert_at(&mut self, elem: T, index: usize) -> bool {
        if index > self.len {
            return false;
        }
        if index == 0 {
            self.prepend(elem);
            return true;
        }
        if index == self.len {
            self.append(elem);
            return true;
        }

        match self.node_ptr(index - 1) {
            None => false,
            Some(prev) => {
                let mut node = Node::new(elem);
                // SAFETY: prev is a live node of this list that is not
                // the tail, so the new node is linked between two live
                // nodes.
                unsafe {
                    node.next = (*prev).next;
                    (*prev).next = Box::into_raw(Box::new(node));
                }
                self.len += 1;
                true
            }
        }
    }

    /// Removes and returns the element at the specified index or
    /// `None` if the index is out of bounds, in which case the list is
    /// left unchanged.
    ///
    /// This operation should complete in *O*(*n*) time.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    /// list.append(3);
    ///
    /// assert_eq!(list.remove_at(3), None);
    /// assert_eq!(list.remove_at(1), Some(2));
    /// assert_eq!(list.remove_at(1), Some(3));
    /// assert_eq!(list.tail(), Some(&1));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == 0 {
            return self.pop_head();
        }

        let prev = self.node_ptr(index - 1)?;
        // SAFETY: index < len so prev and its next node are live. The
        // removed node was allocated with `Box::into_raw` and is
        // unlinked before its box is dropped.
        let removed = unsafe {
            let removed = Box::from_raw((*prev).next);
            (*prev).next = removed.next;
            removed
        };
        if removed.next.is_null() {
            self.tail = prev;
        }
        self.len -= 1;
        Some(removed.val)
    }

    /// Returns a raw pointer to the node at the specified index or
    /// None if the index is out of bounds. The pointer is never null.
    fn node_ptr(&self, index: usize) -> Option<*mut Node<T>> {
        if index >= self.len {
            return None;
        }
        let mut cur = self.head;
        for _ in 0..index {
            // SAFETY: index < len, so every node before the one at
            // index has a live successor.
            cur = unsafe { (*cur).next };
        }
        Some(cur)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    // Walks the chain and checks the length, the tail shortcut and
    // the terminal node against what the list records.
    macro_rules! assert_chain {
        ($ll:ident, $expected:expr) => {
            let expected: &[u8] = &$expected;
            let mut count = 0;
            let mut last: *mut Node<u8> = ptr::null_mut();
            let mut cur = $ll.head;
            while !cur.is_null() {
                assert!(count < expected.len(), "chain longer than {}", expected.len());
                unsafe {
                    assert_eq!((*cur).val, expected[count]);
                    last = cur;
                    cur = (*cur).next;
                }
                count += 1;
            }
            assert_eq!(count, expected.len());
            assert_eq!($ll.len(), expected.len());
            assert_eq!($ll.tail, last);
            assert_eq!($ll.head.is_null(), expected.is_empty());
        };
    }

    macro_rules! assert_empty {
        ($ll:ident) => {
            assert!($ll.head.is_null());
            assert!($ll.tail.is_null());
            assert_eq!($ll.len(), 0);
            assert!($ll.is_empty());
            assert_eq!($ll.to_string(), "null");
        };
    }

    fn scenario() -> LinkedList<u8> {
        let mut ll = LinkedList::<u8>::new();
        ll.append(10);
        ll.append(20);
        ll.prepend(5);
        assert!(ll.insert_at(15, 2));
        ll
    }

    #[test]
    fn test_new() {
        let ll = LinkedList::<u8>::new();
        assert_empty!(ll);
        assert!(ll.head_node().is_none());
        assert!(ll.tail_node().is_none());
    }

    #[test]
    fn test_append() {
        let mut ll = LinkedList::<u8>::new();
        ll.append(33);
        assert_chain!(ll, [33]);
        assert_eq!(ll.head(), Some(&33));
        assert_eq!(ll.tail(), Some(&33));

        ll.append(44);
        assert_chain!(ll, [33, 44]);
        ll.append(55);
        assert_chain!(ll, [33, 44, 55]);
        assert_eq!(ll.to_string(), "(33) -> (44) -> (55) -> null");
    }

    #[test]
    fn test_prepend() {
        let mut ll = LinkedList::<u8>::new();
        ll.prepend(11);
        assert_chain!(ll, [11]);
        ll.prepend(12);
        assert_chain!(ll, [12, 11]);
        ll.prepend(13);
        assert_chain!(ll, [13, 12, 11]);
        assert_eq!(ll.tail(), Some(&11));
    }

    #[test]
    fn test_mixed_push() {
        let mut ll = LinkedList::<u8>::new();
        for i in 0..10 {
            if i % 2 == 0 {
                ll.append(i);
            } else {
                ll.prepend(i);
            }
            assert_eq!(ll.size(), i as usize + 1);
        }
        assert_chain!(ll, [9, 7, 5, 3, 1, 0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_at() {
        let ll = scenario();
        for (i, val) in [5u8, 10, 15, 20].iter().enumerate() {
            match ll.at(i) {
                None => panic!("no node at index {}", i),
                Some(node) => assert_eq!(node.val(), val),
            }
        }
        assert!(ll.at(4).is_none());
        assert!(ll.at(usize::MAX).is_none());
        assert!(LinkedList::<u8>::new().at(0).is_none());

        let tail = ll.at(3).unwrap();
        assert!(ptr::eq(tail, ll.tail_node().unwrap()));
        assert!(!tail.has_next());
    }

    #[test]
    fn test_get_mut() {
        let mut ll = scenario();
        *ll.get_mut(3).unwrap() = 21;
        assert_eq!(ll.tail(), Some(&21));
        assert_eq!(ll.get_mut(4), None);
        assert_chain!(ll, [5, 10, 15, 21]);
    }

    #[test]
    fn test_pop_head() {
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(ll.pop_head(), None);
        ll.append(11);
        assert_eq!(ll.pop_head(), Some(11));
        assert_empty!(ll);

        ll.append(11);
        ll.append(12);
        assert_eq!(ll.pop_head(), Some(11));
        assert_chain!(ll, [12]);
        // the tail survives popping the head
        ll.append(13);
        assert_chain!(ll, [12, 13]);
    }

    #[test]
    fn test_pop() {
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(ll.pop(), None);
        assert_empty!(ll);

        ll.append(1);
        assert_eq!(ll.pop(), Some(1));
        assert_empty!(ll);

        ll.append(1);
        ll.append(2);
        ll.append(3);
        assert_eq!(ll.pop(), Some(3));
        assert_chain!(ll, [1, 2]);
        // appending after a pop links off the new tail
        ll.append(4);
        assert_chain!(ll, [1, 2, 4]);
        assert_eq!(ll.pop(), Some(4));
        assert_eq!(ll.pop(), Some(2));
        assert_eq!(ll.pop(), Some(1));
        assert_empty!(ll);
    }

    #[test]
    fn test_contains_find() {
        let mut ll = LinkedList::<u8>::new();
        assert!(!ll.contains(&1));
        assert_eq!(ll.find(&1), None);

        ll.append(1);
        assert!(ll.contains(&1));
        ll.prepend(2);
        assert!(ll.contains(&2));
        ll.append(2);
        assert_eq!(ll.find(&2), Some(0));
        assert_eq!(ll.find(&1), Some(1));

        assert_eq!(ll.remove_at(1), Some(1));
        assert!(!ll.contains(&1));
        assert_eq!(ll.find(&1), None);
    }

    #[test]
    fn test_display() {
        let mut ll = LinkedList::<u8>::new();
        assert_eq!(format!("{}", ll), "null");
        ll.append(1);
        assert_eq!(format!("{}", ll), "(1) -> null");
        let ll = scenario();
        assert_eq!(ll.to_string(), "(5) -> (10) -> (15) -> (20) -> null");
        assert_eq!(format!("{:?}", ll), "[5, 10, 15, 20]");
    }

    #[test]
    fn test_insert_at() {
        let mut ll = LinkedList::<u8>::new();
        assert!(!ll.insert_at(1, 1));
        assert_empty!(ll);

        assert!(ll.insert_at(2, 0));
        assert_chain!(ll, [2]);
        assert!(ll.insert_at(4, 1));
        assert_chain!(ll, [2, 4]);
        assert!(ll.insert_at(3, 1));
        assert_chain!(ll, [2, 3, 4]);
        assert!(ll.insert_at(1, 0));
        assert_chain!(ll, [1, 2, 3, 4]);
        assert!(!ll.insert_at(9, 5));
        assert_chain!(ll, [1, 2, 3, 4]);
        assert!(ll.insert_at(5, 4));
        assert_chain!(ll, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_then_at() {
        for i in 0..=4 {
            let mut ll = scenario();
            assert!(ll.insert_at(99, i));
            assert_eq!(ll.at(i).map(|n| *n.val()), Some(99));
            assert_eq!(ll.size(), 5);
        }
    }

    #[test]
    fn test_remove_at() {
        let mut ll = scenario();
        assert_eq!(ll.remove_at(4), None);
        assert_chain!(ll, [5, 10, 15, 20]);

        assert_eq!(ll.remove_at(0), Some(5));
        assert_chain!(ll, [10, 15, 20]);
        assert_eq!(ll.to_string(), "(10) -> (15) -> (20) -> null");

        assert_eq!(ll.remove_at(2), Some(20));
        assert_chain!(ll, [10, 15]);
        ll.append(30);
        assert_chain!(ll, [10, 15, 30]);

        assert_eq!(ll.remove_at(1), Some(15));
        assert_chain!(ll, [10, 30]);
        assert_eq!(ll.remove_at(1), Some(30));
        assert_chain!(ll, [10]);
        assert_eq!(ll.remove_at(0), Some(10));
        assert_empty!(ll);
        assert_eq!(ll.remove_at(0), None);
    }

    #[test]
    fn test_insert_remove_round_trip() {
        let original = scenario();
        for i in 0..=original.len() {
            let mut ll = original.clone();
            assert!(ll.insert_at(42, i));
            assert_eq!(ll.remove_at(i), Some(42));
            assert_eq!(ll, original);
            assert_chain!(ll, [5, 10, 15, 20]);
        }
    }

    #[test]
    fn test_scenario() {
        let mut ll = scenario();
        assert_eq!(ll.to_string(), "(5) -> (10) -> (15) -> (20) -> null");
        assert_eq!(ll.size(), 4);

        assert_eq!(ll.remove_at(0), Some(5));
        assert_eq!(ll.to_string(), "(10) -> (15) -> (20) -> null");

        assert_eq!(ll.pop(), Some(20));
        assert_eq!(ll.size(), 2);
        assert_chain!(ll, [10, 15]);
    }

    #[test]
    fn test_clear() {
        let mut ll = scenario();
        ll.clear();
        assert_empty!(ll);
        ll.append(1);
        assert_chain!(ll, [1]);
    }

    #[test]
    fn test_drop_long_list() {
        let count = if cfg!(miri) { 1_000 } else { 200_000 };
        let mut ll = LinkedList::<u64>::new();
        for i in 0..count {
            ll.append(i);
        }
        assert_eq!(ll.len(), count as usize);
        drop(ll);
    }

    #[test]
    fn test_collect_extend() {
        let mut ll: LinkedList<u8> = (1..4).collect();
        assert_chain!(ll, [1, 2, 3]);
        ll.extend(vec![4, 5]);
        assert_chain!(ll, [1, 2, 3, 4, 5]);

        let empty: LinkedList<u8> = Vec::new().into_iter().collect();
        assert_empty!(empty);
    }

    #[test]
    fn test_clone_eq() {
        let ll = scenario();
        let mut copy = ll.clone();
        assert_eq!(ll, copy);
        assert_chain!(copy, [5, 10, 15, 20]);

        copy.append(25);
        assert_ne!(ll, copy);
        copy.pop();
        *copy.head_mut().unwrap() = 6;
        assert_ne!(ll, copy);
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<LinkedList<u8>>();
    }

    #[test]
    fn test_tail_access_between_appends() {
        let mut ll = LinkedList::<u8>::new();
        ll.append(1);
        ll.append(2);
        ll.append(3);
        assert_chain!(ll, [1, 2, 3]);

        *ll.get_mut(2).unwrap() = 30;
        ll.append(4);
        assert_chain!(ll, [1, 2, 30, 4]);

        *ll.tail_mut().unwrap() = 40;
        assert_eq!(ll.pop(), Some(40));
        ll.append(5);
        assert_chain!(ll, [1, 2, 30, 5]);

        for e in ll.iter_mut() {
            *e += 1;
        }
        ll.append(6);
        assert_eq!(ll.tail_node().map(|n| *n.val()), Some(6));
        assert_eq!(ll.remove_at(4), Some(6));
        ll.append(7);
        ll.prepend(0);
        assert_chain!(ll, [0, 2, 3, 31, 6, 7]);
        assert_eq!(ll.at(5).map(|n| n.has_next()), Some(false));
    }

    // Drives a pseudo random mix of mutations and checks the chain
    // against a Vec after every step.
    #[test]
    fn test_random_ops_against_vec() {
        let mut seed: u32 = 0x9e37_79b9;
        let mut next_rand = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        let mut ll = LinkedList::<u8>::new();
        let mut model: Vec<u8> = Vec::new();
        let steps = if cfg!(miri) { 200 } else { 2_000 };
        for _ in 0..steps {
            let r = next_rand();
            let val = (r >> 8) as u8;
            let index = (r >> 16) as usize % (model.len() + 2);
            match r % 7 {
                0 => {
                    ll.append(val);
                    model.push(val);
                }
                1 => {
                    ll.prepend(val);
                    model.insert(0, val);
                }
                2 => {
                    let in_range = index <= model.len();
                    assert_eq!(ll.insert_at(val, index), in_range);
                    if in_range {
                        model.insert(index, val);
                    }
                }
                3 => {
                    let expected = if index < model.len() {
                        Some(model.remove(index))
                    } else {
                        None
                    };
                    assert_eq!(ll.remove_at(index), expected);
                }
                4 => assert_eq!(ll.pop(), model.pop()),
                5 => {
                    let expected = if model.is_empty() {
                        None
                    } else {
                        Some(model.remove(0))
                    };
                    assert_eq!(ll.pop_head(), expected);
                }
                _ => match ll.get_mut(index) {
                    None => assert!(index >= model.len()),
                    Some(x) => {
                        *x = val;
                        model[index] = val;
                    }
                },
            }
            assert_chain!(ll, model);
            assert_eq!(ll.find(&val), model.iter().position(|e| *e == val));
            assert_eq!(ll.contains(&val), model.contains(&val));
        }
    }
}

// proptest doesn't run under miri with the default config
#[cfg(all(not(miri), test))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Op {
        Append(u8),
        Prepend(u8),
        InsertAt(u8, usize),
        RemoveAt(usize),
        Pop,
        PopHead,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<u8>().prop_map(Op::Append),
            2 => any::<u8>().prop_map(Op::Prepend),
            2 => (any::<u8>(), 0..24usize).prop_map(|(v, i)| Op::InsertAt(v, i)),
            1 => (0..24usize).prop_map(Op::RemoveAt),
            1 => Just(Op::Pop),
            1 => Just(Op::PopHead),
        ]
    }

    fn render(values: &[u8]) -> String {
        let mut out = String::new();
        for v in values {
            out.push_str(&format!("({}) -> ", v));
        }
        out.push_str("null");
        out
    }

    proptest! {
        #[test]
        fn ops_match_vec(ops in prop::collection::vec(op(), 0..200)) {
            let mut ll = LinkedList::new();
            let mut model: Vec<u8> = Vec::new();

            for op in ops {
                match op {
                    Op::Append(v) => {
                        ll.append(v);
                        model.push(v);
                    }
                    Op::Prepend(v) => {
                        ll.prepend(v);
                        model.insert(0, v);
                    }
                    Op::InsertAt(v, i) => {
                        prop_assert_eq!(ll.insert_at(v, i), i <= model.len());
                        if i <= model.len() {
                            model.insert(i, v);
                        }
                    }
                    Op::RemoveAt(i) => {
                        let expected = if i < model.len() { Some(model.remove(i)) } else { None };
                        prop_assert_eq!(ll.remove_at(i), expected);
                    }
                    Op::Pop => prop_assert_eq!(ll.pop(), model.pop()),
                    Op::PopHead => {
                        let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                        prop_assert_eq!(ll.pop_head(), expected);
                    }
                }

                prop_assert_eq!(ll.size(), model.len());
                prop_assert!(ll.iter().eq(model.iter()));
                prop_assert_eq!(ll.head(), model.first());
                prop_assert_eq!(ll.tail(), model.last());
                prop_assert_eq!(ll.tail_node().map(|n| n.has_next()), model.last().map(|_| false));
            }
            prop_assert_eq!(ll.to_string(), render(&model));
        }

        #[test]
        fn insert_then_remove_restores(
            values in prop::collection::vec(any::<u8>(), 0..32),
            v in any::<u8>(),
            index in 0..40usize,
        ) {
            let mut ll: LinkedList<u8> = values.iter().cloned().collect();
            let before = ll.clone();
            if index <= values.len() {
                prop_assert!(ll.insert_at(v, index));
                prop_assert_eq!(ll.at(index).map(|n| *n.val()), Some(v));
                prop_assert!(ll.contains(&v));
                prop_assert_eq!(ll.remove_at(index), Some(v));
            } else {
                prop_assert!(!ll.insert_at(v, index));
                prop_assert_eq!(ll.remove_at(index), None);
            }
            prop_assert_eq!(&ll, &before);
            prop_assert_eq!(ll.size(), values.len());
        }
    }
}
