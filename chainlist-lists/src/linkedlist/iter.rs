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
use crate::{linkedlist::list::LinkedList, linkedlist::node::Node};
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// An iterator over the values of the [`LinkedList`](LinkedList)
/// from head to tail.
///
/// This struct is created by the [`.iter()`](LinkedList#method.iter)
/// of the [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use chainlist::lists::LinkedList;
/// use chainlist::lists::linkedlist::Iter;
///
/// let mut list = LinkedList::<u8>::new();
/// list.prepend(1);
/// list.prepend(2);
/// list.prepend(3);
///
/// let mut iter: Iter<u8> = list.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: *const Node<T>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

/// An iterator over the values of the [`LinkedList`] with mutable
/// references that allows the values to be modified.
///
/// This struct is created by the
/// [`.iter_mut()`](LinkedList#method.iter_mut) method of the
/// [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use chainlist::lists::LinkedList;
/// use chainlist::lists::linkedlist::IterMut;
///
/// let mut list = LinkedList::<u8>::new();
/// list.append(1);
/// list.append(2);
/// list.append(3);
///
/// let iter_mut: IterMut<u8> = list.iter_mut();
/// for e in iter_mut {
///     *e += 100;
/// }
///
/// assert_eq!(list.to_string(), "(101) -> (102) -> (103) -> null");
/// ```
#[derive(Debug)]
pub struct IterMut<'a, T> {
    cursor: *mut Node<T>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator that moves the values out of the
/// [`LinkedList`] from head to tail.
///
/// This struct is created by the `into_iter()` method of the
/// [`LinkedList`](LinkedList).
///
/// # Examples
/// ```
/// use chainlist::lists::LinkedList;
///
/// let list: LinkedList<String> = vec!["a".to_string(), "b".to_string()]
///     .into_iter()
///     .collect();
///
/// let owned: Vec<String> = list.into_iter().collect();
/// assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
/// ```
#[derive(Debug)]
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: *const Node<T>, len: usize) -> Iter<'a, T> {
        Iter {
            cursor: head,
            len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: *mut Node<T>, len: usize) -> IterMut<'a, T> {
        IterMut {
            cursor: head,
            len,
            marker: PhantomData,
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: LinkedList<T>) -> IntoIter<T> {
        IntoIter { list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.cursor.is_null() {
            return None;
        }
        // SAFETY: the cursor is a live node of the list, which stays
        // borrowed immutably for 'a.
        unsafe {
            let node = &*self.cursor;
            self.cursor = node.next;
            self.len -= 1;
            Some(&node.val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        if self.cursor.is_null() {
            return None;
        }
        // SAFETY: the cursor is a live node of the list, which stays
        // borrowed mutably for 'a. Each node is yielded once, so the
        // returned references never alias.
        unsafe {
            let node = self.cursor;
            self.cursor = (*node).next;
            self.len -= 1;
            Some(&mut (*node).val)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.list.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}
