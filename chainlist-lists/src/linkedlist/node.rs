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

use core::fmt;
use core::ptr;

/// A node in the [`LinkedList`](../struct.LinkedList.html).
///
/// Each node holds one value and a link to the node that follows
/// it. The last node in the list has no next node. Nodes are
/// allocated and released only by the list and can only be borrowed
/// immutably from outside it, so the chain cannot be relinked by
/// callers.
///
/// # Examples
/// ```
/// use chainlist::lists::LinkedList;
///
/// let mut list = LinkedList::<u8>::new();
/// list.append(1);
/// list.append(2);
///
/// let node = list.at(0).unwrap();
/// assert_eq!(node.val(), &1);
/// assert_eq!(node.next().map(|n| n.val()), Some(&2));
/// ```
pub struct Node<T> {
    pub(super) val: T,
    pub(super) next: *mut Node<T>,
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("val", &self.val)
            .field("next", &self.next())
            .finish()
    }
}

impl<T> Node<T> {
    pub(super) fn new(val: T) -> Node<T> {
        Node {
            val,
            next: ptr::null_mut(),
        }
    }

    /// Returns a reference to the value held by this node.
    pub fn val(&self) -> &T {
        &self.val
    }

    /// Returns the node immediately after this one or `None` if this
    /// is the last node in the list.
    ///
    /// # Examples
    /// ```
    /// use chainlist::lists::LinkedList;
    ///
    /// let mut list = LinkedList::<u8>::new();
    /// list.append(1);
    /// list.append(2);
    ///
    /// let tail = list.tail_node().unwrap();
    /// assert_eq!(tail.val(), &2);
    /// assert!(tail.next().is_none());
    /// ```
    pub fn next(&self) -> Option<&Node<T>> {
        // SAFETY: a non-null next pointer refers to a live node of the
        // same list, and the list cannot be mutated while `self` is
        // borrowed from it.
        unsafe { self.next.as_ref() }
    }

    /// Returns `true` if there is a node after this one.
    pub fn has_next(&self) -> bool {
        !self.next.is_null()
    }
}
