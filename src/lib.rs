//! A singly linked list with constant time appends and an extensive API.

/// A collection of list data structures
pub mod lists {
    pub use chainlist_lists::linkedlist::list::LinkedList;
    /// This module contains structs specific to the [`LinkedList`]
    pub mod linkedlist {
        pub use chainlist_lists::linkedlist::iter::IntoIter;
        pub use chainlist_lists::linkedlist::iter::Iter;
        pub use chainlist_lists::linkedlist::iter::IterMut;
        pub use chainlist_lists::linkedlist::node::Node;
    }
}
