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

//! A singly linked list that owns the nodes. This linked list allows
//! appending and prepending elements in constant time and popping the
//! head in constant time.
//!
//! Nodes only link forward, so popping the tail and inserting or
//! removing in the middle of the list walk from the head and complete
//! in linear time.
//!
pub mod iter;
pub mod list;
pub mod node;
