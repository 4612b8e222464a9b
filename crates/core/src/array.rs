//! Never-absent collections
//!
//! The peer's data model has no "nil list": an empty list and a missing list
//! are the same thing. `Array<T>` bakes that into the type. There is no absent
//! state to represent, and `Option<Vec<T>>` inputs collapse `None` into empty.

use std::ops::Deref;

/// Ordered collection that always encodes as a JSON array
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T>(Vec<T>);

impl<T> Array<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Array(Vec::new())
    }

    /// Append an element
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    /// Borrow the elements
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Take ownership of the elements
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array(items)
    }
}

/// `None` normalizes to an empty collection.
impl<T> From<Option<Vec<T>>> for Array<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        Array(items.unwrap_or_default())
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
