//! Utilities for treating the backing storage for arena trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the backing storages of arena trees
//! - [`DefaultStorage`], a type definition for the storage used by trees unless a different one is specified
//! - [`CapacityError`], the error produced when a fixed-capacity storage runs out of room
//!
//! Implementations are provided for [`Vec`] and for [`ArrayVec`], the latter being useful when the size of the trees is known in advance and heap allocation for the nodes is unwanted.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`CapacityError`]: struct.CapacityError.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

use arrayvec::{ArrayVec, Array};
use thiserror::Error;

/// Trait for list-like containers which can be the backing storage for arena trees.
///
/// Elements are addressed by the position at which they were added. Arena trees never remove elements, so keys handed out by [`add`] stay valid for the lifetime of the storage.
///
/// [`add`]: #tymethod.add " "
pub trait Storage: Sized {
    /// The type of the elements stored.
    type Element;

    /// Creates an empty storage. Dynamically-allocated storages created this way do not allocate memory.
    fn new() -> Self;
    /// Adds an element to the end of the storage, returning its key.
    ///
    /// # Errors
    /// Fails if the storage has a fixed capacity and is already full. The element is dropped in that case.
    fn add(&mut self, element: Self::Element) -> Result<usize, CapacityError>;
    /// Returns a reference to the element at the specified key, or `None` if the key is out of bounds.
    fn get(&self, key: usize) -> Option<&Self::Element>;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    fn capacity(&self) -> usize;

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Errors
    /// Storages with a fixed capacity fail if the elements would not fit. The default implementation does exactly that.
    #[inline]
    fn reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        let capacity = self.capacity();
        if self.len().saturating_add(additional) > capacity {
            Err(CapacityError { capacity })
        } else {
            Ok(())
        }
    }
    /// Returns `true` if the specified key points to an element, `false` otherwise.
    #[inline(always)]
    fn contains_key(&self, key: usize) -> bool {
        key < self.len()
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The default storage type used by the tree types when a storage type is not provided.
pub type DefaultStorage<T> = Vec<T>;

/// The error type returned when a fixed-capacity storage cannot hold any more elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("the storage is full (capacity of {capacity} elements)")]
pub struct CapacityError {
    /// The total capacity of the storage which ran out of room.
    pub capacity: usize,
}

impl<T> Storage for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> Result<usize, CapacityError> {
        let key = self.len();
        self.push(element);
        Ok(key)
    }
    #[inline(always)]
    fn get(&self, key: usize) -> Option<&Self::Element> {
        (**self).get(key)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) -> Result<(), CapacityError> {
        self.reserve(additional);
        Ok(())
    }
}

impl<A> Storage for ArrayVec<A>
where A: Array,
{
    type Element = A::Item;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline]
    fn add(&mut self, element: Self::Element) -> Result<usize, CapacityError> {
        let key = self.len();
        self.try_push(element).map_err(|_| CapacityError {
            capacity: A::CAPACITY,
        })?;
        Ok(key)
    }
    #[inline(always)]
    fn get(&self, key: usize) -> Option<&Self::Element> {
        self.as_slice().get(key)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        A::CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_never_runs_out() {
        let mut storage = <Vec<u8> as Storage>::new();
        assert_eq!(Storage::reserve(&mut storage, 1024), Ok(()));
        for i in 0..=255 {
            assert_eq!(Storage::add(&mut storage, i), Ok(usize::from(i)));
        }
        assert_eq!(Storage::get(&storage, 255), Some(&255));
        assert!(!Storage::contains_key(&storage, 256));
    }

    #[test]
    fn arrayvec_reports_its_capacity() {
        let mut storage = <ArrayVec<[u8; 2]> as Storage>::new();
        assert_eq!(Storage::reserve(&mut storage, 3), Err(CapacityError { capacity: 2 }));
        assert_eq!(Storage::add(&mut storage, 10), Ok(0));
        assert_eq!(Storage::add(&mut storage, 20), Ok(1));
        assert_eq!(Storage::add(&mut storage, 30), Err(CapacityError { capacity: 2 }));
        assert_eq!(Storage::len(&storage), 2);
        assert_eq!(Storage::get(&storage, 1), Some(&20));
    }
}
