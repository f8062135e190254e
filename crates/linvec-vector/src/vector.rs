//! The [`Vector`] storage and growth engine.

use std::fmt;
use std::ops::{Index, IndexMut};

use linvec_core::{checked_len, LinalgError};

use crate::buffer;
use crate::config::GrowthPolicy;

/// A contiguous, growable buffer of `T` with explicit capacity control.
///
/// Unlike `Vec`, capacity changes are exact and observable: `reserve(n)`
/// allocates precisely `n` slots, pushes grow by the vector's
/// [`GrowthPolicy`], and a shrinking `resize` or `clear` releases memory.
/// Lengths and capacities are limited to `u32::MAX`.
///
/// Spare slots (`len..capacity`) always hold `T::default()`, so slots
/// exposed by a growing `resize` read as default values.
///
/// # Examples
///
/// ```
/// use linvec_vector::Vector;
///
/// let mut v = Vector::new();
/// for i in 0..5 {
///     v.push(i);
/// }
/// assert_eq!(v.len(), 5);
/// assert_eq!(v.capacity(), 8);
/// assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);
/// ```
pub struct Vector<T> {
    /// Backing slots; `data.len()` is the capacity.
    data: Box<[T]>,
    /// Number of valid elements at the front of `data`.
    len: u32,
    policy: GrowthPolicy,
}

impl<T> Vector<T> {
    /// Create an empty vector. Does not allocate.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::DOUBLING)
    }

    /// Create an empty vector that grows according to `policy`.
    ///
    /// A [`GrowthPolicy`] can only be built through its validating
    /// constructor, so every push is guaranteed to make room.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: Box::default(),
            len: 0,
            policy,
        }
    }

    /// Wrap a fully-populated buffer. `data.len()` must fit in `u32`.
    pub(crate) fn from_boxed(data: Box<[T]>, policy: GrowthPolicy) -> Self {
        debug_assert!(data.len() <= linvec_core::MAX_LEN);
        let len = data.len() as u32;
        Self { data, len, policy }
    }

    /// Number of valid elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// The growth policy applied on push overflow.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The valid elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len as usize]
    }

    /// The valid elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len as usize]
    }

    /// Iterate over the valid elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the valid elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// First element, if any.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Mutable first element, if any.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable last element, if any.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Bounds-checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if `index >= len`, which
    /// includes every index of an empty vector.
    pub fn at(&self, index: usize) -> Result<&T, LinalgError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(LinalgError::OutOfBounds { index, len })
    }

    /// Bounds-checked mutable element access.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::OutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, LinalgError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(LinalgError::OutOfBounds { index, len })
    }

    /// Transfer ownership of the buffer out of `self`.
    ///
    /// The returned vector adopts the buffer without copying. `self` is
    /// left empty (no buffer, zero length and capacity) but keeps its
    /// growth policy and stays usable.
    pub fn take(&mut self) -> Self {
        let policy = self.policy;
        std::mem::replace(self, Self::with_policy(policy))
    }

    /// Drop every element and release the buffer.
    ///
    /// Capacity drops to zero; the allocation is not kept for reuse.
    pub fn clear(&mut self) {
        if !self.data.is_empty() {
            log::debug!("vector clear: releasing {} slots", self.data.len());
        }
        self.data = Box::default();
        self.len = 0;
    }

    /// Consume the vector, returning its valid elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::from(self.data);
        out.truncate(self.len as usize);
        out
    }
}

impl<T: Default> Vector<T> {
    /// Create a vector of `len` default-valued elements.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if `len > u32::MAX`.
    pub fn with_len(len: usize) -> Result<Self, LinalgError> {
        checked_len(len)?;
        Ok(Self::from_boxed(buffer::alloc_slots(len), GrowthPolicy::DOUBLING))
    }

    /// Ensure capacity for at least `capacity` elements.
    ///
    /// If `capacity` exceeds the current capacity, a buffer of exactly
    /// `capacity` slots replaces the old one and the valid elements move
    /// across. Never reduces capacity.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if `capacity > u32::MAX`.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), LinalgError> {
        checked_len(capacity)?;
        if capacity > self.data.len() {
            self.grow_exact(capacity);
        }
        Ok(())
    }

    /// Append `value`, growing by the policy when full.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if the vector already
    /// holds `u32::MAX` elements. `value` is dropped in that case.
    pub fn try_push(&mut self, value: T) -> Result<(), LinalgError> {
        if self.len() == self.data.len() {
            if self.len == u32::MAX {
                return Err(LinalgError::AllocationFailed {
                    requested: u64::from(u32::MAX) + 1,
                    limit: u64::from(u32::MAX),
                });
            }
            let next = self.policy.next_capacity(self.len);
            debug_assert!(next > self.len, "growth policy stalled at {}", self.len);
            self.grow_exact(next as usize);
        }
        self.data[self.len as usize] = value;
        self.len += 1;
        Ok(())
    }

    /// Append `value`, growing by the policy when full.
    ///
    /// # Panics
    ///
    /// Panics if the vector already holds `u32::MAX` elements.
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.try_push(value) {
            panic!("{e}");
        }
    }

    /// Set the length to `len`.
    ///
    /// - `len < self.len()`: reallocates to exactly `len` slots, keeping
    ///   the first `len` elements. Capacity shrinks to `len`.
    /// - `len > self.capacity()`: reserves exactly `len` slots; the new
    ///   elements are `T::default()`.
    /// - otherwise: adjusts the length in place, reusing spare slots.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if `len > u32::MAX`.
    pub fn resize(&mut self, len: usize) -> Result<(), LinalgError> {
        let new_len = checked_len(len)?;
        if new_len < self.len {
            log::debug!(
                "vector shrink: {} -> {} slots (len {} -> {})",
                self.data.len(),
                len,
                self.len,
                len
            );
            let old = std::mem::take(&mut self.data);
            self.data = buffer::relocate(old, len, len);
        } else if len > self.data.len() {
            self.grow_exact(len);
        }
        self.len = new_len;
        Ok(())
    }

    /// Replace the buffer with one of exactly `capacity` slots.
    ///
    /// Callers guarantee `len <= capacity <= u32::MAX`.
    fn grow_exact(&mut self, capacity: usize) {
        log::debug!(
            "vector grow: {} -> {} slots (len {})",
            self.data.len(),
            capacity,
            self.len
        );
        let old = std::mem::take(&mut self.data);
        self.data = buffer::relocate(old, self.len as usize, capacity);
    }
}

impl<T: Clone> Vector<T> {
    /// Create a vector of `len` copies of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if `len > u32::MAX`.
    pub fn filled(len: usize, value: T) -> Result<Self, LinalgError> {
        checked_len(len)?;
        Ok(Self::from_boxed(
            vec![value; len].into_boxed_slice(),
            GrowthPolicy::DOUBLING,
        ))
    }

    /// Create a vector by copying `source`. Capacity equals `source.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::AllocationFailed`] if `source` is longer
    /// than `u32::MAX`.
    pub fn from_slice(source: &[T]) -> Result<Self, LinalgError> {
        checked_len(source.len())?;
        Ok(Self::from_boxed(source.into(), GrowthPolicy::DOUBLING))
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy. The copy's capacity equals the source's capacity.
impl<T: Clone + Default> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut data = buffer::alloc_slots(self.data.len());
        data[..self.len as usize].clone_from_slice(self.as_slice());
        Self {
            data,
            len: self.len,
            policy: self.policy,
        }
    }
}

/// Compares length, then elements in order. Capacity and policy are ignored.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Space-separated elements, e.g. `1 2 3`.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            x.fmt(f)?;
        }
        Ok(())
    }
}

/// Unchecked fast path: no length test beyond slice indexing.
///
/// Indexing past `len` is a caller bug and panics.
impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> TryFrom<Vec<T>> for Vector<T> {
    type Error = LinalgError;

    /// Adopt a `Vec`'s elements. Capacity equals the `Vec`'s length.
    fn try_from(source: Vec<T>) -> Result<Self, LinalgError> {
        checked_len(source.len())?;
        Ok(Self::from_boxed(
            source.into_boxed_slice(),
            GrowthPolicy::DOUBLING,
        ))
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.into_vec()
    }
}
