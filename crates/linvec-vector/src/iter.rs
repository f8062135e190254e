//! Traversal and collection impls for [`Vector`].

use crate::vector::Vector;

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the valid elements by value; spare slots are dropped.
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Appends through [`Vector::push`], so capacity follows the growth policy.
///
/// # Panics
///
/// Panics if the vector would exceed `u32::MAX` elements.
impl<T: Default> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            // An oversized hint only skips the up-front reservation; a real
            // overflow is reported by `push`.
            if let Err(e) = self.reserve(self.len().saturating_add(lower)) {
                log::debug!("vector extend: ignoring size hint {lower}: {e}");
            }
        }
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Default> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Vector::new();
        v.extend(iter);
        v
    }
}
