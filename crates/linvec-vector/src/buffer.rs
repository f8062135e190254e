//! Slot allocation and relocation for the vector's backing buffer.
//!
//! The buffer is a `Box<[T]>` whose length is the vector's capacity.
//! Every slot is initialised: spare slots hold `T::default()`. There is no
//! `MaybeUninit` and no `unsafe` here.

/// Allocate exactly `capacity` default-initialised slots.
///
/// A zero capacity yields an empty boxed slice, which does not allocate.
pub(crate) fn alloc_slots<T: Default>(capacity: usize) -> Box<[T]> {
    std::iter::repeat_with(T::default).take(capacity).collect()
}

/// Move the first `keep` elements of `old` into a fresh buffer of exactly
/// `capacity` slots, releasing `old`.
///
/// Elements are moved with `mem::take`, so no `Clone` bound is needed.
pub(crate) fn relocate<T: Default>(mut old: Box<[T]>, keep: usize, capacity: usize) -> Box<[T]> {
    debug_assert!(keep <= old.len(), "relocate keeps more than the old buffer holds");
    debug_assert!(keep <= capacity, "relocate keeps more than the new buffer holds");
    let mut fresh = alloc_slots(capacity);
    for (dst, src) in fresh.iter_mut().zip(old[..keep].iter_mut()) {
        *dst = std::mem::take(src);
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_slots_are_default() {
        let slots: Box<[i32]> = alloc_slots(4);
        assert_eq!(&*slots, &[0, 0, 0, 0]);
    }

    #[test]
    fn alloc_zero_is_empty() {
        let slots: Box<[String]> = alloc_slots(0);
        assert!(slots.is_empty());
    }

    #[test]
    fn relocate_grows_and_keeps_prefix() {
        let old: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();
        let fresh = relocate(old, 2, 5);
        assert_eq!(&*fresh, &[1, 2, 0, 0, 0]);
    }

    #[test]
    fn relocate_shrinks() {
        let old: Box<[String]> = vec!["a".to_string(), "b".to_string(), "c".to_string()]
            .into_boxed_slice();
        let fresh = relocate(old, 1, 1);
        assert_eq!(&*fresh, &["a".to_string()]);
    }
}
