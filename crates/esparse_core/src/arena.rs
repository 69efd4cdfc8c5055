//! Arena helpers for tree construction.
//!
//! Every tree node is allocated from a caller-owned bump arena. Child lists are
//! collected in a `Vec` while parsing and moved into the arena once complete.

use bumpalo::Bump;

/// Move a Vec into the arena as a slice.
///
/// Uses ManuallyDrop to prevent double-free on panic inside alloc_slice_fill_with.
pub fn alloc_vec_in<T>(arena: &Bump, vec: Vec<T>) -> &[T] {
    if vec.is_empty() {
        return &[];
    }
    let mut vec = std::mem::ManuallyDrop::new(vec);
    let len = vec.len();
    let ptr = vec.as_ptr();
    let slice = arena.alloc_slice_fill_with(len, |i| {
        // SAFETY: i < len, and each element is read exactly once. ManuallyDrop
        // keeps the Vec destructor from running, so no element is dropped twice.
        unsafe { std::ptr::read(ptr.add(i)) }
    });
    // The elements now live in the arena; release the Vec buffer without
    // dropping them again.
    unsafe {
        vec.set_len(0);
        std::mem::ManuallyDrop::drop(&mut vec);
    }
    slice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_vec_in_moves_elements() {
        let arena = Bump::new();
        let names = vec!["a", "b", "c"];
        let slice = alloc_vec_in(&arena, names);
        assert_eq!(slice.len(), 3);
        assert_eq!(slice[1], "b");
    }

    #[test]
    fn test_alloc_vec_in_empty() {
        let arena = Bump::new();
        let slice: &[u32] = alloc_vec_in(&arena, Vec::new());
        assert!(slice.is_empty());
    }
}
