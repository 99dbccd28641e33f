/// Reduces `value` into `0..len`, wrapping negatives around from the end.
///
/// `len` must be non-zero.
pub fn wrap_index(value: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index called with an empty range");
    let len = len as isize;
    (((value % len) + len) % len) as usize
}

/// One step forward in a ring of `len` slots.
pub fn step_forward(index: usize, len: usize) -> usize {
    wrap_index(index as isize + 1, len)
}

/// One step back in a ring of `len` slots.
pub fn step_back(index: usize, len: usize) -> usize {
    wrap_index(index as isize - 1, len)
}

// proptest is a host-only dev-dependency.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negatives_wrap_to_the_end() {
        assert_eq!(wrap_index(-1, 9), 8);
        assert_eq!(wrap_index(-10, 9), 8);
        assert_eq!(wrap_index(9, 9), 0);
        assert_eq!(wrap_index(4, 9), 4);
    }

    #[test]
    fn single_slot_ring_stays_put() {
        assert_eq!(step_forward(0, 1), 0);
        assert_eq!(step_back(0, 1), 0);
    }

    proptest! {
        #[test]
        fn result_is_always_in_range(value in -1000isize..1000, len in 1usize..50) {
            prop_assert!(wrap_index(value, len) < len);
        }

        #[test]
        fn forward_then_back_is_identity(len in 1usize..50, seed in 0usize..1000) {
            let index = seed % len;
            prop_assert_eq!(step_back(step_forward(index, len), len), index);
            prop_assert_eq!(step_forward(step_back(index, len), len), index);
        }
    }
}
