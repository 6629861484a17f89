//! Buffer capacity policy.

/// Compute the allocation size for a buffer that must hold `required` bytes.
///
/// Capacities move in powers of two with one extra doubling of headroom.
/// Growing doubles a 2-byte baseline until `required` is covered, then
/// doubles once more. Shrinking only starts once `required` drops below half
/// the current capacity; it halves down to `required`, clamps at the 2-byte
/// baseline, and applies the same extra doubling. Anything in between keeps
/// the current capacity, so a workload whose size oscillates inside the band
/// never reallocates.
pub fn next_capacity(current: u64, required: u64) -> u64 {
    if required > current {
        let mut size = 2;
        while size < required {
            size *= 2;
        }
        size * 2
    } else if required < current / 2 {
        let mut size = current;
        while size > required {
            size /= 2;
        }
        size.max(2) * 2
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_has_one_doubling_of_headroom() {
        // 2 -> 4 -> 8 -> 16 covers 10, then one extra doubling
        assert_eq!(next_capacity(2, 10), 32);
        assert_eq!(next_capacity(0, 1), 4);
        assert_eq!(next_capacity(4, 5), 16);
    }

    #[test]
    fn shrink_halves_then_doubles_once() {
        // 256 -> 128 -> 64 -> 32 (<= 50), then the headroom doubling
        assert_eq!(next_capacity(256, 50), 64);
        assert_eq!(next_capacity(1024, 100), 128);
    }

    #[test]
    fn shrink_to_empty_hits_the_floor() {
        assert_eq!(next_capacity(256, 0), 4);
        assert_eq!(next_capacity(8, 0), 4);
    }

    #[test]
    fn floor_is_four_bytes() {
        for current in [4u64, 8, 64, 4096] {
            for required in 0..4 {
                assert!(next_capacity(current, required) >= 4);
            }
        }
    }

    #[test]
    fn hysteresis_band_is_a_no_op() {
        // No reallocation for any required size in (current/2, current]
        let current = 256;
        for required in (current / 2 + 1)..=current {
            assert_eq!(next_capacity(current, required), current);
        }
        // Exactly half sits inside the band too (shrink needs strictly less)
        assert_eq!(next_capacity(256, 128), 256);
    }

    #[test]
    fn zero_capacity_zero_required_stays_unallocated() {
        assert_eq!(next_capacity(0, 0), 0);
    }

    #[test]
    fn result_always_covers_required() {
        for current in [0u64, 2, 4, 16, 256, 65536] {
            for required in [0u64, 1, 3, 9, 100, 1000, 70000] {
                let capacity = next_capacity(current, required);
                assert!(
                    capacity >= required,
                    "capacity {capacity} < required {required} (current {current})"
                );
            }
        }
    }

    #[test]
    fn nonzero_results_are_powers_of_two() {
        for current in [0u64, 4, 64, 1024] {
            for required in [0u64, 1, 7, 100, 5000] {
                let capacity = next_capacity(current, required);
                assert!(
                    capacity == 0 || capacity.is_power_of_two(),
                    "capacity {capacity} is not a power of two"
                );
            }
        }
    }

    #[test]
    fn monotone_growth_never_underallocates() {
        let mut capacity = 0;
        for required in (0..10_000).step_by(137) {
            capacity = next_capacity(capacity, required);
            assert!(capacity >= required);
        }
    }

    #[test]
    fn stable_required_size_is_idempotent() {
        let first = next_capacity(0, 1000);
        let second = next_capacity(first, 1000);
        assert_eq!(first, second);
    }
}
