/// Waiting-days tests: fixed scenarios, the stack ordering invariant, and
/// property checks against a quadratic forward scan.
///
/// The forward scan is the obvious definition of a wait: walk right from
/// `i` until a strictly greater reading turns up.

#[cfg(test)]
mod stack_tests {
    use crate::waiting::stack::{waiting_days, MonotonicStack};
    use proptest::prelude::*;

    fn forward_scan<T: PartialOrd>(values: &[T]) -> Vec<usize> {
        (0..values.len())
            .map(|i| {
                values[i + 1..]
                    .iter()
                    .position(|v| *v > values[i])
                    .map_or(0, |k| k + 1)
            })
            .collect()
    }

    // ── fixed scenarios ───────────────────────────────────────────────────────

    #[test]
    fn sample_week() {
        let temps = [73, 74, 75, 71, 69, 72, 76, 73];
        assert_eq!(waiting_days(&temps), vec![1, 1, 4, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn empty_input() {
        let temps: [i64; 0] = [];
        assert!(waiting_days(&temps).is_empty());
    }

    #[test]
    fn single_reading() {
        assert_eq!(waiting_days(&[42]), vec![0]);
    }

    #[test]
    fn strictly_decreasing_never_warms() {
        assert_eq!(waiting_days(&[5, 4, 3, 2, 1]), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn strictly_increasing_waits_one_day() {
        assert_eq!(waiting_days(&[1, 2, 3, 4, 5]), vec![1, 1, 1, 1, 0]);
    }

    #[test]
    fn equal_readings_are_not_warmer() {
        assert_eq!(waiting_days(&[70, 70, 70]), vec![0, 0, 0]);
        assert_eq!(waiting_days(&[70, 70, 71]), vec![2, 1, 0]);
    }

    #[test]
    fn negative_readings() {
        assert_eq!(waiting_days(&[-10, -20, -5, -5, 0]), vec![2, 1, 2, 1, 0]);
    }

    #[test]
    fn float_readings() {
        assert_eq!(waiting_days(&[1.5, 1.25, 2.0]), vec![2, 1, 0]);
    }

    #[test]
    fn repeated_calls_agree() {
        let temps = vec![30, 40, 50, 60, 55, 45, 65];
        let first = waiting_days(&temps);
        let second = waiting_days(&temps);
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 1, 1, 3, 2, 1, 0]);
    }

    // ── stack ─────────────────────────────────────────────────────────────────

    #[test]
    fn settle_keeps_readings_decreasing() {
        let temps = [73, 74, 75, 71, 69, 72, 76, 73];
        let mut waits = vec![0; temps.len()];
        let mut stack = MonotonicStack::with_capacity(temps.len());

        for i in 0..temps.len() {
            stack.settle(i, &temps, &mut waits);
            assert_eq!(stack.peek(), Some(i), "day {i} must be on top after settling");
            for pair in stack.as_slice().windows(2) {
                assert!(
                    temps[pair[0]] >= temps[pair[1]],
                    "stack out of order after day {i}: {:?}",
                    stack.as_slice()
                );
            }
        }

        // 76 and the trailing 73 never see a warmer day
        assert_eq!(stack.as_slice(), &[6, 7]);
    }

    #[test]
    fn settle_resolves_only_strictly_cooler_days() {
        let temps = [5, 3, 3, 4];
        let mut waits = vec![0; temps.len()];
        let mut stack = MonotonicStack::with_capacity(temps.len());

        for i in 0..3 {
            stack.settle(i, &temps, &mut waits);
        }
        assert_eq!(stack.as_slice(), &[0, 1, 2]);

        stack.settle(3, &temps, &mut waits);
        assert_eq!(stack.as_slice(), &[0, 3]);
        assert_eq!(waits, vec![0, 2, 1, 0]);
    }

    #[test]
    fn empty_stack_has_no_top() {
        let stack = MonotonicStack::default();
        assert_eq!(stack.peek(), None);
        assert!(stack.as_slice().is_empty());
    }

    // ── properties ────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn matches_forward_scan(temps in prop::collection::vec(-50i64..50, 0..200)) {
            prop_assert_eq!(waiting_days(&temps), forward_scan(&temps));
        }

        #[test]
        fn waits_point_at_first_warmer_day(temps in prop::collection::vec(-20i32..20, 0..100)) {
            let waits = waiting_days(&temps);
            prop_assert_eq!(waits.len(), temps.len());

            for (i, &w) in waits.iter().enumerate() {
                if w > 0 {
                    prop_assert!(temps[i + w] > temps[i]);
                    for k in i + 1..i + w {
                        prop_assert!(temps[k] <= temps[i]);
                    }
                } else {
                    for j in i + 1..temps.len() {
                        prop_assert!(temps[j] <= temps[i]);
                    }
                }
            }
        }
    }
}
