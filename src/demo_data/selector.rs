//! Bell-shaped selection from an ordered collection.
//!
//! A standard normal sample is clipped to `[-2.5, 2.5]` and mapped linearly onto the
//! collection, then truncated to an index. Truncation shifts the mass toward the
//! front: with two elements the first is chosen unless the sample hits the upper cap.

use crate::demo_data::random::RandomStream;

/// Samples beyond this many standard deviations are clipped.
pub const CUTOFF: f64 = 2.5;

/// Index in `[0, len)` for a non-empty collection. Consumes one gaussian draw.
pub fn select_index(len: usize, random: &mut RandomStream) -> usize {
    let gaussian = random.next_gaussian().clamp(-CUTOFF, CUTOFF);
    let normalized = (gaussian + CUTOFF) / (2.0 * CUTOFF);
    let index = (normalized * (len.saturating_sub(1)) as f64) as usize;
    index.min(len.saturating_sub(1))
}

/// Picks one element, or `None` without drawing when `items` is empty.
pub fn select<'a, T>(items: &'a [T], random: &mut RandomStream) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[select_index(items.len(), random)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_is_always_chosen() {
        let mut random = RandomStream::seeded(1);
        for _ in 0..100 {
            assert_eq!(select(&["only"], &mut random), Some(&"only"));
        }
    }

    #[test]
    fn empty_input_yields_none_without_drawing() {
        let mut random = RandomStream::seeded(1);
        let mut untouched = RandomStream::seeded(1);
        let empty: [u8; 0] = [];
        assert_eq!(select(&empty, &mut random), None);
        assert_eq!(random.next_int(1_000_000), untouched.next_int(1_000_000));
    }

    #[test]
    fn middle_and_front_are_favoured() {
        let mut random = RandomStream::seeded(42);
        let mut counts = [0usize; 8];
        for _ in 0..10_000 {
            counts[select_index(8, &mut random)] += 1;
        }
        // Mass peaks around index 3 and tails off at both ends.
        let peak = (0..8).max_by_key(|i| counts[*i]).unwrap_or_default();
        assert!(peak == 3 || peak == 4, "{:?}", counts);
        assert!(counts[0] < counts[3]);
        assert!(counts[7] < counts[3]);
        assert!(counts[0] > counts[7], "{:?}", counts);
    }

    #[test]
    fn ten_elements_peak_in_the_middle_three() {
        let mut random = RandomStream::seeded(1);
        let mut counts = [0usize; 10];
        for _ in 0..10_000 {
            counts[select_index(10, &mut random)] += 1;
        }
        let peak = (0..10).max_by_key(|i| counts[*i]).unwrap_or_default();
        assert!((3..=5).contains(&peak), "{:?}", counts);
        assert!(counts[0] < 300, "{:?}", counts);
        assert!(counts[9] < 300, "{:?}", counts);
        assert!(counts[3..=5].iter().sum::<usize>() > 5_000, "{:?}", counts);
    }

    #[test]
    fn two_elements_almost_always_pick_the_first() {
        let mut random = RandomStream::seeded(3);
        let items = ["Store", "Bakery"];
        let first = (0..10_000)
            .filter(|_| select(&items, &mut random) == Some(&"Store"))
            .count();
        assert!(first > 9_800, "{}", first);
    }
}
