use std::ops::Range;

use tracing::{debug, trace};

use crate::element::Element;

/// The best window found in a sorted sequence.
///
/// `range` indexes into the sorted sequence the window was computed from,
/// every element in it is either `low` or `low + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarmoniousWindow<T> {
    pub low: T,
    pub range: Range<usize>,
}

impl<T> HarmoniousWindow<T> {
    // A returned window always holds at least two elements
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.range.len()
    }
}

/// Length of the longest harmonious subsequence of `nums`.
///
/// Sorts a private copy, so the caller's ordering is left alone.
/// Use [`find_lhs_in_place`] to avoid the allocation.
///
/// ```
/// use lhs::find_lhs;
///
/// assert_eq!(find_lhs(&[1, 2, 3, 4]), 2);
/// assert_eq!(find_lhs(&[1, 1, 1, 1]), 0);
/// assert_eq!(find_lhs::<i32>(&[]), 0);
/// ```
pub fn find_lhs<T: Element>(nums: &[T]) -> usize {
    if nums.len() <= 1 {
        return 0;
    }

    let mut sorted = nums.to_vec();
    find_lhs_in_place(&mut sorted)
}

/// Like [`find_lhs`], but sorts `nums` in place.
///
/// `nums` is left in ascending order.
pub fn find_lhs_in_place<T: Element>(nums: &mut [T]) -> usize {
    if nums.len() <= 1 {
        return 0;
    }

    nums.sort_unstable();
    let result = find_lhs_sorted(nums);

    debug!(len = nums.len(), result, "found longest harmonious subsequence");
    result
}

/// Window scan over an already ascending slice.
pub fn find_lhs_sorted<T: Element>(sorted: &[T]) -> usize {
    longest_harmonious_window(sorted).map_or(0, |window| window.len())
}

/// Finds the longest window of `sorted` whose values span exactly 1.
///
/// Ties keep the earliest window, which is the one with the smallest `low`.
/// Returns `None` when no two values differ by exactly 1.
pub fn longest_harmonious_window<T: Element>(sorted: &[T]) -> Option<HarmoniousWindow<T>> {
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "input must be sorted ascending");

    if sorted.len() <= 1 {
        return None;
    }

    let mut best: Option<HarmoniousWindow<T>> = None;
    let mut left = 0;

    for (right, &value) in sorted.iter().enumerate() {
        // left never passes right, distance(x, x) == 0
        while sorted[left].distance(value) > 1 {
            left += 1;
        }

        if sorted[left].distance(value) != 1 {
            continue;
        }

        let len = right - left + 1;
        if best.as_ref().map_or(true, |b| len > b.len()) {
            trace!(left, right, len, "new best window");
            best = Some(HarmoniousWindow {
                low: sorted[left],
                range: left..right + 1,
            });
        }
    }

    best
}
