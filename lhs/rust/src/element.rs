use std::fmt::Debug;

/// An integer value the finder can sort and measure.
///
/// `distance` must not overflow for any pair of values of the type,
/// which is why it widens to `u128`.
pub trait Element: Ord + Copy + Debug {
    fn distance(self, other: Self) -> u128;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn distance(self, other: Self) -> u128 {
                    // abs_diff returns the unsigned twin of the type, so this never wraps
                    self.abs_diff(other) as u128
                }
            }
        )*
    };
}

impl_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(3i32.distance(5), 2);
        assert_eq!(5i32.distance(3), 2);
        assert_eq!(7u8.distance(7), 0);
    }

    #[test]
    fn distance_at_extremes() {
        assert_eq!(i32::MIN.distance(i32::MAX), u32::MAX as u128);
        assert_eq!(i64::MIN.distance(i64::MAX), u64::MAX as u128);
        assert_eq!(i128::MIN.distance(i128::MAX), u128::MAX);
        assert_eq!(u128::MIN.distance(u128::MAX), u128::MAX);
    }

    #[test]
    fn distance_across_zero() {
        assert_eq!((-1i8).distance(0), 1);
        assert_eq!(i8::MIN.distance(i8::MAX), 255);
    }
}
