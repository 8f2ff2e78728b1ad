struct Solution;

impl Solution {
    pub fn find_lhs(mut nums: Vec<i32>) -> i32 {
        let len = crate::find_lhs_in_place(&mut nums);

        i32::try_from(len).unwrap_or(i32::MAX)
    }
}
