//! Longest harmonious subsequence.
//!
//! A harmonious subsequence is a selection of elements whose maximum and
//! minimum differ by exactly 1. The length returned counts every occurrence
//! of both values.
//!
//! ```
//! let nums = [1, 3, 2, 2, 5, 2, 3, 7];
//!
//! assert_eq!(lhs::find_lhs(&nums), 5);
//! ```

pub mod config;
pub mod demo;
pub mod element;
pub mod harmonious;
pub mod input;
mod lc;
pub mod telemetry;

pub use element::Element;
pub use harmonious::{find_lhs, find_lhs_in_place, find_lhs_sorted, longest_harmonious_window, HarmoniousWindow};
