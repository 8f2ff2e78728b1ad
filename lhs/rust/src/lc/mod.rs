#![allow(dead_code)]

mod longest_harmonious_subsequence;
