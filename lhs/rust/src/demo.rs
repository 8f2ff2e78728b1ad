use std::fmt::Display;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use crate::{find_lhs, input::parse_sequence};

pub struct SampleCase {
    pub name: &'static str,
    pub input: &'static [i64],
    pub expected: usize,
}

pub const SAMPLE_CASES: [SampleCase; 6] = [
    SampleCase {
        name: "Test Case 1",
        input: &[1, 3, 2, 2, 5, 2, 3, 7],
        expected: 5,
    },
    SampleCase {
        name: "Test Case 2",
        input: &[1, 2, 3, 4],
        expected: 2,
    },
    SampleCase {
        name: "Test Case 3",
        input: &[1, 1, 1, 1],
        expected: 0,
    },
    SampleCase {
        name: "Test Case 4",
        input: &[],
        expected: 0,
    },
    SampleCase {
        name: "Test Case 5",
        input: &[5],
        expected: 0,
    },
    SampleCase {
        name: "Test Case 6",
        input: &[-1, 0, 0, -1, -1],
        expected: 5,
    },
];

/// Formats one result block for the console.
pub fn render<T: Display>(label: &str, input: &[T], result: usize) -> String {
    let values = input.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");

    format!("{label}: Input = {{{values}}}\nThe length of the longest harmonious subsequence is: {result}\n")
}

/// Produces the console output for a run.
///
/// With no inputs every sample case is rendered, otherwise each input is parsed
/// as one sequence. Blocks are separated by a blank line.
pub fn run(inputs: &[String]) -> Result<String> {
    if inputs.is_empty() {
        return Ok(run_samples());
    }

    let mut blocks = Vec::with_capacity(inputs.len());
    for (i, text) in inputs.iter().enumerate() {
        let nums = parse_sequence(text).wrap_err_with(|| format!("failed to parse input {}", i + 1))?;
        let result = find_lhs(&nums);

        blocks.push(render(&format!("Input {}", i + 1), &nums, result));
    }

    Ok(blocks.join("\n"))
}

fn run_samples() -> String {
    info!(cases = SAMPLE_CASES.len(), "running sample cases");

    SAMPLE_CASES
        .iter()
        .map(|case| {
            let result = find_lhs(case.input);
            if result != case.expected {
                warn!(name = case.name, result, expected = case.expected, "unexpected result");
            }

            render(case.name, case.input, result)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
