//! Binary search exercise
//!
//! Input: a count `n`, then `n` integers sorted ascending, then the key.
//! Output: the index of the key, or `-1` when it is absent. No trailing newline.

use std::io::{BufRead, Write};

use super::{Scanner, SolutionError};

/// Upper bound on the up-front allocation; a lying count fails on the missing
/// tokens long before the vector would need to grow past it.
const MAX_PREALLOCATED: usize = 1 << 16;

/// The binary search exercise
#[derive(Debug, Default, Clone, Copy)]
pub struct BinarySearch;

impl super::Solution for BinarySearch {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn solve(&self, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), SolutionError> {
        let mut scanner = Scanner::new(input);

        let count: i64 = scanner.next("count")?;
        if count < 0 {
            return Err(SolutionError::NegativeCount(count));
        }

        let count = count as usize;
        let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATED));
        for _ in 0..count {
            values.push(scanner.next::<i64>("sequence element")?);
        }

        let key: i64 = scanner.next("search key")?;

        let index = search(&values, key).map_or(-1, |i| i as i64);
        tracing::debug!(count, key, index, "Binary search finished");

        write!(output, "{}", index)?;
        output.flush()?;
        Ok(())
    }
}

/// Index of `key` in the ascending slice `values`
pub fn search(values: &[i64], key: i64) -> Option<usize> {
    let (mut low, mut high) = (0usize, values.len());

    while low < high {
        let mid = low + (high - low) / 2;
        match values[mid].cmp(&key) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => low = mid + 1,
            std::cmp::Ordering::Greater => high = mid,
        }
    }

    None
}
