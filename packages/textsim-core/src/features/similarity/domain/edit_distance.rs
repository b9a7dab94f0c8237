//! Damerau-Levenshtein Edit Distance
//!
//! Optimal string alignment variant: insertions, deletions, substitutions and
//! transpositions of directly adjacent pairs. A transposed pair is never
//! edited again, so `"ca" -> "abc"` costs 3 (not 2 as in the unrestricted
//! variant).
//!
//! Two entry points compute the same value:
//! - [`damerau_levenshtein`]: three rolling rows, O(min-row) memory
//! - [`DistanceMatrix`]: the full (m+1)x(n+1) grid, kept for inspection

/// Damerau-Levenshtein (OSA) distance over any comparable sequence
///
/// Time complexity: O(m * n)
/// Space complexity: O(n)
pub fn damerau_levenshtein<T>(seq_a: &[T], seq_b: &[T]) -> usize
where
    T: Eq,
{
    let len_a = seq_a.len();
    let len_b = seq_b.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    // Rows i-2, i-1 and i of the matrix. The transposition reads row i-2.
    let mut before_prev: Vec<usize> = vec![0; len_b + 1];
    let mut prev_row: Vec<usize> = (0..=len_b).collect();
    let mut curr_row: Vec<usize> = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr_row[0] = i;

        for j in 1..=len_b {
            let cost = if seq_a[i - 1] == seq_b[j - 1] { 0 } else { 1 };

            let mut best = std::cmp::min(
                std::cmp::min(prev_row[j] + 1, curr_row[j - 1] + 1),
                prev_row[j - 1] + cost,
            );

            if i > 1 && j > 1 && seq_a[i - 1] == seq_b[j - 2] && seq_a[i - 2] == seq_b[j - 1] {
                best = std::cmp::min(best, before_prev[j - 2] + cost);
            }

            curr_row[j] = best;
        }

        // before_prev <- prev_row <- curr_row; the old before_prev is overwritten next pass
        std::mem::swap(&mut before_prev, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len_b]
}

/// Damerau-Levenshtein distance between two strings, counted in `char`s
pub fn edit_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    damerau_levenshtein(&s1_chars, &s2_chars)
}

/// Full dynamic-programming grid for one distance computation
///
/// `cell(i, j)` is the cost of turning the first `i` items of A into the
/// first `j` items of B. Base cases: `cell(i, 0) = i`, `cell(0, j) = j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Fill the grid for `seq_a` (rows) against `seq_b` (columns)
    pub fn compute<T>(seq_a: &[T], seq_b: &[T]) -> Self
    where
        T: Eq,
    {
        let rows = seq_a.len() + 1;
        let cols = seq_b.len() + 1;
        let mut matrix = Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 0..rows {
            matrix.set(i, 0, i);
        }
        for j in 0..cols {
            matrix.set(0, j, j);
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = if seq_a[i - 1] == seq_b[j - 1] { 0 } else { 1 };

                let mut value = *[
                    matrix.cell(i - 1, j) + 1,        // deletion
                    matrix.cell(i, j - 1) + 1,        // insertion
                    matrix.cell(i - 1, j - 1) + cost, // substitution
                ]
                .iter()
                .min()
                .unwrap_or(&0);

                if i > 1 && j > 1 && seq_a[i - 1] == seq_b[j - 2] && seq_a[i - 2] == seq_b[j - 1] {
                    value = value.min(matrix.cell(i - 2, j - 2) + cost); // transposition
                }

                matrix.set(i, j, value);
            }
        }

        matrix
    }

    /// Grid for two strings viewed as `char` sequences
    pub fn for_strs(s1: &str, s2: &str) -> Self {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();
        Self::compute(&s1_chars, &s2_chars)
    }

    #[inline]
    pub fn cell(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// (m + 1, n + 1)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Bottom-right cell: the edit distance
    pub fn distance(&self) -> usize {
        self.cell(self.rows - 1, self.cols - 1)
    }
}
