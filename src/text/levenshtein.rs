//! Edit distance between transcripts and patterns.

/// Levenshtein distance between two strings, computed over characters with
/// the standard dynamic-programming matrix. Insertion, deletion and
/// substitution each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let rows = a_chars.len();
    let cols = b_chars.len();

    let mut matrix = vec![vec![0usize; cols + 1]; rows + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=rows {
        for j in 1..=cols {
            let substitution_cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + substitution_cost);
        }
    }

    matrix[rows][cols]
}
