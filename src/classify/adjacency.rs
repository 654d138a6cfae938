//! Matrix vs graph disambiguation for nested numeric sequences
//!
//! An array of equal-length integer rows is ambiguous: it can be a 2-D data
//! grid, a binary adjacency matrix, or a variable-degree adjacency list.
//! The decision procedure here is deliberately isolated from the rest of
//! the classifier so the heuristics can be swapped without touching parsing
//! or handler precedence. It is pattern matching over ambiguous data and is
//! expected to be imperfect at the margins; the thresholds below pin the
//! current behavior.

use crate::value::TypedValue;

/// Key-name fragments that force matrix classification for a qualifying
/// rectangular value, bypassing the cell heuristics.
pub const MATRIX_NAME_HINTS: &[&str] = &["grid", "board", "matrix", "dp", "table", "maze", "map"];

/// Neighbor references are accepted up to `max(2 * rows, this floor)`.
pub const ADJACENCY_REFERENCE_FLOOR: usize = 10;

/// Try to classify an array value as a matrix.
///
/// A candidate qualifies only with at least two rows, every row a
/// non-empty array, and all rows of equal length. A lowercased key name
/// containing one of [`MATRIX_NAME_HINTS`] classifies unconditionally.
/// Without a name hint every cell must be a primitive, and a square grid
/// of binary integers is rejected here so the adjacency conversion can
/// claim it instead.
pub fn detect_matrix(key: &str, items: &[TypedValue]) -> Option<Vec<Vec<TypedValue>>> {
    if items.len() < 2 {
        return None;
    }
    let mut rows: Vec<&[TypedValue]> = Vec::with_capacity(items.len());
    for item in items {
        match item.as_array() {
            Some(row) if !row.is_empty() => rows.push(row),
            _ => return None,
        }
    }
    let width = rows[0].len();
    if rows.iter().any(|row| row.len() != width) {
        return None;
    }

    let matrix = || rows.iter().map(|row| row.to_vec()).collect();

    if MATRIX_NAME_HINTS.iter().any(|hint| key.contains(hint)) {
        return Some(matrix());
    }

    if rows
        .iter()
        .any(|row| row.iter().any(|cell| !cell.is_primitive()))
    {
        return None;
    }

    // Square binary grids read as graphs, not data grids, absent a name hint.
    let all_binary = rows
        .iter()
        .all(|row| row.iter().all(|cell| matches!(cell.as_int(), Some(0) | Some(1))));
    if all_binary && rows.len() == width {
        return None;
    }

    Some(matrix())
}

/// Try to classify an array value as a graph adjacency representation.
///
/// A square grid of 0/1 cells converts to an adjacency list by collecting
/// the nonzero column indices per row. Anything else must survive the
/// adjacency-list validity checks: at least two rows, not a fixed-width
/// table wider than two columns, no negative values, no value at or above
/// `max(2 * rows, ADJACENCY_REFERENCE_FLOOR)`, and at most half of all
/// values at or above the row count.
pub fn detect_adjacency(items: &[TypedValue]) -> Option<Vec<Vec<usize>>> {
    let rows = int_rows(items)?;
    let count = rows.len();

    let square_binary = count > 0
        && rows
            .iter()
            .all(|row| row.len() == count && row.iter().all(|&v| v == 0 || v == 1));
    if square_binary {
        return Some(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .filter(|(_, &v)| v != 0)
                        .map(|(col, _)| col)
                        .collect()
                })
                .collect(),
        );
    }

    if count < 2 {
        return None;
    }

    // A fixed row width above two suggests tabular data, not variable-degree
    // neighbor lists.
    let nonempty: Vec<&Vec<i64>> = rows.iter().filter(|row| !row.is_empty()).collect();
    if let Some(first) = nonempty.first() {
        let width = first.len();
        if width > 2 && nonempty.iter().all(|row| row.len() == width) {
            return None;
        }
    }

    let ceiling = (2 * count).max(ADJACENCY_REFERENCE_FLOOR) as i64;
    let mut total = 0usize;
    let mut dangling = 0usize;
    for row in &rows {
        for &v in row {
            if v < 0 || v >= ceiling {
                return None;
            }
            total += 1;
            if v >= count as i64 {
                dangling += 1;
            }
        }
    }
    // Mostly out-of-range values look like unrelated numeric data, a
    // bucket-sort table for instance, rather than node references.
    if dangling * 2 > total {
        return None;
    }

    Some(
        rows.iter()
            .map(|row| row.iter().map(|&v| v as usize).collect())
            .collect(),
    )
}

/// Extract rows of integer-flagged numbers, or bail.
fn int_rows(items: &[TypedValue]) -> Option<Vec<Vec<i64>>> {
    items
        .iter()
        .map(|item| {
            item.as_array()?
                .iter()
                .map(TypedValue::as_int)
                .collect::<Option<Vec<i64>>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_grid(rows: &[&[i64]]) -> Vec<TypedValue> {
        rows.iter()
            .map(|row| TypedValue::Array(row.iter().map(|&v| TypedValue::int(v)).collect()))
            .collect()
    }

    #[test]
    fn test_square_binary_grid_converts_to_adjacency() {
        let items = int_grid(&[&[0, 1, 1], &[1, 0, 0], &[1, 0, 0]]);
        assert_eq!(detect_matrix("edges", &items), None);
        assert_eq!(
            detect_adjacency(&items),
            Some(vec![vec![1, 2], vec![0], vec![0]])
        );
    }

    #[test]
    fn test_name_hint_forces_matrix_even_for_square_binary() {
        let items = int_grid(&[&[0, 1], &[1, 0]]);
        assert!(detect_matrix("grid", &items).is_some());
        assert!(detect_matrix("dp_table", &items).is_some());
    }

    #[test]
    fn test_non_square_rectangular_values_stay_matrix() {
        let items = int_grid(&[&[1, 2, 3], &[4, 5, 6]]);
        assert!(detect_matrix("rows", &items).is_some());
    }

    #[test]
    fn test_variable_degree_rows_pass_adjacency() {
        let items = int_grid(&[&[1, 2], &[0], &[0, 1]]);
        assert_eq!(
            detect_adjacency(&items),
            Some(vec![vec![1, 2], vec![0], vec![0, 1]])
        );
    }

    #[test]
    fn test_negative_values_reject_adjacency() {
        let items = int_grid(&[&[1, -2], &[0]]);
        assert_eq!(detect_adjacency(&items), None);
    }

    #[test]
    fn test_reference_ceiling_rejects_adjacency() {
        // Two rows: ceiling is max(4, 10) = 10, so 25 is out of range.
        let items = int_grid(&[&[1, 25], &[0]]);
        assert_eq!(detect_adjacency(&items), None);
    }

    #[test]
    fn test_mostly_dangling_references_reject_adjacency() {
        // Three rows: values 5..9 are below the ceiling but >= the row
        // count, and they outnumber the in-range values.
        let items = int_grid(&[&[5, 6], &[7, 8], &[1]]);
        assert_eq!(detect_adjacency(&items), None);
    }

    #[test]
    fn test_fixed_wide_rows_reject_adjacency() {
        let items = int_grid(&[&[1, 2, 3, 0], &[0, 1, 2, 3], &[3, 2, 1, 0], &[0, 0, 1, 1]]);
        // Not binary, square 4x4 with fixed width 4 > 2.
        assert_eq!(detect_adjacency(&items), None);
    }

    #[test]
    fn test_float_cells_are_not_adjacency_material() {
        let items = vec![
            TypedValue::Array(vec![TypedValue::float(1.0)]),
            TypedValue::Array(vec![TypedValue::int(0)]),
        ];
        assert_eq!(detect_adjacency(&items), None);
    }

    #[test]
    fn test_single_row_is_neither() {
        let items = int_grid(&[&[1, 2, 3]]);
        assert_eq!(detect_matrix("xs", &items), None);
        assert_eq!(detect_adjacency(&items), None);
    }
}
