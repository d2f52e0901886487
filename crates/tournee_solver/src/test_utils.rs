use tournee_core::cost_matrix::CostMatrix;
use tournee_core::location::LocationIdx;
use tournee_core::tour::Tour;

pub fn matrix(rows: &[&[f64]]) -> CostMatrix {
    CostMatrix::from_rows(rows.iter().map(|row| row.to_vec()).collect()).unwrap()
}

pub fn tour(indices: &[usize]) -> Tour {
    indices.iter().copied().map(LocationIdx::new).collect()
}

pub fn matrix_2x2() -> CostMatrix {
    matrix(&[&[0.0, 2.0], &[1.0, 0.0]])
}

pub fn matrix_3x3() -> CostMatrix {
    matrix(&[&[0.0, 2.0, 1.0], &[1.0, 0.0, 1.0], &[1.0, 1.0, 0.0]])
}

pub fn matrix_5x5() -> CostMatrix {
    matrix(&[
        &[0.0, 3.0, 2.0, 2.0, 2.0],
        &[1.0, 0.0, 2.0, 2.0, 2.0],
        &[3.0, 4.0, 0.0, 2.0, 2.0],
        &[2.0, 3.0, 4.0, 0.0, 2.0],
        &[1.0, 2.0, 3.0, 4.0, 0.0],
    ])
}

/// Admits several optimal tours, all of distance 18.0.
pub fn matrix_9x9_multiple_optima() -> CostMatrix {
    matrix(&[
        &[0.0, 3.0, 2.0, 2.0, 2.0, 2.0, 4.0, 2.0, 3.0],
        &[1.0, 0.0, 2.0, 2.0, 2.0, 2.0, 4.0, 2.0, 3.0],
        &[3.0, 4.0, 0.0, 2.0, 2.0, 2.0, 4.0, 2.0, 3.0],
        &[2.0, 3.0, 4.0, 0.0, 2.0, 2.0, 4.0, 2.0, 4.0],
        &[1.0, 2.0, 3.0, 4.0, 0.0, 2.0, 5.0, 2.0, 4.0],
        &[2.0, 5.0, 3.0, 4.0, 3.0, 0.0, 2.0, 2.0, 4.0],
        &[5.0, 2.0, 3.0, 4.0, 3.0, 2.0, 0.0, 2.0, 3.0],
        &[3.0, 3.0, 3.0, 4.0, 3.0, 2.0, 2.0, 0.0, 3.0],
        &[2.0, 7.0, 3.0, 2.0, 3.0, 2.0, 2.0, 2.0, 0.0],
    ])
}

/// Irregular real-world-looking distances with a single optimal tour,
/// [3, 4, 8, 2, 7, 6, 1, 5] at 26521.11.
pub fn matrix_9x9_unique_optimum() -> CostMatrix {
    matrix(&[
        &[0.0, 5131.0, 53546.215, 654.165, 6584.2, 6516.5, 6513.12, 5465.1, 1254.12],
        &[6547.126, 0.0, 6548.66, 7598.65, 4789.23, 4987.54, 7984.56, 1654.145, 9874.127],
        &[6487.265, 4646.21, 0.0, 6481.56, 6548.78, 7665.15, 6541.12, 1256.2, 4568.15],
        &[6541.12, 1256.2, 4568.15, 0.0, 654.165, 6584.2, 6516.5, 4865.124, 5423.14],
        &[6548.66, 7598.65, 4789.23, 4987.54, 0.0, 6548.66, 7598.65, 4789.23, 4987.54],
        &[6481.56, 6548.78, 7665.15, 6541.12, 1256.2, 0.0, 6541.12, 1256.2, 4568.1],
        &[6541.12, 1256.2, 4568.41, 6541.12, 1256.2, 4568.1, 0.0, 6481.56, 6548.78],
        &[4789.23, 4987.54, 6481.56, 6548.78, 7665.15, 6541.12, 1256.2, 0.0, 4157.15],
        &[7598.65, 4789.23, 4987.54, 7984.56, 1654.145, 9874.127, 4789.23, 4987.54, 0.0],
    ])
}
