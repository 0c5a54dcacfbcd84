use crate::{Matrix, RegressionError, Result};

/// Inverts a square matrix by Gauss-Jordan elimination with partial pivoting.
///
/// Fails with [`RegressionError::SingularMatrix`] when a pivot vanishes
/// relative to the largest entry of `a`.
pub fn invert(a: &Matrix) -> Result<Matrix> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(RegressionError::SingularMatrix);
    }

    let scale = a.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tolerance = scale * f64::EPSILON * n as f64;

    let mut aug = Matrix::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = a[(i, j)];
        }
        aug[(i, n + i)] = 1.0;
    }

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                max_row = k;
            }
        }

        // NaN pivots fail this comparison too.
        if !(aug[(max_row, i)].abs() > tolerance) {
            return Err(RegressionError::SingularMatrix);
        }

        if max_row != i {
            for j in 0..2 * n {
                aug.swap((i, j), (max_row, j));
            }
        }

        let pivot = aug[(i, i)];
        for j in 0..2 * n {
            aug[(i, j)] /= pivot;
        }

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = aug[(k, i)];
            if factor == 0.0 {
                continue;
            }
            for j in 0..2 * n {
                aug[(k, j)] -= factor * aug[(i, j)];
            }
        }
    }

    Ok(aug.slice(ndarray::s![.., n..]).to_owned())
}
