use crate::{Matrix, RegressionError, Result};
use ndarray::{ArrayBase, Data, Dimension, Ix2, s};

/// Brings 1D or 2D feature input into column form.
///
/// A 1D input of length `n` becomes an `n x 1` matrix.
pub fn to_columns<S, D>(x: &ArrayBase<S, D>) -> Result<Matrix>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match x.ndim() {
        1 => {
            let values: Vec<f64> = x.iter().copied().collect();
            let n = values.len();
            Matrix::from_shape_vec((n, 1), values)
                .map_err(|_| RegressionError::InvalidShape { ndim: 1 })
        }
        2 => x
            .view()
            .into_dimensionality::<Ix2>()
            .map(|view| view.to_owned())
            .map_err(|_| RegressionError::InvalidShape { ndim: 2 }),
        ndim => Err(RegressionError::InvalidShape { ndim }),
    }
}

/// Prepends the bias column of ones as column 0.
pub fn add_bias_column(x: &Matrix) -> Matrix {
    let mut x_with_bias = Matrix::ones((x.nrows(), x.ncols() + 1));
    x_with_bias.slice_mut(s![.., 1..]).assign(x);
    x_with_bias
}

/// Column form plus bias column in one step.
pub fn design_matrix<S, D>(x: &ArrayBase<S, D>) -> Result<Matrix>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Ok(add_bias_column(&to_columns(x)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array3, array};

    #[test]
    fn test_1d_becomes_column() {
        let x = array![1.0, 2.0, 3.0];
        let columns = to_columns(&x).unwrap();
        assert_eq!(columns, array![[1.0], [2.0], [3.0]]);
    }

    #[test]
    fn test_2d_unchanged() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(to_columns(&x).unwrap(), x);
    }

    #[test]
    fn test_3d_rejected() {
        let x = Array3::<f64>::zeros((2, 2, 2));
        assert_eq!(to_columns(&x), Err(RegressionError::InvalidShape { ndim: 3 }));
    }

    #[test]
    fn test_bias_column_prepended() {
        let x = array![[2.0, 3.0], [4.0, 5.0]];
        let design = add_bias_column(&x);
        assert_eq!(design, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_design_matrix_from_1d() {
        let x = array![5.0, 6.0];
        assert_eq!(design_matrix(&x).unwrap(), array![[1.0, 5.0], [1.0, 6.0]]);
    }
}
