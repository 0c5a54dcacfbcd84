use crate::{Matrix, RegressionError, Result};
use ndarray::{Array1, Array2, Axis};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A cell of a mixed numeric/text table.
///
/// Values are totally ordered: every number sorts before every text value,
/// numbers compare by [`f64::total_cmp`] and text compares lexicographically.
#[derive(Clone, Debug)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Number(_), Value::Text(_)) => Ordering::Less,
            (Value::Text(_), Value::Number(_)) => Ordering::Greater,
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
        }
    }
}

/// One-hot encodes the given columns of `x`.
///
/// Each encoded column is replaced in place by one indicator column per
/// distinct value, in sorted order. With `drop_first` the indicator of the
/// smallest value is left out. Other columns keep their relative position.
pub fn one_hot_encode(
    x: &Array2<Value>,
    categorical_indices: &[usize],
    drop_first: bool,
) -> Result<Array2<Value>> {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut indices: Vec<usize> = categorical_indices.to_vec();
    if let Some(&index) = indices.iter().find(|&&index| index >= n_cols) {
        return Err(RegressionError::ColumnOutOfBounds { index, ncols: n_cols });
    }
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();

    let mut columns: Vec<Array1<Value>> = x.axis_iter(Axis(1)).map(|col| col.to_owned()).collect();

    // Descending order keeps the lower indices valid while splicing.
    for index in indices {
        let column = &columns[index];
        let categories: BTreeSet<&Value> = column.iter().collect();

        let indicators: Vec<Array1<Value>> = categories
            .into_iter()
            .skip(usize::from(drop_first))
            .map(|category| {
                column.map(|v| Value::Number(if v == category { 1.0 } else { 0.0 }))
            })
            .collect();

        columns.splice(index..=index, indicators);
    }

    Ok(Array2::from_shape_fn((n_rows, columns.len()), |(i, j)| {
        columns[j][i].clone()
    }))
}

/// Converts an all-numeric table into a matrix for fitting.
pub fn to_matrix(x: &Array2<Value>) -> Result<Matrix> {
    let mut matrix = Matrix::zeros(x.raw_dim());
    for ((row, col), value) in x.indexed_iter() {
        matrix[(row, col)] = value.as_f64().ok_or(RegressionError::NonNumeric { row, col })?;
    }
    Ok(matrix)
}

pub fn from_matrix(x: &Matrix) -> Array2<Value> {
    x.mapv(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn text(v: &str) -> Value {
        Value::from(v)
    }

    fn num(v: f64) -> Value {
        Value::from(v)
    }

    fn colors() -> Array2<Value> {
        array![
            [num(1.0), text("red"), num(10.0)],
            [num(2.0), text("green"), num(20.0)],
            [num(3.0), text("blue"), num(30.0)],
            [num(4.0), text("green"), num(40.0)],
        ]
    }

    #[test]
    fn test_one_hot_text_column() {
        let encoded = one_hot_encode(&colors(), &[1], false).unwrap();

        // blue, green, red
        let expected = array![
            [1.0, 0.0, 0.0, 1.0, 10.0],
            [2.0, 0.0, 1.0, 0.0, 20.0],
            [3.0, 1.0, 0.0, 0.0, 30.0],
            [4.0, 0.0, 1.0, 0.0, 40.0],
        ];
        assert_eq!(to_matrix(&encoded).unwrap(), expected);
    }

    #[test]
    fn test_one_hot_rows_sum_to_one() {
        let encoded = to_matrix(&one_hot_encode(&colors(), &[1], false).unwrap()).unwrap();
        let indicators = encoded.slice(ndarray::s![.., 1..4]);

        assert_eq!(encoded.nrows(), 4);
        for row in indicators.rows() {
            assert_eq!(row.sum(), 1.0);
        }
    }

    #[test]
    fn test_one_hot_drop_first() {
        let encoded = to_matrix(&one_hot_encode(&colors(), &[1], true).unwrap()).unwrap();

        let expected = array![
            [1.0, 0.0, 1.0, 10.0],
            [2.0, 1.0, 0.0, 20.0],
            [3.0, 0.0, 0.0, 30.0],
            [4.0, 1.0, 0.0, 40.0],
        ];
        assert_eq!(encoded, expected);
        for row in encoded.slice(ndarray::s![.., 1..3]).rows() {
            assert!(row.sum() <= 1.0);
        }
    }

    #[test]
    fn test_one_hot_multiple_columns() {
        let x = array![
            [text("a"), num(0.5), num(1.0)],
            [text("b"), num(1.5), num(2.0)],
            [text("a"), num(2.5), num(1.0)],
        ];

        let encoded = to_matrix(&one_hot_encode(&x, &[0, 2], false).unwrap()).unwrap();

        let expected = array![
            [1.0, 0.0, 0.5, 1.0, 0.0],
            [0.0, 1.0, 1.5, 0.0, 1.0],
            [1.0, 0.0, 2.5, 1.0, 0.0],
        ];
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_one_hot_index_order_does_not_matter() {
        let x = colors();
        let ascending = one_hot_encode(&x, &[0, 1], false).unwrap();
        let descending = one_hot_encode(&x, &[1, 0], false).unwrap();
        let repeated = one_hot_encode(&x, &[1, 0, 1], false).unwrap();

        assert_eq!(ascending, descending);
        assert_eq!(ascending, repeated);
        assert_eq!(ascending.ncols(), 4 + 3 + 1);
    }

    #[test]
    fn test_one_hot_does_not_mutate_input() {
        let x = colors();
        let before = x.clone();
        let _ = one_hot_encode(&x, &[1], true).unwrap();
        assert_eq!(x, before);
    }

    #[test]
    fn test_one_hot_single_category_drop_first() {
        let x = array![[text("only")], [text("only")]];
        let encoded = one_hot_encode(&x, &[0], true).unwrap();
        assert_eq!(encoded.shape(), &[2, 0]);
    }

    #[test]
    fn test_one_hot_out_of_bounds() {
        assert_eq!(
            one_hot_encode(&colors(), &[3], false),
            Err(RegressionError::ColumnOutOfBounds { index: 3, ncols: 3 })
        );
    }

    #[test]
    fn test_to_matrix_rejects_text() {
        assert_eq!(
            to_matrix(&colors()),
            Err(RegressionError::NonNumeric { row: 0, col: 1 })
        );
    }

    #[test]
    fn test_value_ordering() {
        let mut values = vec![text("b"), num(2.0), text("a"), num(-1.0)];
        values.sort();
        assert_eq!(values, vec![num(-1.0), num(2.0), text("a"), text("b")]);
    }

    #[test]
    fn test_from_matrix_round_trip() {
        let m = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(to_matrix(&from_matrix(&m)).unwrap(), m);
    }
}
