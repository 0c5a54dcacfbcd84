use crate::{RegressionError, Result, Vector};
use std::collections::BTreeMap;
use std::fmt;

/// R², RMSE and MAE of one set of predictions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionMetrics {
    pub r2: f64,
    pub rmse: f64,
    pub mae: f64,
}

impl RegressionMetrics {
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([("R2", self.r2), ("RMSE", self.rmse), ("MAE", self.mae)])
    }
}

impl fmt::Display for RegressionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R2={:.4} RMSE={:.4} MAE={:.4}", self.r2, self.rmse, self.mae)
    }
}

/// Evaluates predictions against true values.
///
/// R² is left unguarded: constant `y_true` gives NaN or an infinity.
pub fn evaluate_regression(y_true: &Vector, y_pred: &Vector) -> Result<RegressionMetrics> {
    Ok(RegressionMetrics {
        r2: r2_score(y_true, y_pred)?,
        rmse: root_mean_squared_error(y_true, y_pred)?,
        mae: mean_absolute_error(y_true, y_pred)?,
    })
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    Ok(())
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    let mse = diff.mapv(|x| x * x).mean().unwrap_or(f64::NAN);
    Ok(mse)
}

pub fn root_mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    let mae = diff.mapv(|x| x.abs()).mean().unwrap_or(f64::NAN);
    Ok(mae)
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean().unwrap_or(f64::NAN);
    let ss_res = (y_true - y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    Ok(1.0 - ss_res / ss_tot)
}
