use super::design::{add_bias_column, design_matrix, to_columns};
use super::gradient_descent::{self, TrainingHistory};
use super::method::FitMethod;
use crate::{Matrix, RegressionError, Result, Vector, linalg};
use ndarray::{ArrayBase, Data, Dimension, Ix1, s};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Ordinary least squares regressor fitted either in closed form or by
/// batch gradient descent.
///
/// Parameters are only replaced when a fit succeeds, so a failed call leaves
/// the previous model intact.
#[derive(Clone, Debug)]
pub struct LinearRegressor {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    random_state: Option<u64>,
}

impl LinearRegressor {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            random_state: None,
        }
    }

    /// Seeds the random initialization used by gradient descent.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some() && self.intercept.is_some()
    }

    /// Fits the model with the given method.
    ///
    /// Returns the loss and weight history for gradient descent and `None`
    /// for least squares. A singular `XᵗX` in least squares is reported as
    /// [`RegressionError::SingularMatrix`].
    pub fn fit<S, D, T>(
        &mut self,
        x: &ArrayBase<S, D>,
        y: &ArrayBase<T, Ix1>,
        method: FitMethod,
    ) -> Result<Option<TrainingHistory>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        T: Data<Elem = f64>,
    {
        let x_with_bias = design_matrix(x)?;
        let y = y.to_owned();
        Self::check_samples(&x_with_bias, &y)?;

        let (theta, history) = match method {
            FitMethod::LeastSquares => (Self::fit_normal_equation(&x_with_bias, &y)?, None),
            FitMethod::GradientDescent {
                learning_rate,
                iterations,
            } => {
                let mut rng = match self.random_state {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let (theta, history) =
                    gradient_descent::fit(&x_with_bias, &y, learning_rate, iterations, &mut rng);
                (theta, Some(history))
            }
        };

        self.intercept = Some(theta[0]);
        self.coefficients = Some(theta.slice(s![1..]).to_owned());
        Ok(history)
    }

    /// Fits with a method given by name (`"least_squares"` or
    /// `"gradient_descent"`). An unknown name fails before any work is done.
    pub fn fit_named<S, D, T>(
        &mut self,
        x: &ArrayBase<S, D>,
        y: &ArrayBase<T, Ix1>,
        method: &str,
        learning_rate: f64,
        iterations: usize,
    ) -> Result<Option<TrainingHistory>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        T: Data<Elem = f64>,
    {
        let method = method
            .parse::<FitMethod>()?
            .learning_rate(learning_rate)
            .iterations(iterations);
        self.fit(x, y, method)
    }

    /// Simple linear regression on a single predictor using
    /// `w = cov(x, y) / var(x)` and `b = mean(y) - w * mean(x)`.
    ///
    /// 2D input is flattened. A constant predictor yields a non-finite slope.
    pub fn fit_simple<S, D, T>(&mut self, x: &ArrayBase<S, D>, y: &ArrayBase<T, Ix1>) -> Result<()>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        T: Data<Elem = f64>,
    {
        let x: Vector = x.iter().copied().collect();
        if x.len() != y.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.len(),
                y_len: y.len(),
            });
        }
        let x_mean = x.mean().ok_or(RegressionError::EmptyInput)?;
        let y_mean = y.mean().ok_or(RegressionError::EmptyInput)?;

        let x_centered = x.mapv(|v| v - x_mean);
        let numerator = x_centered.dot(&y.mapv(|v| v - y_mean));
        let denominator = x_centered.dot(&x_centered);
        let slope = numerator / denominator;

        self.coefficients = Some(Vector::from(vec![slope]));
        self.intercept = Some(y_mean - slope * x_mean);
        Ok(())
    }

    pub fn predict<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Vector>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let (coeffs, intercept) = match (&self.coefficients, self.intercept) {
            (Some(coeffs), Some(intercept)) => (coeffs, intercept),
            _ => return Err(RegressionError::NotFitted),
        };

        let x = to_columns(x)?;
        if x.ncols() != coeffs.len() {
            return Err(RegressionError::FeatureMismatch {
                expected: coeffs.len(),
                got: x.ncols(),
            });
        }

        let mut theta = Vector::zeros(coeffs.len() + 1);
        theta[0] = intercept;
        theta.slice_mut(s![1..]).assign(coeffs);

        Ok(add_bias_column(&x).dot(&theta))
    }

    /// R² of the predictions on `x` against `y`.
    pub fn score<S, D, T>(&self, x: &ArrayBase<S, D>, y: &ArrayBase<T, Ix1>) -> Result<f64>
    where
        S: Data<Elem = f64>,
        D: Dimension,
        T: Data<Elem = f64>,
    {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(&y.to_owned(), &y_pred)
    }

    fn check_samples(x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(RegressionError::DimensionMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }
        if x.nrows() == 0 {
            return Err(RegressionError::EmptyInput);
        }
        Ok(())
    }

    /// `θ = (XᵗX)⁻¹ Xᵗ y`
    fn fit_normal_equation(x: &Matrix, y: &Vector) -> Result<Vector> {
        let xt = x.t();
        let xtx_inv = linalg::invert(&xt.dot(x))?;
        let theta = xtx_inv.dot(&xt).dot(y);

        tracing::debug!(intercept = theta[0], n_coefficients = theta.len() - 1, "solved normal equation");
        Ok(theta)
    }
}

impl Default for LinearRegressor {
    fn default() -> Self {
        Self::new()
    }
}
