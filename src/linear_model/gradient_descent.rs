use crate::{Matrix, Vector};
use ndarray::s;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

/// How often the current loss is logged, in iterations.
const LOG_EVERY: usize = 100;

/// Per-iteration record of a gradient-descent fit.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingHistory {
    /// Mean squared error of each iteration, computed before its update.
    pub loss: Vector,
    /// Parameters after each update, one row per iteration laid out as
    /// `[intercept, coefficients...]`.
    pub weights: Matrix,
}

impl TrainingHistory {
    pub fn iterations(&self) -> usize {
        self.loss.len()
    }

    pub fn initial_loss(&self) -> Option<f64> {
        self.loss.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.loss.last().copied()
    }
}

/// Batch gradient descent on a design matrix that already carries its bias column.
///
/// Returns the final parameter vector (`[intercept, coefficients...]`) with
/// the history. There is no convergence check: exactly `iterations` updates
/// run, and a too-large learning rate diverges.
pub(crate) fn fit<R: Rng + ?Sized>(
    x: &Matrix,
    y: &Vector,
    learning_rate: f64,
    iterations: usize,
    rng: &mut R,
) -> (Vector, TrainingHistory) {
    let n_params = x.ncols();
    let m = x.nrows() as f64;

    tracing::debug!(
        n_samples = x.nrows(),
        n_features = n_params - 1,
        learning_rate,
        iterations,
        "starting gradient descent"
    );

    let mut theta = Vector::random_using(n_params, Uniform::new(0.0, 0.01), rng);
    let mut loss = Vector::zeros(iterations);
    let mut weights = Matrix::zeros((iterations, n_params));

    for epoch in 0..iterations {
        let predictions = x.dot(&theta);
        let error = &predictions - y;

        let gradient = x.t().dot(&error) * (2.0 / m);
        theta.scaled_add(-learning_rate, &gradient);

        weights.slice_mut(s![epoch, ..]).assign(&theta);
        let mse = error.mapv(|e| e * e).sum() / m;
        loss[epoch] = mse;

        if epoch % LOG_EVERY == 0 {
            tracing::info!(epoch, mse, "gradient descent");
        }
    }

    tracing::debug!(final_loss = loss.last().copied(), "gradient descent finished");

    (theta, TrainingHistory { loss, weights })
}
