pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod error;
pub mod linalg;
pub mod linear_model;
pub mod metrics;
pub mod preprocessing;

pub use error::{RegressionError, Result};
pub use linear_model::{FitMethod, LinearRegressor, TrainingHistory};
pub use metrics::{evaluate_regression, RegressionMetrics};
pub use preprocessing::{one_hot_encode, Value};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
