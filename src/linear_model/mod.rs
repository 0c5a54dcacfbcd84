//! Linear regression fitted from first principles.
//!
//! This module provides:
//! - `LinearRegressor`: least squares regression with an explicit bias term
//! - `FitMethod`: closed-form normal equation or batch gradient descent
//! - `TrainingHistory`: per-iteration loss and parameters of a gradient-descent fit
//!
//! # Examples
//!
//! ## Normal equation
//! ```rust
//! use linear_regressor::{FitMethod, LinearRegressor};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0], [4.0]];
//! let y = array![2.0, 4.0, 6.0, 8.0];
//!
//! let mut model = LinearRegressor::new();
//! model.fit(&x, &y, FitMethod::LeastSquares).unwrap();
//! let predictions = model.predict(&array![5.0]).unwrap();
//! assert!((predictions[0] - 10.0).abs() < 1e-9);
//! ```
//!
//! ## Gradient descent
//! ```rust
//! use linear_regressor::{FitMethod, LinearRegressor};
//! use ndarray::array;
//!
//! let x = array![1.0, 2.0, 3.0, 4.0];
//! let y = array![3.0, 5.0, 7.0, 9.0];
//!
//! let mut model = LinearRegressor::new().random_state(0);
//! let history = model
//!     .fit(&x, &y, FitMethod::gradient_descent().learning_rate(0.05).iterations(5000))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(history.loss.len(), 5000);
//! assert!((model.coefficients.as_ref().unwrap()[0] - 2.0).abs() < 1e-3);
//! ```

mod design;
mod gradient_descent;
mod linear_regressor;
mod method;

pub use design::{add_bias_column, design_matrix, to_columns};
pub use gradient_descent::TrainingHistory;
pub use linear_regressor::LinearRegressor;
pub use method::{DEFAULT_ITERATIONS, DEFAULT_LEARNING_RATE, FitMethod};
