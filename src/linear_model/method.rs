use crate::RegressionError;
use std::str::FromStr;

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Strategy used by [`LinearRegressor::fit`](super::LinearRegressor::fit).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FitMethod {
    /// Closed-form normal equation.
    LeastSquares,
    /// Batch gradient descent on the mean squared error.
    GradientDescent { learning_rate: f64, iterations: usize },
}

impl FitMethod {
    pub fn gradient_descent() -> Self {
        FitMethod::GradientDescent {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    pub fn learning_rate(self, learning_rate: f64) -> Self {
        match self {
            FitMethod::GradientDescent { iterations, .. } => FitMethod::GradientDescent {
                learning_rate,
                iterations,
            },
            other => other,
        }
    }

    pub fn iterations(self, iterations: usize) -> Self {
        match self {
            FitMethod::GradientDescent { learning_rate, .. } => FitMethod::GradientDescent {
                learning_rate,
                iterations,
            },
            other => other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FitMethod::LeastSquares => "least_squares",
            FitMethod::GradientDescent { .. } => "gradient_descent",
        }
    }
}

impl Default for FitMethod {
    fn default() -> Self {
        FitMethod::LeastSquares
    }
}

impl FromStr for FitMethod {
    type Err = RegressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "least_squares" => Ok(FitMethod::LeastSquares),
            "gradient_descent" => Ok(FitMethod::gradient_descent()),
            other => Err(RegressionError::InvalidMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!("least_squares".parse::<FitMethod>().unwrap(), FitMethod::LeastSquares);
        assert_eq!(
            "gradient_descent".parse::<FitMethod>().unwrap(),
            FitMethod::GradientDescent {
                learning_rate: 0.01,
                iterations: 1000
            }
        );
    }

    #[test]
    fn test_parse_unknown_method() {
        let err = "invalid".parse::<FitMethod>().unwrap_err();
        assert_eq!(err, RegressionError::InvalidMethod("invalid".to_string()));
    }

    #[test]
    fn test_builders_only_touch_gradient_descent() {
        let method = FitMethod::gradient_descent().learning_rate(0.1).iterations(50);
        assert_eq!(
            method,
            FitMethod::GradientDescent {
                learning_rate: 0.1,
                iterations: 50
            }
        );
        assert_eq!(FitMethod::LeastSquares.learning_rate(0.1), FitMethod::LeastSquares);
    }
}
