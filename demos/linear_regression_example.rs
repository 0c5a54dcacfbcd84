use linear_regressor::{FitMethod, LinearRegressor, Matrix, Vector, evaluate_regression};
use ndarray::array;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // y = 3 + 2 * x1 - 1 * x2 with small noise
    let x: Matrix = array![
        [1.0, 0.5],
        [2.0, 1.0],
        [3.0, 0.0],
        [4.0, 2.5],
        [5.0, 1.5],
        [6.0, 3.0],
        [7.0, 2.0],
        [8.0, 4.0],
    ];
    let y: Vector = array![4.4, 5.9, 9.1, 8.6, 11.4, 12.1, 14.9, 15.1];

    println!("=== Normal equation ===");
    let mut exact = LinearRegressor::new();
    exact.fit(&x, &y, FitMethod::LeastSquares)?;
    print_parameters(&exact);
    let metrics = evaluate_regression(&y, &exact.predict(&x)?)?;
    println!("{metrics}");

    println!("\n=== Gradient descent ===");
    let mut iterative = LinearRegressor::new().random_state(42);
    let history = iterative
        .fit(&x, &y, FitMethod::gradient_descent().learning_rate(0.01).iterations(5000))?
        .ok_or("gradient descent returns a history")?;
    print_parameters(&iterative);
    let metrics = evaluate_regression(&y, &iterative.predict(&x)?)?;
    println!("{metrics}");

    println!("\nLoss curve ({} iterations):", history.iterations());
    for epoch in [0, 10, 100, 1000, history.iterations() - 1] {
        let weights = history.weights.row(epoch);
        println!("  epoch {epoch:>5}: mse={:.6} weights={weights:.4}", history.loss[epoch]);
    }

    println!("\nPredictions for new data:");
    let new_x = array![[9.0, 1.0], [10.0, 5.0]];
    for (row, prediction) in new_x.rows().into_iter().zip(exact.predict(&new_x)?.iter()) {
        println!("  {row} -> {prediction:.3}");
    }

    Ok(())
}

fn print_parameters(model: &LinearRegressor) {
    if let (Some(intercept), Some(coefficients)) = (model.intercept, &model.coefficients) {
        println!("Intercept: {intercept:.4}");
        println!("Coefficients: {coefficients:.4}");
    }
}
