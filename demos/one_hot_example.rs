use linear_regressor::preprocessing::{to_matrix, Value};
use linear_regressor::{FitMethod, LinearRegressor, evaluate_regression, one_hot_encode};
use ndarray::{Array2, array};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // size, district, age
    let rows: Vec<(f64, &str, f64)> = vec![
        (50.0, "north", 10.0),
        (80.0, "south", 5.0),
        (65.0, "centre", 20.0),
        (120.0, "north", 2.0),
        (45.0, "centre", 30.0),
        (90.0, "south", 15.0),
        (70.0, "north", 8.0),
        (100.0, "centre", 12.0),
    ];
    let prices = array![155.0, 205.0, 228.0, 330.0, 199.0, 228.0, 197.0, 335.0];

    let table = Array2::from_shape_fn((rows.len(), 3), |(i, j)| {
        let (size, district, age) = rows[i];
        match j {
            0 => Value::from(size),
            1 => Value::from(district),
            _ => Value::from(age),
        }
    });

    let encoded = one_hot_encode(&table, &[1], true)?;
    println!("Encoded table ({} columns):", encoded.ncols());
    for row in encoded.rows() {
        let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("  [{}]", cells.join(", "));
    }

    let features = to_matrix(&encoded)?;
    let mut model = LinearRegressor::new();
    model.fit(&features, &prices, FitMethod::LeastSquares)?;

    println!("\nIntercept: {:.3}", model.intercept.unwrap_or_default());
    if let Some(coefficients) = &model.coefficients {
        println!("Coefficients: {coefficients:.3}");
    }
    println!("{}", evaluate_regression(&prices, &model.predict(&features)?)?);

    Ok(())
}
