/// Adds two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Multiplies two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}
