/// Validation and splitting defaults for the calculator
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Largest value included in the sum (default 1000, inclusive).
    /// Larger values are skipped silently, never reported as errors.
    pub upper_bound: i64,

    /// Delimiters used when the input declares none (default "," and "\n")
    pub default_delimiters: Vec<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            upper_bound: 1000,
            default_delimiters: vec![",".to_string(), "\n".to_string()],
        }
    }
}
