pub mod calculator;
pub mod counter;

pub use crate::calculator::{Calculator, CalculatorConfig, CalculatorError, DelimiterSpec};
pub use crate::counter::CallCounter;

/// Sum the numbers in `input` using the process-wide call counter.
///
/// `None` and `""` both yield 0. See [`Calculator::add`] for the full
/// delimiter and validation rules.
pub fn add(input: Option<&str>) -> Result<i64, CalculatorError> {
    Calculator::shared().add(input)
}

/// Number of `add` invocations recorded on the process-wide counter.
pub fn current_call_count() -> u64 {
    counter::shared().current()
}

/// Reset the process-wide call counter to 0.
pub fn reset_call_count() {
    counter::shared().reset()
}
