use super::config::CalculatorConfig;
use super::error::CalculatorError;

/// Parse, validate, and sum a token sequence.
///
/// Tokens are trimmed first; empty ones contribute nothing. A token that
/// still is not an integer literal aborts the pass immediately. Negatives
/// are collected across the whole pass and reported together at the end,
/// never fail-fast, so the error message lists every offender. Values above
/// the upper bound are skipped without error.
pub fn accumulate<'a, I>(tokens: I, config: &CalculatorConfig) -> Result<i64, CalculatorError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sum = 0i64;
    let mut negatives = Vec::new();

    for raw in tokens {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        let value: i64 = token
            .parse()
            .map_err(|_| CalculatorError::InvalidNumber(token.to_string()))?;

        if value < 0 {
            negatives.push(value);
        } else if value <= config.upper_bound {
            sum += value;
        }
    }

    if !negatives.is_empty() {
        return Err(CalculatorError::NegativeNumbers(negatives));
    }

    Ok(sum)
}
