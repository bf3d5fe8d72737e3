pub mod accumulate;
pub mod config;
pub mod delimiter;
pub mod error;
pub mod tokenizer;

pub use config::CalculatorConfig;
pub use delimiter::DelimiterSpec;
pub use error::CalculatorError;

use std::sync::Arc;

use crate::counter::{self, CallCounter};

/// String-calculator pipeline: resolve delimiters, tokenize, then validate
/// and sum.
///
/// Each instance owns its counter unless one is injected, so tests can
/// isolate call counts; [`Calculator::shared`] binds to the process-wide
/// counter for callers that want the original shared-state semantics.
pub struct Calculator {
    config: CalculatorConfig,
    counter: Arc<CallCounter>,
}

impl Calculator {
    /// Calculator with default config and its own isolated counter.
    pub fn new() -> Self {
        Self::with_counter(Arc::new(CallCounter::new()))
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            counter: Arc::new(CallCounter::new()),
        }
    }

    pub fn with_counter(counter: Arc<CallCounter>) -> Self {
        Self {
            config: CalculatorConfig::default(),
            counter,
        }
    }

    /// Calculator bound to the process-wide counter.
    pub fn shared() -> Self {
        Self::with_counter(counter::shared())
    }

    /// Sum the numbers encoded in `input`.
    ///
    /// The call counter is bumped first, on every invocation, success or
    /// failure. `None` and `""` short-circuit to 0 without touching the
    /// delimiter resolver.
    pub fn add(&self, input: Option<&str>) -> Result<i64, CalculatorError> {
        self.counter.increment();

        let input = input.unwrap_or("");
        if input.is_empty() {
            return Ok(0);
        }

        let default = DelimiterSpec::new(self.config.default_delimiters.clone());
        let (spec, body) = delimiter::resolve(input, &default);
        let tokens = tokenizer::split(body, &spec);
        accumulate::accumulate(tokens, &self.config)
    }

    pub fn call_count(&self) -> u64 {
        self.counter.current()
    }

    pub fn reset_call_count(&self) {
        self.counter.reset()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
