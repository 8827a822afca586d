use tracing::{debug, trace};

use crate::config::EvaluatorConfig;
use crate::error::{ErrorKind, EvalError, OverflowSite};
use crate::stack::Stack;
use crate::tokenizer::{OperatorKind, Token, TokenizedInput, Tokenizer};

/// Postfix evaluator for `+` and `-` over `i64`.
///
/// Each call to an `evaluate*` method builds a fresh [`Stack`], so one
/// evaluator can be shared freely between threads and runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnEvaluator {
    config: EvaluatorConfig,
}

impl RpnEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate raw text tokens, classifying each one right before it is
    /// applied. The run aborts on the first failing token.
    pub fn evaluate<I, S>(&self, input: I) -> Result<i64, EvalError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokenizer = Tokenizer::new(self.config.overflow);
        let mut stack = Stack::new(self.config.capacity);

        for (index, text) in input.into_iter().enumerate() {
            let step = tokenizer
                .classify(text.as_ref())
                .and_then(|token| self.apply(&mut stack, token));
            step.map_err(|kind| Self::abort(kind, index))?;
        }

        Ok(Self::finish(stack))
    }

    /// Evaluate an already classified token sequence.
    pub fn evaluate_tokens(&self, tokens: &TokenizedInput) -> Result<i64, EvalError> {
        let mut stack = Stack::new(self.config.capacity);

        for (index, token) in tokens.iter().enumerate() {
            self.apply(&mut stack, *token)
                .map_err(|kind| Self::abort(kind, index))?;
        }

        Ok(Self::finish(stack))
    }

    fn apply(&self, stack: &mut Stack, token: Token) -> Result<(), ErrorKind> {
        trace!(%token, depth = stack.len(), "applying token");

        match token {
            Token::Operand(value) => stack.push(value),
            Token::Operator(op) => {
                // Both operands must be present before anything is consumed.
                if stack.len() < 2 {
                    return Err(ErrorKind::StackUnderflow);
                }
                let b = stack.pop()?;
                let a = stack.pop()?;
                let overflow = self.config.overflow;
                let result = match op {
                    OperatorKind::Add => overflow.add(a, b, OverflowSite::Add)?,
                    OperatorKind::Subtract => overflow.sub(a, b, OverflowSite::Subtract)?,
                };
                stack.push(result)
            }
        }
    }

    /// Empty stack means no computation was performed and yields 0. Anything
    /// below the top is dropped.
    fn finish(mut stack: Stack) -> i64 {
        let leftover = stack.len().saturating_sub(1);
        let result = stack.pop().unwrap_or(0);
        debug!(result, leftover, "evaluation finished");
        result
    }

    fn abort(kind: ErrorKind, index: usize) -> EvalError {
        let err = kind.at(index);
        debug!(%err, "evaluation aborted");
        err
    }
}
