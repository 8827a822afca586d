use tracing::trace;

use crate::config::OverflowPolicy;
use crate::error::{ErrorKind, EvalError, OverflowSite};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Subtract,
}

impl OperatorKind {
    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
        }
    }

    fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "+" => Some(OperatorKind::Add),
            "-" => Some(OperatorKind::Subtract),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Operand(i64),
    Operator(OperatorKind),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// A fully classified token sequence. Every operand in it has already been
/// validated and parsed.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct TokenizedInput(pub Vec<Token>);

impl std::ops::Deref for TokenizedInput {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for TokenizedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

/// Parse a digit-only literal by accumulating `value * 10 + digit`.
///
/// Leading zeros are accepted. Signs, whitespace and non-ASCII digits are not.
pub fn parse_operand(text: &str, overflow: OverflowPolicy) -> Result<i64, ErrorKind> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::MalformedOperand(text.to_string()));
    }

    text.bytes().try_fold(0i64, |value, b| {
        let shifted = overflow.mul(value, 10, OverflowSite::Parse)?;
        overflow.add(shifted, i64::from(b - b'0'), OverflowSite::Parse)
    })
}

/// Classifies raw text tokens into operators and operands.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer {
    overflow: OverflowPolicy,
}

impl Tokenizer {
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }

    /// Classify a single token. Operator symbols must match exactly.
    pub fn classify(&self, text: &str) -> Result<Token, ErrorKind> {
        if let Some(op) = OperatorKind::from_symbol(text) {
            return Ok(Token::Operator(op));
        }

        parse_operand(text, self.overflow).map(Token::Operand)
    }

    /// Classify a whole token sequence, stopping at the first invalid token.
    pub fn tokenize<I, S>(&self, input: I) -> Result<TokenizedInput, EvalError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = Vec::new();

        for (index, text) in input.into_iter().enumerate() {
            let token = self.classify(text.as_ref()).map_err(|kind| kind.at(index))?;
            trace!(index, %token, "classified token");
            tokens.push(token);
        }

        Ok(TokenizedInput(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenizer() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize(["10", "007", "+", "3", "-"]).unwrap(),
            TokenizedInput(vec![
                Token::Operand(10),
                Token::Operand(7),
                Token::Operator(OperatorKind::Add),
                Token::Operand(3),
                Token::Operator(OperatorKind::Subtract),
            ])
        );
    }

    #[test]
    fn test_tokenizer_malformed() {
        let tokenizer = Tokenizer::default();
        for bad in ["3x", "*", "", "-5", "+1", " 1", "1.5", "++", "٣"] {
            assert_eq!(
                tokenizer.classify(bad),
                Err(ErrorKind::MalformedOperand(bad.to_string())),
                "token {:?}",
                bad
            );
        }

        let err = tokenizer.tokenize(["1", "2", "x", "+"]).unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.kind, ErrorKind::MalformedOperand("x".into()));
    }

    #[test]
    fn test_parse_operand_limits() {
        assert_eq!(parse_operand("0", OverflowPolicy::Error), Ok(0));
        assert_eq!(
            parse_operand("9223372036854775807", OverflowPolicy::Error),
            Ok(i64::MAX)
        );
        assert_eq!(
            parse_operand("9223372036854775808", OverflowPolicy::Error),
            Err(ErrorKind::NumericOverflow(OverflowSite::Parse))
        );
        assert_eq!(
            parse_operand("9223372036854775808", OverflowPolicy::Wrapping),
            Ok(i64::MIN)
        );
        assert_eq!(
            parse_operand("99999999999999999999", OverflowPolicy::Saturating),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn test_tokenized_input_display() {
        let tokens = Tokenizer::default().tokenize(["1", "02", "-"]).unwrap();
        assert_eq!(tokens.to_string(), "1 2 -");
    }
}
