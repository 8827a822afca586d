use pretty_assertions::assert_eq;
use rpn_evaluator::exit_status;
use rpn_evaluator::tokenizer::{OperatorKind, Token, Tokenizer};
use rpn_evaluator::{ErrorKind, EvalError, EvaluatorConfig, OverflowPolicy, RpnEvaluator};

fn eval(input: &str) -> Result<i64, EvalError> {
    RpnEvaluator::default().evaluate(input.split_whitespace())
}

#[test]
fn test_documented_examples() {
    assert_eq!(eval("3 5 9"), Ok(9));
    assert_eq!(eval("3 4 +"), Ok(7));
    assert_eq!(eval("10 3 -"), Ok(7));
    assert_eq!(eval("3 10 -"), Ok(-7));
    assert_eq!(eval(""), Ok(0));
}

#[test]
fn test_documented_failures() {
    assert_eq!(eval("+").unwrap_err().kind, ErrorKind::StackUnderflow);
    assert_eq!(
        eval("1 3x +").unwrap_err(),
        EvalError {
            index: 1,
            kind: ErrorKind::MalformedOperand("3x".into())
        }
    );
    assert_eq!(
        eval("4 2 *").unwrap_err().kind,
        ErrorKind::MalformedOperand("*".into())
    );
}

#[test]
fn test_long_chain() {
    let mut tokens = vec!["1".to_string()];
    for i in 2..=1000 {
        tokens.push(i.to_string());
        tokens.push(if i % 2 == 0 { "+" } else { "-" }.to_string());
    }
    // 1 + 2 - 3 + 4 - ... + 1000
    assert_eq!(RpnEvaluator::default().evaluate(&tokens), Ok(502));
}

#[test]
fn test_concurrent_runs_are_independent() {
    let evaluator = RpnEvaluator::new(EvaluatorConfig::default().with_capacity(4));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8i64)
            .map(|n| {
                s.spawn(move || {
                    let input = [n.to_string(), "1".into(), "+".into()];
                    evaluator.evaluate(&input)
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Ok(n as i64 + 1));
        }
    });
}

#[test]
fn test_tokenize_then_evaluate() {
    let tokens = Tokenizer::default().tokenize(["20", "5", "-"]).unwrap();
    assert_eq!(
        *tokens,
        vec![
            Token::Operand(20),
            Token::Operand(5),
            Token::Operator(OperatorKind::Subtract),
        ]
    );
    assert_eq!(RpnEvaluator::default().evaluate_tokens(&tokens), Ok(15));
}

#[test]
fn test_exit_status_keeps_errors_apart() {
    for input in ["0", "127", "128", "3 10 -", "99999 1 -"] {
        let code = exit_status::status(&eval(input));
        assert!((0..=127).contains(&code), "{:?} -> {}", input, code);
    }

    assert_eq!(exit_status::status(&eval("3 10 -")), 121);
    assert_eq!(exit_status::status(&eval("+")), 194);
    assert_eq!(exit_status::status(&eval("x")), 195);

    let wrapping =
        RpnEvaluator::new(EvaluatorConfig::default().with_overflow(OverflowPolicy::Wrapping));
    assert_eq!(
        exit_status::status(&wrapping.evaluate(["9223372036854775807", "1", "+"])),
        0
    );
    assert_eq!(exit_status::status(&eval("9223372036854775808")), 196);
}
