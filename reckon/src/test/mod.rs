#[cfg(test)]
mod tests {
    use reckon_ast::err::{LexError, ParseError};
    use reckon_core::err::ArithError;

    use crate::{evaluate, evaluate_with, parse, EvalError, EvalOptions, Num};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn simple_sum_is_int() -> anyhow::Result<()> {
        init();
        assert!(matches!(evaluate("1+2")?, Num::Int(3)));
        Ok(())
    }

    #[test]
    fn precedence() -> anyhow::Result<()> {
        init();
        assert!(matches!(evaluate("1+2*3")?, Num::Int(7)));
        assert!(matches!(evaluate("1+2*3+4")?, Num::Int(11)));
        assert!(matches!(evaluate("(1+2)*3")?, Num::Int(9)));
        assert!(matches!(evaluate("4 * 3 + 10 // 5 - 6")?, Num::Int(8)));
        Ok(())
    }

    #[test]
    fn associative_chain_is_insensitive_to_grouping() -> anyhow::Result<()> {
        assert!(matches!(evaluate("2*3*4")?, Num::Int(24)));
        Ok(())
    }

    #[test]
    fn non_associative_chains_fold_left() -> anyhow::Result<()> {
        // right folding would give 8.0, 9 and 512
        assert!(matches!(evaluate("16/4/2")?, Num::Float(f) if f == 2.0));
        assert!(matches!(evaluate("10-3-2")?, Num::Int(5)));
        assert!(matches!(evaluate("2**3**2")?, Num::Int(64)));
        assert!(matches!(evaluate("100//10//3")?, Num::Int(3)));
        Ok(())
    }

    #[test]
    fn two_operand_ints_match_native_arithmetic() -> anyhow::Result<()> {
        let values: [i64; 6] = [0, 1, 2, 7, 13, 1000];
        for a in values {
            for b in values {
                assert!(evaluate(&format!("{a}+{b}"))?.identical(&Num::Int(a + b)));
                assert!(evaluate(&format!("{a}-{b}"))?.identical(&Num::Int(a - b)));
                assert!(evaluate(&format!("{a}*{b}"))?.identical(&Num::Int(a * b)));
                if b == 0 {
                    continue;
                }
                assert!(
                    matches!(evaluate(&format!("{a}/{b}"))?, Num::Float(f) if f == a as f64 / b as f64)
                );
                assert!(matches!(evaluate(&format!("{a}%{b}"))?, Num::Int(r) if r == a % b));
                assert!(matches!(evaluate(&format!("{a}//{b}"))?, Num::Int(q) if q == a / b));
            }
        }
        Ok(())
    }

    #[test]
    fn float_operand_gives_float_result() -> anyhow::Result<()> {
        for src in ["1+2.0", "1.5*2", "3.0-1", "7.5//2", "7%2.5", "2.0**2"] {
            let v = evaluate(src)?;
            assert!(v.is_float(), "{src} gave {}", v.repr());
        }
        assert_eq!(evaluate("7.5//2")?.to_string(), "3.0");
        assert_eq!(evaluate("7%2.5")?.to_string(), "2.0");
        assert_eq!(evaluate("1+2.0")?.to_string(), "3.0");
        Ok(())
    }

    #[test]
    fn negative_intermediates_floor() -> anyhow::Result<()> {
        assert!(matches!(evaluate("(1-8)//2")?, Num::Int(-4)));
        assert!(matches!(evaluate("(1-8)%2")?, Num::Int(1)));
        assert!(matches!(evaluate("7%(0-2)")?, Num::Int(-1)));
        assert!(matches!(evaluate("2**(0-1)")?, Num::Float(f) if f == 0.5));
        Ok(())
    }

    #[test]
    fn literal_tag_survives_integral_float() -> anyhow::Result<()> {
        let v = evaluate("4.0")?;
        assert!(v.is_float());
        assert_eq!(v.to_string(), "4.0");
        assert_eq!(evaluate("3")?.to_string(), "3");
        assert_eq!(evaluate("3.5")?.to_string(), "3.5");
        Ok(())
    }

    #[test]
    fn empty_and_dangling_input() {
        assert_eq!(
            evaluate(""),
            Err(EvalError::Parse(ParseError::UnexpectedEndOfInput))
        );
        assert_eq!(
            evaluate("   "),
            Err(EvalError::Parse(ParseError::UnexpectedEndOfInput))
        );
        assert_eq!(
            evaluate("+"),
            Err(EvalError::Parse(ParseError::UnexpectedToken {
                symbol: "+".into(),
                offset: 0
            }))
        );
        assert_eq!(
            evaluate("(1+2"),
            Err(EvalError::Parse(ParseError::UnexpectedEndOfInput))
        );
        assert_eq!(
            evaluate("1+2)"),
            Err(EvalError::Parse(ParseError::UnexpectedToken {
                symbol: ")".into(),
                offset: 3
            }))
        );
    }

    #[test]
    fn unary_minus_is_not_supported() {
        assert!(matches!(
            evaluate("-1"),
            Err(EvalError::Parse(ParseError::UnexpectedToken { .. }))
        ));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        for (src, op) in [("2/0", "/"), ("2//0", "//"), ("2%0", "%"), ("2/0.0", "/")] {
            assert_eq!(
                evaluate(src),
                Err(EvalError::Arith(ArithError::DivisionByZero { op })),
                "{src}"
            );
        }
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(
            evaluate("9223372036854775807+1"),
            Err(EvalError::Arith(ArithError::Overflow { op: "+", .. }))
        ));
    }

    #[test]
    fn unknown_characters_depend_on_mode() -> anyhow::Result<()> {
        init();
        assert_eq!(
            evaluate("2 x 3"),
            Err(EvalError::Lex(LexError::UnrecognizedCharacter {
                ch: 'x',
                offset: 2
            }))
        );
        // a dropped character still separates the literals around it
        assert_eq!(
            evaluate_with("2 x 3", &EvalOptions::lenient()),
            Err(EvalError::Parse(ParseError::UnexpectedToken {
                symbol: "3".into(),
                offset: 4
            }))
        );
        assert!(matches!(
            evaluate_with("2 x+ 3", &EvalOptions::lenient())?,
            Num::Int(5)
        ));
        let v = evaluate_with("2 * $3", &EvalOptions::lenient())?;
        assert!(matches!(v, Num::Int(6)));
        Ok(())
    }

    #[test]
    fn parse_exposes_the_tree() -> anyhow::Result<()> {
        let e = parse("1 + 2 * 3")?;
        assert_eq!(e.to_string(), "(+ 1 (* 2 3))");
        Ok(())
    }

    #[test]
    fn errors_render_with_stage_prefix() {
        let msg = evaluate("1/0").unwrap_err().to_string();
        assert_eq!(msg, "EVAL_ERR => Division by zero in '/'");
        let msg = evaluate("1+").unwrap_err().to_string();
        assert_eq!(msg, "PARSE_ERR => Unexpected end of input");
    }
}
