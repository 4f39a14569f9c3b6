//! Operator evaluation over 32-bit integers.
//!
//! Arithmetic follows fixed-width two's-complement semantics: addition,
//! subtraction, and multiplication wrap on overflow, and division truncates
//! toward zero. The only failure modes are unparseable operand text and a
//! zero divisor.

use thiserror::Error;

/// Why an evaluation produced no result.
///
/// The display strings are the exact user-facing warning messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Invalid input format.")]
    Parse,
    #[error("Division by zero")]
    DivisionByZero,
}

/// A binary operator. The set is closed; every dispatch matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// ASCII spelling, with `x` for multiplication.
    pub const fn ascii(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "x",
            Op::Div => "/",
        }
    }

    /// Typographic spelling for displays that prefer `×` and `÷`.
    pub const fn glyph(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "×",
            Op::Div => "÷",
        }
    }

    /// Selector key for direct selection. Accepts both spelling families.
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            'x' | 'X' | '*' | '×' => Some(Op::Mul),
            '/' | '÷' => Some(Op::Div),
            _ => None,
        }
    }

    /// Next operator in selector order, wrapping around.
    pub const fn next(self) -> Op {
        match self {
            Op::Add => Op::Sub,
            Op::Sub => Op::Mul,
            Op::Mul => Op::Div,
            Op::Div => Op::Add,
        }
    }

    /// Previous operator in selector order, wrapping around.
    pub const fn prev(self) -> Op {
        match self {
            Op::Add => Op::Div,
            Op::Sub => Op::Add,
            Op::Mul => Op::Sub,
            Op::Div => Op::Mul,
        }
    }

    /// Apply the operator. Overflow wraps; only a zero divisor fails.
    pub fn apply(self, a: i32, b: i32) -> Result<i32, EvalError> {
        match self {
            Op::Add => Ok(a.wrapping_add(b)),
            Op::Sub => Ok(a.wrapping_sub(b)),
            Op::Mul => Ok(a.wrapping_mul(b)),
            Op::Div => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                // wrapping_div: i32::MIN / -1 wraps instead of panicking
                Ok(a.wrapping_div(b))
            }
        }
    }
}

/// One successful computation together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub a: i32,
    pub b: i32,
    pub op: Op,
    pub value: i32,
}

/// Strict base-10 parse: optional sign, digits, nothing else. No whitespace
/// trimming; out-of-range literals fail the same way malformed ones do.
pub fn parse_operand(text: &str) -> Result<i32, EvalError> {
    text.parse::<i32>().map_err(|_| EvalError::Parse)
}

/// Evaluate two operand strings under an operator.
pub fn evaluate(a_text: &str, b_text: &str, op: Op) -> Result<Evaluation, EvalError> {
    let a = parse_operand(a_text)?;
    let b = parse_operand(b_text)?;
    let value = op.apply(a, b)?;
    Ok(Evaluation { a, b, op, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_operand_strict() {
        assert_eq!(parse_operand("5"), Ok(5));
        assert_eq!(parse_operand("-42"), Ok(-42));
        assert_eq!(parse_operand("+7"), Ok(7));
        assert_eq!(parse_operand(""), Err(EvalError::Parse));
        assert_eq!(parse_operand(" 5"), Err(EvalError::Parse));
        assert_eq!(parse_operand("5 "), Err(EvalError::Parse));
        assert_eq!(parse_operand("12a3"), Err(EvalError::Parse));
        assert_eq!(parse_operand("1.5"), Err(EvalError::Parse));
        assert_eq!(parse_operand("1,000"), Err(EvalError::Parse));
    }

    #[test]
    fn test_parse_operand_out_of_range_is_parse_error() {
        assert_eq!(parse_operand("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_operand("-2147483648"), Ok(i32::MIN));
        assert_eq!(parse_operand("2147483648"), Err(EvalError::Parse));
        assert_eq!(parse_operand("-2147483649"), Err(EvalError::Parse));
    }

    #[test]
    fn test_from_char_accepts_both_spellings() {
        assert_eq!(Op::from_char('+'), Some(Op::Add));
        assert_eq!(Op::from_char('-'), Some(Op::Sub));
        assert_eq!(Op::from_char('x'), Some(Op::Mul));
        assert_eq!(Op::from_char('X'), Some(Op::Mul));
        assert_eq!(Op::from_char('*'), Some(Op::Mul));
        assert_eq!(Op::from_char('×'), Some(Op::Mul));
        assert_eq!(Op::from_char('/'), Some(Op::Div));
        assert_eq!(Op::from_char('÷'), Some(Op::Div));
        assert_eq!(Op::from_char('%'), None);
        assert_eq!(Op::from_char('7'), None);
    }

    #[test]
    fn test_op_cycle_round_trips() {
        for op in [Op::Add, Op::Sub, Op::Mul, Op::Div] {
            assert_eq!(op.next().prev(), op);
            assert_eq!(op.prev().next(), op);
        }
        assert_eq!(Op::Div.next(), Op::Add);
        assert_eq!(Op::Add.prev(), Op::Div);
    }

    #[test]
    fn test_evaluate_basic() {
        let ev = evaluate("5", "3", Op::Add).unwrap();
        assert_eq!((ev.a, ev.b, ev.op, ev.value), (5, 3, Op::Add, 8));
        assert_eq!(evaluate("5", "3", Op::Sub).unwrap().value, 2);
        assert_eq!(evaluate("5", "3", Op::Mul).unwrap().value, 15);
        assert_eq!(evaluate("7", "2", Op::Div).unwrap().value, 3);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Op::Div.apply(7, 2), Ok(3));
        assert_eq!(Op::Div.apply(-7, 2), Ok(-3));
        assert_eq!(Op::Div.apply(7, -2), Ok(-3));
        assert_eq!(Op::Div.apply(-7, -2), Ok(3));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5", "0", Op::Div), Err(EvalError::DivisionByZero));
        assert_eq!(Op::Div.apply(0, 0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_addition_wraps_at_32_bits() {
        let ev = evaluate("2000000000", "2000000000", Op::Add).unwrap();
        assert_eq!(ev.value, -294967296);
    }

    #[test]
    fn test_multiplication_wraps_at_32_bits() {
        assert_eq!(Op::Mul.apply(65536, 65536), Ok(0));
        assert_eq!(Op::Mul.apply(i32::MAX, 2), Ok(-2));
    }

    #[test]
    fn test_min_divided_by_minus_one_wraps() {
        assert_eq!(Op::Div.apply(i32::MIN, -1), Ok(i32::MIN));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(EvalError::Parse.to_string(), "Invalid input format.");
        assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero");
    }

    proptest! {
        #[test]
        fn prop_add_matches_wrapping(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Op::Add.apply(a, b), Ok(a.wrapping_add(b)));
        }

        #[test]
        fn prop_mul_matches_wrapping(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Op::Mul.apply(a, b), Ok(a.wrapping_mul(b)));
        }

        #[test]
        fn prop_sub_undoes_add(a in any::<i32>(), b in any::<i32>()) {
            let sum = Op::Add.apply(a, b).unwrap();
            prop_assert_eq!(Op::Sub.apply(sum, b), Ok(a));
        }

        #[test]
        fn prop_mul_commutes(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Op::Mul.apply(a, b), Op::Mul.apply(b, a));
        }

        #[test]
        fn prop_div_never_fails_for_nonzero_divisor(
            a in any::<i32>(),
            b in any::<i32>().prop_filter("nonzero", |b| *b != 0),
        ) {
            prop_assert!(Op::Div.apply(a, b).is_ok());
        }

        #[test]
        fn prop_parse_round_trips(n in any::<i32>()) {
            prop_assert_eq!(parse_operand(&n.to_string()), Ok(n));
        }

        #[test]
        fn prop_letters_never_parse(s in "[a-zA-Z]{1,12}") {
            prop_assert_eq!(parse_operand(&s), Err(EvalError::Parse));
        }
    }
}
