use super::errors::{RuntimeError, RuntimeResult};
use super::value::Value;
use crate::frontend::operator::InfixOperator;

/// Applies a binary operator to two evaluated operands.
///
/// Arithmetic and ordering need two numbers. Equality needs two operands of
/// the same kind, either both numbers or both booleans. `<=` and `>=` compare
/// with strict `<`.
pub fn calculate(symbol: &str, lhs: Value, rhs: Value) -> RuntimeResult<Value> {
    let op = InfixOperator::from_symbol(symbol)
        .ok_or_else(|| RuntimeError::UnknownOperator(symbol.to_owned()))?;

    match op {
        InfixOperator::Add => numerical_binop(op, lhs, rhs, |a, b| Value::Number(a + b)),
        InfixOperator::Subtract => numerical_binop(op, lhs, rhs, |a, b| Value::Number(a - b)),
        InfixOperator::Multiply => numerical_binop(op, lhs, rhs, |a, b| Value::Number(a * b)),
        InfixOperator::Divide => numerical_binop(op, lhs, rhs, |a, b| Value::Number(a / b)),
        InfixOperator::GreaterThan => numerical_binop(op, lhs, rhs, |a, b| Value::Boolean(a > b)),
        InfixOperator::LessThan | InfixOperator::LessEq | InfixOperator::GreaterEq => {
            numerical_binop(op, lhs, rhs, |a, b| Value::Boolean(a < b))
        }
        InfixOperator::EqualTo => equality_binop(op, lhs, rhs, |equal| equal),
        InfixOperator::NotEqualTo => equality_binop(op, lhs, rhs, |equal| !equal),
    }
}

fn numerical_binop<F>(op: InfixOperator, lhs: Value, rhs: Value, func: F) -> RuntimeResult<Value>
where
    F: Fn(f64, f64) -> Value,
{
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(func(a, b)),
        (a, b) => Err(incompatible(op, a, b)),
    }
}

fn equality_binop<F>(op: InfixOperator, lhs: Value, rhs: Value, func: F) -> RuntimeResult<Value>
where
    F: Fn(bool) -> bool,
{
    let equal = match (&lhs, &rhs) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        _ => return Err(incompatible(op, lhs, rhs)),
    };
    Ok(Value::Boolean(func(equal)))
}

fn incompatible(op: InfixOperator, lhs: Value, rhs: Value) -> RuntimeError {
    RuntimeError::IncompatibleTypes(op.symbol().to_owned(), lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    fn boolean(b: bool) -> Value {
        Value::Boolean(b)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(calculate("+", num(1.0), num(2.0)), Ok(num(3.0)));
        assert_eq!(calculate("-", num(1.0), num(2.0)), Ok(num(-1.0)));
        assert_eq!(calculate("*", num(1.5), num(2.0)), Ok(num(3.0)));
        assert_eq!(calculate("/", num(1.0), num(4.0)), Ok(num(0.25)));
        assert_eq!(calculate("/", num(1.0), num(0.0)), Ok(num(f64::INFINITY)));

        match calculate("/", num(0.0), num(0.0)) {
            Ok(Value::Number(n)) => assert!(n.is_nan()),
            other => panic!("expected NaN, got {:?}", other),
        }
    }

    #[test]
    fn test_ordering() {
        assert_eq!(calculate("<", num(1.0), num(2.0)), Ok(boolean(true)));
        assert_eq!(calculate(">", num(1.0), num(2.0)), Ok(boolean(false)));
        assert_eq!(calculate(">", num(3.0), num(2.0)), Ok(boolean(true)));
    }

    #[test]
    fn test_less_eq_and_greater_eq_are_strict_less_than() {
        assert_eq!(calculate("<=", num(1.0), num(2.0)), Ok(boolean(true)));
        assert_eq!(calculate("<=", num(2.0), num(2.0)), Ok(boolean(false)));
        assert_eq!(calculate(">=", num(1.0), num(2.0)), Ok(boolean(true)));
        assert_eq!(calculate(">=", num(2.0), num(1.0)), Ok(boolean(false)));
        assert_eq!(calculate(">=", num(2.0), num(2.0)), Ok(boolean(false)));
    }

    #[test]
    fn test_equality() {
        assert_eq!(calculate("==", num(6.0), num(6.0)), Ok(boolean(true)));
        assert_eq!(calculate("!=", num(6.0), num(6.0)), Ok(boolean(false)));
        assert_eq!(calculate("==", boolean(true), boolean(false)), Ok(boolean(false)));
        assert_eq!(calculate("!=", boolean(true), boolean(false)), Ok(boolean(true)));
    }

    #[test]
    fn test_incompatible_types() {
        assert_eq!(
            calculate("==", num(1.0), boolean(true)),
            Err(RuntimeError::IncompatibleTypes(
                "==".to_owned(),
                num(1.0),
                boolean(true)
            ))
        );
        assert!(calculate("==", Value::Null, Value::Null).is_err());
        assert!(calculate("+", boolean(true), boolean(true)).is_err());
        assert!(calculate("<", num(1.0), Value::Null).is_err());
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            calculate("%", num(1.0), num(2.0)),
            Err(RuntimeError::UnknownOperator("%".to_owned()))
        );
    }
}
