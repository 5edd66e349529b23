#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Precedence {
    // Lowest precedence
    Comparison,
    Sum,
    Product, // Highest precedence
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterEq,
    LessThan,
    LessEq,
}

impl InfixOperator {
    pub fn from_symbol(symbol: &str) -> Option<InfixOperator> {
        let op = match symbol {
            "+" => InfixOperator::Add,
            "-" => InfixOperator::Subtract,
            "*" => InfixOperator::Multiply,
            "/" => InfixOperator::Divide,
            "==" => InfixOperator::EqualTo,
            "!=" => InfixOperator::NotEqualTo,
            ">" => InfixOperator::GreaterThan,
            ">=" => InfixOperator::GreaterEq,
            "<" => InfixOperator::LessThan,
            "<=" => InfixOperator::LessEq,
            _ => return None,
        };
        Some(op)
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            InfixOperator::Add | InfixOperator::Subtract => Precedence::Sum,
            InfixOperator::Multiply | InfixOperator::Divide => Precedence::Product,
            InfixOperator::EqualTo
            | InfixOperator::NotEqualTo
            | InfixOperator::GreaterEq
            | InfixOperator::LessEq
            | InfixOperator::GreaterThan
            | InfixOperator::LessThan => Precedence::Comparison,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::EqualTo => "==",
            InfixOperator::NotEqualTo => "!=",
            InfixOperator::GreaterThan => ">",
            InfixOperator::GreaterEq => ">=",
            InfixOperator::LessThan => "<",
            InfixOperator::LessEq => "<=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::more_asserts::*;

    #[test]
    fn test_precedence() {
        assert_lt!(Precedence::Comparison, Precedence::Sum);
        assert_gt!(Precedence::Product, Precedence::Sum);
        assert_eq!(
            InfixOperator::LessEq.precedence(),
            InfixOperator::EqualTo.precedence()
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(InfixOperator::from_symbol("+"), Some(InfixOperator::Add));
        assert_eq!(
            InfixOperator::from_symbol(">="),
            Some(InfixOperator::GreaterEq)
        );
        assert_eq!(InfixOperator::from_symbol("!"), None);
        assert_eq!(InfixOperator::from_symbol("="), None);

        for symbol in ["+", "-", "*", "/", "<", ">", "<=", ">=", "==", "!="] {
            assert_eq!(InfixOperator::from_symbol(symbol).unwrap().symbol(), symbol);
        }
    }
}
