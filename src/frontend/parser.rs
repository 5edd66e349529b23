use super::ast::{Expr, Program, Stmt};
use super::errors::{ParserError, ParserResult};
use super::operator::{InfixOperator, Precedence};
use super::token::{Token, TokenKind};
use std::iter::Peekable;

/// Drops layout tokens. Comments are kept and reach the grammar.
pub fn filter_whitespace<I>(tokens: I) -> impl Iterator<Item = Token>
where
    I: IntoIterator<Item = Token>,
{
    tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
}

pub struct Parser<T>
where
    T: Iterator<Item = Token>,
{
    tokens: Peekable<T>,
}

impl<T> Parser<T>
where
    T: Iterator<Item = Token>,
{
    pub fn new(tokens: T) -> Self {
        Parser {
            tokens: tokens.peekable(),
        }
    }

    /// Returns current token.
    fn peek_token(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Text of the current token, or a placeholder at the end of input.
    fn describe_current(&mut self) -> String {
        match self.peek_token() {
            Some(t) => format!("`{}`", t.text),
            None => "end of input".to_owned(),
        }
    }

    /// Advances the stream.
    fn bump(&mut self) {
        self.tokens.next();
    }

    /// Checks whether or not the current token has the given text.
    fn check(&mut self, text: &str) -> bool {
        self.peek_token().map_or(false, |t| t.is(text))
    }

    /// Checks whether or not the current token has the given text.
    /// If true consume it and return true, else return false.
    fn check_consume(&mut self, text: &str) -> bool {
        if self.check(text) {
            self.bump();
            return true;
        }
        false
    }

    /// Consumes token, asserting that it has the expected text.
    fn consume(&mut self, expected: &'static str) -> ParserResult<()> {
        if self.check_consume(expected) {
            Ok(())
        } else {
            Err(ParserError::ExpectedSymbol {
                expected,
                found: self.describe_current(),
            })
        }
    }

    /// Consumes the current token if it is an infix operator of the given
    /// precedence level.
    fn check_consume_operator(&mut self, level: Precedence) -> Option<InfixOperator> {
        let op = self
            .peek_token()
            .and_then(|t| InfixOperator::from_symbol(&t.text))
            .filter(|op| op.precedence() == level)?;
        self.bump();
        Some(op)
    }

    /// Parses the whole token stream as a list of statements.
    pub fn parse(mut self) -> ParserResult<Program> {
        let mut stmts = vec![];

        while self.peek_token().is_some() {
            stmts.push(self.parse_statement()?);
        }

        Ok(Program { stmts })
    }

    fn parse_statement(&mut self) -> ParserResult<Stmt> {
        if self.check_consume("if") {
            let (condition, body) = self.parse_clause()?;
            return Ok(Stmt::If(condition, body));
        }
        if self.check_consume("while") {
            let (condition, body) = self.parse_clause()?;
            return Ok(Stmt::While(condition, body));
        }

        let stmt = self.parse_assignment()?;
        self.consume(";")?;
        Ok(stmt)
    }

    /// Parses `( condition ) { statements }` after `if` or `while`.
    fn parse_clause(&mut self) -> ParserResult<(Expr, Vec<Stmt>)> {
        self.consume("(")?;
        let condition = self.parse_expression()?;
        self.consume(")")?;
        self.consume("{")?;
        let body = self.parse_block()?;
        Ok((condition, body))
    }

    /// Parses statements up to and including the closing brace.
    fn parse_block(&mut self) -> ParserResult<Vec<Stmt>> {
        let mut stmts = vec![];

        loop {
            if self.check_consume("}") {
                return Ok(stmts);
            }
            if self.peek_token().is_none() {
                return Err(ParserError::ExpectedEndOfBlock);
            }
            stmts.push(self.parse_statement()?);
        }
    }

    /// Parses an expression and decides from the token after it whether it
    /// is an assignment, a call or a bare expression statement.
    fn parse_assignment(&mut self) -> ParserResult<Stmt> {
        let expr = self.parse_expression()?;

        if self.check("=") {
            let target = match expr {
                Expr::Variable(_) => expr,
                _ => return Err(ParserError::ExpectedVariable),
            };
            self.bump();
            let value = self.parse_expression()?;
            Ok(Stmt::Assignment(target, Some(value)))
        } else if self.check("(") {
            let args = self.parse_call_args()?;
            Ok(Stmt::Expression(Expr::Call(Box::new(expr), args)))
        } else if self.check(";") {
            Ok(Stmt::Expression(expr))
        } else {
            Err(ParserError::UnresolvedStatement(self.describe_current()))
        }
    }

    pub fn parse_expression(&mut self) -> ParserResult<Expr> {
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_sum()?;

        // Every node of a comparison chain is labelled with the first operator.
        let symbol = self
            .peek_token()
            .map(|t| t.text.clone())
            .unwrap_or_default();

        while self.check_consume_operator(Precedence::Comparison).is_some() {
            let rhs = self.parse_sum()?;
            lhs = Expr::binary(&symbol, lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_sum(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_product()?;

        while let Some(op) = self.check_consume_operator(Precedence::Sum) {
            let rhs = self.parse_product()?;
            lhs = Expr::binary(op.symbol(), lhs, rhs);
        }

        Ok(lhs)
    }

    fn parse_product(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_primary()?;

        while let Some(op) = self.check_consume_operator(Precedence::Product) {
            let rhs = self.parse_primary()?;
            lhs = Expr::binary(op.symbol(), lhs, rhs);
        }

        Ok(lhs)
    }

    /// A main expression followed by any number of call argument lists.
    fn parse_primary(&mut self) -> ParserResult<Expr> {
        let mut expr = self.parse_main()?;

        while self.check("(") {
            let args = self.parse_call_args()?;
            expr = Expr::Call(Box::new(expr), args);
        }

        Ok(expr)
    }

    fn parse_main(&mut self) -> ParserResult<Expr> {
        if self.check_consume("(") {
            return self.parse_parenthesis();
        }

        let expr = match self.peek_token() {
            Some(Token {
                kind: TokenKind::Number,
                text,
            }) => match text.parse() {
                Ok(n) => Expr::NumberLiteral(n),
                Err(_) => return Err(ParserError::ExpectedPrimary(format!("`{}`", text))),
            },
            Some(Token {
                kind: TokenKind::Identifier,
                text,
            }) => Expr::Variable(text.clone()),
            _ => return Err(ParserError::ExpectedPrimary(self.describe_current())),
        };
        self.bump();

        Ok(expr)
    }

    /// Parses the rest of `( expression )` after the opening parenthesis.
    fn parse_parenthesis(&mut self) -> ParserResult<Expr> {
        let expr = self.parse_expression()?;
        if !self.check_consume(")") {
            return Err(ParserError::ExpectedClosingParen(self.describe_current()));
        }
        Ok(Expr::Parenthesis(Box::new(expr)))
    }

    /// Parses `()` or `(a, b, ..., )`. Every argument must be followed by a
    /// comma, the last one included.
    fn parse_call_args(&mut self) -> ParserResult<Option<Vec<Expr>>> {
        if !self.check_consume("(") || self.check_consume(")") {
            return Ok(None);
        }

        let mut args = vec![self.parse_expression()?];
        self.consume(",")?;
        while !self.check_consume(")") {
            args.push(self.parse_expression()?);
            self.consume(",")?;
        }

        Ok(Some(args))
    }
}
