use super::calculator::calculate;
use super::environment::Environment;
use super::errors::{RuntimeError, RuntimeResult};
use super::native_funcs::get_native_funcs;
use super::value::Value;
use crate::frontend::ast::{Expr, Program, Stmt};
use std::io::{self, Write};

pub struct Interpreter<W: Write> {
    env: Environment,
    output: W,
}

impl Interpreter<io::Stdout> {
    pub fn new() -> Self {
        Interpreter::new_with_output(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to the given sink.
    pub fn new_with_output(output: W) -> Self {
        let mut env = Environment::new();
        env.define("true".to_owned(), Value::Boolean(true));
        env.define("false".to_owned(), Value::Boolean(false));
        for native_func in get_native_funcs().into_iter() {
            let name = native_func.name().to_owned();
            env.define(name, Value::Function(native_func));
        }

        Interpreter { env, output }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, program: &Program) -> RuntimeResult<()> {
        self.eval_statements(&program.stmts)
    }

    pub fn eval_statements(&mut self, stmts: &[Stmt]) -> RuntimeResult<()> {
        for stmt in stmts.iter() {
            self.eval_statement(stmt)?;
        }
        Ok(())
    }

    pub fn eval_statement(&mut self, stmt: &Stmt) -> RuntimeResult<()> {
        #[cfg(feature = "trace-execution")]
        eprintln!("[trace] {}", stmt.ast_string());

        match stmt {
            Stmt::Expression(expr) => {
                self.eval_expression(expr)?;
            }
            Stmt::Assignment(target, value) => self.eval_assignment(target, value.as_ref())?,
            Stmt::If(condition, body) => {
                if self.eval_condition(condition)? {
                    self.eval_statements(body)?;
                }
            }
            Stmt::While(condition, body) => self.eval_while(condition, body)?,
        }

        Ok(())
    }

    fn eval_assignment(&mut self, target: &Expr, value: Option<&Expr>) -> RuntimeResult<()> {
        let name = match target {
            Expr::Call(..) => {
                self.eval_expression(target)?;
                return Ok(());
            }
            Expr::Variable(name) => name,
            _ => return Err(RuntimeError::InvalidAssignmentTarget(target.ast_string())),
        };

        let value = match value {
            Some(expr) => self.eval_expression(expr)?,
            None => Value::Null,
        };
        self.env.define(name.clone(), value);
        Ok(())
    }

    /// The condition is checked once up front and then again before every
    /// iteration.
    fn eval_while(&mut self, condition: &Expr, body: &[Stmt]) -> RuntimeResult<()> {
        self.eval_condition(condition)?;
        while self.eval_condition(condition)? {
            self.eval_statements(body)?;
        }
        Ok(())
    }

    fn eval_condition(&mut self, condition: &Expr) -> RuntimeResult<bool> {
        match self.eval_expression(condition)? {
            Value::Boolean(b) => Ok(b),
            value => Err(RuntimeError::NonBooleanCondition(value)),
        }
    }

    pub fn eval_expression(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        match expr {
            Expr::NumberLiteral(n) => Ok(Value::Number(*n)),
            Expr::Variable(name) => self.env.get(name),
            Expr::Parenthesis(expr) => self.eval_expression(expr),
            Expr::Call(callee, args) => self.eval_call(callee, args.as_deref().unwrap_or(&[])),
            Expr::UnaryMinus(expr) => match self.eval_expression(expr)? {
                Value::Number(n) => Ok(Value::Number(-n)),
                value => Err(RuntimeError::IllegalNegation(value)),
            },
            Expr::Binary(op, lhs, rhs) => {
                let rhs = match rhs {
                    Some(rhs) => rhs,
                    None => return Ok(Value::Null),
                };
                let lhs = self.eval_expression(lhs)?;
                let rhs = self.eval_expression(rhs)?;
                calculate(op, lhs, rhs)
            }
        }
    }

    /// The callee's display text is looked up again in the environment, so
    /// `f = print; f(1,);` reaches the builtin through its name.
    fn eval_call(&mut self, callee: &Expr, args: &[Expr]) -> RuntimeResult<Value> {
        let key = self.eval_expression(callee)?.to_string();
        let func = match self.env.lookup(&key) {
            Some(Value::Function(func)) => func.clone(),
            Some(_) => return Err(RuntimeError::NotCallable(key)),
            None => return Err(RuntimeError::UnknownFunction(key)),
        };

        let mut values = Vec::with_capacity(args.len());
        for arg in args.iter() {
            values.push(self.eval_expression(arg)?);
        }

        func.execute(values, &mut self.output)
    }
}
