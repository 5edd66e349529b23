#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    If(Expr, Vec<Stmt>),
    While(Expr, Vec<Stmt>),
    /// Target and value. The parser only builds variable targets with a value.
    Assignment(Expr, Option<Expr>),
    Expression(Expr),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    NumberLiteral(f64),
    Variable(String),
    /// Operator symbol, left and right side.
    Binary(String, Box<Expr>, Option<Box<Expr>>),
    Parenthesis(Box<Expr>),
    /// Callee and arguments. `f()` has no argument list at all.
    Call(Box<Expr>, Option<Vec<Expr>>),
    UnaryMinus(Box<Expr>),
}

impl Expr {
    pub fn binary(op: &str, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op.to_owned(), Box::new(lhs), Some(Box::new(rhs)))
    }

    pub fn ast_string(&self) -> String {
        match self {
            Expr::NumberLiteral(n) => n.to_string(),
            Expr::Variable(name) => name.clone(),
            Expr::Binary(op, lhs, rhs) => match rhs {
                Some(rhs) => format!("({} {} {})", op, lhs.ast_string(), rhs.ast_string()),
                None => format!("({} {})", op, lhs.ast_string()),
            },
            Expr::Parenthesis(expr) => format!("(group {})", expr.ast_string()),
            Expr::Call(callee, args) => {
                let exprs: Vec<_> = args
                    .iter()
                    .flatten()
                    .map(|a| a.ast_string())
                    .collect();
                if exprs.is_empty() {
                    format!("(call {})", callee.ast_string())
                } else {
                    format!("(call {} {})", callee.ast_string(), exprs.join(" "))
                }
            }
            Expr::UnaryMinus(expr) => format!("(- {})", expr.ast_string()),
        }
    }
}

impl Stmt {
    pub fn ast_string(&self) -> String {
        match self {
            Stmt::If(condition, body) => {
                format!("(if {} {})", condition.ast_string(), block_string(body))
            }
            Stmt::While(condition, body) => {
                format!("(while {} {})", condition.ast_string(), block_string(body))
            }
            Stmt::Assignment(target, value) => match value {
                Some(value) => format!("(set {} {})", target.ast_string(), value.ast_string()),
                None => format!("(set {})", target.ast_string()),
            },
            Stmt::Expression(expr) => format!("(expr {})", expr.ast_string()),
        }
    }
}

impl Program {
    pub fn ast_string(&self) -> String {
        let stmts: Vec<_> = self.stmts.iter().map(|s| s.ast_string()).collect();
        stmts.join("\n")
    }
}

fn block_string(stmts: &[Stmt]) -> String {
    let stmts: Vec<_> = stmts.iter().map(|s| s.ast_string()).collect();
    format!("{{{}}}", stmts.join(" "))
}
