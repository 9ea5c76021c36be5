use super::{
    ArrayLiteral, BooleanLiteral, CallExpression, FunctionLiteral, HashLiteral, Identifier,
    IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
    StringLiteral, WhileExpression,
};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Boolean(BooleanLiteral),
    StringLiteral(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    While(WhileExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(node) => write!(f, "{node}"),
            Expression::IntegerLiteral(node) => write!(f, "{node}"),
            Expression::Boolean(node) => write!(f, "{node}"),
            Expression::StringLiteral(node) => write!(f, "{node}"),
            Expression::Prefix(node) => write!(f, "{node}"),
            Expression::Infix(node) => write!(f, "{node}"),
            Expression::If(node) => write!(f, "{node}"),
            Expression::While(node) => write!(f, "{node}"),
            Expression::Function(node) => write!(f, "{node}"),
            Expression::Call(node) => write!(f, "{node}"),
            Expression::Array(node) => write!(f, "{node}"),
            Expression::Index(node) => write!(f, "{node}"),
            Expression::Hash(node) => write!(f, "{node}"),
        }
    }
}
