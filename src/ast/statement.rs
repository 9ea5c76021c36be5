use super::{BlockStatement, ExpressionStatement, ReturnStatement, VariableStatement};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Variable(VariableStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Variable(node) => write!(f, "{node}"),
            Statement::Return(node) => write!(f, "{node}"),
            Statement::Expression(node) => write!(f, "{node}"),
            Statement::Block(node) => write!(f, "{node}"),
        }
    }
}
