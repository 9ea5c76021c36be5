use super::{Expression, Identifier};
use crate::token::Token;
use std::fmt::{self, Display};

/// `var <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl Display for VariableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var {} = {};", self.name, self.value)
    }
}
