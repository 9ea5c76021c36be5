use super::{BlockStatement, Identifier};
use crate::token::Token;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.name.clone()).collect();
        write!(f, "func({}) {{\n{}\n}}", params.join(", "), self.body)
    }
}
