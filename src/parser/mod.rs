//! A Pratt (precedence-climbing) expression parser combined with
//! statement parsing (`spec.md` §4.2). Operator precedence,
//! prefix/infix dispatch, grouped expressions, `if`/`while`, function
//! literals, calls and indexing all share the one recursive engine in
//! [`Parser::parse_expression`].

mod error;
mod precedence;

pub use error::ParseError;
pub use precedence::Precedence;

use crate::ast::{
    ArrayLiteral, BlockStatement, BooleanLiteral, CallExpression, Expression, ExpressionStatement,
    FunctionLiteral, HashLiteral, Identifier, IfExpression, IndexExpression, InfixExpression,
    IntegerLiteral, PrefixExpression, Program, ReturnStatement, Statement, StringLiteral,
    VariableStatement, WhileExpression,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn advance(&mut self) {
        std::mem::swap(&mut self.current, &mut self.peek);
        self.peek = self.lexer.next_token();
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Records an error and returns `false` unless `peek` is `kind`,
    /// in which case it advances and returns `true`.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::new(
                format!("Expected {kind}, got {} instead", self.peek.kind),
                self.peek.clone(),
            ));
            false
        }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::SemiColon) {
            self.advance();
        }
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }
        Program { statements }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::VariableDeclaration => self.parse_variable_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_variable_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        let name = Identifier {
            token: self.current.clone(),
            name: self.current.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Equals) {
            return None;
        }
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Variable(VariableStatement {
            token,
            name,
            value,
        }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression(ExpressionStatement {
            token,
            expression,
        }))
    }

    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.current.clone();
        let mut statements = Vec::new();
        self.advance();

        while !self.current_is(TokenKind::RightBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.advance();
        }

        BlockStatement { token, statements }
    }

    /// The core algorithm: parse a prefix expression, then keep
    /// extending it leftward through infix operators whose precedence
    /// exceeds `min_prec`, giving left-associative operators for free.
    fn parse_expression(&mut self, min_prec: Precedence) -> Option<Expression> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::SemiColon) && min_prec < Precedence::of(self.peek.kind) {
            if !has_infix(self.peek.kind) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.current.kind {
            TokenKind::Identifier => Some(Expression::Identifier(Identifier {
                token: self.current.clone(),
                name: self.current.literal.clone(),
            })),
            TokenKind::Number => self.parse_integer_literal(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::String => Some(Expression::StringLiteral(StringLiteral {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            })),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LeftParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::While => self.parse_while_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LeftBracket => self.parse_array_literal(),
            TokenKind::LeftBrace => self.parse_hash_literal(),
            kind => {
                self.errors.push(ParseError::new(
                    format!("no prefix parse function for {kind}"),
                    self.current.clone(),
                ));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.current.kind {
            TokenKind::LeftParen => self.parse_call_expression(left),
            TokenKind::LeftBracket => self.parse_index_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                self.errors.push(ParseError::new(
                    format!("could not parse {:?} as integer", token.literal),
                    token,
                ));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Expression {
        Expression::Boolean(BooleanLiteral {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        })
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = Precedence::of(token.kind);
        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LeftBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_while_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::While(WhileExpression {
            token,
            condition: Box::new(condition),
            body,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }
        let params = self.parse_function_params()?;

        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            params,
            body,
        }))
    }

    fn parse_function_params(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.advance();
            return Some(params);
        }

        self.advance();
        params.push(Identifier {
            token: self.current.clone(),
            name: self.current.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            params.push(Identifier {
                token: self.current.clone(),
                name: self.current.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(params)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let args = self.parse_expression_list(TokenKind::RightParen)?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            args,
        }))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightBracket) {
            return None;
        }

        Some(Expression::Index(IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::RightBracket)?;
        Some(Expression::Array(ArrayLiteral { token, elements }))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RightBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek_is(TokenKind::Comma) {
                self.advance();
            } else if !self.peek_is(TokenKind::RightBrace) {
                self.errors.push(ParseError::new(
                    format!("Expected {}, got {} instead", TokenKind::RightBrace, self.peek.kind),
                    self.peek.clone(),
                ));
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RightBrace) {
            return None;
        }

        Some(Expression::Hash(HashLiteral { token, pairs }))
    }

    /// Shared by call arguments and array literals: a comma-separated
    /// expression list terminated by `end`.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(items)
    }
}

fn has_infix(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::EqualsInfix
            | TokenKind::NotEquals
            | TokenKind::LessThan
            | TokenKind::GreaterThan
            | TokenKind::LeftParen
            | TokenKind::LeftBracket
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Program {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected parse errors: {:?}",
            parser.errors()
        );
        program
    }

    #[test]
    fn parses_variable_statement() {
        let program = parse("var x = 5;");
        assert_eq!(program.statements.len(), 1);
        assert_eq!(program.statements[0].to_string(), "var x = 5;");
    }

    #[test]
    fn parses_return_statement() {
        let program = parse("return 10;");
        assert_eq!(program.statements[0].to_string(), "return 10;");
    }

    #[test]
    fn respects_operator_precedence() {
        let program = parse("1 + 2 * 3");
        assert_eq!(program.statements[0].to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn parenthesized_groups_override_precedence() {
        let program = parse("(1 + 2) * 3");
        assert_eq!(program.statements[0].to_string(), "((1 + 2) * 3)");
    }

    #[test]
    fn parses_prefix_operators() {
        let program = parse("-a * !b");
        assert_eq!(program.statements[0].to_string(), "((-a) * (!b))");
    }

    #[test]
    fn parses_call_expression_arguments() {
        let program = parse("add(1, 2 * 3, 4 + 5)");
        assert_eq!(
            program.statements[0].to_string(),
            "add(1, (2 * 3), (4 + 5))"
        );
    }

    #[test]
    fn parses_index_expression() {
        let program = parse("myArray[1 + 1]");
        assert_eq!(program.statements[0].to_string(), "(myArray[(1 + 1)])");
    }

    #[test]
    fn parses_if_else_expression() {
        let program = parse("if (x < y) { x } else { y }");
        assert_eq!(
            program.statements[0].to_string(),
            "if(x < y) { x } else { y }"
        );
    }

    #[test]
    fn parses_while_expression() {
        let program = parse("while (x < 10) { x }");
        assert_eq!(program.statements[0].to_string(), "while((x < 10)) { x }");
    }

    #[test]
    fn parses_function_literal_params() {
        let program = parse("func(x, y) { x + y; }");
        match &program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Function(func) => {
                    assert_eq!(func.params.len(), 2);
                    assert_eq!(func.params[0].name, "x");
                    assert_eq!(func.params[1].name, "y");
                }
                other => panic!("expected function literal, got {other:?}"),
            },
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn parses_empty_array_literal() {
        let program = parse("[]");
        assert_eq!(program.statements[0].to_string(), "[]");
    }

    #[test]
    fn parses_hash_literal_pairs() {
        let program = parse(r#"{"one": 1, "two": 2}"#);
        match &program.statements[0] {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Hash(hash) => assert_eq!(hash.pairs.len(), 2),
                other => panic!("expected hash literal, got {other:?}"),
            },
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn records_error_for_missing_closing_paren() {
        let mut parser = Parser::new(Lexer::new("(1 + 2"));
        parser.parse_program();
        assert!(!parser.errors().is_empty());
    }

    #[test]
    fn records_error_for_token_with_no_prefix_handler() {
        let mut parser = Parser::new(Lexer::new(")"));
        parser.parse_program();
        assert!(!parser.errors().is_empty());
        assert!(parser.errors()[0].message.contains("no prefix parse function"));
    }
}
