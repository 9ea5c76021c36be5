//! Recursive interpretation of the AST (`spec.md` §4.3), grounded in
//! `original_source/evaluator/helpers/helpers.go`'s single `Eval`
//! dispatch, split here into one function per node family the way the
//! AST itself is split into one file per node family.

mod builtins;

use crate::ast::{
    BlockStatement, CallExpression, Expression, FunctionLiteral, HashLiteral, IfExpression,
    IndexExpression, InfixExpression, PrefixExpression, Program, Statement, WhileExpression,
};
use crate::environment::Environment;
use crate::value::{FunctionValue, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub type Env = Rc<RefCell<Environment>>;

/// `Program`: evaluate each statement; a `Return` unwraps to its inner
/// value immediately, an `Error` returns immediately, otherwise the
/// final statement's result is the program's result.
pub fn eval_program(program: &Program, env: &Env) -> Value {
    let mut result = Value::Null;
    for statement in &program.statements {
        result = eval_statement(statement, env);
        match result {
            Value::Return(inner) => return *inner,
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// `BlockStatement`: like `eval_program`, but `Return`/`Error` are
/// passed through *without unwrapping* so an early return from a
/// nested block keeps propagating up to the enclosing function.
fn eval_block(block: &BlockStatement, env: &Env) -> Value {
    let mut result = Value::Null;
    for statement in &block.statements {
        result = eval_statement(statement, env);
        if result.is_return() || result.is_error() {
            return result;
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Env) -> Value {
    match statement {
        Statement::Variable(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(stmt.name.name.clone(), value);
            Value::Null
        }
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        }
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Block(block) => eval_block(block, env),
    }
}

fn eval_expression(expression: &Expression, env: &Env) -> Value {
    match expression {
        Expression::Identifier(ident) => eval_identifier(&ident.name, env),
        Expression::IntegerLiteral(lit) => Value::Integer(lit.value),
        Expression::Boolean(lit) => Value::Boolean(lit.value),
        Expression::StringLiteral(lit) => Value::string(lit.value.clone()),
        Expression::Prefix(expr) => eval_prefix_expression(expr, env),
        Expression::Infix(expr) => eval_infix_expression(expr, env),
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::While(expr) => eval_while_expression(expr, env),
        Expression::Function(expr) => eval_function_literal(expr, env),
        Expression::Call(expr) => eval_call_expression(expr, env),
        Expression::Array(expr) => {
            match eval_expression_list(&expr.elements, env) {
                Ok(elements) => Value::Array(Rc::new(elements)),
                Err(error) => error,
            }
        }
        Expression::Index(expr) => eval_index_expression(expr, env),
        Expression::Hash(expr) => eval_hash_literal(expr, env),
    }
}

fn eval_identifier(name: &str, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = builtins::lookup(name) {
        return Value::Builtin(builtin);
    }
    Value::Error(format!("UNKNOWN-IDENTIFIER: {name}"))
}

fn eval_prefix_expression(expr: &PrefixExpression, env: &Env) -> Value {
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }

    match expr.operator.as_str() {
        "!" => Value::Boolean(matches!(right, Value::Boolean(false) | Value::Null)),
        "-" => match right {
            Value::Integer(n) => Value::Integer(n.wrapping_neg()),
            other => Value::Error(format!("UNKNOWN-OPERATOR: -{}", other.type_name())),
        },
        operator => Value::Error(format!(
            "UNKNOWN-OPERATOR: {operator}{}",
            right.type_name()
        )),
    }
}

fn eval_infix_expression(expr: &InfixExpression, env: &Env) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let right = eval_expression(&expr.right, env);
    if right.is_error() {
        return right;
    }

    apply_infix(&expr.operator, left, right)
}

fn apply_infix(operator: &str, left: Value, right: Value) -> Value {
    if let (Value::Integer(l), Value::Integer(r)) = (&left, &right) {
        return eval_integer_infix(operator, *l, *r);
    }

    if operator == "+" {
        if let (Value::String(l), Value::String(r)) = (&left, &right) {
            return Value::string(format!("{l}{r}"));
        }
    }

    match operator {
        "==" => return Value::Boolean(left.identity_eq(&right)),
        "!=" => return Value::Boolean(!left.identity_eq(&right)),
        _ => {}
    }

    if left.type_name() != right.type_name() {
        return Value::Error(format!(
            "TYPE-MISMATCH: {} {operator} {}",
            left.type_name(),
            right.type_name()
        ));
    }

    Value::Error(format!(
        "UNKNOWN-OPERATOR: {} {operator} {}",
        left.type_name(),
        right.type_name()
    ))
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Value {
    match operator {
        "+" => Value::Integer(left.wrapping_add(right)),
        "-" => Value::Integer(left.wrapping_sub(right)),
        "*" => Value::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Value::Error("DIVISION BY ZERO".to_string())
            } else {
                Value::Integer(left.wrapping_div(right))
            }
        }
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::Error(format!("UNKNOWN-OPERATOR: INTEGER {operator} INTEGER")),
    }
}

fn eval_if_expression(expr: &IfExpression, env: &Env) -> Value {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition == Value::Boolean(true) {
        eval_block(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}

fn eval_while_expression(expr: &WhileExpression, env: &Env) -> Value {
    let mut result = Value::Null;

    loop {
        let condition = eval_expression(&expr.condition, env);
        if condition.is_error() {
            return condition;
        }
        if condition != Value::Boolean(true) {
            break;
        }

        result = eval_block(&expr.body, env);
        if result.is_error() {
            return result;
        }
    }

    result
}

fn eval_function_literal(expr: &FunctionLiteral, env: &Env) -> Value {
    Value::Function(Rc::new(FunctionValue {
        params: expr.params.clone(),
        body: expr.body.clone(),
        captured_env: env.clone(),
    }))
}

fn eval_call_expression(expr: &CallExpression, env: &Env) -> Value {
    let function = eval_expression(&expr.function, env);
    if function.is_error() {
        return function;
    }

    let args = match eval_expression_list(&expr.args, env) {
        Ok(args) => args,
        Err(error) => return error,
    };

    apply_function(&function, &args)
}

fn apply_function(function: &Value, args: &[Value]) -> Value {
    match function {
        Value::Function(func) => {
            if func.params.len() != args.len() {
                return Value::Error(format!(
                    "WRONG NUMBER OF ARGUMENTS. expected={}. got={}",
                    func.params.len(),
                    args.len()
                ));
            }

            let call_env = Environment::enclosed(func.captured_env.clone());
            for (param, arg) in func.params.iter().zip(args) {
                call_env.borrow_mut().set(param.name.clone(), arg.clone());
            }

            match eval_block(&func.body, &call_env) {
                Value::Return(inner) => *inner,
                other => other,
            }
        }
        Value::Builtin(builtin) => (builtin.func)(args),
        other => Value::Error(format!("UNKNOWN-FUNCTION: {}", other.type_name())),
    }
}

/// Evaluates `exprs` left-to-right; if any yields an error, the result
/// collapses to just that error (`spec.md` §4.3 "the result list
/// collapses to just that error").
fn eval_expression_list(exprs: &[Expression], env: &Env) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_index_expression(expr: &IndexExpression, env: &Env) -> Value {
    let left = eval_expression(&expr.left, env);
    if left.is_error() {
        return left;
    }
    let index = eval_expression(&expr.index, env);
    if index.is_error() {
        return index;
    }

    match &left {
        Value::Array(elements) => match index {
            Value::Integer(i) => {
                if i < 0 || i as usize >= elements.len() {
                    Value::Error(format!(
                        "INDEX OUT OF BOUNDS. index={i}. length={}",
                        elements.len()
                    ))
                } else {
                    elements[i as usize].clone()
                }
            }
            other => Value::Error(format!(
                "INVALID INDEX. expected=INTEGER. got={}",
                other.type_name()
            )),
        },
        Value::Hash(pairs) => match index.hash_key() {
            Some(key) => pairs
                .get(&key)
                .map(|(_, value)| value.clone())
                .unwrap_or(Value::Null),
            None => Value::Error(format!(
                "HASHMAP KEY IS INCORRECT TYPE. got={}",
                index.type_name()
            )),
        },
        other => Value::Error(format!("ATTEMPTED INDEXING INVALID TYPE {}", other.type_name())),
    }
}

fn eval_hash_literal(expr: &HashLiteral, env: &Env) -> Value {
    let mut pairs = HashMap::with_capacity(expr.pairs.len());

    for (key_expr, value_expr) in &expr.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }

        let hash_key = match key.hash_key() {
            Some(hash_key) => hash_key,
            None => {
                return Value::Error(format!(
                    "HASHMAP KEY IS INCORRECT TYPE. got={}",
                    key.type_name()
                ))
            }
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(hash_key, (key, value));
    }

    Value::Hash(Rc::new(pairs))
}
