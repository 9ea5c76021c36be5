//! Runtime values: the closed sum every expression evaluates to.
//!
//! `Array`, `Hash` and `Function` are wrapped in `Rc` so that cloning a
//! `Value` (which the evaluator does constantly — every environment
//! lookup returns an owned copy) is cheap, and so that the `==`/`!=`
//! "identity equality of the value references" fallback in
//! `spec.md` §4.3 has something concrete to compare: two arrays built
//! from separate literals are never `==`-equal even with identical
//! elements, exactly as the original Go implementation's pointer
//! comparison behaves.

mod hash_key;

pub use hash_key::HashKey;

use crate::ast::{BlockStatement, Identifier};
use crate::environment::Environment;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

/// A closure: parameters, body, and the environment captured at the
/// point the `func(...) {...}` literal was evaluated.
#[derive(Debug, PartialEq)]
pub struct FunctionValue {
    pub params: Vec<Identifier>,
    pub body: BlockStatement,
    pub captured_env: Rc<RefCell<Environment>>,
}

/// A native function exposed under a fixed name (`len`, `append`, …).
/// Equality is by name, which is also how `Display` identifies it —
/// matching the original `Inspect() string { return "builtin function" }`
/// (no name in the inspected form, only in diagnostics).
#[derive(Clone, Copy, PartialEq)]
pub struct Builtin {
    pub name: &'static str,
    pub func: fn(&[Value]) -> Value,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
    Null,
    /// Internal unwind marker. Never produced by any user-visible
    /// construct; stripped at function boundaries and at the program
    /// root (`spec.md` §3, §4.3).
    Return(Box<Value>),
    Error(String),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashMap<HashKey, (Value, Value)>>),
}

impl Value {
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Value::String(value.into())
    }

    /// The uppercase type tag used in error messages (`spec.md` §6).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "STRING",
            Value::Null => "NULL",
            Value::Return(_) => "RETURN",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Value::Return(_))
    }

    /// The hash key for this value, or `None` if the value isn't
    /// hashable (anything but integer/boolean/string).
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Value::Integer(n) => Some(HashKey::integer(*n)),
            Value::Boolean(b) => Some(HashKey::boolean(*b)),
            Value::String(s) => Some(HashKey::string(s)),
            _ => None,
        }
    }

    /// `==`/`!=` fallback for any pair that isn't two integers: value
    /// equality for the canonical `Boolean`/`Null` variants, pointer
    /// identity for everything else (`spec.md` §4.3, §9).
    pub fn identity_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Null => write!(f, "null"),
            Value::Return(inner) => write!(f, "{inner}"),
            Value::Error(message) => write!(f, "Exception: {message}"),
            Value::Function(func) => {
                let params: Vec<String> = func.params.iter().map(|p| p.name.clone()).collect();
                write!(f, "func({}) {{\n{}\n}}", params.join(", "), func.body)
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Array(elements) => {
                let rendered: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Value::Hash(pairs) => {
                let rendered: Vec<String> = pairs
                    .values()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_display_is_decimal() {
        assert_eq!(Value::Integer(42).to_string(), "42");
    }

    #[test]
    fn null_displays_as_null() {
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[test]
    fn error_display_has_exception_prefix() {
        assert_eq!(
            Value::Error("boom".to_string()).to_string(),
            "Exception: boom"
        );
    }

    #[test]
    fn array_display_joins_elements() {
        let arr = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
        assert_eq!(arr.to_string(), "[1, 2]");
    }

    #[test]
    fn distinct_strings_are_not_identity_equal() {
        let a = Value::string("hi");
        let b = Value::string("hi");
        assert!(!a.identity_eq(&b));
        assert!(a.identity_eq(&a.clone()));
    }

    #[test]
    fn booleans_and_null_compare_by_value() {
        assert!(Value::Boolean(true).identity_eq(&Value::Boolean(true)));
        assert!(!Value::Boolean(true).identity_eq(&Value::Boolean(false)));
        assert!(Value::Null.identity_eq(&Value::Null));
    }
}
