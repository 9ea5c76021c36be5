//! `len`, `append`, `print`, `println` (`spec.md` §4.4), grounded in
//! `original_source/object/builtins/builtins.go` (which defines `len`
//! and `append`) plus `print`/`println`, which the distillation adds
//! for the REPL/file-mode CLI to have any visible side effect at all.

use crate::value::{Builtin, Value};
use std::io::Write;

pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "len",
        func: builtin_len,
    },
    Builtin {
        name: "append",
        func: builtin_append,
    },
    Builtin {
        name: "print",
        func: builtin_print,
    },
    Builtin {
        name: "println",
        func: builtin_println,
    },
];

pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name == name).copied()
}

fn wrong_arity(name: &str, expected: &str, got: usize) -> Value {
    Value::Error(format!(
        "WRONG NUMBER OF ARGUMENTS TO BUILT-IN FUNCTION `{name}`. expected={expected}. got={got}"
    ))
}

fn builtin_len(args: &[Value]) -> Value {
    if args.len() != 1 {
        return wrong_arity("len", "1", args.len());
    }

    match &args[0] {
        Value::String(s) => Value::Integer(s.len() as i64),
        other => Value::Error(format!(
            "ARGUMENT INVALID TYPE TO BUILT-IN FUNCTION `len`. got={}. expected=STRING",
            other.type_name()
        )),
    }
}

fn builtin_append(args: &[Value]) -> Value {
    if args.len() < 2 {
        return wrong_arity("append", "2", args.len());
    }

    match &args[0] {
        Value::Array(elements) => {
            let mut appended = (**elements).clone();
            appended.extend_from_slice(&args[1..]);
            Value::Array(std::rc::Rc::new(appended))
        }
        other => Value::Error(format!(
            "ARGUMENT INVALID TYPE TO BUILT-IN FUNCTION `append` (argument 0). expected=ARRAY. got={}",
            other.type_name()
        )),
    }
}

fn builtin_print(args: &[Value]) -> Value {
    let mut stdout = std::io::stdout();
    for arg in args {
        let _ = write!(stdout, "{arg}");
    }
    Value::Null
}

fn builtin_println(args: &[Value]) -> Value {
    let mut stdout = std::io::stdout();
    for arg in args {
        let _ = writeln!(stdout, "{arg}");
    }
    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn len_of_string_counts_bytes() {
        assert_eq!(builtin_len(&[Value::string("test")]), Value::Integer(4));
    }

    #[test]
    fn len_rejects_non_string() {
        let result = builtin_len(&[Value::Integer(1)]);
        assert_eq!(
            result,
            Value::Error(
                "ARGUMENT INVALID TYPE TO BUILT-IN FUNCTION `len`. got=INTEGER. expected=STRING"
                    .to_string()
            )
        );
    }

    #[test]
    fn len_rejects_wrong_arity() {
        let result = builtin_len(&[]);
        assert_eq!(
            result,
            Value::Error(
                "WRONG NUMBER OF ARGUMENTS TO BUILT-IN FUNCTION `len`. expected=1. got=0"
                    .to_string()
            )
        );
    }

    #[test]
    fn append_returns_new_array_with_elements_added() {
        let array = Value::Array(Rc::new(vec![Value::Integer(1)]));
        let result = builtin_append(&[array, Value::Integer(2), Value::Integer(3)]);
        assert_eq!(
            result,
            Value::Array(Rc::new(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3)
            ]))
        );
    }

    #[test]
    fn append_rejects_non_array_first_argument() {
        let result = builtin_append(&[Value::Integer(1), Value::Integer(2)]);
        assert!(result.is_error());
    }

    #[test]
    fn lookup_finds_registered_builtins_by_name() {
        assert!(lookup("len").is_some());
        assert!(lookup("nonexistent").is_none());
    }
}
