//! Lexically nested name → value maps (`spec.md` §3).
//!
//! A frame is a plain `HashMap` plus an optional link to its outer
//! frame, generalized from the teacher's `compiler::scope::Scope`
//! (a flat `Vec`-of-maps stack) into a parent-linked chain: a flat
//! stack can't outlive the function call that pushed it, but a closure
//! returned out of its defining scope must keep that scope alive for
//! as long as the closure itself lives. `Rc<RefCell<_>>` is the "plain
//! shared ownership relying on the host's cycle collector" option
//! `spec.md` §9 calls out — cycles between a function and a frame that
//! holds it are possible and accepted as a bounded, process-lifetime
//! leak.

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default, PartialEq)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A fresh frame enclosing `outer`, created on entering a function
    /// body (`spec.md` §3 "Lifecycle").
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Walks outward until a binding is found or the chain ends.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// `var x = e` always writes into the current frame, shadowing any
    /// outer binding; re-declaring `x` in the same frame overwrites the
    /// existing slot. There is no separate "assign to an enclosing
    /// binding" form (`spec.md` §3).
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outer_frames() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(5));

        let inner = Environment::enclosed(outer);
        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(5)));
    }

    #[test]
    fn inner_binding_shadows_outer() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));

        let inner = Environment::enclosed(outer.clone());
        inner.borrow_mut().set("x", Value::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
        assert_eq!(outer.borrow().get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn redeclaring_in_same_frame_overwrites() {
        let env = Environment::new();
        env.borrow_mut().set("x", Value::Integer(1));
        env.borrow_mut().set("x", Value::Integer(2));
        assert_eq!(env.borrow().get("x"), Some(Value::Integer(2)));
    }

    #[test]
    fn missing_binding_is_none() {
        let env = Environment::new();
        assert_eq!(env.borrow().get("missing"), None);
    }
}
