use std::collections::HashMap;

#[derive(Clone, Copy)]
pub enum Operator {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl Operator {
    pub fn arity(&self) -> usize {
        match *self {
            Operator::Unary(_) => 1,
            Operator::Binary(_) => 2,
        }
    }
}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Operator::Unary(_) => write!(f, "Unary"),
            Operator::Binary(_) => write!(f, "Binary"),
        }
    }
}

/// Operators known to the tokenizer and the evaluator, keyed by symbol.
/// Unary and binary operators share one namespace.
#[derive(Clone, Debug)]
pub struct Registry {
    ops: HashMap<String, Operator>,
    // multi-char unary names, longest first
    words: Vec<String>,
}

impl Registry {
    pub fn empty() -> Self {
        Registry {
            ops: HashMap::new(),
            words: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        let mut reg = Self::empty();
        reg.insert("+", Operator::Binary(|l, r| l + r));
        reg.insert("-", Operator::Binary(|l, r| l - r));
        reg.insert("*", Operator::Binary(|l, r| l * r));
        reg.insert("/", Operator::Binary(|l, r| l / r));
        reg.insert("sin", Operator::Unary(f64::sin));
        reg.insert("cos", Operator::Unary(f64::cos));
        reg.insert("tan", Operator::Unary(f64::tan));
        // '^' is square root, not exponentiation
        reg.insert("^", Operator::Unary(f64::sqrt));
        reg
    }

    /// Register `name`, replacing whatever was bound to it before.
    pub fn insert(&mut self, name: &str, op: Operator) -> Option<Operator> {
        let prev = self.ops.insert(name.to_string(), op);
        self.words = self
            .ops
            .iter()
            .filter(|(name, op)| op.arity() == 1 && name.chars().count() > 1)
            .map(|(name, _)| name.clone())
            .collect();
        self.words
            .sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        prev
    }

    pub fn lookup(&self, name: &str) -> Option<&Operator> {
        self.ops.get(name)
    }

    pub fn is_unary(&self, name: &str) -> bool {
        matches!(self.lookup(name), Some(Operator::Unary(_)))
    }

    pub fn is_binary(&self, name: &str) -> bool {
        matches!(self.lookup(name), Some(Operator::Binary(_)))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::{Operator, Registry};

    #[test]
    fn standard_vocabulary() {
        let reg = Registry::standard();
        for op in ["+", "-", "*", "/"] {
            assert!(reg.is_binary(op), "{} should be binary", op);
        }
        for op in ["sin", "cos", "tan", "^"] {
            assert!(reg.is_unary(op), "{} should be unary", op);
        }
        assert!(reg.lookup("%").is_none());
        assert!(reg.lookup("sqrt").is_none());
    }

    #[test]
    fn caret_is_square_root() {
        match Registry::standard().lookup("^") {
            Some(Operator::Unary(f)) => assert_eq!(f(16.0), 4.0),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn words_longest_first() {
        let mut reg = Registry::standard();
        reg.insert("sinh", Operator::Unary(f64::sinh));
        assert_eq!(reg.words(), &["sinh", "cos", "sin", "tan"]);
    }

    #[test]
    fn insert_replaces_across_arity() {
        let mut reg = Registry::standard();
        let prev = reg.insert("sin", Operator::Binary(|l, r| l.atan2(r)));
        assert!(matches!(prev, Some(Operator::Unary(_))));
        assert!(reg.is_binary("sin"));
        assert!(!reg.is_unary("sin"));
        assert!(!reg.words().contains(&"sin".to_string()));
    }
}
