//! Variable environment for one interpreter session.
//!
//! A single flat namespace: the language has no scoping levels, so the last
//! binding for a name always wins.

use krill_parser::Literal;
use std::collections::HashMap;

/// Variable name to last-bound value mapping
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Literal>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name, replacing any previous binding
    pub fn define(&mut self, name: String, value: Literal) {
        self.variables.insert(name, value);
    }

    /// Look up a bound value by name
    pub fn get(&self, name: &str) -> Option<&Literal> {
        self.variables.get(name)
    }

    /// Check whether a name is bound
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// All bound names, sorted (for REPL listings)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Drop every binding
    pub fn clear(&mut self) {
        self.variables.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_get() {
        let mut env = Environment::new();

        env.define("x".to_string(), Literal::number("42"));
        assert_eq!(env.get("x"), Some(&Literal::number("42")));

        // Rebinding replaces the previous value
        env.define("x".to_string(), Literal::string("hello"));
        assert_eq!(env.get("x"), Some(&Literal::string("hello")));

        assert_eq!(env.get("nonexistent"), None);
    }

    #[test]
    fn test_exists() {
        let mut env = Environment::new();

        assert!(!env.exists("x"));
        env.define("x".to_string(), Literal::number("1"));
        assert!(env.exists("x"));
    }

    #[test]
    fn test_names_are_sorted() {
        let mut env = Environment::new();

        env.define("b".to_string(), Literal::number("2"));
        env.define("a".to_string(), Literal::number("1"));
        env.define("c".to_string(), Literal::number("3"));

        assert_eq!(env.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clear() {
        let mut env = Environment::new();

        env.define("x".to_string(), Literal::number("1"));
        env.define("y".to_string(), Literal::number("2"));
        assert_eq!(env.len(), 2);

        env.clear();
        assert!(env.is_empty());
        assert!(!env.exists("x"));
    }
}
