use super::errors::{RuntimeError, RuntimeResult};
use super::value::Value;
use std::collections::HashMap;

/// Flat global variable table. There are no nested scopes.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
        }
    }

    /// Add or replace current definition.
    pub fn define(&mut self, name: String, value: Value) {
        self.values.insert(name, value);
    }

    /// Get variable value.
    pub fn get(&self, name: &str) -> RuntimeResult<Value> {
        match self.values.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError::UndefinedVariable(name.to_owned())),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
