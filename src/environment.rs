use std::collections::HashMap;

/// Variable bindings for one run of a program.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    /// A copy of the variable's value, or the empty string if it was never set.
    pub fn get(&self, name: &str) -> String {
        self.store.get(name).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, val: String) {
        self.store.insert(name.to_owned(), val);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
