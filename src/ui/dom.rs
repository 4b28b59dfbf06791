//! Ordered, duplicate-free class lists.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names(names: &[&str]) -> Self {
        let mut list = Self::new();
        for name in names {
            list.add(name);
        }
        list
    }

    /// Add a class. Blank names and classes already present are ignored.
    pub fn add(&mut self, name: &str) {
        let name = name.trim();
        if !name.is_empty() && !self.contains(name) {
            self.0.push(name.to_string());
        }
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|c| c != name);
    }

    pub fn remove_all(&mut self, names: &[&str]) {
        self.0.retain(|c| !names.contains(&c.as_str()));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }

    /// Set or clear a class depending on `on`.
    pub fn set(&mut self, name: &str, on: bool) {
        if on {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many of `names` are present.
    pub fn count_of(&self, names: &[&str]) -> usize {
        self.iter().filter(|c| names.contains(c)).count()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut list = ClassList::from_names(&["note-card"]);
        list.add("active");
        list.add("active");
        list.add("  ");
        assert_eq!(list.to_string(), "note-card active");
    }

    #[test]
    fn test_remove_all_and_count() {
        let mut list = ClassList::from_names(&["a", "b", "c"]);
        assert_eq!(list.count_of(&["a", "c", "z"]), 2);
        list.remove_all(&["a", "c"]);
        assert_eq!(list.to_string(), "b");
        list.set("b", false);
        assert!(list.is_empty());
    }
}
