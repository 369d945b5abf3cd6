use std::collections::HashMap;

/// Parameters for a single operation, keyed by name.
///
/// The bag is opaque to the dispatch core; each resolved command interprets
/// the entries it cares about (revision, message, tag name, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandParameters {
    values: HashMap<String, String>,
}

impl CommandParameters {
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut parameters = CommandParameters::default();
        assert!(parameters.is_empty());

        parameters.set("message", "import");

        assert_eq!(parameters.get("message"), Some("import"));
        assert_eq!(parameters.get("revision"), None);
        assert_eq!(parameters.get_or("revision", "HEAD"), "HEAD");
    }
}
