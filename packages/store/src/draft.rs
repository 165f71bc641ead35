//! Uncommitted form values for a resource panel.

/// Field name → current input string, in the order the form declares them.
///
/// Every field starts empty. Fields are independent of each other; the only
/// bulk operation is [`Draft::clear`], which a panel runs after a successful
/// create.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    fields: Vec<(&'static str, String)>,
}

impl Draft {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            fields: names.iter().map(|name| (*name, String::new())).collect(),
        }
    }

    /// Current value of `name`, or `""` for a field this draft does not have.
    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    /// Set `name` to `value`. Returns `false` if the draft has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.fields.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_start_empty_and_keep_order() {
        let draft = Draft::new(&["title", "date", "details"]);
        assert!(draft.is_blank());
        let names: Vec<_> = draft.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["title", "date", "details"]);
    }

    #[test]
    fn test_set_and_clear() {
        let mut draft = Draft::new(&["content", "author"]);
        assert!(draft.set("content", "merhaba"));
        assert!(draft.set("author", "A"));
        assert_eq!(draft.get("content"), "merhaba");
        assert!(!draft.is_blank());

        draft.clear();
        assert_eq!(draft.get("content"), "");
        assert_eq!(draft.get("author"), "");
        assert!(draft.is_blank());
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut draft = Draft::new(&["title"]);
        assert!(!draft.set("year", "1999"));
        assert_eq!(draft.get("year"), "");
        assert_eq!(draft.fields().count(), 1);
    }
}
