//! Minimal named-placeholder templating for the emitted scripts.
//!
//! Placeholders are written `{{name}}`. Substitution is a single linear
//! pass over the template text; unknown placeholders are left in place so
//! tests comparing full output catch a missing binding immediately.

use std::collections::BTreeMap;

/// A template with named placeholder bindings.
#[derive(Debug)]
pub struct Template<'a> {
    text: &'a str,
    vars: BTreeMap<&'static str, String>,
}

impl<'a> Template<'a> {
    /// Create a template over the given text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            vars: BTreeMap::new(),
        }
    }

    /// Bind a placeholder to a value.
    pub fn bind(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(name, value.into());
        self
    }

    /// Substitute all bound placeholders and return the result.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let name = &after[..end];
                    match self.vars.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(name);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    // Unterminated opener, kept verbatim
                    out.push_str("{{");
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_bound_placeholders() {
        let out = Template::new("SELECT {{cols}} FROM {{table}}")
            .bind("cols", "id, name")
            .bind("table", "user")
            .render();
        assert_eq!(out, "SELECT id, name FROM user");
    }

    #[test]
    fn test_repeated_placeholder() {
        let out = Template::new("{{t}} and {{t}}").bind("t", "x").render();
        assert_eq!(out, "x and x");
    }

    #[test]
    fn test_unknown_placeholder_left_in_place() {
        let out = Template::new("hello {{missing}}").render();
        assert_eq!(out, "hello {{missing}}");
    }

    #[test]
    fn test_unterminated_opener_kept_verbatim() {
        let out = Template::new("a {{b").render();
        assert_eq!(out, "a {{b");
    }

    #[test]
    fn test_empty_binding() {
        let out = Template::new("[{{x}}]").bind("x", "").render();
        assert_eq!(out, "[]");
    }
}
