//! JSONPath-like field paths
//!
//! Diagnostics name the offending field with paths like:
//! - `$` - Root value
//! - `$.field` - Root field
//! - `$.object.field` - Nested field
//! - `$.array[0]` - Array element
//! - `$.array[0].field` - Array element field

use std::fmt;

/// Builder for diagnostic field paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    rendered: String,
}

impl FieldPath {
    /// Path of the root value (`$`)
    pub fn root() -> Self {
        Self {
            rendered: "$".to_string(),
        }
    }

    /// Path of a named child
    pub fn field(&self, name: &str) -> Self {
        Self {
            rendered: format!("{}.{}", self.rendered, name),
        }
    }

    /// Path of an array element
    pub fn index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{}]", self.rendered, index),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.rendered
    }
}

/// Resolve a field path against raw input
///
/// Returns `None` when the path is malformed or does not exist in `data`.
pub fn resolve_path<'a>(
    path: &str,
    data: &'a serde_json::Value,
) -> Option<&'a serde_json::Value> {
    if path == "$" {
        return Some(data);
    }

    let path = path.strip_prefix("$.")?;
    let mut current = data;

    for segment in path.split('.') {
        // Check for array index
        if let Some(bracket_pos) = segment.find('[') {
            let field = &segment[..bracket_pos];
            let index_str = segment[bracket_pos + 1..].strip_suffix(']')?;
            let index: usize = index_str.parse().ok()?;

            if !field.is_empty() {
                current = current.get(field)?;
            }
            current = current.get(index)?;
        } else {
            current = current.get(segment)?;
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_paths() {
        let root = FieldPath::root();
        assert_eq!(root.to_string(), "$");
        assert_eq!(root.field("contact").field("email").as_str(), "$.contact.email");
        assert_eq!(
            root.field("experience").index(2).field("title").as_str(),
            "$.experience[2].title"
        );
        assert_eq!(root.field("skills").index(0).as_str(), "$.skills[0]");
    }

    #[test]
    fn test_resolve_root() {
        let data = json!({ "name": "Jane" });
        assert_eq!(resolve_path("$", &data), Some(&data));
    }

    #[test]
    fn test_resolve_nested_field() {
        let data = json!({
            "contact": {
                "email": "jane@example.com"
            }
        });
        assert_eq!(
            resolve_path("$.contact.email", &data),
            Some(&json!("jane@example.com"))
        );
    }

    #[test]
    fn test_resolve_array_object() {
        let data = json!({
            "experience": [
                { "title": "Engineer" },
                { "title": "Lead" }
            ]
        });
        assert_eq!(
            resolve_path("$.experience[1].title", &data),
            Some(&json!("Lead"))
        );
    }

    #[test]
    fn test_resolve_missing_or_malformed() {
        let data = json!({ "skills": ["Rust"] });
        assert_eq!(resolve_path("$.missing", &data), None);
        assert_eq!(resolve_path("$.skills[5]", &data), None);
        assert_eq!(resolve_path("$.skills[x]", &data), None);
        assert_eq!(resolve_path("skills", &data), None);
    }

    #[test]
    fn test_built_path_resolves() {
        let data = json!({ "education": [{ "school": "MIT" }] });
        let path = FieldPath::root().field("education").index(0).field("school");
        assert_eq!(resolve_path(path.as_str(), &data), Some(&json!("MIT")));
    }
}
