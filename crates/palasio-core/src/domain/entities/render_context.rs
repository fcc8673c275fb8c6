//! Variable substitution context for parameterized templates.

use std::collections::BTreeMap;

use crate::domain::entities::project_spec::ProjectSpec;
use crate::domain::value_objects::ProjectName;

/// Context for template rendering.
///
/// A **Value Object** containing all data a render function may read.
/// Immutable after creation; `with_variable` consumes and returns a new one.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | "my-Awesome_app" | User input |
/// | `PROJECT_NAME_SNAKE` | "my_awesome_app" | Computed |
/// | `PROJECT_NAME_KEBAB` | "my-awesome-app" | Computed |
/// | `PROJECT_NAME_PASCAL` | "MyAwesomeApp" | Computed |
///
/// Nothing here reads the clock, the environment, or a random source, so the
/// same project name always renders byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,

    // Ordered so that substitution order never depends on hashing.
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Create a context for `name`, deriving the casing variants.
    pub fn new(name: &ProjectName) -> Self {
        let name = name.as_str().to_string();
        let mut vars = BTreeMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));

        Self {
            project_name: name,
            variables: vars,
        }
    }

    pub fn from_spec(spec: &ProjectSpec) -> Self {
        Self::new(spec.name())
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}` (no error)
    /// - `{{ padding: 0 }}` (JSX object literal) is untouched, only exact
    ///   `{{NAME}}` tokens are replaced
    /// - `{{{PROJECT_NAME}}}` keeps the outer braces, inner is replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into lowercase words.
///
/// Boundaries: `_`, `-` and whitespace; a lower-to-upper transition
/// (`myApp`); and the end of an acronym (`HTTPServer` splits before `S`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
