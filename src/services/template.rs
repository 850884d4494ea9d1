//! The static index template and its placeholder substitution.
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::services::{ServiceError, ServiceResult};

/// The template document, loaded once at startup.
///
/// A missing template file is not a startup failure: the state is kept and
/// every request answers 404, so other endpoints on the same process stay
/// usable.
#[derive(Clone, Debug)]
pub enum IndexTemplate {
    Ready(String),
    Missing,
}

impl IndexTemplate {
    /// Read the template at `path` fully into memory. Absent file →
    /// `Missing`; any other read failure is fatal.
    pub fn load(path: &Path) -> ServiceResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Self::Ready(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::Missing),
            Err(err) => Err(ServiceError::TemplateRead(err)),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Render the template against `vars`, or `None` when the template is
    /// missing.
    pub fn render(&self, vars: &HashMap<String, String>) -> Option<String> {
        match self {
            Self::Ready(content) => Some(substitute(content, vars)),
            Self::Missing => None,
        }
    }
}

/// Replace `${key}` placeholders in `input` with values from `vars`.
///
/// Placeholders whose key is not in `vars` are left as-is, as is any
/// malformed `${` without a closing brace.
fn substitute(input: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut key = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                key.push(c);
            }
            if closed {
                match vars.get(&key) {
                    Some(value) => result.push_str(value),
                    None => {
                        // Leave unresolved placeholder as-is.
                        result.push_str("${");
                        result.push_str(&key);
                        result.push('}');
                    }
                }
            } else {
                result.push_str("${");
                result.push_str(&key);
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn vars(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_known_keys() {
        let rendered = substitute(
            "Hello ${name}, at ${contextPath}",
            &vars(&[("name", "Demo"), ("contextPath", "/svc")]),
        );

        assert_eq!(rendered, "Hello Demo, at /svc");
    }

    #[test]
    fn unknown_placeholder_passes_through() {
        let rendered = substitute("before ${undeclared} after", &vars(&[]));

        assert_eq!(rendered, "before ${undeclared} after");
    }

    #[test]
    fn plain_text_is_untouched() {
        let rendered = substitute("no placeholders, just $10 {braces}", &vars(&[]));

        assert_eq!(rendered, "no placeholders, just $10 {braces}");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let rendered = substitute("broken ${name", &vars(&[("name", "Demo")]));

        assert_eq!(rendered, "broken ${name");
    }

    #[test]
    fn repeated_placeholder_replaced_everywhere() {
        let rendered = substitute("${v} and ${v}", &vars(&[("v", "1")]));

        assert_eq!(rendered, "1 and 1");
    }

    #[test]
    fn load_missing_file_defers_to_request_time() {
        let dir = tempdir().unwrap();

        let template = IndexTemplate::load(&dir.path().join("index.html")).unwrap();
        assert!(template.is_missing());
        assert_eq!(template.render(&vars(&[])), None);
    }

    #[test]
    fn load_existing_file_renders() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "v=${version}").unwrap();

        let template = IndexTemplate::load(&path).unwrap();
        assert_eq!(
            template.render(&vars(&[("version", "1.4")])).as_deref(),
            Some("v=1.4")
        );
    }

    #[test]
    fn load_unreadable_path_is_fatal() {
        let dir = tempdir().unwrap();

        // A directory exists but cannot be read as a file.
        let err = IndexTemplate::load(dir.path()).unwrap_err();
        assert!(matches!(err, ServiceError::TemplateRead(_)));
    }
}
