//! Placeholder expansion for configuration strings.
//!
//! Configuration values may reference environment variables as `{$NAME}` and,
//! for terminal templates, named values such as `{title}`. Literal braces are
//! written `{{` and `}}`.

use std::collections::HashMap;

use crate::errors::ConfigError;

/// Expand `{name}` placeholders from `values` and `{$NAME}` from the process
/// environment.
pub fn expand(template: &str, values: &HashMap<&str, String>) -> Result<String, ConfigError> {
    expand_with_env(template, values, |name| std::env::var(name).ok())
}

/// Same as [`expand`] with an explicit environment lookup.
pub fn expand_with_env<F>(
    template: &str,
    values: &HashMap<&str, String>,
    env: F,
) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let invalid = |message: String| ConfigError::InvalidTemplate {
        template: template.to_string(),
        message,
    };

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(k) => key.push(k),
                        None => return Err(invalid("unterminated placeholder".to_string())),
                    }
                }

                if let Some(var) = key.strip_prefix('$') {
                    let value = env(var).ok_or_else(|| {
                        invalid(format!("environment variable '{}' is not set", var))
                    })?;
                    result.push_str(&value);
                } else {
                    let value = values
                        .get(key.as_str())
                        .ok_or_else(|| invalid(format!("unknown placeholder '{{{}}}'", key)))?;
                    result.push_str(value);
                }
            }
            '}' => return Err(invalid("unmatched '}'".to_string())),
            _ => result.push(c),
        }
    }

    Ok(result)
}
