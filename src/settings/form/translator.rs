//! Seam for localizing the texts the form shows.

use serde_json::Value;

/// Shown while a save is in flight.
pub const PROCESSING: &str = "Processing...";
/// Shown after a successful save.
pub const SAVE_SUCCEEDED: &str = "Successfully saved settings";
/// Wraps a translated API error; `{{error}}` receives the translated error key.
pub const API_ERROR: &str = "API Error: {{error}}";

/// Resolves a message key and its interpolation data into display text.
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, data: &Value) -> String;
}

/// Uses the key itself as the text, substituting `{{name}}` placeholders with
/// the matching string, number or boolean in `data`. Placeholders without a
/// usable value are left as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn translate(&self, key: &str, data: &Value) -> String {
        interpolate(key, data)
    }
}

fn interpolate(template: &str, data: &Value) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + len;
        let name = rest[start + 2..end].trim();

        output.push_str(&rest[..start]);
        match data.get(name) {
            Some(Value::String(s)) => output.push_str(s),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => {
                output.push_str(&value.to_string())
            }
            _ => output.push_str(&rest[start..end + 2]),
        }
        rest = &rest[end + 2..];
    }

    output.push_str(rest);
    output
}
