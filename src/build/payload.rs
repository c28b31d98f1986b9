use serde_json::Value;
use tracing::warn;

use crate::template::{Binding, first_placeholder};

/// Returns a copy of `payload` with placeholder fields replaced from
/// `binding`.
///
/// A string field containing a placeholder is replaced wholesale by the bound
/// value of the first placeholder it names; any literal text around the
/// placeholder is dropped and the bound value keeps its JSON type. Objects are
/// walked recursively. Arrays are not walked and keep their contents.
#[must_use]
pub fn substitute_payload(payload: &Value, binding: &Binding) -> Value {
    let mut resolved = payload.clone();
    resolve_field(&mut resolved, binding, "body");
    resolved
}

fn resolve_field(field: &mut Value, binding: &Binding, path: &str) {
    match field {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                resolve_field(child, binding, &format!("{}.{}", path, key));
            }
        }
        Value::Array(_) => {
            warn!(
                "Payload field '{}' is an array; placeholders inside arrays are not substituted.",
                path
            );
        }
        Value::String(text) => {
            let lookup =
                first_placeholder(text).map(|name| (name.to_owned(), binding.get(name).cloned()));
            match lookup {
                Some((_, Some(replacement))) => *field = replacement,
                Some((name, None)) => {
                    warn!(
                        "Payload field '{}' references unbound variable '{}'; leaving it unchanged.",
                        path, name
                    );
                }
                None => {}
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
