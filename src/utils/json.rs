// Lectura tolerante de valores JSON del proveedor: el mismo campo puede
// llegar como número o como string según el endpoint.

use serde_json::Value;

pub fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Lista de strings; los elementos que no son string se descartan
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_strings_are_interchangeable() {
        assert_eq!(lenient_string(&json!(101)).as_deref(), Some("101"));
        assert_eq!(lenient_u64(&json!("24900")), Some(24900));
        assert_eq!(lenient_u64(&json!(249.4)), Some(249));
        assert_eq!(lenient_f64(&json!("3.7")), Some(3.7));
        assert_eq!(lenient_u64(&json!(-1)), None);
        assert_eq!(lenient_string(&Value::Null), None);
    }

    #[test]
    fn string_list_skips_non_strings() {
        assert_eq!(string_list(Some(&json!(["a", 1, "b"]))), vec!["a", "b"]);
        assert!(string_list(None).is_empty());
    }
}
