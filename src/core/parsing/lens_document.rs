use serde_json::Value;

use crate::core::models::LensOcrError;

/// Untyped view over the `data` array of a Lens result page.
///
/// Nothing about the overall shape is assumed. Callers ask for the exact
/// index path they need and get `UnrecognizedFormat` when it is not there.
#[derive(Debug, Clone)]
pub struct LensDocument {
    root: Value,
}

impl LensDocument {
    /// Decodes the object literal passed to `AF_initDataCallback` and keeps
    /// its `data` member. Key order and sibling keys do not matter.
    pub fn from_callback_object(object_literal: &str) -> Result<Self, LensOcrError> {
        let callback: Value = serde_json5::from_str(object_literal).map_err(|error| {
            LensOcrError::UnrecognizedFormat(format!("callback object is not valid JSON5: {}", error))
        })?;

        let data = match callback {
            Value::Object(mut members) => members.remove("data"),
            _ => None,
        }
        .ok_or_else(|| {
            LensOcrError::UnrecognizedFormat("callback object has no data member".to_string())
        })?;

        Self::from_value(data)
    }

    pub fn from_value(root: Value) -> Result<Self, LensOcrError> {
        if !root.is_array() {
            return Err(LensOcrError::UnrecognizedFormat(
                "data payload is not an array".to_string(),
            ));
        }

        Ok(Self { root })
    }

    pub fn node(&self, path: &[usize]) -> Result<&Value, LensOcrError> {
        let mut current = &self.root;
        for (depth, index) in path.iter().enumerate() {
            current = current.get(*index).ok_or_else(|| {
                LensOcrError::UnrecognizedFormat(format!(
                    "no node at {}",
                    Self::format_path(&path[..=depth])
                ))
            })?;
        }
        Ok(current)
    }

    pub fn array(&self, path: &[usize]) -> Result<&Vec<Value>, LensOcrError> {
        self.node(path)?.as_array().ok_or_else(|| {
            LensOcrError::UnrecognizedFormat(format!(
                "node at {} is not an array",
                Self::format_path(path)
            ))
        })
    }

    fn format_path(path: &[usize]) -> String {
        path.iter().map(|index| format!("/{}", index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_walks_nested_arrays() {
        let document = LensDocument::from_value(json!([0, [1, [2, "deep"]]])).unwrap();

        assert_eq!(document.node(&[1, 1, 1]).unwrap(), "deep");
        assert_eq!(document.node(&[]).unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_node_reports_first_missing_segment() {
        let document = LensDocument::from_value(json!([0, [1]])).unwrap();

        let error = document.node(&[1, 5, 0]).unwrap_err();

        assert_eq!(
            error.to_string(),
            "unrecognized Google Lens response: no node at /1/5"
        );
    }

    #[test]
    fn test_node_does_not_index_into_strings_or_null() {
        let document = LensDocument::from_value(json!(["text", null])).unwrap();

        assert!(document.node(&[0, 0]).is_err());
        assert!(document.node(&[1, 0]).is_err());
    }

    #[test]
    fn test_array_rejects_scalar_nodes() {
        let document = LensDocument::from_value(json!([[1], "x"])).unwrap();

        assert!(document.array(&[0]).is_ok());
        assert!(matches!(
            document.array(&[1]),
            Err(LensOcrError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_from_value_rejects_non_arrays() {
        assert!(LensDocument::from_value(json!({"a": 1})).is_err());
        assert!(LensDocument::from_value(json!("text")).is_err());
    }

    #[test]
    fn test_from_callback_object_reads_unquoted_keys_in_any_order() {
        let literal = "{sideChannel: {}, key: 'ds:1', data:[null, [\"x\"]], hash: '2'}";

        let document = LensDocument::from_callback_object(literal).unwrap();

        assert_eq!(document.node(&[1, 0]).unwrap(), "x");
    }

    #[test]
    fn test_from_callback_object_without_data_is_unrecognized() {
        let result = LensDocument::from_callback_object("{key: 'ds:1', hash: '2', sideChannel: {}}");

        match result {
            Err(LensOcrError::UnrecognizedFormat(message)) => {
                assert!(message.contains("no data member"), "unexpected message: {}", message)
            }
            other => panic!("Expected UnrecognizedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_from_callback_object_rejects_malformed_literal() {
        assert!(matches!(
            LensDocument::from_callback_object("{key: 'ds:1', data:[1, 2"),
            Err(LensOcrError::UnrecognizedFormat(_))
        ));
        assert!(matches!(
            LensDocument::from_callback_object("[1, 2]"),
            Err(LensOcrError::UnrecognizedFormat(_))
        ));
    }
}
