use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Serialize to deterministic bincode bytes. Encoding the same value twice
/// yields byte-identical output, which the codec and collator rely on.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CoreError> {
    bincode::serialize(value).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Deserialize from bincode bytes. A framing failure is a malformed
/// encoding, never a default value.
pub fn from_bytes<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, CoreError> {
    bincode::deserialize(bytes).map_err(|e| CoreError::MalformedEncoding(e.to_string()))
}

/// Serialize to pretty JSON string (for CLI inspection output)
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string_pretty(value).map_err(|e| CoreError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestStruct {
        field1: u64,
        field2: String,
    }

    #[test]
    fn test_bincode_roundtrip() {
        let original = TestStruct {
            field1: 42,
            field2: "hello".to_string(),
        };

        let bytes = to_bytes(&original).unwrap();
        let recovered: TestStruct = from_bytes(&bytes).unwrap();
        assert_eq!(original, recovered);
    }

    #[test]
    fn test_deterministic_serialization() {
        let value = TestStruct {
            field1: 100,
            field2: "test".to_string(),
        };

        let bytes1 = to_bytes(&value).unwrap();
        let bytes2 = to_bytes(&value).unwrap();
        assert_eq!(bytes1, bytes2);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let value = TestStruct {
            field1: 7,
            field2: "truncate me".to_string(),
        };

        let bytes = to_bytes(&value).unwrap();
        let result: Result<TestStruct, _> = from_bytes(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(CoreError::MalformedEncoding(_))));
    }
}
