use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remote procedures exposed by the compute service, addressed as `Service.Method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    HashCompute,
    SortArray,
    MultiplyMatrix,
    ZlibCompress,
    ZlibDecompress,
}

impl Method {
    pub const ALL: [Self; 5] = [
        Method::HashCompute,
        Method::SortArray,
        Method::MultiplyMatrix,
        Method::ZlibCompress,
        Method::ZlibDecompress,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Method::HashCompute => "GetHash.HashCompute",
            Method::SortArray => "ArraySort.SortArray",
            Method::MultiplyMatrix => "MatrixMultiply.MultiplyMatrix",
            Method::ZlibCompress => "Zlib.ZlibCompress",
            Method::ZlibDecompress => "Zlib.ZlibDecompress",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }
}

/// Request envelope; `params` holds exactly one argument object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

/// Response envelope; exactly one of `result` and `error` is non-null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub id: u64,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl RpcResponse {
    #[must_use]
    pub const fn success(id: u64, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub const fn failure(id: u64, message: String) -> Self {
        Self {
            id,
            result: None,
            error: Some(message),
        }
    }
}

/// Byte fields travel as standard base64 strings; `null` reads as empty.
pub mod base64_bytes {
    use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&B64.encode(bytes))
    }

    /// # Errors
    ///
    /// Fails when the value is neither null nor valid base64.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => B64.decode(encoded).map_err(D::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
