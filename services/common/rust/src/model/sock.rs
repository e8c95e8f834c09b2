use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestMethod {
    Post,
    Get,
    Put,
    Delete,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            Self::Post => "POST",
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// Request envelope published to a manager's queue. The payload is kept
/// as raw JSON bytes, it is embedded as-is in the serialised envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub uri: String,
    pub method: RequestMethod,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub publisher: String,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "raw_payload")]
    pub data: Vec<u8>,
}

/// Reply envelope from a manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    #[serde(default)]
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "raw_payload")]
    pub data: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

mod raw_payload {
    use serde::ser::Error as SerError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    pub(super) fn serialize<S>(value: &[u8], ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = std::str::from_utf8(value).map_err(S::Error::custom)?;
        let raw = RawValue::from_string(s.to_string()).map_err(S::Error::custom)?;
        raw.serialize(ser)
    }

    pub(super) fn deserialize<'de, D>(raw: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` payload is treated the same as absent payload
        let v = Option::<Box<RawValue>>::deserialize(raw)?;
        Ok(v.map(|r| r.get().as_bytes().to_vec()).unwrap_or_default())
    }
}
