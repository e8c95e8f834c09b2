pub mod adapter;
pub mod confidentiality;
pub mod config;
pub mod constant;
pub mod error;
pub mod logging;
pub mod model;

use std::sync::Arc;

pub(crate) type AppLogAlias = Arc<String>;

pub mod util {
    use std::result::Result;

    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use uuid::Uuid;

    // timestamps produced by the managers are either RFC3339 or one of
    // the layouts without timezone below, the latter are taken as UTC
    const NAIVE_TIME_FMTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
            return Ok(t.to_utc());
        }
        let mut last_err = None;
        for fmt in NAIVE_TIME_FMTS {
            match NaiveDateTime::parse_from_str(raw, fmt) {
                Ok(t) => return Ok(t.and_utc()),
                Err(e) => last_err = Some(e),
            }
        }
        let reason = last_err.map(|e| e.to_string()).unwrap_or_default();
        Err(format!("timestamp: {raw}, reason: {reason}"))
    }

    /// decode `null` as the default value of the field, e.g. an absent
    /// list is sent as `null` by some managers
    pub fn null_as_default<'de, D, T>(raw: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        let v = Option::<T>::deserialize(raw)?;
        Ok(v.unwrap_or_default())
    }

    pub fn format_timestamp(t: &DateTime<Utc>) -> String {
        t.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    /// serde helpers for optional timestamp fields, empty string and `null`
    /// are both treated as absent
    pub mod opt_timestamp {
        use super::*;

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, ser: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(t) => ser.serialize_str(format_timestamp(t).as_str()),
                None => ser.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(raw: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = Option::<String>::deserialize(raw)?;
            match s.as_deref() {
                None | Some("") => Ok(None),
                Some(v) => parse_timestamp(v)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }

    /// serde helpers for identifier fields, empty string and `null` are
    /// both decoded to the nil identifier
    pub mod nil_uuid {
        use super::*;

        pub fn serialize<S>(value: &Uuid, ser: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            value.serialize(ser)
        }

        pub fn deserialize<'de, D>(raw: D) -> Result<Uuid, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = Option::<String>::deserialize(raw)?;
            match s.as_deref() {
                None | Some("") => Ok(Uuid::nil()),
                Some(v) => Uuid::parse_str(v).map_err(serde::de::Error::custom),
            }
        }
    }
}
