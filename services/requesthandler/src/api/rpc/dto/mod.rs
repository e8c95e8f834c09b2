pub mod agent;
pub mod ai;
pub mod asterisk;
pub mod billing;
pub mod call;
pub mod campaign;
pub mod chat;
pub mod conference;
pub mod customer;
pub mod flow;
pub mod number;
pub mod outdial;
pub mod queue;
pub mod registrar;
pub mod talk;

use std::collections::BTreeMap;

use serde::{Deserialize, Serializer};

/// reply of the balance validation
#[derive(Deserialize)]
pub(crate) struct ValidReplyDto {
    pub valid: bool,
}

/// number without fraction is serialised as integer, e.g. `20`
/// instead of `20.0`
pub(crate) fn compact_float<S: Serializer>(value: &f32, ser: S) -> Result<S::Ok, S::Error> {
    let v = *value;
    if v.fract() == 0.0 && v.abs() < (i64::MAX as f32) {
        ser.serialize_i64(v as i64)
    } else {
        ser.serialize_f32(v)
    }
}

pub(crate) fn is_empty_str(v: &&str) -> bool {
    v.is_empty()
}

pub(crate) fn is_empty_map<K, V>(v: &&BTreeMap<K, V>) -> bool {
    v.is_empty()
}
