use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, opt_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Active,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    // E.164, e.g. `+821021656521`
    pub number: String,
    #[serde(with = "nil_uuid")]
    pub call_flow_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub message_flow_id: Uuid,
    pub name: String,
    pub detail: String,
    pub provider_name: String,
    pub provider_reference_id: String,
    pub status: NumberStatusDto,
    pub t38_enabled: bool,
    pub emergency_enabled: bool,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_purchase: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_renew: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct NumberCreateReqDto<'a> {
    pub customer_id: Uuid,
    pub number: &'a str,
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Serialize)]
pub(crate) struct NumberUpdateReqDto<'a> {
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Serialize)]
pub(crate) struct NumberFlowIdsReqDto {
    pub call_flow_id: Uuid,
    pub message_flow_id: Uuid,
}

/// Criteria of the numbers to renew, exactly one of them is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberRenewCriteria {
    // numbers whose renew time is before this timestamp
    TmRenew(String),
    Days(u32),
    Hours(u32),
}
