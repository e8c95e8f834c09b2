use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::model::address::Address;
use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgentRingMethodDto {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "ringall")]
    RingAll,
    #[serde(rename = "linear")]
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Available,
    Away,
    Busy,
    Offline,
    Ringing,
}

/// bit flags
pub mod permission {
    pub const NONE: u64 = 0;
    pub const PROJECT_SUPER_ADMIN: u64 = 0x0001;
    pub const CUSTOMER_AGENT: u64 = 0x0010;
    pub const CUSTOMER_ADMIN: u64 = 0x0020;
    pub const CUSTOMER_MANAGER: u64 = 0x0040;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub detail: String,
    pub ring_method: AgentRingMethodDto,
    pub status: AgentStatusDto,
    pub permission: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_ids: Vec<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub addresses: Vec<Address>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct AgentCreateReqDto<'a> {
    pub customer_id: Uuid,
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
    pub detail: &'a str,
    pub ring_method: AgentRingMethodDto,
    pub permission: u64,
    pub tag_ids: &'a [Uuid],
    pub addresses: &'a [Address],
}

#[derive(Serialize)]
pub(crate) struct AgentByAddressReqDto<'a> {
    pub customer_id: Uuid,
    pub address: &'a Address,
}

#[derive(Serialize)]
pub(crate) struct AgentUpdateReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub ring_method: AgentRingMethodDto,
}

#[derive(Serialize)]
pub(crate) struct AgentAddressesReqDto<'a> {
    pub addresses: &'a [Address],
}

#[derive(Serialize)]
pub(crate) struct AgentPasswordReqDto<'a> {
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AgentTagIdsReqDto<'a> {
    pub tag_ids: &'a [Uuid],
}

#[derive(Serialize)]
pub(crate) struct AgentStatusReqDto {
    pub status: AgentStatusDto,
}

#[derive(Serialize)]
pub(crate) struct AgentPermissionReqDto {
    pub permission: u64,
}
