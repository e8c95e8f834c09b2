use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    // one-to-one
    Normal,
    Group,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: ChatTypeDto,
    #[serde(with = "nil_uuid")]
    pub room_owner_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub participant_ids: Vec<Uuid>,
    pub name: String,
    pub detail: String,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct ChatCreateReqDto<'a> {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: ChatTypeDto,
    pub room_owner_id: Uuid,
    pub participant_ids: &'a [Uuid],
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ChatBasicInfoReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ChatRoomOwnerReqDto {
    pub room_owner_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct ChatParticipantReqDto {
    pub participant_id: Uuid,
}
