use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkMessageTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Normal,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkReactionDto {
    pub emoji: String,
    pub owner_type: String,
    #[serde(with = "nil_uuid")]
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkMessageDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub owner_type: String,
    #[serde(with = "nil_uuid")]
    pub owner_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub chat_id: Uuid,
    // set on replies within a thread
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub type_: TalkMessageTypeDto,
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reactions: Vec<TalkReactionDto>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct TalkMessageCreateReqDto<'a> {
    pub chat_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub owner_type: &'a str,
    pub owner_id: Uuid,
    #[serde(rename = "type")]
    pub type_: TalkMessageTypeDto,
    pub text: &'a str,
}

#[derive(Serialize)]
pub(crate) struct TalkReactionReqDto<'a> {
    pub owner_type: &'a str,
    pub owner_id: Uuid,
    pub emoji: &'a str,
}
