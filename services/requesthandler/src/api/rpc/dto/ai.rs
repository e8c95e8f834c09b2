use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, opt_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AicallReferenceTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Call,
    Conversation,
    Task,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AicallGenderDto {
    #[default]
    #[serde(rename = "")]
    None,
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AicallStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Initiating,
    Progressing,
    Pausing,
    Resuming,
    Terminating,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AicallDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub ai_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub activeflow_id: Uuid,
    pub reference_type: AicallReferenceTypeDto,
    #[serde(with = "nil_uuid")]
    pub reference_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub confbridge_id: Uuid,
    pub status: AicallStatusDto,
    pub gender: AicallGenderDto,
    pub language: String,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_end: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiToolTypeDto {
    Function,
}

/// function call requested by the language model, the arguments are
/// kept as serialised JSON text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiFunctionCallDto {
    pub name: String,
    pub arguments: String,
}

#[derive(Serialize)]
pub(crate) struct AicallStartReqDto<'a> {
    pub activeflow_id: Uuid,
    pub ai_id: Uuid,
    pub reference_type: AicallReferenceTypeDto,
    pub reference_id: Uuid,
    pub gender: AicallGenderDto,
    pub language: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AicallToolExecuteReqDto<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub type_: AiToolTypeDto,
    pub function: &'a AiFunctionCallDto,
}
