use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

/// Single step of a flow. The option schema depends on the action type,
/// it is carried opaquely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub next_id: Uuid,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<JsnVal>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tm_execute: String,
}

impl ActionDto {
    pub fn new(type_: &str) -> Self {
        Self {
            type_: type_.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Flow,
    Conference,
    Queue,
    Campaign,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: FlowTypeDto,
    pub name: String,
    pub detail: String,
    pub persist: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<ActionDto>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveflowReferenceTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Ai,
    Api,
    Call,
    Campaign,
    Conversation,
    Message,
    Transcribe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveflowStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Running,
    Ended,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveflowDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub flow_id: Uuid,
    pub status: ActiveflowStatusDto,
    pub reference_type: ActiveflowReferenceTypeDto,
    #[serde(with = "nil_uuid")]
    pub reference_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub current_stack_id: Uuid,
    pub current_action: ActionDto,
    #[serde(with = "nil_uuid")]
    pub forward_stack_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub forward_action_id: Uuid,
    pub execute_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub executed_actions: Vec<ActionDto>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct FlowCreateReqDto<'a> {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: FlowTypeDto,
    pub name: &'a str,
    pub detail: &'a str,
    pub actions: &'a [ActionDto],
    pub persist: bool,
}

#[derive(Serialize)]
pub(crate) struct FlowUpdateReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub actions: &'a [ActionDto],
}

#[derive(Serialize)]
pub(crate) struct FlowActionsReqDto<'a> {
    pub actions: &'a [ActionDto],
}

#[derive(Serialize)]
pub(crate) struct ActiveflowCreateReqDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub reference_type: ActiveflowReferenceTypeDto,
    pub reference_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct ActiveflowNextReqDto {
    pub current_action_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct ActiveflowForwardReqDto {
    pub forward_action_id: Uuid,
    pub forward_now: bool,
}

#[derive(Serialize)]
pub(crate) struct ActiveflowServiceStopReqDto {
    pub service_id: Uuid,
}
