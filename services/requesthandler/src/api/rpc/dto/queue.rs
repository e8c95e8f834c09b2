use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::model::address::Address;
use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

use super::flow::ActionDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueRoutingMethodDto {
    #[default]
    #[serde(rename = "")]
    None,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueExecuteDto {
    #[default]
    Stop,
    Run,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub name: String,
    pub detail: String,
    pub routing_method: QueueRoutingMethodDto,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_ids: Vec<Uuid>,
    pub execute: QueueExecuteDto,
    #[serde(deserialize_with = "null_as_default")]
    pub wait_actions: Vec<ActionDto>,
    // both in milliseconds
    pub wait_timeout: u64,
    pub service_timeout: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub wait_queuecall_ids: Vec<Uuid>,
    #[serde(deserialize_with = "null_as_default")]
    pub service_queuecall_ids: Vec<Uuid>,
    pub total_incoming_count: u64,
    pub total_serviced_count: u64,
    pub total_abandoned_count: u64,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuecallReferenceTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Call,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuecallStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Initiating,
    Waiting,
    Connecting,
    Kicking,
    Service,
    Done,
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueuecallDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub queue_id: Uuid,
    pub reference_type: QueuecallReferenceTypeDto,
    #[serde(with = "nil_uuid")]
    pub reference_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub reference_activeflow_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub forward_action_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub exit_action_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub confbridge_id: Uuid,
    pub source: Address,
    pub routing_method: QueueRoutingMethodDto,
    #[serde(deserialize_with = "null_as_default")]
    pub tag_ids: Vec<Uuid>,
    pub status: QueuecallStatusDto,
    #[serde(with = "nil_uuid")]
    pub service_agent_id: Uuid,
    pub timeout_wait: u64,
    pub timeout_service: u64,
    pub duration_waiting: u64,
    pub duration_service: u64,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_service: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_end: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// Settings shared by queue creation and update. Timeouts are in
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QueueSettingArgs {
    pub name: String,
    pub detail: String,
    pub routing_method: QueueRoutingMethodDto,
    pub tag_ids: Vec<Uuid>,
    pub wait_actions: Vec<ActionDto>,
    pub wait_timeout: u64,
    pub service_timeout: u64,
}

#[derive(Serialize)]
pub(crate) struct QueueCreateReqDto<'a> {
    pub customer_id: Uuid,
    #[serde(flatten)]
    pub setting: &'a QueueSettingArgs,
}

#[derive(Serialize)]
pub(crate) struct QueueTagIdsReqDto<'a> {
    pub tag_ids: &'a [Uuid],
}

#[derive(Serialize)]
pub(crate) struct QueueRoutingMethodReqDto {
    pub routing_method: QueueRoutingMethodDto,
}

#[derive(Serialize)]
pub(crate) struct QueueWaitActionsReqDto<'a> {
    pub wait_actions: &'a [ActionDto],
    pub wait_timeout: u64,
    pub service_timeout: u64,
}

#[derive(Serialize)]
pub(crate) struct QueueExecuteReqDto {
    pub execute: QueueExecuteDto,
}

#[derive(Serialize)]
pub(crate) struct QueuecallCreateReqDto {
    pub reference_type: QueuecallReferenceTypeDto,
    pub reference_id: Uuid,
    pub reference_activeflow_id: Uuid,
    pub exit_action_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct QueuecallExecuteReqDto {
    pub agent_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct QueuecallHealthReqDto {
    pub retry_count: u32,
}
