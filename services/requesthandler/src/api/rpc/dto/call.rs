use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::model::address::Address;
use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

use super::flow::ActionDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CallTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "flow")]
    Flow,
    #[serde(rename = "conference")]
    Conference,
    #[serde(rename = "sip-service")]
    SipService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Dialing,
    Ringing,
    Progressing,
    Terminating,
    Canceling,
    Hangup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirectionDto {
    #[default]
    #[serde(rename = "")]
    None,
    Incoming,
    Outgoing,
}

/// media direction, applies to mute and to external media streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDirectionDto {
    #[default]
    #[serde(rename = "")]
    None,
    Both,
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingFormatDto {
    #[default]
    Wav,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub owner_type: String,
    #[serde(with = "nil_uuid")]
    pub owner_id: Uuid,
    pub channel_id: String,
    pub bridge_id: String,
    #[serde(with = "nil_uuid")]
    pub flow_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub activeflow_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub confbridge_id: Uuid,
    #[serde(rename = "type")]
    pub type_: CallTypeDto,
    #[serde(with = "nil_uuid")]
    pub master_call_id: Uuid,
    pub chained_call_ids: Option<Vec<Uuid>>,
    #[serde(with = "nil_uuid")]
    pub recording_id: Uuid,
    pub recording_ids: Option<Vec<Uuid>>,
    #[serde(with = "nil_uuid")]
    pub external_media_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub groupcall_id: Uuid,
    pub source: Address,
    pub destination: Address,
    pub status: CallStatusDto,
    pub data: Option<HashMap<String, String>>,
    pub action: ActionDto,
    pub action_next_hold: bool,
    pub direction: CallDirectionDto,
    pub mute_direction: MediaDirectionDto,
    pub hangup_by: String,
    pub hangup_reason: String,
    #[serde(with = "nil_uuid")]
    pub dialroute_id: Uuid,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_ringing: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_progressing: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_hangup: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupcallRingMethodDto {
    #[default]
    #[serde(rename = "")]
    None,
    RingAll,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupcallAnswerMethodDto {
    #[default]
    #[serde(rename = "")]
    None,
    HangupOthers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupcallStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Progressing,
    Hangingup,
    Hangup,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupcallDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub owner_type: String,
    #[serde(with = "nil_uuid")]
    pub owner_id: Uuid,
    pub status: GroupcallStatusDto,
    #[serde(with = "nil_uuid")]
    pub flow_id: Uuid,
    pub source: Option<Address>,
    pub destinations: Option<Vec<Address>>,
    #[serde(with = "nil_uuid")]
    pub master_call_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub master_groupcall_id: Uuid,
    pub ring_method: GroupcallRingMethodDto,
    pub answer_method: GroupcallAnswerMethodDto,
    #[serde(with = "nil_uuid")]
    pub answer_call_id: Uuid,
    pub call_ids: Option<Vec<Uuid>>,
    #[serde(with = "nil_uuid")]
    pub answer_groupcall_id: Uuid,
    pub groupcall_ids: Option<Vec<Uuid>>,
    pub call_count: u32,
    pub groupcall_count: u32,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// calls and groupcalls created at once for a set of destinations
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CallsCreateReplyDto {
    #[serde(deserialize_with = "null_as_default")]
    pub calls: Vec<CallDto>,
    #[serde(deserialize_with = "null_as_default")]
    pub groupcalls: Vec<GroupcallDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfbridgeTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Connect,
    Conference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfbridgeFlagDto {
    NoAutoLeave,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfbridgeDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub activeflow_id: Uuid,
    #[serde(rename = "type")]
    pub type_: ConfbridgeTypeDto,
    pub status: String,
    pub bridge_id: String,
    pub flags: Option<Vec<ConfbridgeFlagDto>>,
    pub channel_call_ids: Option<HashMap<String, Uuid>>,
    #[serde(with = "nil_uuid")]
    pub recording_id: Uuid,
    pub recording_ids: Option<Vec<Uuid>>,
    #[serde(with = "nil_uuid")]
    pub external_media_id: Uuid,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// Parameters of an external media stream attached to a call or a
/// confbridge, `external_host` is in the form `host:port`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalMediaArgs {
    pub external_media_id: Uuid,
    pub external_host: String,
    // rtp
    pub encapsulation: String,
    // udp, tcp
    pub transport: String,
    // client, server
    pub connection_type: String,
    // ulaw, slin16
    pub format: String,
    pub direction_listen: MediaDirectionDto,
    pub direction_speak: MediaDirectionDto,
}

#[derive(Serialize)]
pub(crate) struct CallHealthReqDto {
    pub retry_count: u32,
}

#[derive(Serialize)]
pub(crate) struct CallActionTimeoutReqDto<'a> {
    pub action_id: Uuid,
    pub action_type: &'a str,
    pub tm_execute: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CallActionNextReqDto {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force: bool,
}

#[derive(Serialize)]
pub(crate) struct CallsCreateReqDto<'a> {
    pub flow_id: Uuid,
    pub customer_id: Uuid,
    pub master_call_id: Uuid,
    pub source: &'a Address,
    pub destinations: &'a [Address],
    pub early_execution: bool,
    pub connect: bool,
}

/// fields of a call created with identifier chosen by the caller
#[derive(Debug, Clone, Serialize)]
pub struct CallCreateWithIdArgs<'a> {
    pub flow_id: Uuid,
    pub activeflow_id: Uuid,
    pub customer_id: Uuid,
    pub master_call_id: Uuid,
    pub source: &'a Address,
    pub destination: &'a Address,
    pub groupcall_id: Uuid,
    pub early_execution: bool,
    pub connect: bool,
}

#[derive(Serialize)]
pub(crate) struct CallChainedCallReqDto {
    pub chained_call_id: Uuid,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct CallDigitsDto {
    pub digits: String,
}

#[derive(Serialize)]
pub(crate) struct RecordingStartReqDto<'a> {
    pub format: RecordingFormatDto,
    pub end_of_silence: u32,
    pub end_of_key: &'a str,
    pub duration: u32,
    pub on_end_flow_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct CallConfbridgeIdReqDto {
    pub confbridge_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct CallTalkReqDto<'a> {
    pub text: &'a str,
    pub gender: &'a str,
    pub language: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CallPlayReqDto<'a> {
    pub media_urls: &'a [String],
}

#[derive(Serialize)]
pub(crate) struct MediaDirectionReqDto {
    pub direction: MediaDirectionDto,
}

#[derive(Serialize)]
pub(crate) struct ConfbridgeCreateReqDto {
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: ConfbridgeTypeDto,
}

#[derive(Serialize)]
pub(crate) struct ConfbridgeFlagReqDto {
    pub flag: ConfbridgeFlagDto,
}

#[derive(Serialize)]
pub(crate) struct GroupcallCreateReqDto<'a> {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub flow_id: Uuid,
    pub source: &'a Address,
    pub destinations: &'a [Address],
    pub master_call_id: Uuid,
    pub master_groupcall_id: Uuid,
    pub ring_method: GroupcallRingMethodDto,
    pub answer_method: GroupcallAnswerMethodDto,
}

#[derive(Serialize)]
pub(crate) struct GroupcallAnswerReqDto {
    pub answer_groupcall_id: Uuid,
}
