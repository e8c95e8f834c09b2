use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, opt_timestamp};

use super::flow::ActionDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConferenceTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Conference,
    Connect,
    Queue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConferenceStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Starting,
    Progressing,
    Terminating,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub confbridge_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub flow_id: Uuid,
    #[serde(rename = "type")]
    pub type_: ConferenceTypeDto,
    pub status: ConferenceStatusDto,
    pub name: String,
    pub detail: String,
    pub data: Option<BTreeMap<String, JsnVal>>,
    // milliseconds, zero means no timeout
    pub timeout: u64,
    pub pre_actions: Option<Vec<ActionDto>>,
    pub post_actions: Option<Vec<ActionDto>>,
    pub conferencecall_ids: Option<Vec<Uuid>>,
    #[serde(with = "nil_uuid")]
    pub recording_id: Uuid,
    pub recording_ids: Option<Vec<Uuid>>,
    #[serde(with = "nil_uuid")]
    pub transcribe_id: Uuid,
    pub transcribe_ids: Option<Vec<Uuid>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_end: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// Optional parts of a new conference, absent ones are sent as `null`
/// and the conference manager applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct ConferenceExtraArgs {
    pub data: Option<BTreeMap<String, JsnVal>>,
    pub pre_actions: Option<Vec<ActionDto>>,
    pub post_actions: Option<Vec<ActionDto>>,
}

#[derive(Serialize)]
pub(crate) struct ConferenceCreateReqDto<'a> {
    #[serde(rename = "type")]
    pub type_: ConferenceTypeDto,
    pub customer_id: Uuid,
    pub name: &'a str,
    pub detail: &'a str,
    pub timeout: u64,
    pub data: Option<&'a BTreeMap<String, JsnVal>>,
    pub pre_actions: Option<&'a [ActionDto]>,
    pub post_actions: Option<&'a [ActionDto]>,
}

#[derive(Serialize)]
pub(crate) struct ConferenceUpdateReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub timeout: u64,
    pub pre_actions: &'a [ActionDto],
    pub post_actions: &'a [ActionDto],
}

#[derive(Serialize)]
pub(crate) struct ConferenceRecordingIdReqDto {
    pub recording_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct ConferenceTranscribeReqDto<'a> {
    pub language: &'a str,
}
