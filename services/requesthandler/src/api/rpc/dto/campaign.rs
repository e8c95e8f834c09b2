use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

use super::flow::ActionDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Call,
    Flow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatusDto {
    #[default]
    Stop,
    Stopping,
    Run,
}

/// what to do once all the targets of the outdial are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignEndHandleDto {
    #[default]
    Stop,
    Continue,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: CampaignTypeDto,
    pub execute: String,
    pub name: String,
    pub detail: String,
    pub status: CampaignStatusDto,
    // percentage of available agents
    pub service_level: u32,
    pub end_handle: CampaignEndHandleDto,
    #[serde(with = "nil_uuid")]
    pub flow_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub actions: Vec<ActionDto>,
    #[serde(with = "nil_uuid")]
    pub outplan_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub outdial_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub queue_id: Uuid,
    #[serde(with = "nil_uuid")]
    pub next_campaign_id: Uuid,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// resources a campaign draws on while running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CampaignResourceInfo {
    pub outplan_id: Uuid,
    pub outdial_id: Uuid,
    pub queue_id: Uuid,
    pub next_campaign_id: Uuid,
}

#[derive(Serialize)]
pub(crate) struct CampaignCreateReqDto<'a> {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(rename = "type")]
    pub type_: CampaignTypeDto,
    pub name: &'a str,
    pub detail: &'a str,
    pub service_level: u32,
    pub end_handle: CampaignEndHandleDto,
    pub actions: &'a [ActionDto],
    #[serde(flatten)]
    pub resource: &'a CampaignResourceInfo,
}

#[derive(Serialize)]
pub(crate) struct CampaignBasicInfoReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    #[serde(rename = "type")]
    pub type_: CampaignTypeDto,
    pub service_level: u32,
    pub end_handle: CampaignEndHandleDto,
}

#[derive(Serialize)]
pub(crate) struct CampaignStatusReqDto {
    pub status: CampaignStatusDto,
}

#[derive(Serialize)]
pub(crate) struct CampaignServiceLevelReqDto {
    pub service_level: u32,
}

#[derive(Serialize)]
pub(crate) struct CampaignNextIdReqDto {
    pub next_campaign_id: Uuid,
}
