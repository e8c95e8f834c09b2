use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::model::address::Address;
use voipbin_common::util::{nil_uuid, opt_timestamp};

/// number of destinations a single outdial target holds
pub const NUM_DESTINATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutdialtargetStatusDto {
    #[default]
    #[serde(rename = "")]
    None,
    Idle,
    Progressing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdialtargetDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub outdial_id: Uuid,
    pub name: String,
    pub detail: String,
    pub data: String,
    pub status: OutdialtargetStatusDto,
    pub destination_0: Option<Address>,
    pub destination_1: Option<Address>,
    pub destination_2: Option<Address>,
    pub destination_3: Option<Address>,
    pub destination_4: Option<Address>,
    pub try_count_0: u32,
    pub try_count_1: u32,
    pub try_count_2: u32,
    pub try_count_3: u32,
    pub try_count_4: u32,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct OutdialtargetCreateReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub data: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_0: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_1: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_2: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_3: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_4: Option<&'a Address>,
}

/// query of the targets available for next dialing attempt, each
/// destination is skipped once its try count reaches the limit
#[derive(Serialize)]
pub(crate) struct OutdialtargetAvailableQuery {
    pub try_count_0: u32,
    pub try_count_1: u32,
    pub try_count_2: u32,
    pub try_count_3: u32,
    pub try_count_4: u32,
    pub limit: u32,
}

#[derive(Serialize)]
pub(crate) struct OutdialtargetProgressingReqDto {
    pub destination_index: usize,
}

#[derive(Serialize)]
pub(crate) struct OutdialtargetStatusReqDto {
    pub status: OutdialtargetStatusDto,
}
