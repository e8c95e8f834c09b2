use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, null_as_default, opt_timestamp};

use super::billing::BillingReferenceTypeDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethodDto {
    #[default]
    #[serde(rename = "")]
    None,
    Post,
    Get,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub detail: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub webhook_method: WebhookMethodDto,
    pub webhook_uri: String,
    #[serde(with = "nil_uuid")]
    pub billing_account_id: Uuid,
    #[serde(deserialize_with = "null_as_default")]
    pub permission_ids: Vec<Uuid>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

/// shared by creation and update of basic info
#[derive(Serialize)]
pub(crate) struct CustomerInfoReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub address: &'a str,
    pub webhook_method: WebhookMethodDto,
    pub webhook_uri: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CustomerValidBalanceReqDto<'a> {
    pub reference_type: BillingReferenceTypeDto,
    pub country: &'a str,
    pub count: u32,
}

#[derive(Serialize)]
pub(crate) struct CustomerBillingAccountReqDto {
    pub billing_account_id: Uuid,
}
