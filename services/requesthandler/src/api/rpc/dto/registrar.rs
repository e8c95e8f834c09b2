use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, opt_timestamp};

/// SIP extension registered to the customer's realm
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub name: String,
    pub detail: String,
    #[serde(with = "nil_uuid")]
    pub domain_id: Uuid,
    pub endpoint_id: String,
    pub aor_id: String,
    pub auth_id: String,
    pub extension: String,
    pub domain_name: String,
    pub realm: String,
    pub username: String,
    pub password: String,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct ExtensionCreateReqDto<'a> {
    pub customer_id: Uuid,
    pub extension: &'a str,
    pub password: &'a str,
    // domains are derived from the customer, always nil here
    pub domain_id: Uuid,
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Serialize)]
pub(crate) struct ExtensionUpdateReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
    pub password: &'a str,
}
