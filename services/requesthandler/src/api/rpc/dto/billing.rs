use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voipbin_common::util::{nil_uuid, opt_timestamp};

use super::compact_float;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountPaymentTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Prepaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountPaymentMethodDto {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "credit card")]
    CreditCard,
}

/// type of the resource charged by billing-manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingReferenceTypeDto {
    #[default]
    #[serde(rename = "")]
    None,
    Call,
    #[serde(rename = "call_extension")]
    CallExtension,
    Sms,
    Number,
    #[serde(rename = "number_renew")]
    NumberRenew,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDto {
    #[serde(with = "nil_uuid")]
    pub id: Uuid,
    #[serde(with = "nil_uuid")]
    pub customer_id: Uuid,
    pub name: String,
    pub detail: String,
    pub balance: f32,
    pub payment_type: AccountPaymentTypeDto,
    pub payment_method: AccountPaymentMethodDto,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_create: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_update: Option<DateTime<Utc>>,
    #[serde(with = "opt_timestamp", skip_serializing_if = "Option::is_none")]
    pub tm_delete: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub(crate) struct AccountCreateReqDto<'a> {
    pub customer_id: Uuid,
    pub name: &'a str,
    pub detail: &'a str,
    pub payment_type: AccountPaymentTypeDto,
    pub payment_method: AccountPaymentMethodDto,
}

#[derive(Serialize)]
pub(crate) struct AccountBalanceReqDto {
    #[serde(serialize_with = "compact_float")]
    pub balance: f32,
}

#[derive(Serialize)]
pub(crate) struct AccountValidBalanceReqDto<'a> {
    pub billing_type: BillingReferenceTypeDto,
    pub country: &'a str,
    pub count: u32,
}

#[derive(Serialize)]
pub(crate) struct AccountBasicInfoReqDto<'a> {
    pub name: &'a str,
    pub detail: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AccountPaymentInfoReqDto {
    pub payment_type: AccountPaymentTypeDto,
    pub payment_method: AccountPaymentMethodDto,
}
