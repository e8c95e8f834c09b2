use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, timeout, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::billing::{
    AccountBalanceReqDto, AccountBasicInfoReqDto, AccountCreateReqDto, AccountDto,
    AccountPaymentInfoReqDto, AccountPaymentMethodDto, AccountPaymentTypeDto,
    AccountValidBalanceReqDto, BillingReferenceTypeDto,
};
use crate::api::rpc::dto::ValidReplyDto;

const RESOURCE: &str = "billing/accounts";

impl RequestHandler {
    pub async fn billing_v1_account_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<AccountDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/accounts", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).timeout(timeout::LIST);
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    pub async fn billing_v1_account_create(
        &self,
        customer_id: Uuid,
        name: &str,
        detail: &str,
        payment_type: AccountPaymentTypeDto,
        payment_method: AccountPaymentMethodDto,
    ) -> Result<AccountDto, AppRequestError> {
        let body = AccountCreateReqDto {
            customer_id,
            name,
            detail,
            payment_type,
            payment_method,
        };
        let uri = "/v1/accounts".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    pub async fn billing_v1_account_get(
        &self,
        account_id: Uuid,
    ) -> Result<AccountDto, AppRequestError> {
        let uri = format!("/v1/accounts/{account_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    pub async fn billing_v1_account_delete(
        &self,
        account_id: Uuid,
    ) -> Result<AccountDto, AppRequestError> {
        let uri = format!("/v1/accounts/{account_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    /// add balance regardless of the payment method of the account
    pub async fn billing_v1_account_add_balance_force(
        &self,
        account_id: Uuid,
        balance: f32,
    ) -> Result<AccountDto, AppRequestError> {
        let body = AccountBalanceReqDto { balance };
        let uri = format!("/v1/accounts/{account_id}/balance_add_force");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    pub async fn billing_v1_account_subtract_balance_force(
        &self,
        account_id: Uuid,
        balance: f32,
    ) -> Result<AccountDto, AppRequestError> {
        let body = AccountBalanceReqDto { balance };
        let uri = format!("/v1/accounts/{account_id}/balance_subtract_force");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    /// whether the account has enough balance for `count` units of the
    /// given billing type
    pub async fn billing_v1_account_is_valid_balance(
        &self,
        account_id: Uuid,
        billing_type: BillingReferenceTypeDto,
        country: &str,
        count: u32,
    ) -> Result<bool, AppRequestError> {
        let body = AccountValidBalanceReqDto {
            billing_type,
            country,
            count,
        };
        let uri = format!("/v1/accounts/{account_id}/is_valid_balance");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response::<ValidReplyDto>(resp).map(|r| r.valid)
    }

    pub async fn billing_v1_account_update_basic_info(
        &self,
        account_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<AccountDto, AppRequestError> {
        let body = AccountBasicInfoReqDto { name, detail };
        let uri = format!("/v1/accounts/{account_id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }

    pub async fn billing_v1_account_update_payment_info(
        &self,
        account_id: Uuid,
        payment_type: AccountPaymentTypeDto,
        payment_method: AccountPaymentMethodDto,
    ) -> Result<AccountDto, AppRequestError> {
        let body = AccountPaymentInfoReqDto {
            payment_type,
            payment_method,
        };
        let uri = format!("/v1/accounts/{account_id}/payment_info");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Billing, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
