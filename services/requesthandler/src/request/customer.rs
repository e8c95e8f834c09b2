use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, timeout, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::billing::BillingReferenceTypeDto;
use crate::api::rpc::dto::customer::{
    CustomerBillingAccountReqDto, CustomerDto, CustomerInfoReqDto, CustomerValidBalanceReqDto,
    WebhookMethodDto,
};
use crate::api::rpc::dto::ValidReplyDto;

const RESOURCE: &str = "customer/customers";

impl RequestHandler {
    pub async fn customer_v1_customer_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<CustomerDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/customers", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response(resp)
    }

    pub async fn customer_v1_customer_get(&self, id: Uuid) -> Result<CustomerDto, AppRequestError> {
        let uri = format!("/v1/customers/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response(resp)
    }

    pub async fn customer_v1_customer_delete(
        &self,
        id: Uuid,
    ) -> Result<CustomerDto, AppRequestError> {
        let uri = format!("/v1/customers/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn customer_v1_customer_create(
        &self,
        timeout_ms: u32,
        name: &str,
        detail: &str,
        email: &str,
        phone_number: &str,
        address: &str,
        webhook_method: WebhookMethodDto,
        webhook_uri: &str,
    ) -> Result<CustomerDto, AppRequestError> {
        let body = CustomerInfoReqDto {
            name,
            detail,
            email,
            phone_number,
            address,
            webhook_method,
            webhook_uri,
        };
        let uri = "/v1/customers".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE)
            .timeout(timeout_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn customer_v1_customer_update(
        &self,
        id: Uuid,
        name: &str,
        detail: &str,
        email: &str,
        phone_number: &str,
        address: &str,
        webhook_method: WebhookMethodDto,
        webhook_uri: &str,
    ) -> Result<CustomerDto, AppRequestError> {
        let body = CustomerInfoReqDto {
            name,
            detail,
            email,
            phone_number,
            address,
            webhook_method,
            webhook_uri,
        };
        let uri = format!("/v1/customers/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response(resp)
    }

    pub async fn customer_v1_customer_is_valid_balance(
        &self,
        customer_id: Uuid,
        reference_type: BillingReferenceTypeDto,
        country: &str,
        count: u32,
    ) -> Result<bool, AppRequestError> {
        let body = CustomerValidBalanceReqDto {
            reference_type,
            country,
            count,
        };
        let uri = format!("/v1/customers/{customer_id}/is_valid_balance");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response::<ValidReplyDto>(resp).map(|r| r.valid)
    }

    pub async fn customer_v1_customer_update_billing_account_id(
        &self,
        id: Uuid,
        billing_account_id: Uuid,
    ) -> Result<CustomerDto, AppRequestError> {
        let body = CustomerBillingAccountReqDto { billing_account_id };
        let uri = format!("/v1/customers/{id}/billing_account_id");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Customer, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
