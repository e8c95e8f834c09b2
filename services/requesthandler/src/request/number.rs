use std::collections::BTreeMap;

use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{page_uri, parse_response, timeout, AppRequestError, AppRequestProps, RequestHandler};
use crate::api::rpc::dto::number::{
    NumberCreateReqDto, NumberDto, NumberFlowIdsReqDto, NumberRenewCriteria, NumberUpdateReqDto,
};

const RESOURCE: &str = "number/numbers";

impl RequestHandler {
    pub async fn number_v1_number_create(
        &self,
        customer_id: Uuid,
        number: &str,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<NumberDto, AppRequestError> {
        let body = NumberCreateReqDto {
            customer_id,
            number,
            call_flow_id,
            message_flow_id,
            name,
            detail,
        };
        let uri = "/v1/numbers".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }

    /// filters are carried in the request body, keyed by field name
    pub async fn number_v1_number_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, JsnVal>,
    ) -> Result<Vec<NumberDto>, AppRequestError> {
        let uri = page_uri("/v1/numbers", page_token, page_size)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .json(filters)?;
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }

    pub async fn number_v1_number_get(&self, id: Uuid) -> Result<NumberDto, AppRequestError> {
        let uri = format!("/v1/numbers/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }

    pub async fn number_v1_number_delete(&self, id: Uuid) -> Result<NumberDto, AppRequestError> {
        let uri = format!("/v1/numbers/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }

    pub async fn number_v1_number_update(
        &self,
        id: Uuid,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
        name: &str,
        detail: &str,
    ) -> Result<NumberDto, AppRequestError> {
        let body = NumberUpdateReqDto {
            call_flow_id,
            message_flow_id,
            name,
            detail,
        };
        let uri = format!("/v1/numbers/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }

    pub async fn number_v1_number_update_flow_id(
        &self,
        id: Uuid,
        call_flow_id: Uuid,
        message_flow_id: Uuid,
    ) -> Result<NumberDto, AppRequestError> {
        let body = NumberFlowIdsReqDto {
            call_flow_id,
            message_flow_id,
        };
        let uri = format!("/v1/numbers/{id}/flow_ids");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }

    /// renew the numbers matching `criteria`, the renewed ones are returned
    pub async fn number_v1_number_renew(
        &self,
        criteria: &NumberRenewCriteria,
    ) -> Result<Vec<NumberDto>, AppRequestError> {
        let uri = "/v1/numbers/renew".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, "number/numbers/renew")
            .timeout(timeout::LIST)
            .json(criteria)?;
        let resp = self.send_to(QueueName::Number, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
