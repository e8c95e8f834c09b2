use std::collections::BTreeMap;

use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri, parse_response, parse_response_empty, timeout, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::ai::{
    AiFunctionCallDto, AiToolTypeDto, AicallDto, AicallGenderDto, AicallReferenceTypeDto,
    AicallStartReqDto, AicallToolExecuteReqDto,
};

const RESOURCE: &str = "ai/aicalls";

impl RequestHandler {
    pub async fn ai_v1_aicall_start(
        &self,
        activeflow_id: Uuid,
        ai_id: Uuid,
        reference_type: AicallReferenceTypeDto,
        reference_id: Uuid,
        gender: AicallGenderDto,
        language: &str,
    ) -> Result<AicallDto, AppRequestError> {
        let body = AicallStartReqDto {
            activeflow_id,
            ai_id,
            reference_type,
            reference_id,
            gender,
            language,
        };
        let uri = "/v1/aicalls".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response(resp)
    }

    pub async fn ai_v1_aicall_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, JsnVal>,
    ) -> Result<Vec<AicallDto>, AppRequestError> {
        let uri = page_uri("/v1/aicalls", page_token, page_size)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .json(filters)?;
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response(resp)
    }

    pub async fn ai_v1_aicall_get(&self, aicall_id: Uuid) -> Result<AicallDto, AppRequestError> {
        let uri = format!("/v1/aicalls/{aicall_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response(resp)
    }

    pub async fn ai_v1_aicall_delete(&self, aicall_id: Uuid) -> Result<AicallDto, AppRequestError> {
        let uri = format!("/v1/aicalls/{aicall_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response(resp)
    }

    pub async fn ai_v1_aicall_terminate(
        &self,
        aicall_id: Uuid,
    ) -> Result<AicallDto, AppRequestError> {
        let uri = format!("/v1/aicalls/{aicall_id}/terminate");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response(resp)
    }

    /// schedule termination of the AI call, the remote never replies
    pub async fn ai_v1_aicall_terminate_with_delay(
        &self,
        aicall_id: Uuid,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/aicalls/{aicall_id}/terminate");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).delay(delay_ms);
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response_empty(resp)
    }

    pub async fn ai_v1_aicall_tool_execute(
        &self,
        aicall_id: Uuid,
        tool_id: &str,
        tool_type: AiToolTypeDto,
        function: &AiFunctionCallDto,
    ) -> Result<BTreeMap<String, JsnVal>, AppRequestError> {
        let body = AicallToolExecuteReqDto {
            id: tool_id,
            type_: tool_type,
            function,
        };
        let uri = format!("/v1/aicalls/{aicall_id}/tool_execute");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::AI, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
