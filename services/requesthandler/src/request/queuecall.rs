use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::{RequestMethod, Response};

use super::{
    page_uri_with_filters, parse_response, parse_response_empty, timeout, AppRequestError,
    AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::queue::{QueuecallDto, QueuecallExecuteReqDto, QueuecallHealthReqDto};

const RESOURCE: &str = "queue/queuecalls";

impl RequestHandler {
    pub async fn queue_v1_queuecall_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<QueuecallDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/queuecalls", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).timeout(timeout::LIST);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_get(&self, id: Uuid) -> Result<QueuecallDto, AppRequestError> {
        let uri = format!("/v1/queuecalls/{id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_get_by_reference_id(
        &self,
        reference_id: Uuid,
    ) -> Result<QueuecallDto, AppRequestError> {
        let uri = format!("/v1/queuecalls/reference_id/{reference_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_delete(
        &self,
        id: Uuid,
    ) -> Result<QueuecallDto, AppRequestError> {
        let uri = format!("/v1/queuecalls/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_kick(&self, id: Uuid) -> Result<QueuecallDto, AppRequestError> {
        let uri = format!("/v1/queuecalls/{id}/kick");
        let resp = self._queuecall_post(uri, 0).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_kick_by_reference_id(
        &self,
        reference_id: Uuid,
    ) -> Result<QueuecallDto, AppRequestError> {
        let uri = format!("/v1/queuecalls/reference_id/{reference_id}/kick");
        let resp = self._queuecall_post(uri, 0).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_timeout_wait(
        &self,
        id: Uuid,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/queuecalls/{id}/timeout_wait");
        let resp = self._queuecall_post(uri, delay_ms).await?;
        parse_response_empty(resp)
    }

    pub async fn queue_v1_queuecall_timeout_service(
        &self,
        id: Uuid,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/queuecalls/{id}/timeout_service");
        let resp = self._queuecall_post(uri, delay_ms).await?;
        parse_response_empty(resp)
    }

    pub async fn queue_v1_queuecall_update_status_waiting(
        &self,
        id: Uuid,
    ) -> Result<QueuecallDto, AppRequestError> {
        let uri = format!("/v1/queuecalls/{id}/status_waiting");
        let resp = self._queuecall_post(uri, 0).await?;
        parse_response(resp)
    }

    /// connect the queuecall to the agent
    pub async fn queue_v1_queuecall_execute(
        &self,
        id: Uuid,
        agent_id: Uuid,
    ) -> Result<QueuecallDto, AppRequestError> {
        let body = QueuecallExecuteReqDto { agent_id };
        let uri = format!("/v1/queuecalls/{id}/execute");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queuecall_health_check(
        &self,
        id: Uuid,
        delay_ms: u32,
        retry_count: u32,
    ) -> Result<(), AppRequestError> {
        let body = QueuecallHealthReqDto { retry_count };
        let uri = format!("/v1/queuecalls/{id}/health-check");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "queue/queuecalls/health")
            .delay(delay_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response_empty(resp)
    }

    async fn _queuecall_post(
        &self,
        uri: String,
        delay_ms: u32,
    ) -> Result<Option<Response>, AppRequestError> {
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).delay(delay_ms);
        self.send_to(QueueName::Queue, props).await
    }
} // end of impl RequestHandler
