use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, parse_response_empty, timeout, wire_string,
    AppRequestError, AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::agent::{AgentDto, AgentStatusDto};
use crate::api::rpc::dto::flow::ActionDto;
use crate::api::rpc::dto::queue::{
    QueueCreateReqDto, QueueDto, QueueExecuteDto, QueueExecuteReqDto, QueueRoutingMethodDto,
    QueueRoutingMethodReqDto, QueueSettingArgs, QueueTagIdsReqDto, QueueWaitActionsReqDto,
    QueuecallCreateReqDto, QueuecallDto, QueuecallReferenceTypeDto,
};

const RESOURCE: &str = "queue/queues";

impl RequestHandler {
    pub async fn queue_v1_queue_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<QueueDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/queues", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_get(&self, id: Uuid) -> Result<QueueDto, AppRequestError> {
        let uri = format!("/v1/queues/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    /// agents qualified for the queue, [`AgentStatusDto::None`] matches
    /// any status
    pub async fn queue_v1_queue_get_agents(
        &self,
        id: Uuid,
        status: AgentStatusDto,
    ) -> Result<Vec<AgentDto>, AppRequestError> {
        let status = wire_string(&status)?;
        let uri = format!("/v1/queues/{id}/agents?status={status}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_create(
        &self,
        customer_id: Uuid,
        setting: &QueueSettingArgs,
    ) -> Result<QueueDto, AppRequestError> {
        let body = QueueCreateReqDto {
            customer_id,
            setting,
        };
        let uri = "/v1/queues".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_delete(&self, id: Uuid) -> Result<QueueDto, AppRequestError> {
        let uri = format!("/v1/queues/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_update(
        &self,
        id: Uuid,
        setting: &QueueSettingArgs,
    ) -> Result<QueueDto, AppRequestError> {
        let uri = format!("/v1/queues/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(setting)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_update_tag_ids(
        &self,
        id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<QueueDto, AppRequestError> {
        let body = QueueTagIdsReqDto { tag_ids };
        let uri = format!("/v1/queues/{id}/tag_ids");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_update_routing_method(
        &self,
        id: Uuid,
        routing_method: QueueRoutingMethodDto,
    ) -> Result<QueueDto, AppRequestError> {
        let body = QueueRoutingMethodReqDto { routing_method };
        let uri = format!("/v1/queues/{id}/routing_method");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    pub async fn queue_v1_queue_update_actions(
        &self,
        id: Uuid,
        wait_actions: &[ActionDto],
        wait_timeout: u64,
        service_timeout: u64,
    ) -> Result<QueueDto, AppRequestError> {
        let body = QueueWaitActionsReqDto {
            wait_actions,
            wait_timeout,
            service_timeout,
        };
        let uri = format!("/v1/queues/{id}/wait_actions");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    /// put a call into the queue, the returned queuecall starts waiting
    /// for an available agent
    pub async fn queue_v1_queue_create_queuecall(
        &self,
        id: Uuid,
        reference_type: QueuecallReferenceTypeDto,
        reference_id: Uuid,
        reference_activeflow_id: Uuid,
        exit_action_id: Uuid,
    ) -> Result<QueuecallDto, AppRequestError> {
        let body = QueuecallCreateReqDto {
            reference_type,
            reference_id,
            reference_activeflow_id,
            exit_action_id,
        };
        let uri = format!("/v1/queues/{id}/queuecalls");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }

    /// one round of agent searching, re-scheduled through `delay_ms`
    pub async fn queue_v1_queue_execute_run(
        &self,
        id: Uuid,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/queues/{id}/execute_run");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "queue/queues/execute_run")
            .delay(delay_ms)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response_empty(resp)
    }

    pub async fn queue_v1_queue_update_execute(
        &self,
        id: Uuid,
        execute: QueueExecuteDto,
    ) -> Result<QueueDto, AppRequestError> {
        let body = QueueExecuteReqDto { execute };
        let uri = format!("/v1/queues/{id}/execute");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Queue, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
