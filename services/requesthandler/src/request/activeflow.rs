use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, parse_response_empty, timeout, AppRequestError,
    AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::flow::{
    ActionDto, ActiveflowCreateReqDto, ActiveflowDto, ActiveflowForwardReqDto,
    ActiveflowNextReqDto, ActiveflowReferenceTypeDto, ActiveflowServiceStopReqDto,
    FlowActionsReqDto,
};

const RESOURCE: &str = "flow/activeflows";

impl RequestHandler {
    /// nil `id` lets the flow manager generate one
    pub async fn flow_v1_activeflow_create(
        &self,
        id: Uuid,
        customer_id: Uuid,
        flow_id: Uuid,
        reference_type: ActiveflowReferenceTypeDto,
        reference_id: Uuid,
    ) -> Result<ActiveflowDto, AppRequestError> {
        let body = ActiveflowCreateReqDto {
            id,
            customer_id,
            flow_id,
            reference_type,
            reference_id,
        };
        let uri = "/v1/activeflows".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_activeflow_get_next_action(
        &self,
        id: Uuid,
        current_action_id: Uuid,
    ) -> Result<ActionDto, AppRequestError> {
        let body = ActiveflowNextReqDto { current_action_id };
        let uri = format!("/v1/activeflows/{id}/next");
        let props = AppRequestProps::new(RequestMethod::Get, uri, "flow/activeflows/next")
            .json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    /// `forward_now` moves the activeflow to the action immediately
    /// instead of after the current one completes
    pub async fn flow_v1_activeflow_update_forward_action_id(
        &self,
        id: Uuid,
        forward_action_id: Uuid,
        forward_now: bool,
    ) -> Result<(), AppRequestError> {
        let body = ActiveflowForwardReqDto {
            forward_action_id,
            forward_now,
        };
        let uri = format!("/v1/activeflows/{id}/forward_action_id");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response_empty(resp)
    }

    pub async fn flow_v1_activeflow_execute(&self, id: Uuid) -> Result<(), AppRequestError> {
        let uri = format!("/v1/activeflows/{id}/execute");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "flow/activeflows/execute")
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response_empty(resp)
    }

    pub async fn flow_v1_activeflow_delete(
        &self,
        id: Uuid,
    ) -> Result<ActiveflowDto, AppRequestError> {
        let uri = format!("/v1/activeflows/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_activeflow_stop(
        &self,
        id: Uuid,
    ) -> Result<ActiveflowDto, AppRequestError> {
        let uri = format!("/v1/activeflows/{id}/stop");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_activeflow_get(&self, id: Uuid) -> Result<ActiveflowDto, AppRequestError> {
        let uri = format!("/v1/activeflows/{id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_activeflow_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<ActiveflowDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/activeflows", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).timeout(timeout::LIST);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    /// append actions after the current one of the running stack
    pub async fn flow_v1_activeflow_add_actions(
        &self,
        id: Uuid,
        actions: &[ActionDto],
    ) -> Result<ActiveflowDto, AppRequestError> {
        let body = FlowActionsReqDto { actions };
        let uri = format!("/v1/activeflows/{id}/add_actions");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    /// push actions as a new stack, they run right after the current action
    pub async fn flow_v1_activeflow_push_actions(
        &self,
        id: Uuid,
        actions: &[ActionDto],
    ) -> Result<ActiveflowDto, AppRequestError> {
        let body = FlowActionsReqDto { actions };
        let uri = format!("/v1/activeflows/{id}/push_actions");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_activeflow_service_stop(
        &self,
        id: Uuid,
        service_id: Uuid,
    ) -> Result<(), AppRequestError> {
        let body = ActiveflowServiceStopReqDto { service_id };
        let uri = format!("/v1/activeflows/{id}/service_stop");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response_empty(resp)
    }
} // end of impl RequestHandler
