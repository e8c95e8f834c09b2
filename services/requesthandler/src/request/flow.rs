use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, timeout, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::flow::{
    ActionDto, FlowActionsReqDto, FlowCreateReqDto, FlowDto, FlowTypeDto, FlowUpdateReqDto,
};

const RESOURCE: &str = "flow/flows";

impl RequestHandler {
    /// non-persistent flow is removed by the flow manager once its
    /// activeflow ends
    pub async fn flow_v1_flow_create(
        &self,
        customer_id: Uuid,
        type_: FlowTypeDto,
        name: &str,
        detail: &str,
        actions: &[ActionDto],
        persist: bool,
    ) -> Result<FlowDto, AppRequestError> {
        let body = FlowCreateReqDto {
            customer_id,
            type_,
            name,
            detail,
            actions,
            persist,
        };
        let uri = "/v1/flows".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    /// only name, detail and actions of `flow` are updated
    pub async fn flow_v1_flow_update(&self, flow: &FlowDto) -> Result<FlowDto, AppRequestError> {
        let body = FlowUpdateReqDto {
            name: flow.name.as_str(),
            detail: flow.detail.as_str(),
            actions: flow.actions.as_slice(),
        };
        let uri = format!("/v1/flows/{}", flow.id);
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_flow_update_actions(
        &self,
        id: Uuid,
        actions: &[ActionDto],
    ) -> Result<FlowDto, AppRequestError> {
        let body = FlowActionsReqDto { actions };
        let uri = format!("/v1/flows/{id}/actions");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_flow_get(&self, id: Uuid) -> Result<FlowDto, AppRequestError> {
        let uri = format!("/v1/flows/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_flow_delete(&self, id: Uuid) -> Result<FlowDto, AppRequestError> {
        let uri = format!("/v1/flows/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }

    pub async fn flow_v1_flow_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<FlowDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/flows", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Flow, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
