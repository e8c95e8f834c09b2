use std::collections::BTreeMap;

use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::model::address::Address;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    join_ids, page_uri, parse_response, timeout, wire_string, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::agent::{
    AgentAddressesReqDto, AgentByAddressReqDto, AgentCreateReqDto, AgentDto, AgentPasswordReqDto,
    AgentPermissionReqDto, AgentRingMethodDto, AgentStatusDto, AgentStatusReqDto,
    AgentTagIdsReqDto, AgentUpdateReqDto,
};

const RESOURCE: &str = "agent/agents";

impl RequestHandler {
    #[allow(clippy::too_many_arguments)]
    pub async fn agent_v1_agent_create(
        &self,
        timeout_ms: u32,
        customer_id: Uuid,
        username: &str,
        password: &str,
        name: &str,
        detail: &str,
        ring_method: AgentRingMethodDto,
        permission: u64,
        tag_ids: &[Uuid],
        addresses: &[Address],
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentCreateReqDto {
            customer_id,
            username,
            password,
            name,
            detail,
            ring_method,
            permission,
            tag_ids,
            addresses,
        };
        let props = AppRequestProps::new(RequestMethod::Post, "/v1/agents".to_string(), RESOURCE)
            .timeout(timeout_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_get(&self, agent_id: Uuid) -> Result<AgentDto, AppRequestError> {
        let uri = format!("/v1/agents/{agent_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_get_by_customer_id_and_address(
        &self,
        timeout_ms: u32,
        customer_id: Uuid,
        address: &Address,
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentByAddressReqDto {
            customer_id,
            address,
        };
        let uri = "/v1/agents/get_by_customer_id_address".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE)
            .timeout(timeout_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, JsnVal>,
    ) -> Result<Vec<AgentDto>, AppRequestError> {
        let uri = page_uri("/v1/agents", page_token, page_size)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .json(filters)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_gets_by_tag_ids(
        &self,
        customer_id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<Vec<AgentDto>, AppRequestError> {
        let uri = format!(
            "/v1/agents?customer_id={customer_id}&tag_ids={}",
            join_ids(tag_ids)
        );
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_gets_by_tag_ids_and_status(
        &self,
        customer_id: Uuid,
        tag_ids: &[Uuid],
        status: AgentStatusDto,
    ) -> Result<Vec<AgentDto>, AppRequestError> {
        let status = wire_string(&status)?;
        let uri = format!(
            "/v1/agents?customer_id={customer_id}&tag_ids={}&status={status}",
            join_ids(tag_ids)
        );
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_delete(&self, id: Uuid) -> Result<AgentDto, AppRequestError> {
        let uri = format!("/v1/agents/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_update(
        &self,
        id: Uuid,
        name: &str,
        detail: &str,
        ring_method: AgentRingMethodDto,
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentUpdateReqDto {
            name,
            detail,
            ring_method,
        };
        let uri = format!("/v1/agents/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_update_addresses(
        &self,
        id: Uuid,
        addresses: &[Address],
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentAddressesReqDto { addresses };
        let uri = format!("/v1/agents/{id}/addresses");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_update_password(
        &self,
        timeout_ms: u32,
        id: Uuid,
        password: &str,
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentPasswordReqDto { password };
        let uri = format!("/v1/agents/{id}/password");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE)
            .timeout(timeout_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_update_tag_ids(
        &self,
        id: Uuid,
        tag_ids: &[Uuid],
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentTagIdsReqDto { tag_ids };
        let uri = format!("/v1/agents/{id}/tag_ids");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_update_status(
        &self,
        id: Uuid,
        status: AgentStatusDto,
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentStatusReqDto { status };
        let uri = format!("/v1/agents/{id}/status");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }

    pub async fn agent_v1_agent_update_permission(
        &self,
        id: Uuid,
        permission: u64,
    ) -> Result<AgentDto, AppRequestError> {
        let body = AgentPermissionReqDto { permission };
        let uri = format!("/v1/agents/{id}/permission");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Agent, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
