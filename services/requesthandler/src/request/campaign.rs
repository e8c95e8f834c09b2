use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri, parse_response, parse_response_empty, timeout, AppRequestError, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::campaign::{
    CampaignBasicInfoReqDto, CampaignCreateReqDto, CampaignDto, CampaignEndHandleDto,
    CampaignNextIdReqDto, CampaignResourceInfo, CampaignServiceLevelReqDto, CampaignStatusDto,
    CampaignStatusReqDto, CampaignTypeDto,
};
use crate::api::rpc::dto::flow::{ActionDto, FlowActionsReqDto};

const RESOURCE: &str = "campaign/campaigns";

impl RequestHandler {
    #[allow(clippy::too_many_arguments)]
    pub async fn campaign_v1_campaign_create(
        &self,
        id: Uuid,
        customer_id: Uuid,
        type_: CampaignTypeDto,
        name: &str,
        detail: &str,
        actions: &[ActionDto],
        service_level: u32,
        end_handle: CampaignEndHandleDto,
        resource: &CampaignResourceInfo,
    ) -> Result<CampaignDto, AppRequestError> {
        let body = CampaignCreateReqDto {
            id,
            customer_id,
            type_,
            name,
            detail,
            service_level,
            end_handle,
            actions,
            resource,
        };
        let uri = "/v1/campaigns".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    /// customer ID is a plain query parameter, not a filter
    pub async fn campaign_v1_campaign_gets_by_customer_id(
        &self,
        customer_id: Uuid,
        page_token: &str,
        page_size: u64,
    ) -> Result<Vec<CampaignDto>, AppRequestError> {
        let uri = page_uri("/v1/campaigns", page_token, page_size)?;
        let uri = format!("{uri}&customer_id={customer_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_get(&self, id: Uuid) -> Result<CampaignDto, AppRequestError> {
        let uri = format!("/v1/campaigns/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_delete(
        &self,
        id: Uuid,
    ) -> Result<CampaignDto, AppRequestError> {
        let uri = format!("/v1/campaigns/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    /// start one round of execution, the campaign manager re-schedules
    /// itself through non-zero `delay_ms`
    pub async fn campaign_v1_campaign_execute(
        &self,
        id: Uuid,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/campaigns/{id}/execute");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "campaign/campaigns/execute")
            .delay(delay_ms)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response_empty(resp)
    }

    pub async fn campaign_v1_campaign_update_basic_info(
        &self,
        id: Uuid,
        name: &str,
        detail: &str,
        type_: CampaignTypeDto,
        service_level: u32,
        end_handle: CampaignEndHandleDto,
    ) -> Result<CampaignDto, AppRequestError> {
        let body = CampaignBasicInfoReqDto {
            name,
            detail,
            type_,
            service_level,
            end_handle,
        };
        let uri = format!("/v1/campaigns/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_update_status(
        &self,
        id: Uuid,
        status: CampaignStatusDto,
    ) -> Result<CampaignDto, AppRequestError> {
        let body = CampaignStatusReqDto { status };
        let uri = format!("/v1/campaigns/{id}/status");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_update_service_level(
        &self,
        id: Uuid,
        service_level: u32,
    ) -> Result<CampaignDto, AppRequestError> {
        let body = CampaignServiceLevelReqDto { service_level };
        let uri = format!("/v1/campaigns/{id}/service_level");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_update_actions(
        &self,
        id: Uuid,
        actions: &[ActionDto],
    ) -> Result<CampaignDto, AppRequestError> {
        let body = FlowActionsReqDto { actions };
        let uri = format!("/v1/campaigns/{id}/actions");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_update_resource_info(
        &self,
        id: Uuid,
        resource: &CampaignResourceInfo,
    ) -> Result<CampaignDto, AppRequestError> {
        let uri = format!("/v1/campaigns/{id}/resource_info");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(resource)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }

    pub async fn campaign_v1_campaign_update_next_campaign_id(
        &self,
        id: Uuid,
        next_campaign_id: Uuid,
    ) -> Result<CampaignDto, AppRequestError> {
        let body = CampaignNextIdReqDto { next_campaign_id };
        let uri = format!("/v1/campaigns/{id}/next_campaign_id");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Campaign, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
