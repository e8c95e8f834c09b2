use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::address::Address;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri, parse_response, timeout, AppRequestError, AppRequestErrorReason, AppRequestProps,
    RequestHandler,
};
use crate::api::rpc::dto::outdial::{
    OutdialtargetAvailableQuery, OutdialtargetCreateReqDto, OutdialtargetDto,
    OutdialtargetProgressingReqDto, OutdialtargetStatusDto, OutdialtargetStatusReqDto,
    NUM_DESTINATIONS,
};

const RESOURCE: &str = "outdial/outdialtargets";

impl RequestHandler {
    /// absent destinations are omitted from the request
    pub async fn outdial_v1_outdialtarget_create(
        &self,
        outdial_id: Uuid,
        name: &str,
        detail: &str,
        data: &str,
        destinations: [Option<&Address>; NUM_DESTINATIONS],
    ) -> Result<OutdialtargetDto, AppRequestError> {
        let [destination_0, destination_1, destination_2, destination_3, destination_4] =
            destinations;
        let body = OutdialtargetCreateReqDto {
            name,
            detail,
            data,
            destination_0,
            destination_1,
            destination_2,
            destination_3,
            destination_4,
        };
        let uri = format!("/v1/outdials/{outdial_id}/targets");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }

    /// `max_try_counts` holds the try limit of each destination in order
    pub async fn outdial_v1_outdialtarget_gets_available(
        &self,
        outdial_id: Uuid,
        max_try_counts: [u32; NUM_DESTINATIONS],
        limit: u32,
    ) -> Result<Vec<OutdialtargetDto>, AppRequestError> {
        let [try_count_0, try_count_1, try_count_2, try_count_3, try_count_4] = max_try_counts;
        let q = OutdialtargetAvailableQuery {
            try_count_0,
            try_count_1,
            try_count_2,
            try_count_3,
            try_count_4,
            limit,
        };
        let serial = serde_qs::to_string(&q)
            .map_err(|e| AppRequestErrorReason::EncodeRequest(e.to_string()))?;
        let uri = format!("/v1/outdials/{outdial_id}/available?{serial}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }

    pub async fn outdial_v1_outdialtarget_gets_by_outdial_id(
        &self,
        outdial_id: Uuid,
        page_token: &str,
        page_size: u64,
    ) -> Result<Vec<OutdialtargetDto>, AppRequestError> {
        let path = format!("/v1/outdials/{outdial_id}/targets");
        let uri = page_uri(path.as_str(), page_token, page_size)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }

    pub async fn outdial_v1_outdialtarget_get(
        &self,
        id: Uuid,
    ) -> Result<OutdialtargetDto, AppRequestError> {
        let uri = format!("/v1/outdialtargets/{id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }

    pub async fn outdial_v1_outdialtarget_delete(
        &self,
        id: Uuid,
    ) -> Result<OutdialtargetDto, AppRequestError> {
        let uri = format!("/v1/outdialtargets/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE)
            .data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }

    /// mark the target progressing on the destination at `destination_index`,
    /// its try count is increased by the outdial manager
    pub async fn outdial_v1_outdialtarget_update_status_progressing(
        &self,
        id: Uuid,
        destination_index: usize,
    ) -> Result<OutdialtargetDto, AppRequestError> {
        if destination_index >= NUM_DESTINATIONS {
            let detail = format!("destination-index: {destination_index}");
            return Err(AppRequestError {
                reason: AppRequestErrorReason::EncodeRequest("out-of-range".to_string()),
                detail: Some(detail),
            });
        }
        let body = OutdialtargetProgressingReqDto { destination_index };
        let uri = format!("/v1/outdialtargets/{id}/progressing");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }

    pub async fn outdial_v1_outdialtarget_update_status(
        &self,
        id: Uuid,
        status: OutdialtargetStatusDto,
    ) -> Result<OutdialtargetDto, AppRequestError> {
        let body = OutdialtargetStatusReqDto { status };
        let uri = format!("/v1/outdialtargets/{id}/status");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Outdial, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
