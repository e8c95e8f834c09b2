use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::model::address::Address;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri_with_filters, parse_response, parse_response_empty, AppRequestError,
    AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::call::{
    GroupcallAnswerMethodDto, GroupcallAnswerReqDto, GroupcallCreateReqDto, GroupcallDto,
    GroupcallRingMethodDto,
};

const RESOURCE: &str = "call/groupcalls";

impl RequestHandler {
    pub async fn call_v1_groupcall_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<GroupcallDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/groupcalls", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn call_v1_groupcall_create(
        &self,
        id: Uuid,
        customer_id: Uuid,
        flow_id: Uuid,
        source: &Address,
        destinations: &[Address],
        master_call_id: Uuid,
        master_groupcall_id: Uuid,
        ring_method: GroupcallRingMethodDto,
        answer_method: GroupcallAnswerMethodDto,
    ) -> Result<GroupcallDto, AppRequestError> {
        let body = GroupcallCreateReqDto {
            id,
            customer_id,
            flow_id,
            source,
            destinations,
            master_call_id,
            master_groupcall_id,
            ring_method,
            answer_method,
        };
        let uri = "/v1/groupcalls".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_groupcall_get(
        &self,
        groupcall_id: Uuid,
    ) -> Result<GroupcallDto, AppRequestError> {
        let uri = format!("/v1/groupcalls/{groupcall_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_groupcall_delete(
        &self,
        groupcall_id: Uuid,
    ) -> Result<GroupcallDto, AppRequestError> {
        let uri = format!("/v1/groupcalls/{groupcall_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_groupcall_hangup(
        &self,
        groupcall_id: Uuid,
    ) -> Result<GroupcallDto, AppRequestError> {
        let uri = format!("/v1/groupcalls/{groupcall_id}/hangup");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_groupcall_update_answer_groupcall_id(
        &self,
        groupcall_id: Uuid,
        answer_groupcall_id: Uuid,
    ) -> Result<GroupcallDto, AppRequestError> {
        let body = GroupcallAnswerReqDto {
            answer_groupcall_id,
        };
        let uri = format!("/v1/groupcalls/{groupcall_id}/answer_groupcall_id");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    /// hang up the other ringing calls once one of them is answered
    pub async fn call_v1_groupcall_hangup_others(
        &self,
        groupcall_id: Uuid,
    ) -> Result<(), AppRequestError> {
        self._groupcall_hangup_part(groupcall_id, "hangup_others")
            .await
    }

    pub async fn call_v1_groupcall_hangup_call(
        &self,
        groupcall_id: Uuid,
    ) -> Result<(), AppRequestError> {
        self._groupcall_hangup_part(groupcall_id, "hangup_call")
            .await
    }

    pub async fn call_v1_groupcall_hangup_groupcall(
        &self,
        groupcall_id: Uuid,
    ) -> Result<(), AppRequestError> {
        self._groupcall_hangup_part(groupcall_id, "hangup_groupcall")
            .await
    }

    async fn _groupcall_hangup_part(
        &self,
        groupcall_id: Uuid,
        action: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/groupcalls/{groupcall_id}/{action}");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }
} // end of impl RequestHandler
