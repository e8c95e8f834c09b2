use std::collections::BTreeMap;

use uuid::Uuid;

use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::{RequestMethod, Response};

use super::{
    page_uri_with_filters, parse_response, parse_response_empty, timeout, AppRequestError,
    AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::conference::{
    ConferenceCreateReqDto, ConferenceDto, ConferenceExtraArgs, ConferenceRecordingIdReqDto,
    ConferenceTranscribeReqDto, ConferenceTypeDto, ConferenceUpdateReqDto,
};
use crate::api::rpc::dto::flow::ActionDto;

const RESOURCE: &str = "conference/conferences";
const RESOURCE_ID: &str = "conference/conferences/<conference-id>";

impl RequestHandler {
    pub async fn conference_v1_conference_get(
        &self,
        id: Uuid,
    ) -> Result<ConferenceDto, AppRequestError> {
        let uri = format!("/v1/conferences/{id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<ConferenceDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/conferences", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).timeout(timeout::LIST);
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_delete(
        &self,
        id: Uuid,
    ) -> Result<ConferenceDto, AppRequestError> {
        let uri = format!("/v1/conferences/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE_ID);
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    /// deletion scheduled `delay_ms` later, nothing is returned
    pub async fn conference_v1_conference_delete_delay(
        &self,
        id: Uuid,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/conferences/{id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE).delay(delay_ms);
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response_empty(resp)
    }

    /// The stopped conference is returned only when `delay_ms` is zero,
    /// a scheduled stop gives `None`.
    pub async fn conference_v1_conference_stop(
        &self,
        id: Uuid,
        delay_ms: u32,
    ) -> Result<Option<ConferenceDto>, AppRequestError> {
        let uri = format!("/v1/conferences/{id}/stop");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE_ID).delay(delay_ms);
        let resp = self.send_to(QueueName::Conference, props).await?;
        match resp {
            None => Ok(None),
            r @ Some(_) => parse_response(r).map(Some),
        }
    }

    /// `timeout_ms` of zero keeps the conference until it is stopped
    #[allow(clippy::too_many_arguments)]
    pub async fn conference_v1_conference_create(
        &self,
        customer_id: Uuid,
        type_: ConferenceTypeDto,
        name: &str,
        detail: &str,
        timeout_ms: u64,
        extra: &ConferenceExtraArgs,
    ) -> Result<ConferenceDto, AppRequestError> {
        let body = ConferenceCreateReqDto {
            type_,
            customer_id,
            name,
            detail,
            timeout: timeout_ms,
            data: extra.data.as_ref(),
            pre_actions: extra.pre_actions.as_deref(),
            post_actions: extra.post_actions.as_deref(),
        };
        let uri = "/v1/conferences".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn conference_v1_conference_update(
        &self,
        id: Uuid,
        name: &str,
        detail: &str,
        timeout_ms: u64,
        pre_actions: &[ActionDto],
        post_actions: &[ActionDto],
    ) -> Result<ConferenceDto, AppRequestError> {
        let body = ConferenceUpdateReqDto {
            name,
            detail,
            timeout: timeout_ms,
            pre_actions,
            post_actions,
        };
        let uri = format!("/v1/conferences/{id}");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_update_recording_id(
        &self,
        id: Uuid,
        recording_id: Uuid,
    ) -> Result<ConferenceDto, AppRequestError> {
        let body = ConferenceRecordingIdReqDto { recording_id };
        let uri = format!("/v1/conferences/{id}/recording_id");
        let props = AppRequestProps::new(RequestMethod::Put, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_recording_start(
        &self,
        id: Uuid,
    ) -> Result<ConferenceDto, AppRequestError> {
        let uri = format!("/v1/conferences/{id}/recording_start");
        let resp = self
            ._conference_post(uri, "conference/conferences/<conference-id>/recording_start")
            .await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_recording_stop(
        &self,
        id: Uuid,
    ) -> Result<ConferenceDto, AppRequestError> {
        let uri = format!("/v1/conferences/{id}/recording_stop");
        let resp = self
            ._conference_post(uri, "conference/conferences/<conference-id>/recording_stop")
            .await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_transcribe_start(
        &self,
        id: Uuid,
        language: &str,
    ) -> Result<ConferenceDto, AppRequestError> {
        let body = ConferenceTranscribeReqDto { language };
        let uri = format!("/v1/conferences/{id}/transcribe_start");
        let props = AppRequestProps::new(
            RequestMethod::Post,
            uri,
            "conference/conferences/<conference-id>/transcribe_start",
        )
        .json(&body)?;
        let resp = self.send_to(QueueName::Conference, props).await?;
        parse_response(resp)
    }

    pub async fn conference_v1_conference_transcribe_stop(
        &self,
        id: Uuid,
    ) -> Result<ConferenceDto, AppRequestError> {
        let uri = format!("/v1/conferences/{id}/transcribe_stop");
        let resp = self
            ._conference_post(uri, "conference/conferences/<conference-id>/transcribe_stop")
            .await?;
        parse_response(resp)
    }

    async fn _conference_post(
        &self,
        uri: String,
        resource: &'static str,
    ) -> Result<Option<Response>, AppRequestError> {
        let props = AppRequestProps::new(RequestMethod::Post, uri, resource);
        self.send_to(QueueName::Conference, props).await
    }
} // end of impl RequestHandler
