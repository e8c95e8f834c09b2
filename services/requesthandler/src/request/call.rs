use std::collections::BTreeMap;

use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::address::Address;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{
    page_uri, page_uri_with_filters, parse_response, parse_response_empty, timeout,
    AppRequestError, AppRequestProps, RequestHandler,
};
use crate::api::rpc::dto::call::{
    CallActionNextReqDto, CallActionTimeoutReqDto, CallChainedCallReqDto,
    CallConfbridgeIdReqDto, CallCreateWithIdArgs, CallDigitsDto, CallDto, CallHealthReqDto,
    CallPlayReqDto, CallTalkReqDto, CallsCreateReplyDto, CallsCreateReqDto, ExternalMediaArgs,
    GroupcallDto, MediaDirectionDto, MediaDirectionReqDto, RecordingFormatDto,
    RecordingStartReqDto,
};
use crate::api::rpc::dto::flow::ActionDto;

const RESOURCE: &str = "call/calls";

impl RequestHandler {
    /// `delay_ms` schedules the health check, the reply is not awaited
    /// in such case
    pub async fn call_v1_call_health(
        &self,
        id: Uuid,
        delay_ms: u32,
        retry_count: u32,
    ) -> Result<(), AppRequestError> {
        let body = CallHealthReqDto { retry_count };
        let uri = format!("/v1/calls/{id}/health-check");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "call/calls/health")
            .delay(delay_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    pub async fn call_v1_call_action_timeout(
        &self,
        id: Uuid,
        delay_ms: u32,
        action: &ActionDto,
    ) -> Result<(), AppRequestError> {
        let body = CallActionTimeoutReqDto {
            action_id: action.id,
            action_type: action.type_.as_str(),
            tm_execute: action.tm_execute.as_str(),
        };
        let uri = format!("/v1/calls/{id}/action-timeout");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "call/calls/<call-id>/action-timeout")
                .delay(delay_ms)
                .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    pub async fn call_v1_call_action_next(
        &self,
        call_id: Uuid,
        force: bool,
    ) -> Result<(), AppRequestError> {
        let body = CallActionNextReqDto { force };
        let uri = format!("/v1/calls/{call_id}/action-next");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "call/calls/<call-id>/action-next")
                .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    /// Create calls and groupcalls depending on type of each destination,
    /// e.g. an agent destination turns into a groupcall ringing all the
    /// agent's addresses.
    #[allow(clippy::too_many_arguments)]
    pub async fn call_v1_calls_create(
        &self,
        customer_id: Uuid,
        flow_id: Uuid,
        master_call_id: Uuid,
        source: &Address,
        destinations: &[Address],
        early_execution: bool,
        connect: bool,
    ) -> Result<(Vec<CallDto>, Vec<GroupcallDto>), AppRequestError> {
        let body = CallsCreateReqDto {
            flow_id,
            customer_id,
            master_call_id,
            source,
            destinations,
            early_execution,
            connect,
        };
        let props = AppRequestProps::new(RequestMethod::Post, "/v1/calls".to_string(), RESOURCE)
            .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        let reply = parse_response::<CallsCreateReplyDto>(resp)?;
        Ok((reply.calls, reply.groupcalls))
    }

    pub async fn call_v1_call_create_with_id(
        &self,
        id: Uuid,
        args: &CallCreateWithIdArgs<'_>,
    ) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{id}");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(args)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_get(&self, call_id: Uuid) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_gets(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, String>,
    ) -> Result<Vec<CallDto>, AppRequestError> {
        let uri = page_uri_with_filters("/v1/calls", page_token, page_size, filters)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_list(
        &self,
        page_token: &str,
        page_size: u64,
        filters: &BTreeMap<String, JsnVal>,
    ) -> Result<Vec<CallDto>, AppRequestError> {
        let uri = page_uri("/v1/calls", page_token, page_size)?;
        let props = AppRequestProps::new(RequestMethod::Get, uri, RESOURCE)
            .timeout(timeout::LIST)
            .json(filters)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_delete(&self, call_id: Uuid) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_hangup(&self, call_id: Uuid) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/hangup");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_add_chained_call(
        &self,
        call_id: Uuid,
        chained_call_id: Uuid,
    ) -> Result<CallDto, AppRequestError> {
        let body = CallChainedCallReqDto { chained_call_id };
        let uri = format!("/v1/calls/{call_id}/chained-call-ids");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_remove_chained_call(
        &self,
        call_id: Uuid,
        chained_call_id: Uuid,
    ) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/chained-call-ids/{chained_call_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_external_media_start(
        &self,
        call_id: Uuid,
        args: &ExternalMediaArgs,
    ) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/external-media");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(args)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_external_media_stop(
        &self,
        call_id: Uuid,
    ) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/external-media");
        let props =
            AppRequestProps::new(RequestMethod::Delete, uri, "call/calls/<call-id>/external-media");
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    /// digits received so far by the call
    pub async fn call_v1_call_get_digits(&self, call_id: Uuid) -> Result<String, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/digits");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Call, props).await?;
        let reply = parse_response::<CallDigitsDto>(resp)?;
        Ok(reply.digits)
    }

    pub async fn call_v1_call_send_digits(
        &self,
        call_id: Uuid,
        digits: &str,
    ) -> Result<(), AppRequestError> {
        let body = CallDigitsDto {
            digits: digits.to_string(),
        };
        let uri = format!("/v1/calls/{call_id}/digits");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    /// `end_of_silence` in milliseconds, `duration` in seconds
    #[allow(clippy::too_many_arguments)]
    pub async fn call_v1_call_recording_start(
        &self,
        call_id: Uuid,
        format: RecordingFormatDto,
        end_of_silence: u32,
        end_of_key: &str,
        duration: u32,
        on_end_flow_id: Uuid,
    ) -> Result<CallDto, AppRequestError> {
        let body = RecordingStartReqDto {
            format,
            end_of_silence,
            end_of_key,
            duration,
            on_end_flow_id,
        };
        let uri = format!("/v1/calls/{call_id}/recording_start");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "call/calls/<call-id>/recording-start")
                .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_recording_stop(
        &self,
        call_id: Uuid,
    ) -> Result<CallDto, AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/recording_stop");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "call/calls/<call-id>/recording-stop");
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_call_update_confbridge_id(
        &self,
        call_id: Uuid,
        confbridge_id: Uuid,
    ) -> Result<CallDto, AppRequestError> {
        let body = CallConfbridgeIdReqDto { confbridge_id };
        let uri = format!("/v1/calls/{call_id}/confbridge_id");
        let props =
            AppRequestProps::new(RequestMethod::Put, uri, "call/calls/<call-id>/confbridge_id")
                .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    /// text-to-speech played to the call, speech synthesis may take longer
    /// than default timeout, the caller decides how long to wait
    pub async fn call_v1_call_talk(
        &self,
        call_id: Uuid,
        text: &str,
        gender: &str,
        language: &str,
        timeout_ms: u32,
    ) -> Result<(), AppRequestError> {
        let body = CallTalkReqDto {
            text,
            gender,
            language,
        };
        let uri = format!("/v1/calls/{call_id}/talk");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "call/calls/<call-id>/talk")
            .timeout(timeout_ms)
            .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    pub async fn call_v1_call_play(
        &self,
        call_id: Uuid,
        media_urls: &[String],
    ) -> Result<(), AppRequestError> {
        let body = CallPlayReqDto { media_urls };
        let uri = format!("/v1/calls/{call_id}/play");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "call/calls/<call-id>/play")
            .json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    /// stop media currently played by either `play` or `talk`
    pub async fn call_v1_call_media_stop(&self, call_id: Uuid) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/media_stop");
        self._call_toggle(RequestMethod::Post, uri, "call/calls/<call-id>/play")
            .await
    }

    pub async fn call_v1_call_hold_on(&self, call_id: Uuid) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/hold");
        self._call_toggle(RequestMethod::Post, uri, "call/calls/<call-id>/hold")
            .await
    }

    pub async fn call_v1_call_hold_off(&self, call_id: Uuid) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/hold");
        self._call_toggle(RequestMethod::Delete, uri, "call/calls/<call-id>/hold")
            .await
    }

    pub async fn call_v1_call_mute_on(
        &self,
        call_id: Uuid,
        direction: MediaDirectionDto,
    ) -> Result<(), AppRequestError> {
        self._call_mute(RequestMethod::Post, call_id, direction)
            .await
    }

    pub async fn call_v1_call_mute_off(
        &self,
        call_id: Uuid,
        direction: MediaDirectionDto,
    ) -> Result<(), AppRequestError> {
        self._call_mute(RequestMethod::Delete, call_id, direction)
            .await
    }

    pub async fn call_v1_call_music_on_hold_on(
        &self,
        call_id: Uuid,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/moh");
        self._call_toggle(RequestMethod::Post, uri, "call/calls/<call-id>/moh")
            .await
    }

    pub async fn call_v1_call_music_on_hold_off(
        &self,
        call_id: Uuid,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/moh");
        self._call_toggle(RequestMethod::Delete, uri, "call/calls/<call-id>/moh")
            .await
    }

    pub async fn call_v1_call_silence_on(&self, call_id: Uuid) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/silence");
        self._call_toggle(RequestMethod::Post, uri, "call/calls/<call-id>/silence")
            .await
    }

    pub async fn call_v1_call_silence_off(&self, call_id: Uuid) -> Result<(), AppRequestError> {
        let uri = format!("/v1/calls/{call_id}/silence");
        self._call_toggle(RequestMethod::Delete, uri, "call/calls/<call-id>/silence")
            .await
    }

    async fn _call_toggle(
        &self,
        method: RequestMethod,
        uri: String,
        resource: &'static str,
    ) -> Result<(), AppRequestError> {
        let props = AppRequestProps::new(method, uri, resource);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    async fn _call_mute(
        &self,
        method: RequestMethod,
        call_id: Uuid,
        direction: MediaDirectionDto,
    ) -> Result<(), AppRequestError> {
        let body = MediaDirectionReqDto { direction };
        let uri = format!("/v1/calls/{call_id}/mute");
        let props = AppRequestProps::new(method, uri, "call/calls/<call-id>/mute").json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }
} // end of impl RequestHandler
