use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use super::{parse_response, parse_response_empty, AppRequestError, AppRequestProps, RequestHandler};
use crate::api::rpc::dto::call::{
    ConfbridgeCreateReqDto, ConfbridgeDto, ConfbridgeFlagDto, ConfbridgeFlagReqDto,
    ConfbridgeTypeDto, ExternalMediaArgs, RecordingFormatDto, RecordingStartReqDto,
};

const RESOURCE: &str = "call/confbridges";

impl RequestHandler {
    pub async fn call_v1_confbridge_create(
        &self,
        customer_id: Uuid,
        type_: ConfbridgeTypeDto,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let body = ConfbridgeCreateReqDto { customer_id, type_ };
        let uri = "/v1/confbridges".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_confbridge_get(
        &self,
        confbridge_id: Uuid,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}");
        let props =
            AppRequestProps::new(RequestMethod::Get, uri, RESOURCE).data_type(content_type::JSON);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_confbridge_external_media_start(
        &self,
        confbridge_id: Uuid,
        args: &ExternalMediaArgs,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}/external-media");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(args)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_confbridge_external_media_stop(
        &self,
        confbridge_id: Uuid,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}/external-media");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn call_v1_confbridge_recording_start(
        &self,
        confbridge_id: Uuid,
        format: RecordingFormatDto,
        end_of_silence: u32,
        end_of_key: &str,
        duration: u32,
        on_end_flow_id: Uuid,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let body = RecordingStartReqDto {
            format,
            end_of_silence,
            end_of_key,
            duration,
            on_end_flow_id,
        };
        let uri = format!("/v1/confbridges/{confbridge_id}/recording_start");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_confbridge_recording_stop(
        &self,
        confbridge_id: Uuid,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}/recording_stop");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_confbridge_flag_add(
        &self,
        confbridge_id: Uuid,
        flag: ConfbridgeFlagDto,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        self._confbridge_flag(RequestMethod::Post, confbridge_id, flag)
            .await
    }

    pub async fn call_v1_confbridge_flag_remove(
        &self,
        confbridge_id: Uuid,
        flag: ConfbridgeFlagDto,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        self._confbridge_flag(RequestMethod::Delete, confbridge_id, flag)
            .await
    }

    /// hang up all the calls in the confbridge and remove the bridge
    pub async fn call_v1_confbridge_terminate(
        &self,
        confbridge_id: Uuid,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}/terminate");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }

    pub async fn call_v1_confbridge_ring(
        &self,
        confbridge_id: Uuid,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}/ring");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    pub async fn call_v1_confbridge_answer(
        &self,
        confbridge_id: Uuid,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/v1/confbridges/{confbridge_id}/answer");
        let props = AppRequestProps::new(RequestMethod::Post, uri, RESOURCE);
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response_empty(resp)
    }

    async fn _confbridge_flag(
        &self,
        method: RequestMethod,
        confbridge_id: Uuid,
        flag: ConfbridgeFlagDto,
    ) -> Result<ConfbridgeDto, AppRequestError> {
        let body = ConfbridgeFlagReqDto { flag };
        let uri = format!("/v1/confbridges/{confbridge_id}/flags");
        let props = AppRequestProps::new(method, uri, RESOURCE).json(&body)?;
        let resp = self.send_to(QueueName::Call, props).await?;
        parse_response(resp)
    }
} // end of impl RequestHandler
