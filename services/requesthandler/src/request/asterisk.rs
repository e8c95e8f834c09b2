use std::collections::BTreeMap;

use voipbin_common::constant::content_type;
use voipbin_common::model::sock::{RequestMethod, Response};

use super::{
    parse_response, parse_response_empty, timeout, AppRequestError, AppRequestErrorReason,
    AppRequestProps, RequestHandler, DEFAULT_STASIS_APP,
};
use crate::api::rpc::dto::asterisk::{
    AriChannelDto, AriPlaybackDto, AstChannelCreateArgs, AstChannelCreateReqDto,
    AstContinueReqDto, AstDialReqDto, AstDtmfReqDto, AstExternalMediaReqDto, AstHangupReqDto,
    AstMuteReqDto, AstPlayReqDto, AstRecordReqDto, AstSnoopReqDto, AstVariableQuery,
    AstVariableReplyDto, AstVariableReqDto, ChannelDto, SnoopDirectionDto,
};

// Channel operations of the Asterisk REST interface (ARI), each request
// goes to the proxy next to the Asterisk instance which owns the channel.
impl RequestHandler {
    pub async fn ast_channel_answer(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/answer");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/answer");
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    /// move the channel to given location of the dialplan
    pub async fn ast_channel_continue(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        context: &str,
        extension: &str,
        priority: i64,
        label: &str,
    ) -> Result<(), AppRequestError> {
        let body = AstContinueReqDto {
            context,
            extension,
            priority,
            label,
        };
        let uri = format!("/ari/channels/{channel_id}/continue");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/continue").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    /// `cause` is one of the Q.850 codes in `channel_cause`, non-zero
    /// `delay_ms` schedules the hangup
    pub async fn ast_channel_hangup(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        cause: u16,
        delay_ms: u32,
    ) -> Result<(), AppRequestError> {
        let body = AstHangupReqDto {
            reason_code: cause.to_string(),
        };
        let uri = format!("/ari/channels/{channel_id}");
        let props = AppRequestProps::new(RequestMethod::Delete, uri, "ast/channels/hangup")
            .delay(delay_ms)
            .json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    pub async fn ast_channel_variable_get(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        variable: &str,
    ) -> Result<String, AppRequestError> {
        let serial = serde_qs::to_string(&AstVariableQuery { variable })
            .map_err(|e| AppRequestErrorReason::EncodeRequest(e.to_string()))?;
        let uri = format!("/ari/channels/{channel_id}/variable?{serial}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, "ast/channels/var")
            .data_type(content_type::JSON);
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        let reply = parse_response::<AstVariableReplyDto>(resp)?;
        Ok(reply.value)
    }

    pub async fn ast_channel_variable_set(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        variable: &str,
        value: &str,
    ) -> Result<(), AppRequestError> {
        let body = AstVariableReqDto { variable, value };
        let uri = format!("/ari/channels/{channel_id}/variable");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/var").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    pub async fn ast_channel_create(
        &self,
        asterisk_id: &str,
        args: &AstChannelCreateArgs,
    ) -> Result<ChannelDto, AppRequestError> {
        let body = AstChannelCreateReqDto {
            endpoint: args.endpoint.as_str(),
            app: DEFAULT_STASIS_APP,
            app_args: args.app_args.as_str(),
            channel_id: args.channel_id.as_str(),
            other_channel_id: args.other_channel_id.as_str(),
            originator: args.originator.as_str(),
            formats: args.formats.as_str(),
            variables: &args.variables,
        };
        let uri = "/ari/channels/create".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, "ast/channels").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        Self::parse_ari_channel(asterisk_id, resp)
    }

    /// `spy` is the direction of audio to listen to, `whisper` the direction
    /// of audio to inject
    pub async fn ast_channel_create_snoop(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        snoop_id: &str,
        app_args: &str,
        spy: SnoopDirectionDto,
        whisper: SnoopDirectionDto,
    ) -> Result<ChannelDto, AppRequestError> {
        let body = AstSnoopReqDto {
            spy,
            whisper,
            app: DEFAULT_STASIS_APP,
            app_args,
            snoop_id,
        };
        let uri = format!("/ari/channels/{channel_id}/snoop");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/snoop").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        Self::parse_ari_channel(asterisk_id, resp)
    }

    pub async fn ast_channel_get(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<ChannelDto, AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}");
        let props = AppRequestProps::new(RequestMethod::Get, uri, "ast/channels")
            .data_type(content_type::JSON);
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        Self::parse_ari_channel(asterisk_id, resp)
    }

    /// durations in milliseconds
    #[allow(clippy::too_many_arguments)]
    pub async fn ast_channel_dtmf(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        digits: &str,
        duration: u32,
        before: u32,
        between: u32,
        after: u32,
    ) -> Result<(), AppRequestError> {
        let body = AstDtmfReqDto {
            dtmf: digits,
            duration,
            before,
            between,
            after,
        };
        let uri = format!("/ari/channels/{channel_id}/dtmf");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/dtmf").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    /// `timeout_secs` is how long the remote end rings, zero means
    /// default of the Asterisk instance
    pub async fn ast_channel_dial(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        caller: &str,
        timeout_secs: u32,
    ) -> Result<(), AppRequestError> {
        let body = AstDialReqDto {
            caller,
            timeout: timeout_secs,
        };
        let uri = format!("/ari/channels/{channel_id}/dial");
        let props =
            AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/dial").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn ast_channel_play(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        medias: &[String],
        language: &str,
        offset_ms: u32,
        skip_ms: u32,
        playback_id: &str,
    ) -> Result<AriPlaybackDto, AppRequestError> {
        let body = AstPlayReqDto {
            media: medias,
            playback_id,
            lang: language,
            offsetms: offset_ms,
            skipms: skip_ms,
        };
        let uri = format!("/ari/channels/{channel_id}/play");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/play")
            .timeout(timeout::MEDIA)
            .json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response(resp)
    }

    /// `duration` and `silence` in seconds, `if_exists` is one of `fail`,
    /// `overwrite` or `append`
    #[allow(clippy::too_many_arguments)]
    pub async fn ast_channel_record(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        filename: &str,
        format: &str,
        duration: u32,
        silence: u32,
        beep: bool,
        end_key: &str,
        if_exists: &str,
    ) -> Result<(), AppRequestError> {
        let body = AstRecordReqDto {
            name: filename,
            format,
            max_duration_seconds: duration,
            max_silence_seconds: silence,
            beep,
            terminate_on: end_key,
            if_exists,
        };
        let uri = format!("/ari/channels/{channel_id}/record");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/record")
            .timeout(timeout::MEDIA)
            .json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn ast_channel_external_media(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        external_host: &str,
        encapsulation: &str,
        transport: &str,
        connection_type: &str,
        format: &str,
        direction: &str,
        data: &str,
        variables: &BTreeMap<String, String>,
    ) -> Result<ChannelDto, AppRequestError> {
        let body = AstExternalMediaReqDto {
            channel_id,
            app: DEFAULT_STASIS_APP,
            external_host,
            encapsulation,
            transport,
            connection_type,
            format,
            direction,
            data,
            variables,
        };
        let uri = "/ari/channels/externalMedia".to_string();
        let props = AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/externalmedia")
            .timeout(timeout::MEDIA)
            .json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        Self::parse_ari_channel(asterisk_id, resp)
    }

    pub async fn ast_channel_ring(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/ring");
        let props = AppRequestProps::new(RequestMethod::Post, uri, "ast/channels/ring")
            .data_type(content_type::JSON);
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    pub async fn ast_channel_hold_on(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/hold");
        self._ast_toggle(asterisk_id, RequestMethod::Post, uri, "ast/channels/hold")
            .await
    }

    pub async fn ast_channel_hold_off(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/hold");
        self._ast_toggle(asterisk_id, RequestMethod::Delete, uri, "ast/channels/hold")
            .await
    }

    pub async fn ast_channel_music_on_hold_on(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/moh");
        self._ast_toggle(asterisk_id, RequestMethod::Post, uri, "ast/channels/moh")
            .await
    }

    pub async fn ast_channel_music_on_hold_off(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/moh");
        self._ast_toggle(asterisk_id, RequestMethod::Delete, uri, "ast/channels/moh")
            .await
    }

    pub async fn ast_channel_silence_on(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/silence");
        self._ast_toggle(asterisk_id, RequestMethod::Post, uri, "ast/channels/silence")
            .await
    }

    pub async fn ast_channel_silence_off(
        &self,
        asterisk_id: &str,
        channel_id: &str,
    ) -> Result<(), AppRequestError> {
        let uri = format!("/ari/channels/{channel_id}/silence");
        self._ast_toggle(asterisk_id, RequestMethod::Delete, uri, "ast/channels/silence")
            .await
    }

    /// `direction` is one of `in`, `out` or `both`
    pub async fn ast_channel_mute_on(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        direction: &str,
    ) -> Result<(), AppRequestError> {
        self._ast_mute(asterisk_id, RequestMethod::Post, channel_id, direction)
            .await
    }

    pub async fn ast_channel_mute_off(
        &self,
        asterisk_id: &str,
        channel_id: &str,
        direction: &str,
    ) -> Result<(), AppRequestError> {
        self._ast_mute(asterisk_id, RequestMethod::Delete, channel_id, direction)
            .await
    }

    async fn _ast_toggle(
        &self,
        asterisk_id: &str,
        method: RequestMethod,
        uri: String,
        resource: &'static str,
    ) -> Result<(), AppRequestError> {
        let props = AppRequestProps::new(method, uri, resource);
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    async fn _ast_mute(
        &self,
        asterisk_id: &str,
        method: RequestMethod,
        channel_id: &str,
        direction: &str,
    ) -> Result<(), AppRequestError> {
        let body = AstMuteReqDto { direction };
        let uri = format!("/ari/channels/{channel_id}/mute");
        let props = AppRequestProps::new(method, uri, "ast/channels/mute").json(&body)?;
        let resp = self.send_to_asterisk(asterisk_id, props).await?;
        parse_response_empty(resp)
    }

    fn parse_ari_channel(
        asterisk_id: &str,
        resp: Option<Response>,
    ) -> Result<ChannelDto, AppRequestError> {
        let raw = parse_response::<AriChannelDto>(resp)?;
        let mut out = ChannelDto::from(raw);
        out.asterisk_id = asterisk_id.to_string();
        Ok(out)
    }
} // end of impl RequestHandler
