use std::boxed::Box;
use std::result::Result;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;

use voipbin_common::adapter::rpc::MockDataSource;
use voipbin_common::config::{AppBasepathCfg, AppRpcMockCfg};
use voipbin_common::logging::{app_log_event, AppLogContext, AppLogLevel};

use super::{
    AbsRpcClientContext, AbstractRpcClient, AbstractRpcContext, AbstractRpcPublishEvent,
    AppRpcClientRequest, AppRpcCtxError, AppRpcErrorFnLabel, AppRpcErrorReason, AppRpcReply,
};

pub(super) struct AppMockRpcContext {
    inner: Arc<AsyncMutex<MockDataSource>>,
    logctx: Arc<AppLogContext>,
}
struct AppMockRpcClient {
    inner: Arc<AsyncMutex<MockDataSource>>,
    logctx: Arc<AppLogContext>,
}
struct AppMockRpcPublishEvent {
    msg: Option<Vec<u8>>,
}

impl AppMockRpcContext {
    pub(super) fn try_build(
        basepath: &AppBasepathCfg,
        cfg: &AppRpcMockCfg,
        logctx: Arc<AppLogContext>,
    ) -> Result<Self, AppRpcCtxError> {
        let data = MockDataSource::try_build(basepath, cfg).map_err(Self::map_err_init)?;
        Ok(Self {
            inner: Arc::new(AsyncMutex::new(data)),
            logctx,
        })
    }

    fn map_err_init(detail: String) -> AppRpcCtxError {
        AppRpcCtxError {
            fn_label: AppRpcErrorFnLabel::InitCtx,
            reason: AppRpcErrorReason::InternalConfig(detail),
        }
    }
}

#[async_trait]
impl AbsRpcClientContext for AppMockRpcContext {
    async fn acquire(&self) -> Result<Box<dyn AbstractRpcClient>, AppRpcCtxError> {
        let obj = AppMockRpcClient {
            inner: self.inner.clone(),
            logctx: self.logctx.clone(),
        };
        Ok(Box::new(obj))
    }
}

impl AbstractRpcContext for AppMockRpcContext {}

#[async_trait]
impl AbstractRpcClient for AppMockRpcClient {
    async fn send_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
    ) -> Result<Box<dyn AbstractRpcPublishEvent>, AppRpcCtxError> {
        let mut guard = self.inner.lock().await;
        let value = guard
            .extract(props.route.as_str())
            .map_err(|detail| AppRpcCtxError {
                fn_label: AppRpcErrorFnLabel::ClientSendReq,
                reason: AppRpcErrorReason::InvalidRoute(detail),
            })?;
        let evt = AppMockRpcPublishEvent { msg: Some(value) };
        Ok(Box::new(evt))
    }

    async fn send_delayed_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
        delay: Duration,
    ) -> Result<(), AppRpcCtxError> {
        let logctx = self.logctx.as_ref();
        app_log_event!(
            logctx,
            AppLogLevel::DEBUG,
            "route: {}, delay: {:?}, size: {}",
            props.route,
            delay,
            props.message.len()
        );
        Ok(())
    }
}

#[async_trait]
impl AbstractRpcPublishEvent for AppMockRpcPublishEvent {
    async fn receive_response(
        &mut self,
        _timeout: Duration,
    ) -> Result<AppRpcReply, AppRpcCtxError> {
        self.msg
            .take()
            .map(|message| AppRpcReply { message })
            .ok_or(AppRpcCtxError {
                fn_label: AppRpcErrorFnLabel::ClientRecvResp,
                reason: AppRpcErrorReason::ReplyFailure("already-taken".to_string()),
            })
    }
}
