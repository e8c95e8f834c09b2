mod amqp;
mod mock;

use std::boxed::Box;
use std::marker::{Send, Sync};
use std::result::Result;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use voipbin_common::confidentiality::AbstractConfidentiality;
use voipbin_common::config::{AppBasepathCfg, AppRpcCfg};
use voipbin_common::logging::AppLogContext;

use self::amqp::AppAmqpRpcContext;
use self::mock::AppMockRpcContext;

#[derive(Debug, Clone, PartialEq)]
pub enum AppRpcErrorFnLabel {
    InitCtx,
    AcquireClientConn,
    ClientSendReq,
    ClientSendDelayedReq,
    ClientRecvResp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppRpcErrorReason {
    NotSupport,
    InvalidCredential,
    CorruptedCredential,
    SysIo(std::io::ErrorKind, String),
    LowLevelConn(String),
    InvalidRoute(String),
    InternalConfig(String),
    CorruptedPayload(String),
    RequestConfirm(String),
    ReplyFailure(String),
    ReplyTimeout(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppRpcCtxError {
    pub fn_label: AppRpcErrorFnLabel,
    pub reason: AppRpcErrorReason,
}

// async trait method returning `dyn Trait` is not supported yet, so
// crate `async-trait` is still applied at here

#[async_trait]
pub trait AbsRpcClientContext: Sync + Send {
    async fn acquire(&self) -> Result<Box<dyn AbstractRpcClient>, AppRpcCtxError>;
}

pub trait AbstractRpcContext: AbsRpcClientContext {}

#[async_trait]
pub trait AbstractRpcClient: Sync + Send {
    /// publish a request and return an event which can wait for the reply
    async fn send_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
    ) -> Result<Box<dyn AbstractRpcPublishEvent>, AppRpcCtxError>;

    /// publish a request which is held by the broker for the given delay
    /// before it is routed to the target queue, the receiver never replies
    async fn send_delayed_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
        delay: Duration,
    ) -> Result<(), AppRpcCtxError>;
}

#[async_trait]
pub trait AbstractRpcPublishEvent: Sync + Send {
    async fn receive_response(&mut self, timeout: Duration) -> Result<AppRpcReply, AppRpcCtxError>;
}

pub struct AppRpcClientRequest {
    pub id: String, // will be postfix of correlation-id in basic property
    pub message: Vec<u8>,
    pub route: String, // name of the target queue
}

pub struct AppRpcReply {
    pub message: Vec<u8>,
}

pub(crate) fn build_context(
    basepath: &AppBasepathCfg,
    cfg: &AppRpcCfg,
    cfdntl: Arc<Box<dyn AbstractConfidentiality>>,
    logctx: Arc<AppLogContext>,
) -> Result<Box<dyn AbstractRpcContext>, AppRpcCtxError> {
    match cfg {
        AppRpcCfg::AMQP(c) => {
            let obj = AppAmqpRpcContext::try_build(c, cfdntl, logctx)?;
            Ok(Box::new(obj))
        }
        AppRpcCfg::Mock(c) => {
            let obj = AppMockRpcContext::try_build(basepath, c, logctx)?;
            Ok(Box::new(obj))
        }
    }
}
