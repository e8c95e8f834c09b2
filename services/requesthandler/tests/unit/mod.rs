
use std::boxed::Box;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsnVal;

use requesthandler::adapter::rpc::{
    AbsRpcClientContext, AbstractRpcClient, AbstractRpcContext, AbstractRpcPublishEvent,
    AppRpcClientRequest, AppRpcCtxError, AppRpcErrorFnLabel, AppRpcErrorReason, AppRpcReply,
};
use requesthandler::request::RequestHandler;
use requesthandler::{hard_limit, AppSharedState};
use voipbin_common::config::{AppCfgHardLimit, AppCfgInitArgs, AppConfig};
use voipbin_common::constant::content_type;
use voipbin_common::constant::env_vars::{
    CFG_FILEPATH, EXPECTED_LABELS, SERVICE_BASEPATH, SYS_BASEPATH,
};
use voipbin_common::model::sock::{Request, Response};

pub(crate) const EXAMPLE_REL_PATH: &str = "/tests/unit/examples/";

pub(crate) const UT_PUBLISHER: &str = "unittest-manager";

fn ut_setup_config(cfg_filename: &str) -> AppConfig {
    let iter = env::vars().filter(|(k, _v)| EXPECTED_LABELS.contains(&k.as_str()));
    let mut env_var_map: HashMap<String, String> = HashMap::from_iter(iter);
    let manifest_dir = env!("CARGO_MANIFEST_DIR").to_string();
    env_var_map
        .entry(SYS_BASEPATH.to_string())
        .or_insert(manifest_dir.clone());
    env_var_map
        .entry(SERVICE_BASEPATH.to_string())
        .or_insert(manifest_dir);
    let _old = env_var_map.insert(
        CFG_FILEPATH.to_string(),
        EXAMPLE_REL_PATH.to_string() + cfg_filename,
    );
    let limit = AppCfgHardLimit {
        num_rpc_conns: hard_limit::MAX_RPC_CONNECTIONS,
        num_rpc_channels: hard_limit::MAX_RPC_CHANNELS,
    };
    let args = AppCfgInitArgs { env_var_map, limit };
    AppConfig::new(args).unwrap()
}

fn ut_setup_sharestate() -> &'static AppSharedState {
    static GUARD_SHR_STATE: OnceLock<AppSharedState> = OnceLock::new();
    GUARD_SHR_STATE.get_or_init(|| {
        let cfg = ut_setup_config("config_mock.json");
        AppSharedState::new(cfg).unwrap()
    })
}

/// request captured by [`UtCaptureRpcContext`], the envelope is decoded
/// back from the published message
#[derive(Debug, Clone)]
pub(crate) struct UtSentRecord {
    pub route: String,
    pub request: Request,
    pub delay: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl UtSentRecord {
    pub(crate) fn body(&self) -> JsnVal {
        serde_json::from_slice::<JsnVal>(self.request.data.as_slice()).unwrap()
    }
}

#[derive(Default)]
struct UtRpcState {
    replies: VecDeque<Response>,
    sent: Vec<UtSentRecord>,
}

// records every request sent through it and replies with the canned
// responses in order, running out of them means reply timeout
struct UtCaptureRpcContext {
    state: Arc<Mutex<UtRpcState>>,
}
struct UtCaptureRpcClient {
    state: Arc<Mutex<UtRpcState>>,
}
struct UtCapturePublishEvent {
    state: Arc<Mutex<UtRpcState>>,
    reply: Option<Response>,
}

#[async_trait]
impl AbsRpcClientContext for UtCaptureRpcContext {
    async fn acquire(&self) -> Result<Box<dyn AbstractRpcClient>, AppRpcCtxError> {
        let obj = UtCaptureRpcClient {
            state: self.state.clone(),
        };
        Ok(Box::new(obj))
    }
}

impl AbstractRpcContext for UtCaptureRpcContext {}

impl UtCaptureRpcClient {
    fn record(&self, props: AppRpcClientRequest, delay: Option<Duration>) {
        let request = serde_json::from_slice::<Request>(props.message.as_slice()).unwrap();
        let item = UtSentRecord {
            route: props.route,
            request,
            delay,
            timeout: None,
        };
        self.state.lock().unwrap().sent.push(item);
    }
}

#[async_trait]
impl AbstractRpcClient for UtCaptureRpcClient {
    async fn send_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
    ) -> Result<Box<dyn AbstractRpcPublishEvent>, AppRpcCtxError> {
        self.record(props, None);
        let reply = self.state.lock().unwrap().replies.pop_front();
        let evt = UtCapturePublishEvent {
            state: self.state.clone(),
            reply,
        };
        Ok(Box::new(evt))
    }

    async fn send_delayed_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
        delay: Duration,
    ) -> Result<(), AppRpcCtxError> {
        self.record(props, Some(delay));
        Ok(())
    }
}

#[async_trait]
impl AbstractRpcPublishEvent for UtCapturePublishEvent {
    async fn receive_response(&mut self, timeout: Duration) -> Result<AppRpcReply, AppRpcCtxError> {
        if let Some(last) = self.state.lock().unwrap().sent.last_mut() {
            last.timeout = Some(timeout);
        }
        match self.reply.take() {
            Some(r) => Ok(AppRpcReply {
                message: serde_json::to_vec(&r).unwrap(),
            }),
            None => Err(AppRpcCtxError {
                fn_label: AppRpcErrorFnLabel::ClientRecvResp,
                reason: AppRpcErrorReason::ReplyTimeout(timeout),
            }),
        }
    }
}

pub(crate) struct UtHandlerSetup {
    pub handler: RequestHandler,
    state: Arc<Mutex<UtRpcState>>,
}

impl UtHandlerSetup {
    pub(crate) fn sent(&self) -> Vec<UtSentRecord> {
        self.state.lock().unwrap().sent.clone()
    }

    /// the only request sent so far
    pub(crate) fn single(&self) -> UtSentRecord {
        let mut sent = self.sent();
        assert_eq!(sent.len(), 1);
        sent.remove(0)
    }
}

pub(crate) fn ut_setup_handler(replies: Vec<Response>) -> UtHandlerSetup {
    let state = UtRpcState {
        replies: VecDeque::from(replies),
        sent: Vec::new(),
    };
    let state = Arc::new(Mutex::new(state));
    let ctx: Box<dyn AbstractRpcContext> = Box::new(UtCaptureRpcContext {
        state: state.clone(),
    });
    let logctx = ut_setup_sharestate().log_context();
    let handler = RequestHandler::new(Arc::new(ctx), logctx, UT_PUBLISHER);
    UtHandlerSetup { handler, state }
}

/// handler over an arbitrary RPC context, for transports with special
/// behaviour
pub(crate) fn ut_setup_handler_with(ctx: Box<dyn AbstractRpcContext>) -> RequestHandler {
    let logctx = ut_setup_sharestate().log_context();
    RequestHandler::new(Arc::new(ctx), logctx, UT_PUBLISHER)
}

pub(crate) fn ut_reply(status_code: u16, data: JsnVal) -> Response {
    Response {
        status_code,
        data_type: content_type::JSON.to_string(),
        data: data.to_string().into_bytes(),
    }
}

/// reply carrying the payload text as-is
pub(crate) fn ut_reply_raw(status_code: u16, data: &str) -> Response {
    Response {
        status_code,
        data_type: content_type::JSON.to_string(),
        data: data.as_bytes().to_vec(),
    }
}

pub(crate) fn ut_reply_empty(status_code: u16) -> Response {
    Response {
        status_code,
        data_type: content_type::NONE.to_string(),
        data: Vec::new(),
    }
}
