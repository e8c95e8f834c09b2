mod activeflow;
mod agent;
mod ai;
mod asterisk;
mod billing;
mod call;
mod campaign;
mod chat;
mod confbridge;
mod conference;
mod customer;
mod flow;
mod groupcall;
mod number;
mod outdial;
mod queue;
mod queuecall;
mod registrar;
mod talk;

use std::boxed::Box;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::result::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsnVal;
use uuid::Uuid;

use voipbin_common::constant::content_type;
use voipbin_common::logging::{app_log_event, AppLogContext, AppLogLevel};
use voipbin_common::model::outline::{asterisk_request_queue, QueueName};
use voipbin_common::model::sock::{Request, RequestMethod, Response};

use crate::adapter::rpc::{
    AbstractRpcContext, AppRpcClientRequest, AppRpcCtxError, AppRpcErrorFnLabel, AppRpcErrorReason,
};

/// request timeout in milliseconds
pub mod timeout {
    pub const DEFAULT: u32 = 3000;
    pub const LIST: u32 = 30000;
    pub const MEDIA: u32 = 10000;
}

/// delay units in milliseconds, non-zero delay turns a request into
/// a scheduled one which never receives reply
pub mod delay {
    pub const NOW: u32 = 0;
    pub const SECOND: u32 = 1000;
    pub const MINUTE: u32 = SECOND * 60;
    pub const HOUR: u32 = MINUTE * 60;
}

/// histogram of the time spent on sending a request and receiving its
/// reply in milliseconds, labelled by `target`, `resource` and `method`
pub const METRIC_REQUEST_PROCESS_TIME: &str = "request_process_time";

// stasis application name required by a few ARI operations, the
// Asterisk proxy fills it in for the others
pub(crate) const DEFAULT_STASIS_APP: &str = "voipbin";

#[derive(Debug)]
pub enum AppRequestErrorReason {
    Rpc(AppRpcCtxError),
    EncodeRequest(String),
    DecodeReply(String),
    MissingReply,
    RemoteStatus(u16),
}

#[derive(Debug)]
pub struct AppRequestError {
    pub reason: AppRequestErrorReason,
    pub detail: Option<String>,
}

impl Display for AppRequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.reason {
            AppRequestErrorReason::Rpc(e) => write!(f, "rpc-error: {:?}", e)?,
            AppRequestErrorReason::EncodeRequest(s) => write!(f, "encode-request: {s}")?,
            AppRequestErrorReason::DecodeReply(s) => write!(f, "decode-reply: {s}")?,
            AppRequestErrorReason::MissingReply => f.write_str("missing-reply")?,
            AppRequestErrorReason::RemoteStatus(code) => write!(f, "response code: {code}")?,
        }
        if let Some(d) = self.detail.as_ref() {
            write!(f, ", {d}")?;
        }
        Ok(())
    }
}

impl From<AppRequestErrorReason> for AppRequestError {
    fn from(reason: AppRequestErrorReason) -> Self {
        Self {
            reason,
            detail: None,
        }
    }
}

/// Properties of a single request sent to a manager. `resource` labels
/// the remote resource in logs, it is never sent to the remote.
pub struct AppRequestProps {
    pub uri: String,
    pub method: RequestMethod,
    pub resource: &'static str,
    pub timeout_ms: u32,
    pub delay_ms: u32,
    pub data_type: &'static str,
    pub data: Vec<u8>,
}

impl AppRequestProps {
    pub fn new(method: RequestMethod, uri: String, resource: &'static str) -> Self {
        Self {
            uri,
            method,
            resource,
            timeout_ms: timeout::DEFAULT,
            delay_ms: delay::NOW,
            data_type: content_type::NONE,
            data: Vec::new(),
        }
    }

    pub fn timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = ms;
        self
    }

    pub fn delay(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// content type declared without payload
    pub fn data_type(mut self, value: &'static str) -> Self {
        self.data_type = value;
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, AppRequestError> {
        self.data = serde_json::to_vec(body)
            .map_err(|e| AppRequestErrorReason::EncodeRequest(e.to_string()))?;
        self.data_type = content_type::JSON;
        Ok(self)
    }
}

/// query string for paginated list, the page token is usually timestamp
/// of the last item in previous page
#[derive(Serialize)]
struct PageQuery<'a> {
    page_token: &'a str,
    page_size: u64,
}

pub(crate) fn page_uri(
    path: &str,
    page_token: &str,
    page_size: u64,
) -> Result<String, AppRequestError> {
    let q = PageQuery {
        page_token,
        page_size,
    };
    let serial = serde_qs::to_string(&q)
        .map_err(|e| AppRequestErrorReason::EncodeRequest(e.to_string()))?;
    Ok(format!("{path}?{serial}"))
}

/// same as [`page_uri`], each filter is appended with the key prefixed
/// by `filter_`
pub(crate) fn page_uri_with_filters(
    path: &str,
    page_token: &str,
    page_size: u64,
    filters: &BTreeMap<String, String>,
) -> Result<String, AppRequestError> {
    let mut out = page_uri(path, page_token, page_size)?;
    if !filters.is_empty() {
        let prefixed = filters
            .iter()
            .map(|(k, v)| (format!("filter_{k}"), v.as_str()))
            .collect::<BTreeMap<String, &str>>();
        let serial = serde_qs::to_string(&prefixed)
            .map_err(|e| AppRequestErrorReason::EncodeRequest(e.to_string()))?;
        out.push('&');
        out.push_str(serial.as_str());
    }
    Ok(out)
}

/// text form of a unit enum variant on the wire, for query strings
pub(crate) fn wire_string<T: Serialize + Debug>(value: &T) -> Result<String, AppRequestError> {
    match serde_json::to_value(value) {
        Ok(JsnVal::String(s)) => Ok(s),
        _others => {
            let detail = format!("not-string: {:?}", value);
            Err(AppRequestErrorReason::EncodeRequest(detail).into())
        }
    }
}

pub(crate) fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// check status of the reply and discard its payload, absent reply is
/// acceptable only for scheduled requests
pub(crate) fn parse_response_empty(resp: Option<Response>) -> Result<(), AppRequestError> {
    match resp {
        None => Ok(()),
        Some(r) if r.is_success() => Ok(()),
        Some(r) => Err(AppRequestErrorReason::RemoteStatus(r.status_code).into()),
    }
}

pub(crate) fn parse_response<T: DeserializeOwned>(
    resp: Option<Response>,
) -> Result<T, AppRequestError> {
    let r = resp.ok_or(AppRequestErrorReason::MissingReply)?;
    if !r.is_success() {
        return Err(AppRequestErrorReason::RemoteStatus(r.status_code).into());
    }
    serde_json::from_slice::<T>(r.data.as_slice()).map_err(|e| AppRequestError {
        reason: AppRequestErrorReason::DecodeReply(e.to_string()),
        detail: Some(format!("data-type: {}", r.data_type)),
    })
}

/// Sends typed requests to other managers through the RPC context, each
/// operation is a thin wrapper over [`RequestHandler::send_request`]
pub struct RequestHandler {
    _rpc_ctx: Arc<Box<dyn AbstractRpcContext>>,
    _logctx: Arc<AppLogContext>,
    _publisher: String,
}

impl RequestHandler {
    pub fn new(
        _rpc_ctx: Arc<Box<dyn AbstractRpcContext>>,
        _logctx: Arc<AppLogContext>,
        publisher: &str,
    ) -> Self {
        Self {
            _rpc_ctx,
            _logctx,
            _publisher: publisher.to_string(),
        }
    }

    /// Publish a request to the queue `target`. The reply is returned as-is
    /// without checking its status code. Scheduled requests (non-zero
    /// delay) return `None` once the broker accepts them.
    pub async fn send_request(
        &self,
        target: &str,
        props: AppRequestProps,
    ) -> Result<Option<Response>, AppRequestError> {
        let AppRequestProps {
            uri,
            method,
            resource,
            timeout_ms,
            delay_ms,
            data_type,
            data,
        } = props;
        let req = Request {
            uri,
            method,
            publisher: self._publisher.clone(),
            data_type: data_type.to_string(),
            data,
        };
        let message = serde_json::to_vec(&req)
            .map_err(|e| AppRequestErrorReason::EncodeRequest(e.to_string()))?;
        let rpc_req = AppRpcClientRequest {
            id: Uuid::new_v4().to_string(),
            message,
            route: target.to_string(),
        };
        let logctx = self._logctx.as_ref();
        let t0 = Instant::now();
        let result = if delay_ms > 0 {
            self._send_delayed(rpc_req, delay_ms).await.map(|()| None)
        } else {
            self._send_direct(rpc_req, timeout_ms).await.map(Some)
        };
        let elapsed = t0.elapsed();
        // scheduled requests are labelled with the delay exchange, the
        // target queue receives them later
        let label_target = if delay_ms > 0 {
            QueueName::Delay.as_str().to_string()
        } else {
            target.to_string()
        };
        metrics::histogram!(
            METRIC_REQUEST_PROCESS_TIME,
            "target" => label_target,
            "resource" => resource,
            "method" => req.method.to_string()
        )
        .record(elapsed.as_millis() as f64);
        app_log_event!(
            logctx,
            AppLogLevel::DEBUG,
            "target: {target}, resource: {resource}, method: {}, elapsed-ms: {}",
            req.method,
            elapsed.as_millis()
        );
        result.map_err(|reason| {
            let detail = format!(
                "could not send the request. queue: {target}, method: {}, uri: {}",
                req.method, req.uri
            );
            app_log_event!(logctx, AppLogLevel::ERROR, "{detail}, reason: {:?}", reason);
            AppRequestError {
                reason,
                detail: Some(detail),
            }
        })
    } // end of fn send_request

    async fn _send_direct(
        &self,
        req: AppRpcClientRequest,
        timeout_ms: u32,
    ) -> Result<Response, AppRequestErrorReason> {
        let timeout = Duration::from_millis(timeout_ms as u64);
        // the limit covers connection acquisition and publish confirmation
        // as well, not only the wait for the reply
        let fut = async {
            let client = self
                ._rpc_ctx
                .acquire()
                .await
                .map_err(AppRequestErrorReason::Rpc)?;
            let mut evt = client
                .send_request(req)
                .await
                .map_err(AppRequestErrorReason::Rpc)?;
            let reply = evt
                .receive_response(timeout)
                .await
                .map_err(AppRequestErrorReason::Rpc)?;
            serde_json::from_slice::<Response>(reply.message.as_slice())
                .map_err(|e| AppRequestErrorReason::DecodeReply(e.to_string()))
        };
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_elapsed) => {
                let e = AppRpcCtxError {
                    fn_label: AppRpcErrorFnLabel::ClientSendReq,
                    reason: AppRpcErrorReason::ReplyTimeout(timeout),
                };
                Err(AppRequestErrorReason::Rpc(e))
            }
        }
    }

    async fn _send_delayed(
        &self,
        req: AppRpcClientRequest,
        delay_ms: u32,
    ) -> Result<(), AppRequestErrorReason> {
        let client = self
            ._rpc_ctx
            .acquire()
            .await
            .map_err(AppRequestErrorReason::Rpc)?;
        let delay = Duration::from_millis(delay_ms as u64);
        client
            .send_delayed_request(req, delay)
            .await
            .map_err(AppRequestErrorReason::Rpc)
    }

    async fn send_to(
        &self,
        queue: QueueName,
        props: AppRequestProps,
    ) -> Result<Option<Response>, AppRequestError> {
        self.send_request(queue.as_str(), props).await
    }

    async fn send_to_asterisk(
        &self,
        asterisk_id: &str,
        props: AppRequestProps,
    ) -> Result<Option<Response>, AppRequestError> {
        let target = asterisk_request_queue(asterisk_id);
        self.send_request(target.as_str(), props).await
    }
} // end of impl RequestHandler
