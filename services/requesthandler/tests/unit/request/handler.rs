use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use metrics::{
    Counter, Gauge, Histogram, HistogramFn, Key, KeyName, Metadata, Recorder, SharedString, Unit,
};
use serde_json::json;
use uuid::Uuid;

use requesthandler::adapter::rpc::{
    AbsRpcClientContext, AbstractRpcClient, AbstractRpcContext, AbstractRpcPublishEvent,
    AppRpcClientRequest, AppRpcCtxError, AppRpcErrorReason,
};
use requesthandler::request::{
    delay, timeout, AppRequestErrorReason, AppRequestProps, METRIC_REQUEST_PROCESS_TIME,
};
use voipbin_common::constant::content_type;
use voipbin_common::model::outline::QueueName;
use voipbin_common::model::sock::RequestMethod;

use crate::{ut_reply, ut_reply_empty, ut_setup_handler, ut_setup_handler_with, UT_PUBLISHER};

const UT_ROUTE: &str = "bin-manager.flow-manager.request";

#[tokio::test]
async fn send_request_envelope() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!({"id": "abc"}))]);
    let props = AppRequestProps::new(RequestMethod::Post, "/v1/flows".to_string(), "flow/flows")
        .timeout(5000)
        .json(&json!({"name": "test flow"}))
        .unwrap();
    let result = setup.handler.send_request(UT_ROUTE, props).await;
    let resp = result.unwrap().unwrap();
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.data.as_slice(), br#"{"id":"abc"}"#);
    let sent = setup.single();
    assert_eq!(sent.route.as_str(), UT_ROUTE);
    assert_eq!(sent.request.uri.as_str(), "/v1/flows");
    assert_eq!(sent.request.method, RequestMethod::Post);
    assert_eq!(sent.request.publisher.as_str(), UT_PUBLISHER);
    assert_eq!(sent.request.data_type.as_str(), content_type::JSON);
    assert_eq!(sent.body(), json!({"name": "test flow"}));
    assert_eq!(sent.timeout, Some(Duration::from_millis(5000)));
    assert!(sent.delay.is_none());
}

#[tokio::test]
async fn send_request_default_props() {
    let setup = ut_setup_handler(vec![ut_reply_empty(200)]);
    let props = AppRequestProps::new(RequestMethod::Get, "/v1/flows/xyz".to_string(), "flow");
    let result = setup.handler.send_request(UT_ROUTE, props).await;
    assert!(result.is_ok());
    let sent = setup.single();
    assert_eq!(sent.request.data_type.as_str(), content_type::NONE);
    assert!(sent.request.data.is_empty());
    let expect = Duration::from_millis(timeout::DEFAULT as u64);
    assert_eq!(sent.timeout, Some(expect));
}

#[tokio::test]
async fn send_request_delayed_no_reply() {
    // canned reply is not consumed by scheduled request
    let setup = ut_setup_handler(vec![ut_reply_empty(200)]);
    let props = AppRequestProps::new(RequestMethod::Post, "/v1/flows".to_string(), "flow/flows")
        .delay(3000)
        .json(&json!({"retry_count": 1}))
        .unwrap();
    let result = setup.handler.send_request(UT_ROUTE, props).await;
    let resp = result.unwrap();
    assert!(resp.is_none());
    let sent = setup.single();
    assert_eq!(sent.delay, Some(Duration::from_millis(3000)));
    assert!(sent.timeout.is_none());
}

#[tokio::test]
async fn send_request_reply_timeout() {
    let setup = ut_setup_handler(Vec::new());
    let props = AppRequestProps::new(RequestMethod::Get, "/v1/flows".to_string(), "flow/flows")
        .timeout(1500);
    let result = setup.handler.send_request(UT_ROUTE, props).await;
    let e = result.err().unwrap();
    if let AppRequestErrorReason::Rpc(inner) = &e.reason {
        assert_eq!(
            inner.reason,
            AppRpcErrorReason::ReplyTimeout(Duration::from_millis(1500))
        );
    } else {
        panic!("unexpected error reason: {:?}", e.reason);
    }
    let detail = e.detail.as_ref().unwrap();
    assert!(detail.contains(UT_ROUTE));
    assert!(detail.contains("/v1/flows"));
}

#[tokio::test]
async fn typed_reply_status_error() {
    let setup = ut_setup_handler(vec![ut_reply_empty(404), ut_reply_empty(500)]);
    let id = Uuid::new_v4();
    let result = setup.handler.flow_v1_flow_get(id).await;
    let e = result.err().unwrap();
    assert!(matches!(e.reason, AppRequestErrorReason::RemoteStatus(404)));
    let result = setup.handler.call_v1_call_hold_on(id).await;
    let e = result.err().unwrap();
    assert!(matches!(e.reason, AppRequestErrorReason::RemoteStatus(500)));
    assert_eq!(e.to_string().as_str(), "response code: 500");
}

#[tokio::test]
async fn typed_reply_corrupted_payload() {
    let setup = ut_setup_handler(vec![ut_reply(200, json!("not-a-flow"))]);
    let result = setup.handler.flow_v1_flow_get(Uuid::new_v4()).await;
    let e = result.err().unwrap();
    assert!(matches!(e.reason, AppRequestErrorReason::DecodeReply(_)));
    let detail = e.detail.as_ref().unwrap();
    assert_eq!(detail.as_str(), "data-type: application/json");
}

#[tokio::test]
async fn empty_reply_accepted() {
    let setup = ut_setup_handler(vec![ut_reply_empty(200), ut_reply_empty(204)]);
    let id = Uuid::new_v4();
    assert!(setup.handler.call_v1_call_hold_on(id).await.is_ok());
    assert!(setup.handler.call_v1_call_hold_off(id).await.is_ok());
    let sent = setup.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].request.method, RequestMethod::Post);
    assert_eq!(sent[1].request.method, RequestMethod::Delete);
    assert_eq!(sent[0].request.uri, sent[1].request.uri);
}

// publish confirmation of this transport never arrives
struct UtStalledRpcContext;
struct UtStalledRpcClient;

#[async_trait]
impl AbsRpcClientContext for UtStalledRpcContext {
    async fn acquire(&self) -> Result<Box<dyn AbstractRpcClient>, AppRpcCtxError> {
        Ok(Box::new(UtStalledRpcClient))
    }
}

impl AbstractRpcContext for UtStalledRpcContext {}

#[async_trait]
impl AbstractRpcClient for UtStalledRpcClient {
    async fn send_request(
        mut self: Box<Self>,
        _props: AppRpcClientRequest,
    ) -> Result<Box<dyn AbstractRpcPublishEvent>, AppRpcCtxError> {
        std::future::pending().await
    }

    async fn send_delayed_request(
        mut self: Box<Self>,
        _props: AppRpcClientRequest,
        _delay: Duration,
    ) -> Result<(), AppRpcCtxError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn send_request_timeout_covers_publish() {
    let handler = ut_setup_handler_with(Box::new(UtStalledRpcContext));
    let props = AppRequestProps::new(RequestMethod::Get, "/v1/flows".to_string(), "flow/flows")
        .timeout(100);
    let t0 = Instant::now();
    let fut = handler.send_request(UT_ROUTE, props);
    let result = tokio::time::timeout(Duration::from_secs(2), fut).await;
    assert!(t0.elapsed() < Duration::from_secs(2));
    let e = result.unwrap().err().unwrap();
    if let AppRequestErrorReason::Rpc(inner) = &e.reason {
        assert_eq!(
            inner.reason,
            AppRpcErrorReason::ReplyTimeout(Duration::from_millis(100))
        );
    } else {
        panic!("unexpected error reason: {:?}", e.reason);
    }
}

type UtSamples = Arc<Mutex<Vec<(Key, f64)>>>;

struct UtHistogramHandle {
    key: Key,
    samples: UtSamples,
}

impl HistogramFn for UtHistogramHandle {
    fn record(&self, value: f64) {
        let item = (self.key.clone(), value);
        self.samples.lock().unwrap().push(item);
    }
}

// keeps histogram samples only
struct UtMetricsRecorder {
    samples: UtSamples,
}

impl Recorder for UtMetricsRecorder {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _desc: SharedString) {}
    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _desc: SharedString) {}
    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _desc: SharedString) {}

    fn register_counter(&self, _key: &Key, _metadata: &Metadata<'_>) -> Counter {
        Counter::noop()
    }
    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }
    fn register_histogram(&self, key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        let hdl = UtHistogramHandle {
            key: key.clone(),
            samples: self.samples.clone(),
        };
        Histogram::from_arc(Arc::new(hdl))
    }
}

fn ut_labels(key: &Key) -> Vec<(String, String)> {
    key.labels()
        .map(|l| (l.key().to_string(), l.value().to_string()))
        .collect()
}

#[tokio::test]
async fn send_request_process_time_recorded() {
    let recorder = UtMetricsRecorder {
        samples: Arc::new(Mutex::new(Vec::new())),
    };
    let _guard = metrics::set_default_local_recorder(&recorder);
    let setup = ut_setup_handler(vec![ut_reply_empty(200)]);
    let props = AppRequestProps::new(RequestMethod::Get, "/v1/flows".to_string(), "flow/flows");
    let result = setup.handler.send_request(UT_ROUTE, props).await;
    assert!(result.is_ok());
    let props = AppRequestProps::new(RequestMethod::Post, "/v1/flows".to_string(), "flow/flows")
        .delay(delay::MINUTE);
    let result = setup.handler.send_request(UT_ROUTE, props).await;
    assert!(result.unwrap().is_none());

    let samples = recorder.samples.lock().unwrap().clone();
    assert_eq!(samples.len(), 2);
    for (key, _value) in samples.iter() {
        assert_eq!(key.name(), METRIC_REQUEST_PROCESS_TIME);
    }
    let expect = [
        ("target", UT_ROUTE),
        ("resource", "flow/flows"),
        ("method", "GET"),
    ]
    .map(|(k, v)| (k.to_string(), v.to_string()));
    assert_eq!(ut_labels(&samples[0].0), expect.to_vec());
    let expect = [
        ("target", QueueName::Delay.as_str()),
        ("resource", "flow/flows"),
        ("method", "POST"),
    ]
    .map(|(k, v)| (k.to_string(), v.to_string()));
    assert_eq!(ut_labels(&samples[1].0), expect.to_vec());
}
