use std::boxed::Box;
use std::collections::HashMap;
use std::result::Result;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use chrono::{Local, Utc};
use deadpool_lapin::{Config as DeadpConfig, Pool, PoolConfig, Runtime, Timeouts as DeadpTimeouts};
use futures_util::StreamExt;
use lapin::message::Delivery;
use lapin::options::{
    BasicConsumeOptions, BasicPublishOptions, ConfirmSelectOptions, ExchangeDeclareOptions,
    QueueDeclareOptions,
};
use lapin::protocol::basic::AMQPProperties;
use lapin::publisher_confirm::Confirmation;
use lapin::topology::TopologyDefinition;
use lapin::types::{AMQPValue, FieldTable, LongString};
use lapin::{Channel, ConnectionProperties, Consumer, Error as LapinError, ExchangeKind};
use serde::Deserialize;
use tokio::sync::{oneshot, Mutex};
use tokio::time::sleep;
use uuid::Uuid;

use voipbin_common::confidentiality::AbstractConfidentiality;
use voipbin_common::config::{AppAmqpDelayCfg, AppAmqpReplyCfg, AppRpcAmqpCfg};
use voipbin_common::logging::{app_log_event, AppLogContext, AppLogLevel};

use crate::app_meta;

use super::{
    AbsRpcClientContext, AbstractRpcClient, AbstractRpcContext, AbstractRpcPublishEvent,
    AppRpcClientRequest, AppRpcCtxError, AppRpcErrorFnLabel, AppRpcErrorReason, AppRpcReply,
};

const DELAYED_EXCHANGE_TYPE: &str = "x-delayed-message";

#[allow(clippy::upper_case_acronyms)]
#[derive(Deserialize)]
struct SECRET {
    host: String,
    port: u16,
    username: String,
    password: String,
}

// correlation-id -> sender which forwards the reply to the waiting client
struct InnerClientReplySend(Mutex<HashMap<String, oneshot::Sender<Vec<u8>>>>);

struct InnerReplyQueue {
    name: String,
    corr_id_prefix: String,
    ttl_secs: u16,
    max_length: u32,
}

struct InnerDelayExchange {
    name: String,
    ensure_declare: bool,
}

pub(super) struct AppAmqpRpcContext {
    _logctx: Arc<AppLogContext>,
    _pool: Pool,
    _replyq: Arc<InnerReplyQueue>,
    _delay_ex: Arc<InnerDelayExchange>,
    _reply_sender: Arc<InnerClientReplySend>,
}
struct AppAmqpRpcClient {
    _logctx: Arc<AppLogContext>,
    _replyq: Arc<InnerReplyQueue>,
    _delay_ex: Arc<InnerDelayExchange>,
    _chn: Channel,
    _reply_sender: Arc<InnerClientReplySend>,
}
struct AppAmqpRpcPublishEvent {
    _corr_id: String,
    _chn: Channel,
    _reply_sender: Arc<InnerClientReplySend>,
    _reply_recv: Option<oneshot::Receiver<Vec<u8>>>,
}

struct InnerClientConsumer {
    consumer: Consumer,
    logctx: Arc<AppLogContext>,
    _reply_sender: Arc<InnerClientReplySend>,
}

impl From<LapinError> for AppRpcErrorReason {
    fn from(value: LapinError) -> Self {
        match value {
            LapinError::IOError(ioe) => Self::SysIo(ioe.kind(), ioe.to_string()),
            LapinError::ParsingError(e) => Self::CorruptedPayload(e.to_string()),
            LapinError::SerialisationError(e) => Self::CorruptedPayload(e.to_string()),
            LapinError::ChannelsLimitReached => Self::InternalConfig("channel-limit".to_string()),
            LapinError::InvalidChannel(num) => {
                Self::InternalConfig(format!("invalid-channel: {num}"))
            }
            LapinError::InvalidConnectionState(state) => {
                Self::LowLevelConn(format!("conn-state: {:?}", state))
            }
            LapinError::InvalidChannelState(state) => {
                Self::LowLevelConn(format!("channel-state: {:?}", state))
            }
            LapinError::ProtocolError(e) => Self::LowLevelConn(e.to_string()),
            LapinError::MissingHeartbeatError => {
                Self::LowLevelConn("amqp-no-heartbeat".to_string())
            }
            LapinError::InvalidProtocolVersion(ver) => {
                Self::LowLevelConn(format!("amqp-version: {ver}"))
            }
            _ => Self::NotSupport,
        }
    }
} // end of AppRpcErrorReason

fn generate_consumer_tag(label: &str) -> String {
    let thread_id = std::thread::current().id();
    let (timefmt, nsecs) = {
        let now = Local::now().fixed_offset();
        (now.to_rfc3339(), now.timestamp_subsec_nanos())
    };
    format!("{}-{:?}-{}-{}", label, thread_id, timefmt, nsecs)
}

#[async_trait]
impl AbsRpcClientContext for AppAmqpRpcContext {
    async fn acquire(&self) -> Result<Box<dyn AbstractRpcClient>, AppRpcCtxError> {
        let conn =
            self._pool.get().await.map_err(|e| {
                Self::_map_err_acquire(AppRpcErrorReason::LowLevelConn(e.to_string()))
            })?;
        let _chn = conn
            .create_channel()
            .await
            .map_err(|e| Self::_map_err_acquire(e.into()))?;
        _chn.confirm_select(ConfirmSelectOptions { nowait: false })
            .await // do confirm every time when channel is open
            .map_err(|e| Self::_map_err_acquire(e.into()))?;
        let declare_history = conn.topology();
        if self.ensure_replyq(&declare_history, &_chn).await? {
            self.start_consume_replyq(&_chn).await?;
        }
        self.ensure_delay_exchange(&declare_history, &_chn).await?;
        let obj = AppAmqpRpcClient {
            _logctx: self._logctx.clone(),
            _replyq: self._replyq.clone(),
            _delay_ex: self._delay_ex.clone(),
            _reply_sender: self._reply_sender.clone(),
            _chn,
        };
        Ok(Box::new(obj))
    }
} // end of impl AppAmqpRpcContext

impl AbstractRpcContext for AppAmqpRpcContext {}

impl AppAmqpRpcContext {
    pub(super) fn try_build(
        app_cfg: &AppRpcAmqpCfg,
        cfdntl: Arc<Box<dyn AbstractConfidentiality>>,
        _logctx: Arc<AppLogContext>,
    ) -> Result<Self, AppRpcCtxError> {
        let uri = Self::_setup_broker_uri(app_cfg, cfdntl)?;
        let cfg = Self::_setup_lapin_config(app_cfg, uri);
        let _pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| Self::_map_err_init(AppRpcErrorReason::LowLevelConn(e.to_string())))?;
        let _replyq = Self::_setup_reply_queue(&app_cfg.reply);
        let _delay_ex = {
            let AppAmqpDelayCfg {
                exchange,
                ensure_declare,
            } = &app_cfg.delay;
            InnerDelayExchange {
                name: exchange.clone(),
                ensure_declare: *ensure_declare,
            }
        };
        app_log_event!(
            _logctx,
            AppLogLevel::INFO,
            "reply-queue: {}, delay-exchange: {}",
            _replyq.name,
            _delay_ex.name
        );
        Ok(Self {
            _logctx,
            _pool,
            _replyq: Arc::new(_replyq),
            _delay_ex: Arc::new(_delay_ex),
            _reply_sender: Arc::new(InnerClientReplySend(Mutex::new(HashMap::new()))),
        })
    }

    /// Note, `deadpool-lapin` does not apply `lapin::uri::AMQPUri` re-exported
    /// from crate `amq_protocol_uri` to pool configuration, the only way of specifying
    /// URI is to format these element to string in adcvance
    fn _setup_broker_uri(
        app_cfg: &AppRpcAmqpCfg,
        cfdntl: Arc<Box<dyn AbstractConfidentiality>>,
    ) -> Result<String, AppRpcCtxError> {
        let serial = cfdntl
            .try_get_payload(app_cfg.confidential_id.as_str())
            .map_err(|_e| Self::_map_err_init(AppRpcErrorReason::InvalidCredential))?;
        let secret = serde_json::from_str::<SECRET>(serial.as_str())
            .map_err(|_e| Self::_map_err_init(AppRpcErrorReason::CorruptedCredential))?;
        let out = format!(
            "amqp://{}:{}@{}:{}/{}?channel_max={}&heartbeat={}",
            secret.username,
            secret.password,
            secret.host,
            secret.port,
            app_cfg.attributes.vhost.as_str(),
            app_cfg.attributes.max_channels,
            app_cfg.attributes.timeout_secs,
        );
        Ok(out)
    }

    fn _setup_lapin_config(app_cfg: &AppRpcAmqpCfg, uri: String) -> DeadpConfig {
        let timeout_secs = (app_cfg.attributes.timeout_secs as u64) << 2;
        let timeouts = DeadpTimeouts {
            wait: Some(Duration::new(timeout_secs, 0)),
            create: Some(Duration::new(timeout_secs, 0)),
            recycle: None,
        };
        let mut poolcfg = PoolConfig::new(app_cfg.max_connections as usize);
        poolcfg.timeouts = timeouts;
        DeadpConfig {
            connection_properties: ConnectionProperties::default(),
            url: Some(uri),
            pool: Some(poolcfg),
        }
    }

    fn _setup_reply_queue(cfg: &AppAmqpReplyCfg) -> InnerReplyQueue {
        InnerReplyQueue {
            name: format!("{}.{}", cfg.queue_prefix, Uuid::new_v4()),
            corr_id_prefix: cfg.correlation_id_prefix.clone(),
            ttl_secs: cfg.ttl_secs,
            max_length: cfg.max_length,
        }
    }

    /// the return boolean indicates whether the call to this function
    /// actually declares the reply queue (true), or it is just skipped (false)
    async fn ensure_replyq(
        &self,
        declare_history: &TopologyDefinition,
        chn: &Channel,
    ) -> Result<bool, AppRpcCtxError> {
        let cfg = self._replyq.as_ref();
        let declared = declare_history
            .queues
            .iter()
            .any(|q| q.name.as_str() == cfg.name.as_str());
        if declared {
            return Ok(false);
        }
        // shared by all connections in the pool, removed once the last
        // consumer is gone
        let options = QueueDeclareOptions {
            passive: false,
            durable: false,
            exclusive: false,
            auto_delete: true,
            nowait: false,
        };
        let ttl_millis = cfg.ttl_secs as i32 * 1000;
        let mut args = FieldTable::default();
        args.insert("x-message-ttl".into(), AMQPValue::LongInt(ttl_millis));
        args.insert(
            "x-max-length".into(),
            AMQPValue::LongInt(cfg.max_length as i32),
        );
        let _q = chn
            .queue_declare(cfg.name.as_str(), options, args)
            .await
            .map_err(|e| Self::_map_err_acquire(e.into()))?;
        let logctx = self._logctx.as_ref();
        app_log_event!(logctx, AppLogLevel::DEBUG, "reply-q-declared: {}", cfg.name);
        Ok(true)
    } // end of fn ensure_replyq

    async fn start_consume_replyq(&self, chn: &Channel) -> Result<(), AppRpcCtxError> {
        let qname = self._replyq.name.as_str();
        let options = BasicConsumeOptions {
            no_local: false,
            no_ack: true,
            exclusive: false,
            nowait: false,
        };
        let consumer = chn
            .basic_consume(
                qname,
                generate_consumer_tag(qname).as_str(),
                options,
                FieldTable::default(),
            )
            .await
            .map_err(|e| Self::_map_err_acquire(e.into()))?;
        let wrapper = InnerClientConsumer {
            consumer,
            _reply_sender: self._reply_sender.clone(),
            logctx: self._logctx.clone(),
        };
        let _handle = tokio::task::spawn(wrapper.start_consume());
        Ok(())
    }

    async fn ensure_delay_exchange(
        &self,
        declare_history: &TopologyDefinition,
        chn: &Channel,
    ) -> Result<(), AppRpcCtxError> {
        let cfg = self._delay_ex.as_ref();
        let declared = declare_history
            .exchanges
            .iter()
            .any(|ex| ex.name.as_str() == cfg.name.as_str());
        if !cfg.ensure_declare || declared {
            return Ok(());
        }
        let options = ExchangeDeclareOptions {
            passive: false,
            durable: true,
            auto_delete: false,
            internal: false,
            nowait: false,
        };
        let mut args = FieldTable::default();
        args.insert(
            "x-delayed-type".into(),
            AMQPValue::LongString(LongString::from("direct")),
        );
        let kind = ExchangeKind::Custom(DELAYED_EXCHANGE_TYPE.to_string());
        chn.exchange_declare(cfg.name.as_str(), kind, options, args)
            .await
            .map_err(|e| Self::_map_err_acquire(e.into()))
    }

    fn _map_err_init(reason: AppRpcErrorReason) -> AppRpcCtxError {
        AppRpcCtxError {
            fn_label: AppRpcErrorFnLabel::InitCtx,
            reason,
        }
    }
    fn _map_err_acquire(reason: AppRpcErrorReason) -> AppRpcCtxError {
        AppRpcCtxError {
            fn_label: AppRpcErrorFnLabel::AcquireClientConn,
            reason,
        }
    }
} // end of impl AppAmqpRpcContext

#[async_trait]
impl AbstractRpcClient for AppAmqpRpcClient {
    async fn send_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
    ) -> Result<Box<dyn AbstractRpcPublishEvent>, AppRpcCtxError> {
        let AppRpcClientRequest { id, message, route } = props;
        let AppAmqpRpcClient {
            _logctx,
            _replyq,
            _delay_ex: _,
            _chn,
            _reply_sender,
        } = *self;
        let corr_id = format!("{}.{}", _replyq.corr_id_prefix, id);
        let properties = Self::base_properties()
            .with_correlation_id(corr_id.as_str().into())
            .with_reply_to(_replyq.name.as_str().into());
        // register the receiver before publishing, the reply may arrive
        // earlier than the publisher confirmation
        let (sender, recv) = oneshot::channel();
        _reply_sender.insert(corr_id.clone(), sender).await;
        // the broker has to return unroutable message whenever the given
        // routing key goes wrong, e.g. the target manager is not running
        let result = Self::publish(
            &_chn,
            "",
            route.as_str(),
            true,
            message.as_slice(),
            properties,
        )
        .await;
        app_log_event!(
            _logctx,
            AppLogLevel::DEBUG,
            "route: {route}, corr-id: {corr_id}, publish-result: {:?}",
            result
        );
        if let Err(reason) = result {
            _reply_sender.discard(corr_id.as_str()).await;
            return Err(Self::_map_err_sendreq(reason));
        }
        let evt = AppAmqpRpcPublishEvent {
            _corr_id: corr_id,
            _reply_recv: Some(recv),
            _reply_sender,
            _chn,
        };
        Ok(Box::new(evt))
    } // end of fn send_request

    async fn send_delayed_request(
        mut self: Box<Self>,
        props: AppRpcClientRequest,
        delay: Duration,
    ) -> Result<(), AppRpcCtxError> {
        let AppRpcClientRequest {
            id: _,
            message,
            route,
        } = props;
        let delay_ms = i32::try_from(delay.as_millis()).map_err(|_e| {
            let detail = format!("delay-overflow: {:?}", delay);
            Self::_map_err_send_delayed(AppRpcErrorReason::InternalConfig(detail))
        })?;
        let mut headers = FieldTable::default();
        headers.insert("x-delay".into(), AMQPValue::LongInt(delay_ms));
        let properties = Self::base_properties().with_headers(headers);
        // delayed-message exchange does not support mandatory flag, the
        // message is routed only when the delay expires
        let result = Self::publish(
            &self._chn,
            self._delay_ex.name.as_str(),
            route.as_str(),
            false,
            message.as_slice(),
            properties,
        )
        .await;
        let logctx = self._logctx.as_ref();
        app_log_event!(
            logctx,
            AppLogLevel::DEBUG,
            "route: {route}, delay-ms: {delay_ms}, publish-result: {:?}",
            result
        );
        result.map_err(Self::_map_err_send_delayed)
    }
} // end of impl AppAmqpRpcClient

impl AppAmqpRpcClient {
    fn base_properties() -> AMQPProperties {
        AMQPProperties::default()
            .with_app_id(app_meta::LABEL.into())
            .with_content_encoding("utf-8".into())
            .with_content_type("application/json".into())
            .with_delivery_mode(1)
            .with_timestamp(Utc::now().timestamp() as u64)
    }

    async fn publish(
        chn: &Channel,
        exchange: &str,
        routing_key: &str,
        mandatory: bool,
        message: &[u8],
        properties: AMQPProperties,
    ) -> Result<(), AppRpcErrorReason> {
        let options = BasicPublishOptions {
            mandatory,
            immediate: false,
        };
        let confirm = chn
            .basic_publish(exchange, routing_key, options, message, properties)
            .await?
            .await?;
        Self::convert_confirm_to_error(confirm)
    }

    fn convert_confirm_to_error(value: Confirmation) -> Result<(), AppRpcErrorReason> {
        let detail = match value {
            Confirmation::NotRequested => {
                // implicitly mean `confirm-select` does not take effect
                Some("amqp-confirm-failure".to_string())
            }
            Confirmation::Nack(_msg) => Some("amqp-unexpected-nack".to_string()),
            // returned message, the broker cannot route it to any queue
            Confirmation::Ack(msg) => msg.map(|r| {
                format!(
                    "acker: {:?}, reply-code: {:?}, reply-detail: {:?}",
                    r.acker, r.reply_code, r.reply_text
                )
            }),
        };
        detail.map_or_else(|| Ok(()), |d| Err(AppRpcErrorReason::RequestConfirm(d)))
    }

    fn _map_err_sendreq(reason: AppRpcErrorReason) -> AppRpcCtxError {
        AppRpcCtxError {
            fn_label: AppRpcErrorFnLabel::ClientSendReq,
            reason,
        }
    }
    fn _map_err_send_delayed(reason: AppRpcErrorReason) -> AppRpcCtxError {
        AppRpcCtxError {
            fn_label: AppRpcErrorFnLabel::ClientSendDelayedReq,
            reason,
        }
    }
} // end of impl AppAmqpRpcClient

impl InnerClientConsumer {
    async fn start_consume(self) {
        let Self {
            mut consumer,
            logctx,
            _reply_sender,
        } = self;
        let tag = consumer.tag();
        while let Some(v) = consumer.next().await {
            let delivered = match v {
                Ok(d) => d,
                Err(e) => {
                    Self::report_error(tag.as_str(), e, logctx.clone());
                    break;
                }
            };
            if let Err(e) = _reply_sender.try_send(delivered).await {
                // mostly late replies whose requests already timed out
                app_log_event!(
                    logctx,
                    AppLogLevel::WARNING,
                    "consumer-task: {tag}, reason:{:?}",
                    e
                );
            }
        } // end of loop
        app_log_event!(logctx, AppLogLevel::DEBUG, "end-of-consumer-task: {tag}");
    } // end of fn start_consume

    fn report_error(tag: &str, e: LapinError, logctx: Arc<AppLogContext>) {
        let cond = matches!(e, LapinError::InvalidChannelState(_))
            || matches!(e, LapinError::InvalidConnectionState(_));
        if cond {
            app_log_event!(
                logctx,
                AppLogLevel::WARNING,
                "consumer-task: {tag}, connection issue: {:?}",
                e
            );
        } else {
            app_log_event!(
                logctx,
                AppLogLevel::ERROR,
                "consumer-task: {tag}, error: {:?}",
                e
            );
        }
    }
} // end of impl InnerClientConsumer

impl InnerClientReplySend {
    async fn insert(&self, key: String, value: oneshot::Sender<Vec<u8>>) {
        let mut guard = self.0.lock().await;
        let _discarded = guard.insert(key, value);
    }

    async fn discard(&self, key: &str) {
        let mut guard = self.0.lock().await;
        let _discarded = guard.remove(key);
    }

    async fn try_send(&self, delivered: Delivery) -> Result<(), String> {
        let (props, msg) = (delivered.properties, delivered.data);
        let key = props
            .correlation_id()
            .as_ref()
            .ok_or("missing-corr-id".to_string())?;
        let sender = {
            let mut guard = self.0.lock().await;
            guard
                .remove(key.as_str())
                .ok_or(format!("invalid-corr-id: {}", key))?
        };
        sender
            .send(msg)
            .map_err(|_d| format!("fail-pass-msg: {}", key))
    }
} // end of impl InnerClientReplySend

#[async_trait]
impl AbstractRpcPublishEvent for AppAmqpRpcPublishEvent {
    async fn receive_response(&mut self, timeout: Duration) -> Result<AppRpcReply, AppRpcCtxError> {
        let recv = self
            ._reply_recv
            .take()
            .ok_or(Self::_map_err_recv_resp(AppRpcErrorReason::ReplyFailure(
                "already-received".to_string(),
            )))?;
        let result = tokio::select! {
            r = recv => r.map_err(|e| AppRpcErrorReason::ReplyFailure(e.to_string())),
            _ = sleep(timeout) => Err(AppRpcErrorReason::ReplyTimeout(timeout)),
        };
        if result.is_err() {
            // nobody waits for the reply from now on
            self._reply_sender.discard(self._corr_id.as_str()).await;
        }
        let message = result.map_err(Self::_map_err_recv_resp)?;
        Ok(AppRpcReply { message })
    }
}

impl AppAmqpRpcPublishEvent {
    fn _map_err_recv_resp(reason: AppRpcErrorReason) -> AppRpcCtxError {
        AppRpcCtxError {
            fn_label: AppRpcErrorFnLabel::ClientRecvResp,
            reason,
        }
    }
}
