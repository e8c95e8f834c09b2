pub mod adapter;
pub mod api;
pub mod request;

use std::result::Result;
use std::sync::Arc;

use voipbin_common::confidentiality::{self, AbstractConfidentiality};
use voipbin_common::config::AppConfig;
use voipbin_common::error::AppConfidentialityError;
use voipbin_common::logging::AppLogContext;

use crate::adapter::rpc;
use crate::request::RequestHandler;

pub mod app_meta {
    pub const LABEL: &str = "requesthandler";
}

pub mod hard_limit {
    pub const MAX_RPC_CONNECTIONS: u16 = 8u16;
    pub const MAX_RPC_CHANNELS: u16 = 256u16;
}

pub struct AppSharedState {
    _config: Arc<AppConfig>,
    _log_ctx: Arc<AppLogContext>,
    _rpc_ctx: Arc<Box<dyn rpc::AbstractRpcContext>>,
    _req_handler: Arc<RequestHandler>,
}

#[derive(Debug)]
pub enum ShrStateInitProgress {
    Confidentiality,
    RpcContext,
}

#[derive(Debug)]
pub struct ShrStateInitError {
    pub progress: ShrStateInitProgress,
    pub detail: String,
}
impl From<AppConfidentialityError> for ShrStateInitError {
    fn from(value: AppConfidentialityError) -> Self {
        Self {
            progress: ShrStateInitProgress::Confidentiality,
            detail: format!("{:?}", value),
        }
    }
}
impl From<rpc::AppRpcCtxError> for ShrStateInitError {
    fn from(value: rpc::AppRpcCtxError) -> Self {
        Self {
            progress: ShrStateInitProgress::RpcContext,
            detail: format!("{:?}", value),
        }
    }
}

impl AppSharedState {
    pub fn new(cfg: AppConfig) -> Result<Self, ShrStateInitError> {
        let logctx = {
            let lc = AppLogContext::new(&cfg.basepath, &cfg.req_handler.logging);
            Arc::new(lc)
        };
        let cfdntl: Arc<Box<dyn AbstractConfidentiality>> = {
            let c = confidentiality::build_context(&cfg)?;
            Arc::new(c)
        };
        let _rpc_ctx = {
            let rpc_cfg = &cfg.req_handler.rpc;
            let r = rpc::build_context(&cfg.basepath, rpc_cfg, cfdntl, logctx.clone())?;
            Arc::new(r)
        };
        let _req_handler = {
            let publisher = cfg.req_handler.publisher.as_str();
            let h = RequestHandler::new(_rpc_ctx.clone(), logctx.clone(), publisher);
            Arc::new(h)
        };
        Ok(Self {
            _config: Arc::new(cfg),
            _log_ctx: logctx,
            _rpc_ctx,
            _req_handler,
        })
    }

    pub fn rpc_context(&self) -> Arc<Box<dyn rpc::AbstractRpcContext>> {
        self._rpc_ctx.clone()
    }
    pub fn request_handler(&self) -> Arc<RequestHandler> {
        self._req_handler.clone()
    }
    pub fn log_context(&self) -> Arc<AppLogContext> {
        self._log_ctx.clone()
    }
} // end of impl AppSharedState

impl Clone for AppSharedState {
    fn clone(&self) -> Self {
        Self {
            _config: self._config.clone(),
            _log_ctx: self._log_ctx.clone(),
            _rpc_ctx: self._rpc_ctx.clone(),
            _req_handler: self._req_handler.clone(),
        }
    }
}
