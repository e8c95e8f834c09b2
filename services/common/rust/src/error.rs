use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq)]
pub enum AppErrorCode {
    Unknown,
    NotImplemented,
    MissingSysBasePath,
    MissingAppBasePath,
    MissingConfigPath,
    InvalidJsonFormat,
    MissingAliasLogHdlerCfg,
    MissingAliasLoggerCfg,
    NoLogHandlerCfg,
    NoLoggerCfg,
    NoHandlerInLoggerCfg,
    InvalidHandlerLoggerCfg,
    InvalidInput,
    InvalidRpcCfg,
    RpcRemoteUnavail,
    RpcPublishFailure,
    RpcConsumeFailure,
    RpcRemoteInvalidReply,
    RpcReplyNotReady,
    NoConfidentialityCfg,
    ExceedingMaxLimit,
    AcquireLockFailure,
    IOerror(std::io::ErrorKind),
} // end of AppErrorCode

pub struct AppCfgError {
    pub code: AppErrorCode,
    pub detail: Option<String>,
}

impl Debug for AppCfgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "code:{:?}, detail:{:?}", self.code, self.detail)
    }
}

#[derive(Debug)]
pub struct AppConfidentialityError {
    pub code: AppErrorCode,
    pub detail: String,
}

impl Display for AppConfidentialityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "confidentiality, code:{:?}, {}", self.code, self.detail)
    }
}
