use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::result::Result as DefaultResult;

use serde::de::{Error as DeserializeError, Expected};
use serde::Deserialize;

use crate::constant::{env_vars, logging as const_log};
use crate::error::{AppCfgError, AppErrorCode};
use crate::AppLogAlias;

#[derive(Deserialize)]
pub struct AppLogHandlerCfg {
    pub min_level: const_log::Level,
    pub destination: const_log::Destination,
    pub alias: AppLogAlias,
    pub path: Option<String>,
}

#[derive(Deserialize)]
pub struct AppLoggerCfg {
    pub alias: AppLogAlias,
    pub handlers: Vec<String>,
    pub level: Option<const_log::Level>,
}

#[derive(Deserialize)]
pub struct AppLoggingCfg {
    pub handlers: Vec<AppLogHandlerCfg>,
    pub loggers: Vec<AppLoggerCfg>,
}

#[derive(Deserialize)]
pub struct AppAmqpReplyCfg {
    // the actual queue name is suffixed with a random identifier, so
    // replies never interleave between processes of the same service
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub queue_prefix: String,
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub correlation_id_prefix: String,
    pub ttl_secs: u16,
    pub max_length: u32, // max number of messages preserved in the queue
}

#[derive(Deserialize)]
pub struct AppAmqpDelayCfg {
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub exchange: String,
    pub ensure_declare: bool,
}

#[derive(Deserialize)]
pub struct AppAmqpAttriCfg {
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub vhost: String,
    pub max_channels: u16,
    pub timeout_secs: u16,
}

#[derive(Deserialize)]
pub struct AppRpcAmqpCfg {
    pub attributes: AppAmqpAttriCfg,
    pub max_connections: u16,
    pub reply: AppAmqpReplyCfg,
    pub delay: AppAmqpDelayCfg,
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub confidential_id: String,
}

#[derive(Deserialize)]
pub struct AppRpcMockCfg {
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub test_data: String,
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Deserialize)]
#[serde(tag = "handler_type")]
pub enum AppRpcCfg {
    Mock(AppRpcMockCfg),
    AMQP(AppRpcAmqpCfg),
}

#[derive(Deserialize)]
#[serde(tag = "source")]
pub enum AppConfidentialCfg {
    UserSpace {
        #[serde(deserialize_with = "jsn_deny_empty_string")]
        sys_path: String,
    },
}

#[derive(Deserialize)]
pub struct RequestHandlerCfg {
    // name of the service which publishes requests, e.g. `call-manager`
    #[serde(deserialize_with = "jsn_deny_empty_string")]
    pub publisher: String,
    pub logging: AppLoggingCfg,
    pub rpc: AppRpcCfg,
    pub confidentiality: AppConfidentialCfg,
}

pub struct AppBasepathCfg {
    pub system: String,
    pub service: String,
}

pub struct AppConfig {
    pub basepath: AppBasepathCfg,
    pub req_handler: RequestHandlerCfg,
}

pub struct AppCfgHardLimit {
    pub num_rpc_conns: u16,
    pub num_rpc_channels: u16,
}
pub struct AppCfgInitArgs {
    pub env_var_map: HashMap<String, String, RandomState>,
    pub limit: AppCfgHardLimit,
}

impl AppConfig {
    pub fn new(args: AppCfgInitArgs) -> DefaultResult<Self, AppCfgError> {
        let (mut env_var_map, limit) = (args.env_var_map, args.limit);
        let sys_basepath = env_var_map
            .remove(env_vars::SYS_BASEPATH)
            .map(|s| s + "/")
            .ok_or(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingSysBasePath,
            })?;
        let app_basepath = env_var_map
            .remove(env_vars::SERVICE_BASEPATH)
            .map(|s| s + "/")
            .ok_or(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingAppBasePath,
            })?;
        let cfg_path = env_var_map
            .remove(env_vars::CFG_FILEPATH)
            .ok_or(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingConfigPath,
            })?;
        let fullpath = app_basepath.clone() + &cfg_path;
        let req_handler = Self::parse_from_file(fullpath, limit)?;
        Ok(Self {
            req_handler,
            basepath: AppBasepathCfg {
                system: sys_basepath,
                service: app_basepath,
            },
        })
    } // end of new

    pub fn parse_from_file(
        filepath: String,
        limit: AppCfgHardLimit,
    ) -> DefaultResult<RequestHandlerCfg, AppCfgError> {
        let fileobj = File::open(filepath).map_err(|e| AppCfgError {
            detail: Some(e.to_string()),
            code: AppErrorCode::IOerror(e.kind()),
        })?;
        let reader = BufReader::new(fileobj);
        let jsnobj = serde_json::from_reader::<BufReader<File>, RequestHandlerCfg>(reader)
            .map_err(|e| AppCfgError {
                detail: Some(e.to_string()),
                code: AppErrorCode::InvalidJsonFormat,
            })?;
        Self::_check_rpc(&jsnobj.rpc, &limit)?;
        Self::_check_logging(&jsnobj.logging)?;
        Ok(jsnobj)
    }

    fn _check_rpc(obj: &AppRpcCfg, limit: &AppCfgHardLimit) -> DefaultResult<(), AppCfgError> {
        match obj {
            AppRpcCfg::Mock(_c) => Ok(()),
            AppRpcCfg::AMQP(c) => {
                if c.max_connections == 0 || c.attributes.max_channels == 0 {
                    Err(AppCfgError {
                        detail: Some("amqp-zero-capacity".to_string()),
                        code: AppErrorCode::InvalidRpcCfg,
                    })
                } else if c.max_connections > limit.num_rpc_conns {
                    Err(AppCfgError {
                        detail: Some(format!("limit-conn:{}", limit.num_rpc_conns)),
                        code: AppErrorCode::ExceedingMaxLimit,
                    })
                } else if c.attributes.max_channels > limit.num_rpc_channels {
                    Err(AppCfgError {
                        detail: Some(format!("limit-channel:{}", limit.num_rpc_channels)),
                        code: AppErrorCode::ExceedingMaxLimit,
                    })
                } else {
                    Ok(())
                }
            }
        }
    } // end of _check_rpc

    fn _check_logging(obj: &AppLoggingCfg) -> DefaultResult<(), AppCfgError> {
        let mut no_hdlr = obj.loggers.iter().filter(|item| item.handlers.is_empty());
        // for file-type handler, the field `path` has to be provided
        let mut no_path = obj.handlers.iter().filter(|item| match &item.destination {
            const_log::Destination::LOCALFS => item.path.is_none(),
            _other => false,
        });
        if obj.handlers.is_empty() {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::NoLogHandlerCfg,
            });
        } else if obj.loggers.is_empty() {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::NoLoggerCfg,
            });
        } else if let Some(alogger) = no_hdlr.next() {
            let msg = format!("the logger does not have handler: {}", alogger.alias);
            return Err(AppCfgError {
                detail: Some(msg),
                code: AppErrorCode::NoHandlerInLoggerCfg,
            });
        } else if obj.handlers.iter().any(|item| item.alias.is_empty()) {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingAliasLogHdlerCfg,
            });
        } else if obj.loggers.iter().any(|item| item.alias.is_empty()) {
            return Err(AppCfgError {
                detail: None,
                code: AppErrorCode::MissingAliasLoggerCfg,
            });
        } else if let Some(hdlr) = no_path.next() {
            let msg = format!("file-type handler does not contain path: {}", hdlr.alias);
            return Err(AppCfgError {
                detail: Some(msg),
                code: AppErrorCode::InvalidHandlerLoggerCfg,
            });
        }
        let hdlr_alias_map: HashSet<&str> =
            HashSet::from_iter(obj.handlers.iter().map(|i| i.alias.as_str()));
        // handler alias in each logger has to be present
        let mut bad_alias = obj.loggers.iter().filter(|item| {
            item.handlers
                .iter()
                .any(|i| !hdlr_alias_map.contains(i.as_str()))
        });
        if let Some(alogger) = bad_alias.next() {
            let msg = format!(
                "the logger contains invalid handler alias: {}",
                alogger.alias
            );
            Err(AppCfgError {
                detail: Some(msg),
                code: AppErrorCode::InvalidHandlerLoggerCfg,
            })
        } else {
            Ok(())
        }
    } // end of _check_logging
} // end of impl AppConfig

struct ExpectNonEmptyString {
    min_len: u32,
}

impl Expected for ExpectNonEmptyString {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        let msg = format!("minimum string length >= {}", self.min_len);
        formatter.write_str(msg.as_str())
    }
}

fn jsn_deny_empty_string<'de, D>(raw: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(raw)?;
    if s.is_empty() {
        let exp = ExpectNonEmptyString { min_len: 1 };
        Err(DeserializeError::invalid_length(s.len(), &exp))
    } else {
        Ok(s)
    }
}
