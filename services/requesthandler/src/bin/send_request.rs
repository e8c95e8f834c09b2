use std::collections::HashMap;
use std::env;
use std::result::Result;

use clap::Parser;
use serde_json::Value as JsnVal;
use tokio::runtime::Builder;

use voipbin_common::config::{AppCfgHardLimit, AppCfgInitArgs, AppConfig};
use voipbin_common::constant::env_vars::EXPECTED_LABELS;
use voipbin_common::logging::{app_log_event, AppLogLevel};
use voipbin_common::model::sock::RequestMethod;

use requesthandler::request::{timeout, AppRequestProps, RequestHandler};
use requesthandler::{hard_limit, AppSharedState};

/// Send one request to a manager queue and print the reply
#[derive(Parser)]
#[command(name = "send_request", version)]
struct CmdArgs {
    /// target queue, e.g. bin-manager.call-manager.request
    queue: String,
    #[arg(value_parser = parse_method)]
    method: RequestMethod,
    uri: String,
    /// JSON payload of the request
    #[arg(long, short = 'd', value_parser = parse_json_data)]
    data: Option<JsnVal>,
    /// schedule the request, no reply is awaited when non-zero
    #[arg(long, default_value_t = 0)]
    delay_ms: u32,
    #[arg(long, default_value_t = timeout::DEFAULT)]
    timeout_ms: u32,
}

fn parse_method(raw: &str) -> Result<RequestMethod, String> {
    let v = JsnVal::String(raw.to_uppercase());
    serde_json::from_value::<RequestMethod>(v).map_err(|e| e.to_string())
}

fn parse_json_data(raw: &str) -> Result<JsnVal, String> {
    serde_json::from_str::<JsnVal>(raw).map_err(|e| e.to_string())
}

#[rustfmt::skip]
async fn start_send(handler: &RequestHandler, args: CmdArgs) -> Result<(), String> {
    let CmdArgs { queue, method, uri, data, delay_ms, timeout_ms } = args;
    let mut props = AppRequestProps::new(method, uri, "cli")
        .timeout(timeout_ms).delay(delay_ms);
    if let Some(d) = data.as_ref() {
        props = props.json(d).map_err(|e| e.to_string())?;
    }
    let resp = handler.send_request(queue.as_str(), props)
        .await.map_err(|e| e.to_string())?;
    match resp {
        Some(r) => {
            let payload = String::from_utf8_lossy(r.data.as_slice());
            println!("status: {}, data-type: {}", r.status_code, r.data_type);
            println!("{payload}");
        }
        None => println!("scheduled, delay-ms: {delay_ms}"),
    }
    Ok(())
}

fn init_config() -> Result<AppConfig, ()> {
    let iter = env::vars().filter(|(k, _v)| EXPECTED_LABELS.contains(&k.as_str()));
    let env_var_map = HashMap::from_iter(iter);
    let limit = AppCfgHardLimit {
        num_rpc_conns: hard_limit::MAX_RPC_CONNECTIONS,
        num_rpc_channels: hard_limit::MAX_RPC_CHANNELS,
    };
    let args = AppCfgInitArgs { env_var_map, limit };
    AppConfig::new(args).map_err(|e| {
        println!(
            "[ERROR] config failure, code:{:?}, detail:{:?}",
            e.code, e.detail
        );
    })
}

fn main() -> Result<(), ()> {
    let cmd_args = CmdArgs::parse();
    let cfg = init_config()?;
    let shr_state = AppSharedState::new(cfg).map_err(|e| {
        println!("[ERROR] shared state init failure, {:?}", e);
    })?;
    let logctx = shr_state.log_context();
    let runtime = Builder::new_current_thread()
        .thread_name("send-request")
        .enable_time()
        .build()
        .map_err(|e| {
            app_log_event!(logctx, AppLogLevel::ERROR, "{:?}", e);
        })?;
    let handler = shr_state.request_handler();
    runtime.block_on(async move {
        start_send(handler.as_ref(), cmd_args).await.map_err(|e| {
            app_log_event!(logctx, AppLogLevel::ERROR, "{e}");
        })
    })
} // end of fn main
