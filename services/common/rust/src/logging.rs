use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::io::stdout;
use std::path::Path;

use tracing::dispatcher::Dispatch;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::Layer as TraceLayer;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;
use tracing_subscriber::{self, Layer as LayerIntf, Registry};

use crate::config::{AppBasepathCfg, AppLogHandlerCfg, AppLoggerCfg, AppLoggingCfg};
use crate::constant::logging::{Destination as DstOption, Level as AppLogLevelInner};
use crate::AppLogAlias;

pub type AppLogLevel = AppLogLevelInner;
type DefaultHandler = (NonBlocking, tracing::Level, WorkerGuard);
type AppLogger = Dispatch;

/// Loggers are keyed by module path, an event emitted from a module
/// without its own logger goes to the logger of the closest ancestor
/// module, e.g. `requesthandler::request::agent` falls back to
/// `requesthandler::request`, then `requesthandler`.
pub struct AppLogContext {
    _io_guards: Vec<WorkerGuard>,
    loggers: HashMap<AppLogAlias, AppLogger, RandomState>,
}

// exposed since the binary executables invoke this macro indirectly
#[macro_export]
macro_rules! to_3rdparty_level {
    ($lvlin:expr) => {
        match $lvlin {
            $crate::logging::AppLogLevel::FATAL | $crate::logging::AppLogLevel::ERROR => {
                tracing::Level::ERROR
            }
            $crate::logging::AppLogLevel::WARNING => tracing::Level::WARN,
            $crate::logging::AppLogLevel::INFO => tracing::Level::INFO,
            $crate::logging::AppLogLevel::DEBUG => tracing::Level::DEBUG,
            $crate::logging::AppLogLevel::TRACE => tracing::Level::TRACE,
        }
    };
}

fn _gen_localfile_writer(basepath: &str, rpath: &str) -> Option<(NonBlocking, WorkerGuard)> {
    let mut fullpath = basepath.to_string();
    if !basepath.ends_with('/') && !rpath.starts_with('/') {
        fullpath += "/";
    }
    fullpath += rpath;
    let p = Path::new(&fullpath);
    let (dir, fname_prefix) = (p.parent()?, p.file_name()?);
    let wr_dst = RollingFileAppender::new(Rotation::NEVER, dir, fname_prefix);
    Some(tracing_appender::non_blocking(wr_dst))
}

fn _gen_console_writer() -> (NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(stdout())
} // tracing spawns a dedicated thread for each non-blocking writer

fn _init_handler(basepath: &AppBasepathCfg, cfg: &AppLogHandlerCfg) -> DefaultHandler {
    let lvl = to_3rdparty_level!(&cfg.min_level);
    let localfile = match (&cfg.destination, cfg.path.as_ref()) {
        (DstOption::LOCALFS, Some(rpath)) => _gen_localfile_writer(&basepath.system, rpath),
        _others => None,
    }; // config validation already rejects file handlers without path,
       // a path without file name falls back to console
    let (io_wr, guard) = localfile.unwrap_or_else(_gen_console_writer);
    (io_wr, lvl, guard)
}

fn _init_logger(cfg: &AppLoggerCfg, hdlrs: &HashMap<AppLogAlias, DefaultHandler>) -> AppLogger {
    let iter = cfg.handlers.iter().filter_map(|alias| {
        hdlrs.get(alias).map(|(wr_ptr, default_lvl, _guard)| {
            let lvl = cfg
                .level
                .as_ref()
                .map_or(*default_lvl, |l| to_3rdparty_level!(l));
            TraceLayer::new()
                .with_writer(wr_ptr.clone())
                .with_file(false) // to prevent full path exposed
                .with_line_number(true)
                .with_thread_ids(true)
                .with_target(true)
                .with_level(true)
                .with_filter(LevelFilter::from_level(lvl))
        })
    });
    let layers = Vec::from_iter(iter);
    Dispatch::new(Registry::default().with(layers))
}

impl AppLogContext {
    pub fn new(basepath: &AppBasepathCfg, cfg: &AppLoggingCfg) -> Self {
        let iter = cfg
            .handlers
            .iter()
            .map(|item| (item.alias.clone(), _init_handler(basepath, item)));
        let hdlrs = HashMap::from_iter(iter);
        let iter2 = cfg
            .loggers
            .iter()
            .map(|item| (item.alias.clone(), _init_logger(item, &hdlrs)));
        let loggers: HashMap<AppLogAlias, Dispatch, RandomState> = HashMap::from_iter(iter2);
        // keep guards of the IO writers during the lifetime
        Self {
            loggers,
            _io_guards: hdlrs.into_values().map(|(_, _, g)| g).collect(),
        }
    }

    pub fn get_assigner(&self, key: &str) -> Option<&Dispatch> {
        let mut curr = key;
        loop {
            if let Some(d) = self.loggers.get(&curr.to_string()) {
                break Some(d);
            }
            match curr.rfind("::") {
                Some(idx) => {
                    curr = &curr[..idx];
                }
                None => {
                    break None;
                }
            }
        }
    }
} // end of impl AppLogContext

#[macro_export]
macro_rules! app_log_event {
    ( $ctx:ident, $lvl:expr, $($arg:tt)+ ) => {{
        const MOD_PATH:&str = module_path!();
        if let Some(assigner) = $ctx.get_assigner(MOD_PATH) {
            const LVL_INNER: tracing::Level = $crate::logging::to_3rdparty_level!($lvl);
            tracing::dispatcher::with_default(assigner, || {
                tracing::event!(LVL_INNER, $($arg)+);
            });
        } else {
            println!("[WARN] no log dispatcher for the module path: {}", MOD_PATH);
            println!($($arg)+);
        }
    }};
}

pub use app_log_event;
pub use to_3rdparty_level;
