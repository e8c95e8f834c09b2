use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::result::Result;

use serde_json::Value as JsnVal;

use crate::config::{AppBasepathCfg, AppRpcMockCfg};

// target queue name -> canned reply envelopes, consumed in order
type MockDataRoutes = HashMap<String, VecDeque<JsnVal>>;

pub struct MockDataSource {
    routes: MockDataRoutes,
}

impl MockDataSource {
    pub fn try_build(basepath: &AppBasepathCfg, cfg: &AppRpcMockCfg) -> Result<Self, String> {
        let fullpath = basepath.service.clone() + cfg.test_data.as_str();
        let file = File::open(fullpath).map_err(|e| e.to_string())?;
        let routes =
            serde_json::from_reader::<File, MockDataRoutes>(file).map_err(|e| e.to_string())?;
        Ok(Self { routes })
    }

    pub fn extract(&mut self, route_key: &str) -> Result<Vec<u8>, String> {
        let tdata = self
            .routes
            .get_mut(route_key)
            .ok_or(format!("invalid-route: {route_key}"))?;
        tdata
            .pop_front()
            .map(|v| v.to_string().into_bytes())
            .ok_or("empty-test-data".to_string())
    }
}
