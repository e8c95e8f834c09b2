use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::result::Result as DefaultResult;
use std::sync::RwLock;

use serde_json::Value as JsnVal;

use super::AbstractConfidentiality;
use crate::error::{AppConfidentialityError, AppErrorCode};

const SOURCE_SIZE_LIMIT_NBYTES: u64 = 8196;

/// Secrets kept in a JSON file on local file system, e.g. credential of
/// the message broker. Payloads already looked up are cached in memory.
pub struct UserSpaceConfidentiality {
    _src_fullpath: String,
    _cached: RwLock<HashMap<String, String>>,
}

impl UserSpaceConfidentiality {
    pub fn build(fullpath: String) -> Self {
        Self {
            _cached: RwLock::new(HashMap::new()),
            _src_fullpath: fullpath,
        }
    }

    fn rawdata_from_source(&self) -> DefaultResult<Vec<u8>, AppConfidentialityError> {
        let map_io_err = |e: std::io::Error| AppConfidentialityError {
            code: AppErrorCode::IOerror(e.kind()),
            detail: e.to_string(),
        };
        let mut file = File::open(self._src_fullpath.as_str()).map_err(map_io_err)?;
        let actual_f_sz = file.metadata().map_err(map_io_err)?.len();
        if actual_f_sz >= SOURCE_SIZE_LIMIT_NBYTES {
            return Err(AppConfidentialityError {
                code: AppErrorCode::ExceedingMaxLimit,
                detail: format!("source-file, size:{actual_f_sz}"),
            });
        }
        let mut rawbuf = Vec::new();
        let _sz = file.read_to_end(&mut rawbuf).map_err(map_io_err)?;
        Ok(rawbuf)
    }

    fn search_json_payload<'a>(
        toplvl: &'a JsnVal,
        id_: &str,
    ) -> DefaultResult<&'a JsnVal, AppConfidentialityError> {
        let mut curr_lvl = toplvl;
        for tok in id_.split('/') {
            let nxtlvl = match curr_lvl {
                JsnVal::Object(o) => o
                    .get(tok)
                    .ok_or_else(|| format!("json-object, id:{id_}")),
                JsnVal::Array(a) => tok
                    .parse::<usize>()
                    .map_err(|e| format!("path-error, id:{id_}, detail:{e}"))
                    .and_then(|idx| a.get(idx).ok_or_else(|| format!("json-array, id:{id_}"))),
                _others => Err(format!("json-scalar, id:{id_}")),
            };
            curr_lvl = nxtlvl.map_err(|detail| AppConfidentialityError {
                detail,
                code: AppErrorCode::NoConfidentialityCfg,
            })?;
        }
        Ok(curr_lvl)
    }

    fn lock_error(e: impl ToString) -> AppConfidentialityError {
        AppConfidentialityError {
            detail: e.to_string() + ", source: UserSpaceConfidentiality",
            code: AppErrorCode::AcquireLockFailure,
        }
    }
} // end of impl UserSpaceConfidentiality

impl AbstractConfidentiality for UserSpaceConfidentiality {
    fn try_get_payload(&self, id_: &str) -> DefaultResult<String, AppConfidentialityError> {
        {
            let rguard = self._cached.read().map_err(Self::lock_error)?;
            if let Some(v) = rguard.get(id_) {
                return Ok(v.clone());
            }
        }
        let rawdata = self.rawdata_from_source()?;
        let toplvl =
            serde_json::from_slice::<JsnVal>(&rawdata).map_err(|e| AppConfidentialityError {
                code: AppErrorCode::InvalidJsonFormat,
                detail: e.to_string(),
            })?;
        let found = Self::search_json_payload(&toplvl, id_)?.to_string();
        let mut wguard = self._cached.write().map_err(Self::lock_error)?;
        let _old = wguard.insert(id_.to_string(), found.clone());
        Ok(found)
    }
}
