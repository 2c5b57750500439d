//! Mapping results and the batch envelope they arrive in.

use serde::{Deserialize, Serialize};

use crate::error::{FigiError, Result};

/// One FIGI record returned for a mapping query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figi: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_sector: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "uniqueID", default, skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,

    #[serde(rename = "exchCode", default, skip_serializing_if = "Option::is_none")]
    pub exchange_code: Option<String>,

    #[serde(rename = "shareClassFIGI", default, skip_serializing_if = "Option::is_none")]
    pub share_class_figi: Option<String>,

    #[serde(rename = "compositeFIGI", default, skip_serializing_if = "Option::is_none")]
    pub composite_figi: Option<String>,

    #[serde(rename = "securityType2", default, skip_serializing_if = "Option::is_none")]
    pub security_type2: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_description: Option<String>,

    #[serde(rename = "uniqueIDFutOpt", default, skip_serializing_if = "Option::is_none")]
    pub unique_id_future_option: Option<String>,
}

/// Result slot for one request of a batch.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MappingResult {
    #[serde(default)]
    pub data: Option<Vec<MappingResponse>>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub warning: Option<String>,
}

/// Parse a 2xx response body into its result slots.
pub(crate) fn parse_batch(body: &[u8]) -> Result<Vec<MappingResult>> {
    serde_json::from_slice(body).map_err(|e| FigiError::Decode(e.to_string()))
}

/// Collapse the result slots into one list.
///
/// Any slot carrying an error fails the whole batch, then any slot carrying a
/// warning does. Otherwise the data lists are concatenated in slot order.
pub(crate) fn flatten_batch(results: Vec<MappingResult>) -> Result<Vec<MappingResponse>> {
    if let Some(error) = results
        .iter()
        .filter_map(|r| r.error.as_deref())
        .find(|e| !e.is_empty())
    {
        return Err(FigiError::Api(error.to_string()));
    }

    if let Some(warning) = results
        .iter()
        .filter_map(|r| r.warning.as_deref())
        .find(|w| !w.is_empty())
    {
        return Err(FigiError::Warning(warning.to_string()));
    }

    Ok(results
        .into_iter()
        .flat_map(|r| r.data.unwrap_or_default())
        .collect())
}
