//! Mapping requests and the client-side validation rules applied to them.

use serde::{Deserialize, Serialize};

use crate::error::{FigiError, Result};
use crate::id_type::{IdType, OptionType};

/// One mapping query.
///
/// Optional fields left empty are omitted from the encoded request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRequest {
    /// Kind of identifier in `id_value`.
    #[serde(default)]
    pub id_type: IdType,

    /// The identifier itself.
    #[serde(default)]
    pub id_value: String,

    #[serde(rename = "exchCode", default, skip_serializing_if = "String::is_empty")]
    pub exchange_code: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mic_code: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,

    #[serde(rename = "marketSecDes", default, skip_serializing_if = "String::is_empty")]
    pub market_sector: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub security_type: String,

    /// Required when `id_type` is `BASE_TICKER` or `ID_EXCH_SYMBOL`.
    #[serde(rename = "securityType2", default, skip_serializing_if = "String::is_empty")]
    pub security_type2: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_unlisted_equities: Option<bool>,

    #[serde(default, skip_serializing_if = "OptionType::is_unspecified")]
    pub option_type: OptionType,
}

impl MappingRequest {
    /// Create a request for a single identifier.
    pub fn new(id_type: IdType, id_value: impl Into<String>) -> Self {
        Self {
            id_type,
            id_value: id_value.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a `TICKER` lookup.
    pub fn ticker(ticker: impl Into<String>) -> Self {
        Self::new(IdType::Ticker, ticker)
    }

    pub fn with_exchange_code(mut self, exchange_code: impl Into<String>) -> Self {
        self.exchange_code = exchange_code.into();
        self
    }

    pub fn with_mic_code(mut self, mic_code: impl Into<String>) -> Self {
        self.mic_code = mic_code.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_market_sector(mut self, market_sector: impl Into<String>) -> Self {
        self.market_sector = market_sector.into();
        self
    }

    pub fn with_security_type(mut self, security_type: impl Into<String>) -> Self {
        self.security_type = security_type.into();
        self
    }

    pub fn with_security_type2(mut self, security_type2: impl Into<String>) -> Self {
        self.security_type2 = security_type2.into();
        self
    }

    pub fn with_include_unlisted_equities(mut self, include: bool) -> Self {
        self.include_unlisted_equities = Some(include);
        self
    }

    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Check the request before it is sent.
    ///
    /// Rules are applied in order and the first failure wins:
    /// empty `idValue`, unspecified `idType`, missing `securityType2` for
    /// ambiguous identifier types, then the identifier type validity check.
    pub fn validate(&self) -> Result<()> {
        if self.id_value.is_empty() {
            return Err(FigiError::MissingId);
        }
        if self.id_type.as_u8() == 0 {
            return Err(FigiError::MissingIdType);
        }
        if self.id_type.requires_security_type2() && self.security_type2.is_empty() {
            return Err(FigiError::MissingSecurityType2);
        }
        if !self.id_type.is_valid() {
            return Err(FigiError::MissingIdType);
        }
        Ok(())
    }
}

/// Validate a possibly absent request.
pub fn validate(request: Option<&MappingRequest>) -> Result<()> {
    request.ok_or(FigiError::NilRequest)?.validate()
}

/// Validate every request in a batch, returning the first failure.
pub fn validate_batch(requests: &[MappingRequest]) -> Result<()> {
    requests.iter().try_for_each(MappingRequest::validate)
}
