//! Client library for the OpenFIGI identifier mapping API.
//!
//! Requests are validated locally, sent as one batch per call and the batch
//! response is decoded into a flat list of FIGI records.
//!
//! ```rust,no_run
//! use openfigi_core::prelude::*;
//!
//! # async fn run() -> openfigi_core::Result<()> {
//! let client = FigiClient::builder().with_api_key("my-key").build()?;
//! let records = client
//!     .mapping(&CallContext::background(), &[MappingRequest::ticker("AAPL")])
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod macros;

#[doc(hidden)]
pub use serde;

pub mod client;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod id_type;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{ClientBuilder, FigiClient};
pub use context::CallContext;
pub use diagnostics::{Diagnostic, DiagnosticSink, DiscardSink, DynDiagnosticSink, TracingSink};
pub use error::{FigiError, Result};
pub use id_type::{IdType, OptionType};
pub use request::{validate, validate_batch, MappingRequest};
pub use response::MappingResponse;
pub use transport::{DynHttpTransport, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::client::{ClientBuilder, FigiClient};
    pub use crate::context::CallContext;
    pub use crate::error::{FigiError, Result};
    pub use crate::id_type::{IdType, OptionType};
    pub use crate::request::MappingRequest;
    pub use crate::response::MappingResponse;
}
