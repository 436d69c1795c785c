//! Invocation event and response shapes.

use serde::{Deserialize, Serialize};

use crate::openurl::RawParameters;
use crate::strategy::SelectionResult;

/// ReShare VuFind results page. Ends with `?` so a search string can be appended as is.
pub const REDIRECT_BASE_URL: &str = "https://borrowdirect.reshare.indexdata.com/Search/Results?";

/// Temporary redirect.
pub const REDIRECT_STATUS: u16 = 307;

/// Inbound invocation event. Only the query string parameters are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(
        rename = "queryStringParameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub query_string_parameters: Option<RawParameters>,
}

impl InvocationEvent {
    pub fn with_params(params: RawParameters) -> Self {
        Self {
            query_string_parameters: Some(params),
        }
    }

    /// Parameters, if present and non-empty.
    pub fn params(&self) -> Option<&RawParameters> {
        self.query_string_parameters
            .as_ref()
            .filter(|params| !params.is_empty())
    }
}

/// Redirect target and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectResponse {
    pub status_code: u16,
    pub location: String,
}

impl RedirectResponse {
    /// Redirect to the results page filtered by the selected search string.
    /// An empty selection leaves the base URL untouched.
    pub fn to_results(selection: &SelectionResult) -> Self {
        Self::with_base(REDIRECT_BASE_URL, selection.as_str())
    }

    pub fn with_base(base_url: &str, query: &str) -> Self {
        Self {
            status_code: REDIRECT_STATUS,
            location: format!("{}{}", base_url, query),
        }
    }
}

/// Outbound invocation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: ResponseHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Location")]
    pub location: String,
}

impl From<RedirectResponse> for InvocationResponse {
    fn from(redirect: RedirectResponse) -> Self {
        Self {
            status_code: redirect.status_code,
            headers: ResponseHeaders {
                location: redirect.location,
            },
        }
    }
}
