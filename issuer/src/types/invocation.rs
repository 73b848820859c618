//! Invocation event and response shapes exchanged with the hosting platform

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Query parameter carrying the key of the object to upload
pub const OBJECT_NAME_PARAM: &str = "object_name";

/// A single request-triggering event delivered by the platform
///
/// Only the query string is read; every other field of the event is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    /// Query string parameters, `null` when the request carried none
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl Invocation {
    /// Builds an invocation from the given query parameters
    #[must_use]
    pub fn with_query<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            query_string_parameters: Some(
                params
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Returns the non-empty `object_name` parameter, if any
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(OBJECT_NAME_PARAM)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Response handed back to the platform
///
/// `body` is a JSON document holding exactly one of `upload_url` or `error`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    /// HTTP status code
    pub status_code: u16,
    /// JSON-encoded response body
    pub body: String,
}

impl InvocationResponse {
    /// 200 response carrying the issued URL
    #[must_use]
    pub fn upload_url(url: &str) -> Self {
        Self {
            status_code: 200,
            body: json!({ "upload_url": url }).to_string(),
        }
    }

    /// 400 response carrying an error message
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self {
            status_code: 400,
            body: json!({ "error": message }).to_string(),
        }
    }
}
