use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};

use crate::{issuer::UploadUrlIssuer, types::Invocation};

/// Issues a presigned upload URL for `?object_name=`
///
/// Mirrors the platform event: a request without any query string is
/// handed to the issuer with no parameter set at all.
pub async fn handler(
    Extension(issuer): Extension<Arc<UploadUrlIssuer>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    // `/upload-url` and `/upload-url?` both arrive as a null parameter set
    let invocation = Invocation {
        query_string_parameters: (!params.is_empty()).then_some(params),
    };

    let response = issuer.handle(&invocation).await;
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response()
}
