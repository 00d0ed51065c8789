//! Response composition for the version endpoint.
//!
//! The endpoint always answers with the same envelope: status 200, a plain
//! text identification body, and a permissive CORS header set so the demo
//! front end can call it from any origin.

use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::version::VersionInfo;

/// Headers a cross-origin caller is allowed to send.
pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
/// Methods the endpoint answers to, including the browser preflight.
pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS";
/// Any origin may call the endpoint.
pub const CORS_ALLOW_ORIGIN: &str = "*";

const BODY_DELIMITER: &str = "-";
// Trailing labels kept verbatim for compatibility with the deployed contract.
const DEPLOY_LABEL: &str = "CD";
const DEMO_LABEL: &str = "pipeline - feb demo";

/// Composes the identification body:
/// `"<name>-<version>-CD-pipeline - feb demo"`.
pub fn app_info_body(info: &VersionInfo) -> String {
    [
        info.application_name(),
        info.application_version(),
        DEPLOY_LABEL,
        DEMO_LABEL,
    ]
    .join(BODY_DELIMITER)
}

/// Builds the full response envelope for a version invocation.
///
/// The builder signature is fallible, but with the fixed status, headers,
/// and text body used here it always returns `Ok` — the request path has no
/// failure mode once the process has initialized.
pub fn version_response(info: &VersionInfo) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
        .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
        .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .body(Body::Text(app_info_body(info)))?)
}
