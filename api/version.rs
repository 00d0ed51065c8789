use lambda_pipeline::response::version_response;
use lambda_pipeline::version::VersionInfo;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Resolve build metadata before registering the handler: a build with
    // broken metadata fails here and never serves an invocation.
    let info = VersionInfo::from_build_metadata()?;
    run(move |req: Request| handler(req, info.clone())).await
}

/// GET /api/version — Identify the running build.
///
/// The request is accepted for platform compatibility but never consumed:
/// every invocation, whatever its payload, gets the same 200 envelope with
/// the identification body and the fixed CORS headers.
pub async fn handler(_req: Request, info: VersionInfo) -> Result<Response<Body>, Error> {
    version_response(&info)
}
