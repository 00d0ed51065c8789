//! CLI tool to print the identification string a deploy will serve.
//!
//! Useful for eyeballing a build before it ships: prints the resolved
//! metadata as JSON plus the exact body `/api/version` will answer with.

use lambda_pipeline::response::app_info_body;
use lambda_pipeline::version::VersionInfo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let info = VersionInfo::from_build_metadata()?;
    let metadata = serde_json::to_string_pretty(&info)?;

    println!("Build metadata:");
    println!("{metadata}");
    println!();
    println!("Response body: {}", app_info_body(&info));
    Ok(())
}
