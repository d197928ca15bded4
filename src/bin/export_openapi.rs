use docket_config::Config;
use docket_core::DynPlugin;
use docket_openapi::{render, DocketComposer};
use docket_server::demo::{DemoApiDoc, DemoPlugin};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::OpenApi;

fn default_output_path() -> PathBuf {
    PathBuf::from("docs/assets/openapi/openapi.json")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_output_path);

    let config = Config::load()?;
    config.validate()?;

    let plugins: Vec<DynPlugin> = vec![Arc::new(DemoPlugin)];
    let docket = DocketComposer::new(config.swagger, plugins)
        .compose()
        .ok_or("API documentation is disabled (swagger.enabled = false)")?;

    let openapi = render(&docket, DemoApiDoc::openapi());
    let json = serde_json::to_string_pretty(&openapi)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&output_path, json)?;

    eprintln!(
        "Wrote OpenAPI document for group '{}' to {}",
        docket.group_name(),
        output_path.canonicalize().unwrap_or(output_path).display()
    );

    Ok(())
}
