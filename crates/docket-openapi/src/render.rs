use utoipa::openapi::path::{Operation, PathItem};
use utoipa::openapi::security::SecurityRequirement;
use utoipa::openapi::server::Server;
use utoipa::openapi::{Components, OpenApi};

use docket_core::{Docket, RequestHandler, SecurityReference};

/// Project `docket` onto the application's generated document.
///
/// Operations not selected by the docket are removed (and path items left
/// without operations with them); selected operations receive the security
/// requirements of every matching security context.
pub fn render(docket: &Docket, mut openapi: OpenApi) -> OpenApi {
    openapi.info = docket.api_info().to_info();

    if let Some(host) = docket.host() {
        openapi.servers = Some(vec![Server::new(host)]);
    }

    let source_paths = std::mem::take(&mut openapi.paths.paths);
    let mut kept = 0usize;
    let mut dropped = 0usize;

    for (path, mut item) in source_paths {
        for (method, slot) in operations_mut(&mut item) {
            let Some(operation) = slot.as_mut() else {
                continue;
            };

            let handler = RequestHandler::new(&path, method)
                .with_operation_id(operation.operation_id.clone())
                .with_tags(operation.tags.clone().unwrap_or_default());

            if docket.selects(&handler) {
                attach_security(docket, &path, operation);
                kept += 1;
            } else {
                *slot = None;
                dropped += 1;
            }
        }

        if has_operations(&item) {
            openapi.paths.paths.insert(path, item);
        }
    }

    if !docket.security_schemes().is_empty() || !docket.alternate_type_rules().is_empty() {
        let components = openapi.components.get_or_insert_with(Components::new);

        for scheme in docket.security_schemes() {
            components.add_security_scheme(scheme.name.clone(), scheme.scheme.clone());
        }

        for rule in docket.alternate_type_rules() {
            match components.schemas.get_mut(&rule.original) {
                Some(schema) => *schema = rule.alternate.clone(),
                None => tracing::debug!(
                    schema = %rule.original,
                    "alternate type rule matches no component schema"
                ),
            }
        }
    }

    if !docket.tags().is_empty() {
        let tags = openapi.tags.get_or_insert_with(Vec::new);
        for tag in docket.tags() {
            if !tags.iter().any(|t| t.name == tag.name) {
                tags.push(tag.to_openapi());
            }
        }
    }

    tracing::debug!(
        group = docket.group_name(),
        kept_operations = kept,
        dropped_operations = dropped,
        "docket rendered"
    );

    openapi
}

fn attach_security(docket: &Docket, path: &str, operation: &mut Operation) {
    let requirements: Vec<SecurityRequirement> = docket
        .security_contexts()
        .iter()
        .filter(|context| context.applies_to(path))
        .flat_map(|context| context.references.iter().map(SecurityReference::to_requirement))
        .collect();

    if !requirements.is_empty() {
        operation
            .security
            .get_or_insert_with(Vec::new)
            .extend(requirements);
    }
}

fn operations_mut(item: &mut PathItem) -> [(&'static str, &mut Option<Operation>); 8] {
    [
        ("GET", &mut item.get),
        ("PUT", &mut item.put),
        ("POST", &mut item.post),
        ("DELETE", &mut item.delete),
        ("OPTIONS", &mut item.options),
        ("HEAD", &mut item.head),
        ("PATCH", &mut item.patch),
        ("TRACE", &mut item.trace),
    ]
}

fn has_operations(item: &PathItem) -> bool {
    [
        &item.get,
        &item.put,
        &item.post,
        &item.delete,
        &item.options,
        &item.head,
        &item.patch,
        &item.trace,
    ]
    .iter()
    .any(|operation| operation.is_some())
}
