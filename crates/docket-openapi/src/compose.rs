use docket_config::SwaggerProperties;
use docket_core::{
    ApiContact, ApiInfo, Docket, DynPlugin, HandlerSelector, PathSelector, PluginChain,
    SecurityContext, SecurityReference,
};

use crate::oauth::{build_oauth2_security_scheme, OAUTH2_SCHEME_NAME};

pub const DEFAULT_GROUP_NAME: &str = "default-api";

/// Seed values a composition pass starts from, before any plugin runs.
#[derive(Debug, Clone)]
pub struct DocketDefaults {
    pub group_name: String,
    pub api_info: ApiInfo,
    pub path_selector: PathSelector,
    pub handler_selector: HandlerSelector,
    /// Scopes required by the default OAuth2 security context.
    pub authorization_scopes: Vec<String>,
}

impl Default for DocketDefaults {
    fn default() -> Self {
        Self {
            group_name: DEFAULT_GROUP_NAME.to_string(),
            api_info: ApiInfo::new("Default API", "2.0")
                .description("Description of API")
                .contact(ApiContact::new("API Support", "", ""))
                .license("Apache License Version 2.0")
                .license_url("https://www.apache.org/licenses/LICENSE-2.0"),
            path_selector: PathSelector::prefix("/api/"),
            handler_selector: HandlerSelector::any(),
            authorization_scopes: Vec::new(),
        }
    }
}

/// Builds the documentation docket from settings and registered plugins.
///
/// Plugins are sorted once, when the composer is created, and that order is
/// used for every hook. [`compose`](Self::compose) starts from fresh seed
/// values each time it is called.
pub struct DocketComposer {
    properties: SwaggerProperties,
    defaults: DocketDefaults,
    plugins: PluginChain<DynPlugin>,
}

impl DocketComposer {
    pub fn new(properties: SwaggerProperties, plugins: Vec<DynPlugin>) -> Self {
        Self {
            properties,
            defaults: DocketDefaults::default(),
            plugins: PluginChain::new(plugins),
        }
    }

    pub fn with_defaults(mut self, defaults: DocketDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn properties(&self) -> &SwaggerProperties {
        &self.properties
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Run one composition pass. Returns `None` when documentation is disabled.
    pub fn compose(&self) -> Option<Docket> {
        if !self.properties.enabled {
            tracing::info!("API documentation disabled; skipping docket composition");
            return None;
        }

        let plugins = &self.plugins;

        let api_info = plugins.apply(self.defaults.api_info.clone(), |p, info| {
            p.configure_api_info(info)
        });
        let path_selector = plugins.apply(self.defaults.path_selector.clone(), |p, selector| {
            p.configure_path_selector(selector)
        });
        let handler_selector = plugins.apply(self.defaults.handler_selector.clone(), |p, selector| {
            p.configure_handler_selector(selector)
        });
        tracing::debug!(plugins = plugins.len(), "api info and selectors composed");

        let mut docket = Docket::new(self.defaults.group_name.clone())
            .with_paths(path_selector.clone())
            .with_handlers(handler_selector)
            .with_api_info(api_info);

        let mut security_contexts = Vec::new();
        let mut security_schemes = Vec::new();
        let oauth2 = &self.properties.security.oauth2;
        if oauth2.enabled {
            security_contexts.push(self.default_security_context(path_selector));
            security_schemes.push(build_oauth2_security_scheme(oauth2));
        }

        let host = self.properties.ui.host.trim();
        if !host.is_empty() {
            docket = docket.with_host(host);
        }

        let security_contexts =
            plugins.apply(security_contexts, |p, contexts| p.add_security_contexts(contexts));
        let security_schemes =
            plugins.apply(security_schemes, |p, schemes| p.add_security_schemes(schemes));
        let alternate_type_rules =
            plugins.apply(Vec::new(), |p, rules| p.add_alternate_type_rules(rules));
        tracing::debug!(
            security_contexts = security_contexts.len(),
            security_schemes = security_schemes.len(),
            alternate_type_rules = alternate_type_rules.len(),
            "docket components composed"
        );

        docket = docket
            .with_alternate_type_rules(alternate_type_rules)
            .with_security_contexts(security_contexts)
            .with_security_schemes(security_schemes);

        let docket = plugins.apply(docket, |p, docket| p.configure(docket));

        tracing::info!(
            group = docket.group_name(),
            title = %docket.api_info().title,
            plugins = plugins.len(),
            "docket composed"
        );

        Some(docket)
    }

    fn default_security_context(&self, path_selector: PathSelector) -> SecurityContext {
        SecurityContext::new(
            vec![SecurityReference::new(
                OAUTH2_SCHEME_NAME,
                self.defaults.authorization_scopes.clone(),
            )],
            path_selector,
        )
    }
}
