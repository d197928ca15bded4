use std::sync::Arc;

use crate::models::{AlternateTypeRule, ApiInfo, Docket, NamedSecurityScheme, SecurityContext};
use crate::order::Ordered;
use crate::selector::{HandlerSelector, PathSelector};

/// Customizes the published documentation.
///
/// Every hook receives the current value and returns its replacement; the
/// default implementations return the input unchanged. When several plugins
/// are registered, plugins are applied from lowest to highest precedence, so
/// the plugin with the highest precedence has the final say. Override
/// [`Ordered::precedence`] to take part in that ordering.
pub trait DocketPlugin: Ordered + Send + Sync {
    fn configure_api_info(&self, api_info: ApiInfo) -> ApiInfo {
        api_info
    }

    fn configure_handler_selector(&self, selector: HandlerSelector) -> HandlerSelector {
        selector
    }

    fn configure_path_selector(&self, selector: PathSelector) -> PathSelector {
        selector
    }

    /// Add (or remove) security contexts.
    fn add_security_contexts(&self, contexts: Vec<SecurityContext>) -> Vec<SecurityContext> {
        contexts
    }

    /// Add (or remove) security schemes.
    fn add_security_schemes(&self, schemes: Vec<NamedSecurityScheme>) -> Vec<NamedSecurityScheme> {
        schemes
    }

    /// Add (or remove) alternate type rules, e.g. to publish a custom model description.
    fn add_alternate_type_rules(&self, rules: Vec<AlternateTypeRule>) -> Vec<AlternateTypeRule> {
        rules
    }

    /// Final stage: runs after every other hook and may change anything.
    /// Prefer the individual hooks where one fits.
    fn configure(&self, docket: Docket) -> Docket {
        docket
    }
}

pub type DynPlugin = Arc<dyn DocketPlugin>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::PluginChain;
    use crate::order::Precedence;

    struct Hookless;

    impl Ordered for Hookless {}
    impl DocketPlugin for Hookless {}

    struct PathExtension {
        precedence: Precedence,
        selector: PathSelector,
    }

    impl Ordered for PathExtension {
        fn precedence(&self) -> Precedence {
            self.precedence
        }
    }

    impl DocketPlugin for PathExtension {
        fn configure_path_selector(&self, selector: PathSelector) -> PathSelector {
            selector.or(self.selector.clone())
        }
    }

    struct Titled {
        precedence: Precedence,
        title: &'static str,
    }

    impl Ordered for Titled {
        fn precedence(&self) -> Precedence {
            self.precedence
        }
    }

    impl DocketPlugin for Titled {
        fn configure_api_info(&self, api_info: ApiInfo) -> ApiInfo {
            api_info.title(self.title)
        }
    }

    #[test]
    fn hookless_plugins_leave_every_aspect_untouched() {
        let plugins: Vec<DynPlugin> = vec![Arc::new(Hookless), Arc::new(Hookless)];
        let chain = PluginChain::new(plugins);

        let sentinel = ApiInfo::new("sentinel", "0.0.0");
        let info = chain.apply(sentinel.clone(), |p, v| p.configure_api_info(v));
        assert_eq!(info, sentinel);

        let rules = chain.apply(Vec::new(), |p, v| p.add_alternate_type_rules(v));
        assert!(rules.is_empty());

        let docket = chain.apply(Docket::new("sentinel-group"), |p, d| p.configure(d));
        assert_eq!(docket.group_name(), "sentinel-group");

        let paths = chain.apply(PathSelector::none(), |p, s| p.configure_path_selector(s));
        assert!(!paths.matches("/anything"));
    }

    #[test]
    fn title_from_highest_precedence_plugin_wins() {
        let plugins: Vec<DynPlugin> = vec![
            Arc::new(Titled {
                precedence: Precedence::highest(),
                title: "Y",
            }),
            Arc::new(Titled {
                precedence: Precedence::lowest(),
                title: "X",
            }),
        ];
        let chain = PluginChain::new(plugins);

        let info = chain.apply(ApiInfo::new("Default API", "2.0"), |p, v| {
            p.configure_api_info(v)
        });
        assert_eq!(info.title, "Y");
    }

    #[test]
    fn path_extensions_compose_over_empty_base() {
        let plugins: Vec<DynPlugin> = vec![
            Arc::new(PathExtension {
                precedence: Precedence::highest(),
                selector: PathSelector::regex("/test/v2/.*").unwrap(),
            }),
            Arc::new(PathExtension {
                precedence: Precedence::lowest(),
                selector: PathSelector::ant("/test/v1/**").unwrap(),
            }),
        ];
        let chain = PluginChain::new(plugins);

        let selector = chain.apply(PathSelector::none(), |p, s| p.configure_path_selector(s));
        assert!(selector.matches("/test/v2/foo"));
        assert!(selector.matches("/test/v1/bar"));
        assert!(!selector.matches("/other/path"));
    }
}
