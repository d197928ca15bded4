use crate::models::{AlternateTypeRule, ApiInfo, NamedSecurityScheme, SecurityContext, Tag};
use crate::selector::{HandlerSelector, PathSelector, RequestHandler};

/// Everything needed to publish one documentation group.
///
/// A `Docket` is passed by value through plugin hooks; setters consume and
/// return it so each hook hands a finished value to the next one.
#[derive(Debug, Clone)]
pub struct Docket {
    group_name: String,
    enabled: bool,
    host: Option<String>,
    api_info: ApiInfo,
    path_selector: PathSelector,
    handler_selector: HandlerSelector,
    security_contexts: Vec<SecurityContext>,
    security_schemes: Vec<NamedSecurityScheme>,
    alternate_type_rules: Vec<AlternateTypeRule>,
    tags: Vec<Tag>,
}

impl Docket {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            enabled: true,
            host: None,
            api_info: ApiInfo::default(),
            path_selector: PathSelector::any(),
            handler_selector: HandlerSelector::any(),
            security_contexts: Vec::new(),
            security_schemes: Vec::new(),
            alternate_type_rules: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn api_info(&self) -> &ApiInfo {
        &self.api_info
    }

    pub fn path_selector(&self) -> &PathSelector {
        &self.path_selector
    }

    pub fn handler_selector(&self) -> &HandlerSelector {
        &self.handler_selector
    }

    pub fn security_contexts(&self) -> &[SecurityContext] {
        &self.security_contexts
    }

    pub fn security_schemes(&self) -> &[NamedSecurityScheme] {
        &self.security_schemes
    }

    pub fn alternate_type_rules(&self) -> &[AlternateTypeRule] {
        &self.alternate_type_rules
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Whether an operation is published by this docket.
    pub fn selects(&self, handler: &RequestHandler) -> bool {
        self.path_selector.matches(&handler.path) && self.handler_selector.matches(handler)
    }

    pub fn with_group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = api_info;
        self
    }

    pub fn with_paths(mut self, selector: PathSelector) -> Self {
        self.path_selector = selector;
        self
    }

    pub fn with_handlers(mut self, selector: HandlerSelector) -> Self {
        self.handler_selector = selector;
        self
    }

    pub fn with_security_contexts(mut self, contexts: Vec<SecurityContext>) -> Self {
        self.security_contexts = contexts;
        self
    }

    pub fn with_security_schemes(mut self, schemes: Vec<NamedSecurityScheme>) -> Self {
        self.security_schemes = schemes;
        self
    }

    pub fn with_alternate_type_rules(mut self, rules: Vec<AlternateTypeRule>) -> Self {
        self.alternate_type_rules = rules;
        self
    }

    /// Append tags; a tag whose name is already present is ignored.
    pub fn add_tags<I: IntoIterator<Item = Tag>>(mut self, tags: I) -> Self {
        for tag in tags {
            if !self.tags.iter().any(|t| t.name == tag.name) {
                self.tags.push(tag);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::schema::{ObjectBuilder, Schema};
    use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
    use utoipa::openapi::RefOr;

    #[test]
    fn debug_output_names_schemes_and_rules() {
        let docket = Docket::new("debuggable")
            .with_security_schemes(vec![NamedSecurityScheme::new(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-API-Key"))),
            )])
            .with_alternate_type_rules(vec![AlternateTypeRule::new(
                "WidgetId",
                RefOr::T(Schema::Object(ObjectBuilder::new().build())),
            )]);

        let rendered = format!("{:?}", docket);
        assert!(rendered.contains("debuggable"));
        assert!(rendered.contains("X-API-Key"));
        assert!(rendered.contains("WidgetId"));
    }

    #[test]
    fn selects_requires_path_and_handler_match() {
        let docket = Docket::new("default-api")
            .with_paths(PathSelector::prefix("/api/"))
            .with_handlers(HandlerSelector::with_method("GET"));

        assert!(docket.selects(&RequestHandler::new("/api/widgets", "get")));
        assert!(!docket.selects(&RequestHandler::new("/api/widgets", "post")));
        assert!(!docket.selects(&RequestHandler::new("/internal", "get")));
    }

    #[test]
    fn add_tags_appends_and_dedupes() {
        let docket = Docket::new("g")
            .add_tags(vec![Tag::new("tag1", "one"), Tag::new("tag2", "two")])
            .add_tags(vec![Tag::new("tag1", "again"), Tag::new("tag3", "three")]);

        let names: Vec<&str> = docket.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["tag1", "tag2", "tag3"]);
        assert_eq!(docket.tags()[0].description.as_deref(), Some("one"));
    }
}
