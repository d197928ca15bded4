use utoipa::openapi::security::{SecurityRequirement, SecurityScheme};
use utoipa::openapi::{RefOr, Schema};

use crate::selector::PathSelector;

/// Reference to a named security scheme with the scopes an operation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityReference {
    pub name: String,
    pub scopes: Vec<String>,
}

impl SecurityReference {
    pub fn new(name: impl Into<String>, scopes: Vec<String>) -> Self {
        Self {
            name: name.into(),
            scopes,
        }
    }

    pub fn to_requirement(&self) -> SecurityRequirement {
        SecurityRequirement::new(self.name.clone(), self.scopes.clone())
    }
}

/// Security references applied to every operation whose path matches `operation_selector`.
#[derive(Debug, Clone)]
pub struct SecurityContext {
    pub references: Vec<SecurityReference>,
    pub operation_selector: PathSelector,
}

impl SecurityContext {
    pub fn new(references: Vec<SecurityReference>, operation_selector: PathSelector) -> Self {
        Self {
            references,
            operation_selector,
        }
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.operation_selector.matches(path)
    }
}

#[derive(Debug, Clone)]
pub struct NamedSecurityScheme {
    pub name: String,
    pub scheme: SecurityScheme,
}

impl NamedSecurityScheme {
    pub fn new(name: impl Into<String>, scheme: SecurityScheme) -> Self {
        Self {
            name: name.into(),
            scheme,
        }
    }
}

/// Replace the published description of component schema `original` with `alternate`.
#[derive(Debug, Clone)]
pub struct AlternateTypeRule {
    pub original: String,
    pub alternate: RefOr<Schema>,
}

impl AlternateTypeRule {
    pub fn new(original: impl Into<String>, alternate: impl Into<RefOr<Schema>>) -> Self {
        Self {
            original: original.into(),
            alternate: alternate.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    pub fn to_openapi(&self) -> utoipa::openapi::tag::Tag {
        let mut tag = utoipa::openapi::tag::Tag::new(self.name.clone());
        tag.description = self.description.clone();
        tag
    }
}
