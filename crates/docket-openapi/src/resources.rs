use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

use docket_config::{OAuthProperties, SsoProperties, SwaggerProperties};
use docket_core::Docket;

/// Client settings the UI needs to run its single sign-on flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SsoSecurityConfiguration {
    pub token_url: String,
    pub authorize_url: String,
    pub client_id: String,
    pub client_secret: String,
}

impl SsoSecurityConfiguration {
    /// `None` when single sign-on is disabled.
    pub fn from_properties(properties: &SsoProperties) -> Option<Self> {
        properties.enabled.then(|| Self {
            token_url: properties.token_url(),
            authorize_url: properties.authorize_url(),
            client_id: properties.client_id.clone(),
            client_secret: properties.client_secret.clone(),
        })
    }
}

/// OAuth2 client settings used by the UI's "Authorize" dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OAuthSecurityConfiguration {
    pub client_id: String,
    pub client_secret: String,
    pub scope_separator: String,
}

impl OAuthSecurityConfiguration {
    /// `None` when OAuth2 is disabled.
    pub fn from_properties(properties: &OAuthProperties) -> Option<Self> {
        properties.enabled.then(|| Self {
            client_id: properties.client_id.clone(),
            client_secret: properties.client_secret.clone(),
            scope_separator: " ".to_string(),
        })
    }
}

/// One published documentation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerResource {
    pub name: String,
    pub url: String,
    pub swagger_version: String,
    pub location: String,
}

impl SwaggerResource {
    pub fn for_docket(docket: &Docket) -> Self {
        let url = document_url(docket.group_name());
        Self {
            name: docket.group_name().to_string(),
            location: url.clone(),
            url,
            swagger_version: "3.1.0".to_string(),
        }
    }
}

/// URL the rendered document of `group` is served at.
pub fn document_url(group: &str) -> String {
    format!("/api-docs/{}/openapi.json", group)
}

/// Everything the metadata endpoints serve, computed once at startup.
#[derive(Debug, Clone, Default)]
pub struct MetadataResources {
    pub sso: Option<SsoSecurityConfiguration>,
    pub oauth: Option<OAuthSecurityConfiguration>,
    pub resources: Vec<SwaggerResource>,
    pub metadata: HashMap<String, Value>,
}

impl MetadataResources {
    /// Empty when documentation is disabled.
    pub fn from_properties(properties: &SwaggerProperties, docket: Option<&Docket>) -> Self {
        if !properties.enabled {
            return Self::default();
        }

        Self {
            sso: SsoSecurityConfiguration::from_properties(&properties.security.sso),
            oauth: OAuthSecurityConfiguration::from_properties(&properties.security.oauth2),
            resources: docket.map(SwaggerResource::for_docket).into_iter().collect(),
            metadata: properties.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sso_urls_concatenate_base_and_paths() {
        let properties = SsoProperties {
            enabled: true,
            base_url: "http://localhost:9103/idm".to_string(),
            token_path: "/v2/token".to_string(),
            authorize_path: "/v2/authorize".to_string(),
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
        };

        let sso = SsoSecurityConfiguration::from_properties(&properties).unwrap();
        assert_eq!(sso.token_url, "http://localhost:9103/idm/v2/token");
        assert_eq!(sso.authorize_url, "http://localhost:9103/idm/v2/authorize");

        let json = serde_json::to_value(&sso).unwrap();
        assert_eq!(json["clientId"], "test-client");
        assert_eq!(json["clientSecret"], "test-secret");
    }

    #[test]
    fn disabled_features_produce_nothing() {
        let mut properties = SwaggerProperties::default();
        properties.security.sso.enabled = false;

        let resources = MetadataResources::from_properties(&properties, None);
        assert!(resources.sso.is_none());
        assert!(resources.oauth.is_none());
        assert!(resources.resources.is_empty());
    }

    #[test]
    fn disabled_documentation_builds_no_sso_configuration() {
        let mut properties = SwaggerProperties::default();
        properties.enabled = false;
        properties.security.oauth2.enabled = true;
        properties
            .metadata
            .insert("team".to_string(), "platform".into());

        let resources = MetadataResources::from_properties(&properties, None);
        assert!(properties.security.sso.enabled);
        assert!(resources.sso.is_none());
        assert!(resources.oauth.is_none());
        assert!(resources.metadata.is_empty());
    }

    #[test]
    fn resource_listing_follows_docket_group() {
        let docket = Docket::new("test");
        let resources = MetadataResources::from_properties(&SwaggerProperties::default(), Some(&docket));
        assert_eq!(resources.resources.len(), 1);
        assert_eq!(resources.resources[0].name, "test");
        assert_eq!(resources.resources[0].url, "/api-docs/test/openapi.json");
        assert!(resources.sso.is_some());
    }
}
