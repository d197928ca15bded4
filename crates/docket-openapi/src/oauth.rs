use utoipa::openapi::security::{AuthorizationCode, Flow, OAuth2, Scopes, SecurityScheme};

use docket_config::OAuthProperties;
use docket_core::NamedSecurityScheme;

/// Name under which the OAuth2 scheme is registered and referenced.
pub const OAUTH2_SCHEME_NAME: &str = "oauth2";

/// Authorization-code scheme pointing at `base_url + authorize_path` / `base_url + token_path`.
pub fn build_oauth2_security_scheme(properties: &OAuthProperties) -> NamedSecurityScheme {
    let flow = Flow::AuthorizationCode(AuthorizationCode::new(
        properties.authorize_url(),
        properties.token_url(),
        Scopes::new(),
    ));

    NamedSecurityScheme::new(
        OAUTH2_SCHEME_NAME,
        SecurityScheme::OAuth2(OAuth2::new([flow])),
    )
}
