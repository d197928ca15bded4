use utoipa::openapi::{Contact, Info, License};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiContact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

impl ApiContact {
    pub fn new(name: &str, url: &str, email: &str) -> Self {
        fn non_empty(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }

        Self {
            name: non_empty(name),
            url: non_empty(url),
            email: non_empty(email),
        }
    }
}

/// Top-level information shown for a documentation group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiInfo {
    pub title: String,
    pub description: Option<String>,
    pub terms_of_service_url: Option<String>,
    pub contact: Option<ApiContact>,
    pub license: Option<String>,
    pub license_url: Option<String>,
    pub version: String,
}

impl ApiInfo {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn terms_of_service_url(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service_url = Some(url.into());
        self
    }

    pub fn contact(mut self, contact: ApiContact) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn license_url(mut self, url: impl Into<String>) -> Self {
        self.license_url = Some(url.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Convert to the OpenAPI `info` object.
    pub fn to_info(&self) -> Info {
        let mut info = Info::new(self.title.clone(), self.version.clone());
        info.description = self.description.clone();
        info.terms_of_service = self.terms_of_service_url.clone();

        if let Some(ref c) = self.contact {
            let mut contact = Contact::new();
            contact.name = c.name.clone();
            contact.url = c.url.clone();
            contact.email = c.email.clone();
            info.contact = Some(contact);
        }

        if let Some(ref name) = self.license {
            let mut license = License::new(name.clone());
            license.url = self.license_url.clone();
            info.license = Some(license);
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_setters_replace_fields() {
        let info = ApiInfo::new("Default API", "2.0")
            .title("Test API")
            .version("2.0-TEST")
            .contact(ApiContact::new("Support", "https://example.com", ""));

        assert_eq!(info.title, "Test API");
        assert_eq!(info.version, "2.0-TEST");
        assert_eq!(info.contact.as_ref().and_then(|c| c.email.clone()), None);
    }

    #[test]
    fn converts_to_openapi_info() {
        let info = ApiInfo::new("Widgets", "1.0")
            .description("Widget API")
            .license("MIT")
            .license_url("https://opensource.org/licenses/MIT")
            .to_info();

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["title"], "Widgets");
        assert_eq!(json["version"], "1.0");
        assert_eq!(json["description"], "Widget API");
        assert_eq!(json["license"]["name"], "MIT");
        assert_eq!(json["license"]["url"], "https://opensource.org/licenses/MIT");
    }
}
