use actix_web::{http::header, web, HttpResponse};

/// Target of the UI entry endpoint.
#[derive(Debug, Clone)]
pub struct UiRedirect {
    pub view: String,
}

/// Forward the configured UI endpoint to the UI view.
pub async fn ui_redirect(redirect: web::Data<UiRedirect>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, redirect.view.as_str()))
        .finish()
}
