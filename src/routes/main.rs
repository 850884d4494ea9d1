use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::models::config::ServerConfig;
use crate::routes::{CONTEXT_PATH_KEY, FULL_WEB_PATH_KEY, context_path, full_web_path};
use crate::services::properties::{EnvOverrides, PropertyResolver};
use crate::services::template::IndexTemplate;

#[get("/")]
pub async fn index(
    req: HttpRequest,
    template: web::Data<IndexTemplate>,
    resolver: web::Data<PropertyResolver>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    // Overrides may change between requests, so effective values are
    // recomputed here rather than cached.
    let mut context = resolver.resolve_effective(&EnvOverrides);

    let context_path = context_path(req.path(), server_config.context_path_suffix.as_deref());
    let request_url = {
        let conn = req.connection_info();
        format!("{}://{}{}", conn.scheme(), conn.host(), req.path())
    };
    context.insert(
        FULL_WEB_PATH_KEY.to_string(),
        full_web_path(&request_url, req.path(), &context_path),
    );
    context.insert(CONTEXT_PATH_KEY.to_string(), context_path);

    match template.render(&context) {
        Some(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        None => HttpResponse::NotFound().finish(),
    }
}
