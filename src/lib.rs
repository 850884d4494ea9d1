//! Serves a single HTML page built by substituting `${key}` placeholders in
//! a static template with packaging metadata, environment overrides and
//! request-derived paths.
use std::path::Path;

use actix_web::{App, HttpServer, web};

pub mod domain;
pub mod models;
pub mod routes;
pub mod services;

use models::config::ServerConfig;
use services::manifest::ManifestMetadata;
use services::properties::PropertyResolver;
use services::template::IndexTemplate;
use services::{ServiceError, ServiceResult};

/// Resolve declared properties, load the template and run the HTTP server.
///
/// Declarations, metadata and the template are read exactly once; only the
/// override lookup happens per request.
pub async fn run(server_config: ServerConfig) -> ServiceResult<()> {
    let metadata = match &server_config.manifest_path {
        Some(path) => ManifestMetadata::load(Path::new(path))?,
        None => ManifestMetadata::default(),
    };

    let resolver = PropertyResolver::from_params(&server_config.properties, &metadata)?;
    log::info!(
        "Declared {} properties from configuration",
        resolver.declarations().len()
    );

    let template = IndexTemplate::load(Path::new(&server_config.tpl_path))?;
    if template.is_missing() {
        log::warn!(
            "Template {} not found, requests will be answered with 404",
            server_config.tpl_path
        );
    }

    let mount = server_config.mount_path.clone().unwrap_or_default();
    let bind_address = (server_config.address.clone(), server_config.port);

    let server_config = web::Data::new(server_config);
    let resolver = web::Data::new(resolver);
    let template = web::Data::new(template);

    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);
    HttpServer::new(move || {
        let app = App::new()
            .app_data(server_config.clone())
            .app_data(resolver.clone())
            .app_data(template.clone());
        if mount.is_empty() {
            app.service(routes::main::index)
        } else {
            app.service(web::scope(&mount).service(routes::main::index))
        }
    })
    .bind(bind_address)
    .map_err(ServiceError::Bind)?
    .run()
    .await
    .map_err(ServiceError::Bind)
}
