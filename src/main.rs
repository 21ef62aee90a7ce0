#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> Result<(), foodshare::error::AppError> {
    use actix_files::Files;
    use actix_web::{middleware::Logger, web, App, HttpServer};
    use foodshare::app::{routes, AppContext};
    use foodshare::api::not_found;
    use foodshare::config::Config;
    use tracing::{error, info};
    use tracing_subscriber::{fmt, EnvFilter};

    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load().inspect_err(|e| error!("{}", e))?;

    // Built once so every worker shares the same store and sessions
    let ctx = AppContext::from_config(&config)
        .await
        .inspect_err(|e| error!("Failed to initialize application: {}", e))?;
    let ctx = web::Data::new(ctx);
    info!("Schema ready at {}", config.database_path);

    let static_dir = config.static_dir.clone();
    info!("listening on http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(ctx.clone())
            .configure(routes)
            .service(Files::new("/static", &static_dir))
            .default_service(web::to(not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the server needs the `ssr` feature
}
