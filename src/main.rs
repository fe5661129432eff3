use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use slides::actions::ActionContext;
use slides::config::Config;
use slides::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;
    let ctx = ActionContext::from_config(&config).map_err(|e| std::io::Error::other(e.to_string()))?;
    let ctx = web::Data::new(ctx);

    // Session encryption key, from SESSION_KEY so sessions survive restarts
    let secret_key = match &config.session_key {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Forwarding slide actions to {}", config.api_url);
    log::info!("Starting server at http://{}", config.bind_addr);

    let cookie_secure = config.cookie_secure;
    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(ctx.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
