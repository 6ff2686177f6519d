//! Client Shell Entry Point
//!
//! Interactive shell over the session core: hydrates the persisted
//! session at startup, then takes navigation and account commands on
//! stdin. Uses `anyhow` for startup errors; application-level errors
//! flow through `auth::AuthError` and `kernel::error::AppError`.

mod routes;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use auth::models::SessionPhase;
use auth::{AuthConfig, HttpAuthGateway, RouteDecision, SessionManager};
use gateway::{ApiGateway, GatewayConfig, GatewayEvent};
use platform::store::{FileSessionStore, SessionStore};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shell=info,auth=info,gateway=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Persisted session store
    let store_path = env::var("SESSION_STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| FileSessionStore::default_path());
    tracing::info!(path = %store_path.display(), "Using session store");
    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open(store_path));

    // API gateway and session manager
    let api = Arc::new(ApiGateway::new(GatewayConfig::from_env(), store.clone())?);
    let mut events = api.subscribe();
    let manager = Arc::new(SessionManager::new(
        Arc::new(HttpAuthGateway::new(api.clone())),
        store,
    ));

    let config = AuthConfig::default();

    // Forced sign-out on session expiry, wherever it is detected
    let manager_for_events = manager.clone();
    let login_path = config.login_path.clone();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                GatewayEvent::SessionExpired => {
                    tracing::warn!("Session expired, signing out");
                    manager_for_events.logout();
                    println!("Your session has expired. Please sign in again ({login_path}).");
                }
            }
        }
    });

    // Rebuild the session from disk before taking any commands
    manager.hydrate();
    print_status(&manager);

    repl(manager, config).await
}

async fn repl(
    manager: Arc<SessionManager<HttpAuthGateway>>,
    config: AuthConfig,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("open"), Some(path), None) => open(&manager, &config, path),
            (Some("login"), Some(email), Some(password)) => {
                match manager.login(email, password).await {
                    Ok(()) => print_status(&manager),
                    Err(error) => println!("Login failed: {error}"),
                }
            }
            (Some("refresh"), None, None) => {
                manager.refresh().await;
                print_status(&manager);
            }
            (Some("whoami"), None, None) => print_status(&manager),
            (Some("links"), None, None) => {
                for path in routes::visible_links(&manager.snapshot()) {
                    println!("  {path}");
                }
            }
            (Some("logout"), None, None) => {
                manager.logout();
                println!("Signed out.");
            }
            (Some("quit") | Some("exit"), None, None) => break,
            (None, ..) => {}
            _ => println!(
                "Commands: open <path>, login <email> <password>, refresh, whoami, links, logout, quit"
            ),
        }
    }
    Ok(())
}

fn open(manager: &SessionManager<HttpAuthGateway>, config: &AuthConfig, path: &str) {
    match routes::decide_for(&manager.snapshot(), path) {
        None => println!("No such page: {path}"),
        Some(RouteDecision::Allow) => println!("-> {path}"),
        Some(RouteDecision::Pending) => println!("Still loading, try again"),
        Some(RouteDecision::RedirectToLogin { from }) => {
            println!("-> {} (sign in to continue to {from})", config.login_path);
        }
        Some(RouteDecision::RedirectHome) => {
            println!("-> {} (not available for your role)", config.home_path);
        }
    }
}

fn print_status(manager: &SessionManager<HttpAuthGateway>) {
    let state = manager.snapshot();
    match state.phase() {
        SessionPhase::Hydrating => println!("Session: loading..."),
        SessionPhase::Anonymous => println!("Session: not signed in"),
        SessionPhase::Authenticated => {
            // phase() guarantees a session here
            if let Some(session) = state.session.as_ref() {
                println!(
                    "Session: user {} ({})",
                    session.user_id,
                    session
                        .role
                        .map(|role| role.code())
                        .unwrap_or("no recognized role"),
                );
            }
        }
    }
}
