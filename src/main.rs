use anyhow::Context;

mod app;
mod auth;
mod config;
mod courses;
mod errors;
mod llm;
mod majors;
mod plans;
mod recommendations;
mod seed;
mod state;
mod users;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "courseplan=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state::AppState::init().await?;

    sqlx::migrate!("./migrations")
        .run(&app_state.db)
        .await
        .context("run migrations")?;

    if app_state.config.seed_catalog {
        seed::seed_catalog(&app_state.db)
            .await
            .context("seed course catalog")?;
    } else {
        tracing::info!("catalog seeding disabled");
    }

    app::serve(app::build_app(app_state)).await
}
