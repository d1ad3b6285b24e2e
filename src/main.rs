use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitjournal::chart::TextRenderer;
use fitjournal::config::Config;
use fitjournal::menu::{self, App};
use fitjournal::prompt::Prompter;
use fitjournal::{db, migrations};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so prompts stay readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitjournal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Opening database: {}", config.database_url);

    // Create database pool
    let pool = db::create_pool(&config.database_url)?;

    // Run migrations
    migrations::run_migrations(&pool)?;

    let app = App::new(pool);
    let mut prompter = Prompter::stdio();
    let mut renderer = TextRenderer::new(std::io::stdout());

    menu::run(&app, &mut prompter, &mut renderer)?;

    Ok(())
}
