use clap::Parser;
use dotenvy::dotenv;
use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{EnvFilter, fmt};

use llm::GroqClient;
use persona_server::{AppState, app};
use reddit::{Credentials, RedditClient};

#[derive(Parser)]
#[command(author, version, about = "Generate a Reddit user persona with an LLM")]
struct Cli {
    /// Address to bind the HTTP server
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Directory the persona text files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    // Credentials pass through uninterpreted; missing values surface as
    // provider authentication errors on the first request, not here.
    let reddit = RedditClient::new(Credentials {
        client_id: env::var("REDDIT_CLIENT_ID").unwrap_or_default(),
        client_secret: env::var("REDDIT_CLIENT_SECRET").unwrap_or_default(),
        user_agent: env::var("REDDIT_USER_AGENT").unwrap_or_default(),
    });
    let groq = GroqClient::new(env::var("groq_api_key").unwrap_or_default());

    let state = AppState {
        source: Arc::new(reddit),
        model: Arc::new(groq),
        out_dir: cli.out_dir,
    };
    let app = app(state);

    let addr: SocketAddr = cli.addr.parse()?;
    println!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
