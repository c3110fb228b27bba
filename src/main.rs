use gh_token_secret::cli::Cli;
use gh_token_secret::config::Config;
use gh_token_secret::errors::AppResult;

#[tokio::main]
async fn main() {
    gh_token_secret::logging::init();

    let cli = <Cli as clap::Parser>::parse();

    if let Err(err) = run(cli).await {
        eprintln!("gh-token-secret: {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = Config::try_from(cli)?;
    gh_token_secret::run(config).await
}
