use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "gh-token-secret",
    version,
    about = "Mint a GitHub App installation token and store it as Kubernetes secrets"
)]
pub struct Cli {
    /// GitHub App ID (JWT issuer)
    #[arg(short = 'a', long = "app-id", default_value = "")]
    pub app_id: String,

    /// GitHub App installation ID
    #[arg(short = 'i', long = "installation-id", default_value_t = 0)]
    pub installation_id: u64,

    /// Path to the app's PEM-encoded RSA private key
    #[arg(short = 'k', long = "key-file", default_value = "")]
    pub key_file: String,

    /// Kubernetes namespace for the managed secrets
    #[arg(short = 'n', long = "namespace", default_value = "default")]
    pub namespace: String,

    /// Base name for the managed secrets (opaque variant gets a "-opaque" suffix)
    #[arg(short = 's', long = "secret-name", default_value = "")]
    pub secret_name: String,

    /// Username embedded in the basic-auth secret
    #[arg(short = 'u', long = "username", default_value = "token")]
    pub username: String,

    /// JWT and token expiration time in seconds
    #[arg(short = 't', long = "ttl", default_value_t = 600)]
    pub ttl: i64,
}
