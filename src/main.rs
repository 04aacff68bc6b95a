use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chat_relay::{
    serve, ChatRequest, Commands, Container, ContainerConfig, ConversationTurn, RelayConfig,
    ServerOptions, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SERVICE_NAME,
};

#[derive(Parser)]
#[command(name = "chat-relay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(long, global = true, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(short, long, global = true, env = "PORT", default_value = "3000")]
    port: u16,

    /// Bind to 0.0.0.0 instead of --host, exposing the relay on all interfaces
    #[arg(long, global = true)]
    public: bool,

    #[arg(long, global = true, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, global = true, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, global = true, env = "ANTHROPIC_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(
        long,
        global = true,
        env = "RELAY_MAX_TOKENS",
        default_value_t = DEFAULT_MAX_TOKENS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_tokens: u32,

    /// Replace the built-in system prompt with the contents of this file
    #[arg(long, global = true, env = "RELAY_SYSTEM_PROMPT_FILE")]
    system_prompt_file: Option<PathBuf>,

    /// Name reported by the health endpoint
    #[arg(long, global = true, env = "RELAY_SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    service_name: String,

    /// Comma-separated allowed origins; any origin when empty
    #[arg(
        long,
        global = true,
        env = "RELAY_CORS_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    cors_origins: Vec<String>,

    /// Answer locally instead of calling the upstream API
    #[arg(long, global = true)]
    mock_upstream: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn relay_config(&self) -> Result<RelayConfig> {
        let mut relay = RelayConfig::new()
            .with_model(&self.model)
            .with_max_tokens(self.max_tokens)?
            .with_service_name(&self.service_name);
        if let Some(path) = &self.system_prompt_file {
            relay = relay.with_system_prompt_file(path)?;
        }
        Ok(relay)
    }

    fn bind_host(&self) -> String {
        if self.public {
            "0.0.0.0".to_string()
        } else {
            self.host.clone()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let relay = cli.relay_config()?;

    match cli.command.clone().unwrap_or(Commands::Serve) {
        Commands::Prompt => {
            println!("{}", relay.system_prompt());
        }
        Commands::Serve => {
            let container = build_container(&cli, relay)?;
            serve(
                container,
                ServerOptions {
                    host: cli.bind_host(),
                    port: cli.port,
                    cors_origins: cli.cors_origins.clone(),
                },
            )
            .await?;
        }
        Commands::Ask { text } => {
            let container = build_container(&cli, relay)?;
            let request = ChatRequest::from_turns([ConversationTurn::user(text)]);
            let reply = container.relay_chat_use_case().execute(request).await?;
            println!("{}", reply.message());
        }
    }

    Ok(())
}

fn build_container(cli: &Cli, relay: RelayConfig) -> Result<Arc<Container>> {
    info!(
        "Relay configured: model={}, max_tokens={}, mock_upstream={}",
        relay.model(),
        relay.max_tokens(),
        cli.mock_upstream
    );

    Ok(Arc::new(Container::new(ContainerConfig {
        api_key: cli.api_key.clone(),
        base_url: cli.base_url.clone(),
        mock_upstream: cli.mock_upstream,
        relay,
    })?))
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn explicit_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "chat-relay",
            "--port",
            "8080",
            "--model",
            "claude-haiku-4-5",
            "--max-tokens",
            "256",
            "serve",
        ])
        .expect("parse");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.command, Some(Commands::Serve));
        let relay = cli.relay_config().expect("relay config");
        assert_eq!(relay.model(), "claude-haiku-4-5");
        assert_eq!(relay.max_tokens(), 256);
    }

    #[test]
    fn zero_max_tokens_is_refused_at_parse_time() {
        assert!(Cli::try_parse_from(["chat-relay", "--max-tokens", "0"]).is_err());
        assert!(Cli::try_parse_from(["chat-relay", "--max-tokens", "1"]).is_ok());
    }

    #[test]
    fn container_is_only_built_with_a_usable_upstream() {
        let cli = Cli::try_parse_from(["chat-relay", "--api-key", "", "prompt"]).expect("parse");
        let relay = cli.relay_config().expect("relay config");
        assert!(build_container(&cli, relay).is_err());

        let cli = Cli::try_parse_from(["chat-relay", "--api-key", "", "--mock-upstream", "serve"])
            .expect("parse");
        let relay = cli.relay_config().expect("relay config");
        assert!(build_container(&cli, relay).is_ok());
    }

    #[test]
    fn ask_requires_text() {
        assert!(Cli::try_parse_from(["chat-relay", "ask"]).is_err());
        let cli = Cli::try_parse_from(["chat-relay", "ask", "Do you do Botox?"]).expect("parse");
        assert_eq!(
            cli.command,
            Some(Commands::Ask {
                text: "Do you do Botox?".to_string()
            })
        );
    }

    #[test]
    fn public_binds_all_interfaces() {
        let cli = Cli::try_parse_from(["chat-relay", "--public"]).expect("parse");
        assert_eq!(cli.bind_host(), "0.0.0.0");
        assert!(cli.command.is_none());
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let cli = Cli::try_parse_from([
            "chat-relay",
            "--cors-origins",
            "https://a.example,https://b.example",
        ])
        .expect("parse");
        assert_eq!(
            cli.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
