//! Command-line and environment configuration.

use clap::Parser;

/// In-memory todo list web service.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
