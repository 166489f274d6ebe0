//! Server configuration.

use clap::Parser;

/// Default listening port, matching the original deployment
pub const DEFAULT_PORT: u16 = 5000;

/// Public Piston endpoint used when no execution service URL is configured
pub const DEFAULT_EXECUTION_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Server configuration, populated from command-line arguments.
///
/// The `PORT` environment variable overrides `--port` when set, so the
/// server can be dropped into PaaS environments unchanged.
#[derive(Debug, Clone, Parser)]
#[command(name = "server", about = "Collaborative code editor server")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding the built client bundle
    #[arg(long, default_value = "frontend/dist")]
    pub static_dir: String,

    /// URL of the external code execution service
    #[arg(long, default_value = DEFAULT_EXECUTION_URL)]
    pub execution_url: String,

    /// Request timeout for execution service calls, in seconds
    #[arg(long, default_value_t = 10)]
    pub execution_timeout_secs: u64,
}

impl ServerConfig {
    /// Parse configuration from command-line arguments and environment.
    pub fn load() -> Self {
        let mut config = Self::parse();
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            config.port = port;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // テスト項目: 引数なしでデフォルト設定が得られる
        // when (操作):
        let config = ServerConfig::parse_from(["server"]);

        // then (期待する結果):
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.static_dir, "frontend/dist");
        assert_eq!(config.execution_url, DEFAULT_EXECUTION_URL);
        assert_eq!(config.execution_timeout_secs, 10);
    }

    #[test]
    fn test_config_overrides() {
        // テスト項目: コマンドライン引数で設定を上書きできる
        // when (操作):
        let config = ServerConfig::parse_from([
            "server",
            "--port",
            "8080",
            "--execution-url",
            "http://localhost:2000/api/v2/execute",
        ]);

        // then (期待する結果):
        assert_eq!(config.port, 8080);
        assert_eq!(config.execution_url, "http://localhost:2000/api/v2/execute");
    }
}
