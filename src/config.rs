use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub gateway: GatewayConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct GatewayConfig {
    /// Bearer credential presented to the push gateway
    #[arg(long, env = "EXPO_DISPATCH_ACCESS_TOKEN")]
    pub access_token: String,

    /// Endpoint notifications are submitted to
    #[arg(
        long,
        env = "EXPO_DISPATCH_GATEWAY_URL",
        default_value = "https://exp.host/--/api/v2/push/send"
    )]
    pub gateway_url: String,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "EXPO_DISPATCH_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
