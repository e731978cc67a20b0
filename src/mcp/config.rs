//! Environment-based server configuration.
//!
//! Values are read once, after `.env` has been loaded, and validated eagerly at
//! startup:
//! - `LEAVE_MCP_TRANSPORT`: `stdio` (default) or `http`
//! - `LEAVE_MCP_BIND_ADDRESS`: HTTP listen address, default `0.0.0.0:8080`
//! - `LEAVE_MCP_TODAY`: optional `DD-MM-YYYY` date that pins "today"
//! - `LEAVE_MCP_LOG_FORMAT`: `pretty` (default) or `json`

use std::{env, fmt, net::SocketAddr, str::FromStr, sync::Arc, sync::LazyLock};

use chrono::NaiveDate;

use crate::mcp::error::LeaveError;
use crate::mcp::leave::{Clock, FixedClock, SystemClock, date::parse_calendar_date};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub static SERVER_CONFIG: LazyLock<Result<ServerConfig, LeaveError>> =
    LazyLock::new(|| ServerConfig::from_lookup(|key| env::var(key).ok()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

impl FromStr for Transport {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" | "streamable-http" => Ok(Self::Http),
            "stdio" => Ok(Self::Stdio),
            other => Err(LeaveError::InvalidConfig(format!(
                "LEAVE_MCP_TRANSPORT must be `http` or `stdio`, got `{other}`"
            ))),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Http => "http",
            Self::Stdio => "stdio",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LeaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(LeaveError::InvalidConfig(format!(
                "LEAVE_MCP_LOG_FORMAT must be `pretty` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub transport: Transport,
    pub bind_address: SocketAddr,
    pub today: Option<NaiveDate>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Builds the configuration from any key lookup, usually the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LeaveError> {
        let transport = lookup("LEAVE_MCP_TRANSPORT")
            .map_or(Ok(Transport::Stdio), |raw| raw.parse())?;

        let raw_address = lookup("LEAVE_MCP_BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw_address.trim().parse().map_err(|e| {
            LeaveError::InvalidConfig(format!(
                "LEAVE_MCP_BIND_ADDRESS `{raw_address}` is not a socket address: {e}"
            ))
        })?;

        let today = lookup("LEAVE_MCP_TODAY")
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| {
                parse_calendar_date(raw.trim()).map_err(|e| {
                    LeaveError::InvalidConfig(format!("LEAVE_MCP_TODAY `{raw}`: {e}"))
                })
            })
            .transpose()?;

        let log_format = lookup("LEAVE_MCP_LOG_FORMAT")
            .map_or(Ok(LogFormat::Pretty), |raw| raw.parse())?;

        Ok(Self {
            transport,
            bind_address,
            today,
            log_format,
        })
    }

    /// The clock leave dates are validated against.
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.today {
            Some(today) => Arc::new(FixedClock(today)),
            None => Arc::new(SystemClock),
        }
    }
}
