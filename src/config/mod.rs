use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub operations: OperationsConfig,
    pub logging: LoggingConfig,
    /// Env overrides that were set but could not be applied
    #[serde(skip)]
    pub rejected_overrides: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// What to do when a connection references an operation that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingReferencePolicy {
    /// Surface the missing operation as not found
    #[default]
    Fail,
    /// Log a warning and leave the operation out of the listing
    Skip,
}

impl FromStr for DanglingReferencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(DanglingReferencePolicy::Fail),
            "skip" => Ok(DanglingReferencePolicy::Skip),
            other => Err(format!("unknown dangling reference policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationsConfig {
    pub dangling_references: DanglingReferencePolicy,
    pub include_tombstoned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(lookup)
    }

    // Runs before any subscriber exists, so bad values are kept for the caller to log
    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("SYNC_OPS_DANGLING_REFERENCES") {
            match v.parse() {
                Ok(policy) => self.operations.dangling_references = policy,
                Err(e) => self
                    .rejected_overrides
                    .push(format!("Ignoring SYNC_OPS_DANGLING_REFERENCES: {}", e)),
            }
        }
        if let Some(v) = lookup("SYNC_OPS_INCLUDE_TOMBSTONED") {
            match parse_flag(&v) {
                Some(flag) => self.operations.include_tombstoned = flag,
                None => self.rejected_overrides.push(format!(
                    "Ignoring SYNC_OPS_INCLUDE_TOMBSTONED: not a boolean: {}",
                    v
                )),
            }
        }

        if let Some(v) = lookup("SYNC_OPS_LOG").or_else(|| lookup("RUST_LOG")) {
            self.logging.filter = v;
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            operations: OperationsConfig {
                dangling_references: DanglingReferencePolicy::Fail,
                include_tombstoned: false,
            },
            logging: LoggingConfig {
                filter: "sync_operations=debug,info".to_string(),
            },
            rejected_overrides: Vec::new(),
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            operations: OperationsConfig {
                dangling_references: DanglingReferencePolicy::Fail,
                include_tombstoned: false,
            },
            logging: LoggingConfig {
                filter: "info".to_string(),
            },
            rejected_overrides: Vec::new(),
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            operations: OperationsConfig {
                dangling_references: DanglingReferencePolicy::Fail,
                include_tombstoned: false,
            },
            logging: LoggingConfig {
                filter: "warn,sync_operations=info".to_string(),
            },
            rejected_overrides: Vec::new(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
