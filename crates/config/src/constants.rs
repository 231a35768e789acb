//! Fixed names used when locating and overlaying configuration

/// Config file looked up in the config directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "jmxproxybeat.toml";

pub const ENV_PATH_HOME: &str = "JMXPROXYBEAT_PATH_HOME";
pub const ENV_PATH_CONFIG: &str = "JMXPROXYBEAT_PATH_CONFIG";
pub const ENV_PATH_DATA: &str = "JMXPROXYBEAT_PATH_DATA";
pub const ENV_PATH_LOGS: &str = "JMXPROXYBEAT_PATH_LOGS";
pub const ENV_LOG_LEVEL: &str = "JMXPROXYBEAT_LOG_LEVEL";
