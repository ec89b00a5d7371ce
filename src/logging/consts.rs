pub const DEFAULT_LOG_FILTER: &str = "pinmap=info";
