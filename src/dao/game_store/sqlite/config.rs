/// Connection pool size used when nothing else is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime configuration describing how to reach the SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl SqliteConfig {
    /// Construct a configuration from an sqlx connection string such as `sqlite://gamesdb?mode=rwc`.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Bound the number of pooled connections. Zero is bumped to one.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }
}
