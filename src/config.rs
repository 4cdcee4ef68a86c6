use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_LIMIT: u32 = 50_000;

#[derive(Clone)]
pub struct DadosConfig {
    pub pg_host: Option<String>,
    pub pg_port: Option<u16>,
    pub pg_database: Option<String>,
    pub pg_user: Option<String>,
    pub pg_password: Option<String>,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bind_addr: String,
    pub max_limit: u32,
}

impl DadosConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // split out so tests can feed a map instead of mutating the process env
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let pg_port = non_empty("PG_PORT").and_then(|val| val.trim().parse::<u16>().ok());

        let max_connections = non_empty("POOL_MAX_CONNECTIONS")
            .and_then(|val| val.trim().parse::<u32>().ok())
            .filter(|val| *val > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        // a minimum above the maximum would make the pool refuse to start
        let min_connections = non_empty("POOL_MIN_CONNECTIONS")
            .and_then(|val| val.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_MIN_CONNECTIONS)
            .min(max_connections);

        let acquire_timeout = Duration::from_secs(
            non_empty("POOL_ACQUIRE_TIMEOUT_SECS")
                .and_then(|val| val.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        );

        let bind_addr = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_limit = non_empty("DADOS_MAX_LIMIT")
            .and_then(|val| val.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_LIMIT);

        Self {
            pg_host: non_empty("PG_HOST"),
            pg_port,
            pg_database: non_empty("PG_DB"),
            pg_user: non_empty("PG_USER"),
            pg_password: lookup("PG_PASSWORD"),
            min_connections,
            max_connections,
            acquire_timeout,
            bind_addr,
            max_limit,
        }
    }

    /// Connection options for the backing database.
    ///
    /// Starts from the client defaults (which also honor the libpq `PG*`
    /// variables) and overrides only what was configured.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new();

        if let Some(host) = &self.pg_host {
            options = options.host(host);
        }
        if let Some(port) = self.pg_port {
            options = options.port(port);
        }
        if let Some(database) = &self.pg_database {
            options = options.database(database);
        }
        if let Some(user) = &self.pg_user {
            options = options.username(user);
        }
        if let Some(password) = &self.pg_password {
            options = options.password(password);
        }

        options
    }
}

impl fmt::Debug for DadosConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DadosConfig")
            .field("pg_host", &self.pg_host)
            .field("pg_port", &self.pg_port)
            .field("pg_database", &self.pg_database)
            .field("pg_user", &self.pg_user)
            .field("pg_password", &self.pg_password.as_ref().map(|_| "***"))
            .field("min_connections", &self.min_connections)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .field("bind_addr", &self.bind_addr)
            .field("max_limit", &self.max_limit)
            .finish()
    }
}

impl Default for DadosConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
