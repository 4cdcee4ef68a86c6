use crate::config::{DadosConfig, DEFAULT_BIND_ADDR, DEFAULT_MAX_LIMIT};
use std::collections::HashMap;
use std::time::Duration;

fn config_from(vars: &[(&str, &str)]) -> DadosConfig {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DadosConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn test_defaults_when_env_is_empty() {
    let config = config_from(&[]);

    assert_eq!(config.pg_host, None);
    assert_eq!(config.pg_port, None);
    assert_eq!(config.min_connections, 1);
    assert_eq!(config.max_connections, 10);
    assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.max_limit, DEFAULT_MAX_LIMIT);
}

#[test]
fn test_reads_database_coordinates() {
    let config = config_from(&[
        ("PG_HOST", "db.internal"),
        ("PG_PORT", "6543"),
        ("PG_DB", "relatorios"),
        ("PG_USER", "leitura"),
        ("PG_PASSWORD", "s3cret"),
    ]);

    assert_eq!(config.pg_host.as_deref(), Some("db.internal"));
    assert_eq!(config.pg_port, Some(6543));
    assert_eq!(config.pg_database.as_deref(), Some("relatorios"));
    assert_eq!(config.pg_user.as_deref(), Some("leitura"));
    assert_eq!(config.pg_password.as_deref(), Some("s3cret"));

    let options = config.connect_options();
    assert_eq!(options.get_host(), "db.internal");
    assert_eq!(options.get_port(), 6543);
    assert_eq!(options.get_database(), Some("relatorios"));
    assert_eq!(options.get_username(), "leitura");
}

#[test]
fn test_bad_numbers_fall_back_to_defaults() {
    let config = config_from(&[
        ("PG_PORT", "not-a-port"),
        ("POOL_MAX_CONNECTIONS", "lots"),
        ("POOL_MIN_CONNECTIONS", "-2"),
        ("DADOS_MAX_LIMIT", ""),
    ]);

    assert_eq!(config.pg_port, None);
    assert_eq!(config.max_connections, 10);
    assert_eq!(config.min_connections, 1);
    assert_eq!(config.max_limit, DEFAULT_MAX_LIMIT);
}

#[test]
fn test_min_connections_never_exceed_max() {
    let config = config_from(&[("POOL_MIN_CONNECTIONS", "8"), ("POOL_MAX_CONNECTIONS", "4")]);

    assert_eq!(config.max_connections, 4);
    assert_eq!(config.min_connections, 4);
}

#[test]
fn test_zero_max_connections_is_ignored() {
    let config = config_from(&[("POOL_MAX_CONNECTIONS", "0")]);

    assert_eq!(config.max_connections, 10);
}

#[test]
fn test_debug_output_hides_password() {
    let config = config_from(&[("PG_PASSWORD", "s3cret")]);

    let debug = format!("{:?}", config);
    assert!(!debug.contains("s3cret"));
    assert!(debug.contains("***"));
}
