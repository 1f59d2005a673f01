use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

lazy_static! {
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
    pub static ref ALLOWED_ORIGINS: Vec<String> = load_or_default(
        env::ALLOWED_ORIGINS_ENV_VAR,
        defaults::ALLOWED_ORIGINS
    )
    .split(',')
    .map(|origin| origin.trim().to_owned())
    .filter(|origin| !origin.is_empty())
    .collect();
}

fn load_env() {
    dotenv().ok();
}

pub fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

/// Only a case-insensitive `true` switches a flag on when it is set.
pub fn load_bool_or_default(variable_name: &str, default_value: bool) -> bool {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.trim().is_empty() => {
            value.trim().eq_ignore_ascii_case("true")
        }
        _ => default_value,
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ALLOWED_ORIGINS";
    pub const TEST_MODE_ENV_VAR: &str = "TEST_MODE";
    pub const SQLITE_URL_ENV_VAR: &str = "SQLITE_URL";
    pub const POSTGRES_USER_ENV_VAR: &str = "POSTGRES_USER";
    pub const POSTGRES_PASSWORD_ENV_VAR: &str = "POSTGRES_PASSWORD";
    pub const POSTGRES_HOST_ENV_VAR: &str = "POSTGRES_HOST";
    pub const POSTGRES_PORT_ENV_VAR: &str = "POSTGRES_PORT";
    pub const POSTGRES_DB_ENV_VAR: &str = "POSTGRES_DB";
    pub const ENVIRONMENT_ENV_VAR: &str = "ENVIRONMENT";
    pub const TEST_DB_CONNECTION_ENV_VAR: &str = "TEST_DB_CONNECTION";
    pub const DB_POOL_SIZE_ENV_VAR: &str = "DB_POOL_SIZE";
    pub const DB_MAX_OVERFLOW_ENV_VAR: &str = "DB_MAX_OVERFLOW";
    pub const DB_CONNECT_TIMEOUT_ENV_VAR: &str = "DB_CONNECT_TIMEOUT_SECS";
    pub const DB_POOL_RECYCLE_ENV_VAR: &str = "DB_POOL_RECYCLE_SECS";
}

pub mod defaults {
    pub const SQLITE_URL: &str = "sqlite://lamfo_local.db?mode=rwc";
    pub const POSTGRES_USER: &str = "lamfo";
    pub const POSTGRES_HOST: &str = "localhost";
    pub const POSTGRES_PORT: &str = "5432";
    pub const POSTGRES_DB: &str = "lamfo_db";
    pub const ENVIRONMENT: &str = "development";
    pub const POOL_SIZE: u32 = 5;
    pub const POOL_MAX_OVERFLOW: u32 = 10;
    pub const CONNECT_TIMEOUT_SECS: u64 = 30;
    pub const POOL_RECYCLE_SECS: u64 = 3600;
    pub const ALLOWED_ORIGINS: &str =
        "http://localhost:3000,http://127.0.0.1:3000";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:8000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
