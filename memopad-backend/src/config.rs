use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// HMAC secret for signing session tokens. Injected at process start,
    /// never committed. When unset an ephemeral secret is generated and
    /// tokens do not survive a restart.
    pub const TOKEN_SECRET: &str = "TOKEN_SECRET";
    /// Base URL of the upstream weather service.
    pub const WEATHER_API_URL: &str = "WEATHER_API_URL";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const DATABASE_URL: &str = "./.db/memopad.db";
    pub const WEATHER_API_URL: &str = "https://weatherstack.com/ws_api.php";
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub token_secret: String,
    pub weather_api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| defaults::DATABASE_URL.to_string()),
            token_secret: env::var(env_vars::TOKEN_SECRET)
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(generated_token_secret),
            weather_api_url: env::var(env_vars::WEATHER_API_URL)
                .unwrap_or_else(|_| defaults::WEATHER_API_URL.to_string()),
        }
    }
}

/// Generate a random signing secret for this process.
/// Sessions issued under a generated secret become invalid on restart.
fn generated_token_secret() -> String {
    let mut buf = [0u8; 32];
    rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut buf);
    log::warn!(
        "{} not set — generated an ephemeral signing secret; session tokens will not survive a restart",
        env_vars::TOKEN_SECRET
    );
    hex::encode(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_secret_is_nonempty_hex() {
        let secret = generated_token_secret();
        assert_eq!(secret.len(), 64);
        assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_secrets_differ() {
        assert_ne!(generated_token_secret(), generated_token_secret());
    }
}
