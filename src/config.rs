//! Runtime configuration, from flags or environment variables

use anyhow::{bail, Context, Result};
use chrono::Duration;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::auth::{
    credential_store::{DEFAULT_EMAIL, DEFAULT_PASSWORD},
    issuer::{DEFAULT_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS},
    Credential, JwtSecret, Role,
};

#[derive(Clone, Parser)]
#[command(name = "movie-gate", version, about = "Token-gated movie catalog API")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Symmetric key used to sign and verify tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Lifetime of issued tokens, 1 hour up to one year
    #[arg(
        long,
        env = "TOKEN_TTL_HOURS",
        default_value_t = DEFAULT_TOKEN_TTL_HOURS,
        value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_HOURS)
    )]
    pub token_ttl_hours: i64,

    /// Role every protected route requires
    #[arg(long, env = "REQUIRED_ROLE", default_value = "admin")]
    pub required_role: String,

    /// Email of the single recognized account
    #[arg(long, env = "LOGIN_EMAIL", default_value = DEFAULT_EMAIL)]
    pub login_email: String,

    /// Password of the single recognized account
    #[arg(long, env = "LOGIN_PASSWORD", default_value = DEFAULT_PASSWORD, hide_default_value = true, hide_env_values = true)]
    pub login_password: String,

    /// Mount GET /config, which echoes the signing secret. Never in production.
    #[arg(long, env = "EXPOSE_CONFIG_ENDPOINT")]
    pub expose_config_endpoint: bool,

    /// Directory poster uploads are written to
    #[arg(long, env = "UPLOAD_DIR", default_value = "./uploads")]
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn secret(&self) -> Option<JwtSecret> {
        self.jwt_secret.clone().and_then(JwtSecret::new)
    }

    /// Checked again here because `Config` can be built without clap
    pub fn token_ttl(&self) -> Result<Duration> {
        let hours = self.token_ttl_hours;
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&hours) {
            bail!(
                "token TTL must be between 1 and {} hours, got {}",
                MAX_TOKEN_TTL_HOURS,
                hours
            );
        }
        Duration::try_hours(hours).with_context(|| format!("token TTL of {} hours overflows", hours))
    }

    pub fn account(&self) -> Credential {
        Credential::new(self.login_email.clone(), self.login_password.clone())
    }

    pub fn required_role(&self) -> Role {
        Role::new(self.required_role.clone())
    }
}
