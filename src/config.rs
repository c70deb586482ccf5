//! Configuration resolution for strategy-auth.
//!
//! This module handles configuration values with a three-tier priority system:
//!
//! 1. **Parameter** - Explicitly provided function parameter (highest priority)
//! 2. **Environment Variable** - Value from environment variable
//! 3. **Default** - Built-in default value (lowest priority)
//!
//! Empty parameters and empty environment values are treated as unset.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AUTH_STRATEGY` | jwt | Strategy selected by the CLI |
//! | `AUTH_IDENTITY` | user123 | Identity returned on success |
//! | `AUTH_JWT_TOKEN` | valid-jwt-token | Token accepted by the JWT strategy |
//! | `AUTH_BASIC_CREDENTIALS` | user:password | Pair accepted by the Basic strategy |
//! | `AUTH_OAUTH2_TOKEN` | valid-oauth-token | Token accepted by the OAuth2 strategy |
//! | `USER_REPOSITORY` | memory | Repository backend for the user service |

use std::env;

/// Default strategy name
pub const DEFAULT_STRATEGY: &str = "jwt";

/// Default identity returned by every bundled strategy
pub const DEFAULT_IDENTITY: &str = "user123";

/// Default token accepted by the JWT strategy
pub const DEFAULT_JWT_TOKEN: &str = "valid-jwt-token";

/// Default `user:password` pair accepted by the Basic strategy
pub const DEFAULT_BASIC_CREDENTIALS: &str = "user:password";

/// Default token accepted by the OAuth2 strategy
pub const DEFAULT_OAUTH2_TOKEN: &str = "valid-oauth-token";

/// Default user repository backend
pub const DEFAULT_REPOSITORY: &str = "memory";

pub const STRATEGY_ENV_VAR: &str = "AUTH_STRATEGY";
pub const IDENTITY_ENV_VAR: &str = "AUTH_IDENTITY";
pub const JWT_TOKEN_ENV_VAR: &str = "AUTH_JWT_TOKEN";
pub const BASIC_CREDENTIALS_ENV_VAR: &str = "AUTH_BASIC_CREDENTIALS";
pub const OAUTH2_TOKEN_ENV_VAR: &str = "AUTH_OAUTH2_TOKEN";
pub const REPOSITORY_ENV_VAR: &str = "USER_REPOSITORY";

fn resolve(param: Option<&str>, env_var: &str, default: &str) -> String {
    // Priority 1: Use parameter if provided
    if let Some(value) = param
        && !value.is_empty()
    {
        return value.to_string();
    }

    // Priority 2: Use environment variable if set
    if let Ok(value) = env::var(env_var)
        && !value.is_empty()
    {
        return value;
    }

    // Priority 3: Default value
    default.to_string()
}

/// Resolve the strategy name with priority: parameter -> env var -> default
pub fn resolve_strategy(param: Option<&str>) -> String {
    resolve(param, STRATEGY_ENV_VAR, DEFAULT_STRATEGY)
}

/// Resolve the identity returned on success with priority: parameter -> env var -> default
pub fn resolve_identity(param: Option<&str>) -> String {
    resolve(param, IDENTITY_ENV_VAR, DEFAULT_IDENTITY)
}

/// Resolve the accepted JWT token with priority: parameter -> env var -> default
pub fn resolve_jwt_token(param: Option<&str>) -> String {
    resolve(param, JWT_TOKEN_ENV_VAR, DEFAULT_JWT_TOKEN)
}

/// Resolve the accepted Basic credentials with priority: parameter -> env var -> default
pub fn resolve_basic_credentials(param: Option<&str>) -> String {
    resolve(param, BASIC_CREDENTIALS_ENV_VAR, DEFAULT_BASIC_CREDENTIALS)
}

/// Resolve the accepted OAuth2 token with priority: parameter -> env var -> default
pub fn resolve_oauth2_token(param: Option<&str>) -> String {
    resolve(param, OAUTH2_TOKEN_ENV_VAR, DEFAULT_OAUTH2_TOKEN)
}

/// Resolve the repository backend name with priority: parameter -> env var -> default
pub fn resolve_repository(param: Option<&str>) -> String {
    resolve(param, REPOSITORY_ENV_VAR, DEFAULT_REPOSITORY)
}
