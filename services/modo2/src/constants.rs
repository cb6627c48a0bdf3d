// Env values used by modo2 credential providers.
pub const MODO_API_IDENTIFIER: &str = "MODO_API_IDENTIFIER";
pub const MODO_API_SECRET: &str = "MODO_API_SECRET";

// Token constants.
pub const MODO2_SCHEME: &str = "MODO2";
pub const TOKEN_ALG: &str = "HS256";
pub const TOKEN_TYP: &str = "JWT";

pub const APPLICATION_JSON: &str = "application/json";
