use soroban_sdk::{symbol_short, Symbol};

// Registry events
pub const REGISTRY_INITIALIZED: Symbol = symbol_short!("init");
pub const PROTOCOL_RATED: Symbol = symbol_short!("rated");
pub const ACCESS_UPDATED: Symbol = symbol_short!("acc_set");
pub const DUMP_LIMIT_UPDATED: Symbol = symbol_short!("dump_set");
pub const ADMIN_TRANSFERRED: Symbol = symbol_short!("adm_xfer");

// Rater access events
pub const ROLE_GRANTED: Symbol = symbol_short!("role_g");
pub const ROLE_REVOKED: Symbol = symbol_short!("role_r");
