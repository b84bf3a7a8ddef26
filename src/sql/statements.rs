//! Fixed SQL for the carbrands table: identifiers are constants, values are always bound parameters.

pub const SELECT_ALL: &str = "SELECT id, carbrand FROM carbrands ORDER BY id ASC";

/// Caller binds the id as `$1`.
pub const SELECT_BY_ID: &str = "SELECT id, carbrand FROM carbrands WHERE id = $1";

/// Caller binds the trimmed name as `$1`.
pub const INSERT: &str = "INSERT INTO carbrands (carbrand) VALUES ($1) RETURNING id, carbrand";

/// Caller binds the trimmed name as `$1` and the id as `$2`.
pub const UPDATE_BY_ID: &str =
    "UPDATE carbrands SET carbrand = $1 WHERE id = $2 RETURNING id, carbrand";

pub const PING: &str = "SELECT 1";

/// Primary key constraint name as created by `id SERIAL PRIMARY KEY`.
pub const PRIMARY_KEY_CONSTRAINT: &str = "carbrands_pkey";

/// Unique constraint name as created by `carbrand TEXT UNIQUE`.
pub const NAME_UNIQUE_CONSTRAINT: &str = "carbrands_carbrand_key";
