//! The brand record as stored in and returned from the carbrands table.

use serde::{Deserialize, Serialize};

/// One row of `carbrands`. Serialized with the column names, so the wire
/// shape is `{ "id": 1, "carbrand": "Toyota" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Brand {
    pub id: i32,
    pub carbrand: String,
}
