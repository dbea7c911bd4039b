//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! Wire representation is camelCase JSON; database columns are snake_case.

pub mod process;
pub mod process_step;
pub mod user;
