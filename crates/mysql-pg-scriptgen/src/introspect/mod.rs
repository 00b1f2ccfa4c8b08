//! Schema introspection for both dialects.
//!
//! - [`MysqlIntrospector`]: source-side column listing via `DESCRIBE`
//! - [`PgIntrospector`]: target-side column metadata via
//!   `information_schema.columns`
//!
//! Both hold their connection for the lifetime of the run; the generator
//! opens them once and reuses them for every manifest entry. Any catalog
//! failure (connection lost, table absent, permission denied) is fatal
//! for the whole run.

mod mysql;
mod postgres;

pub use mysql::MysqlIntrospector;
pub use postgres::PgIntrospector;
