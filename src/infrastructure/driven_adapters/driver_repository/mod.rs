//! Driver Repository Implementations

mod postgres;

pub use postgres::PostgresDriverRepository;
