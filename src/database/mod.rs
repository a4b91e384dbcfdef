pub mod connector;
pub mod models;

#[allow(unused_imports)]
pub use connector::{DB, connect, connect_from_url, connect_with_settings, init_schema, ping};
