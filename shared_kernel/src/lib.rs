pub mod configuration;
mod ids;
mod non_empty_string;
pub mod owner_id;
pub mod tracing;
