pub mod configuration;
mod locations;
mod owners;
pub mod repository;
