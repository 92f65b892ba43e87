pub mod locations;
pub mod owners;
