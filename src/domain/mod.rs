pub mod customer;
pub mod types;
