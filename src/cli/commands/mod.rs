pub mod account;
pub mod inventory;
pub mod records;
pub mod session;
