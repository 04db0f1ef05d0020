pub mod access;
pub mod create;
pub mod roles;
