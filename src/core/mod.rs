//! Core domain workflows built on the RBAC engine

pub mod profile;
