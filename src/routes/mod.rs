//! HTTP route handlers

pub mod site;
