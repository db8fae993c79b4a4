//! Portfolio content and admin session stores, served over a JSON API.

pub mod api;
pub mod config;
pub mod db;
pub mod guard;
pub mod models;
pub mod store;
