//! Ferrous DNSBL Infrastructure Layer
pub mod database;
pub mod dns;
pub mod events;
pub mod repositories;
