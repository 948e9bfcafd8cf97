#![deny(clippy::all, clippy::pedantic)]

pub mod consumer_plugins;
pub mod consumers;
pub mod credentials;
pub mod plugins;
pub mod routes;
pub mod services;
pub mod status;
pub mod targets;
pub mod upstreams;
