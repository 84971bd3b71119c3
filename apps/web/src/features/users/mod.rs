//! Directory user feature: endpoint client for the list and detail routes.

pub(crate) mod client;
