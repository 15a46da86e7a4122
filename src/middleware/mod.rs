/*
 * Responsibility
 * - Dataporten pipeline stages (cors / auth::setup / auth::policy)
 * - HTTP-level cross-cutting layers (http)
 */
pub mod auth;
pub mod cors;
pub mod http;
