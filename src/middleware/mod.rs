/*
 * Responsibility
 * - Public interface of the middleware layer
 * - auth: hub token guard / http: request id, tracing, limits
 */
pub mod auth;
pub mod http;
