/*
 * Responsibility
 * - Public surface of the emulated hub API (re-exports routes())
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
