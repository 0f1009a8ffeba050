//! Raw GitHub REST transport.
//!
//! Callers build the endpoint URL and decode the body themselves; this crate
//! only owns the HTTP client and the authenticated GET.

pub mod index;
