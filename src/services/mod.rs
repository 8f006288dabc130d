//! The use-case layer.
//!
//! Every operation is a plain function over a borrowed [`Store`](crate::store::Store):
//! handlers take the lock, call in, and map the returned
//! [`DomainError`](crate::error::DomainError) at the boundary. Lookups are linear scans.

pub mod lists;
pub mod tasks;
pub mod users;
