//! DOM-free core of the client.
//!
//! # Design
//! - One shared session state; the guard and the request pipeline read and
//!   mutate it but never each other.
//! - Keep decisions as plain data and pure functions so they test on the
//!   host target; browser side effects live in the application shell.

pub mod guard;
pub mod pipeline;
pub mod session;
