//! Wire types exchanged with the remote shortening service.
//!
//! The service itself is external; this module only describes its JSON contract.

pub mod dto;
