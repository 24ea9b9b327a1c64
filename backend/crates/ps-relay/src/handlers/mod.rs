//! Gateway handlers: translate HTTP calls into registry events.

pub mod publish;
pub mod register;
