//! Per-book WebSocket chat server library.
//!
//! This library provides the real-time chat core of a virtual bookshelf
//! application: clients join a room keyed by a book identifier and exchange
//! ephemeral messages that are fanned out to every current room member.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// shared library
pub mod common;
