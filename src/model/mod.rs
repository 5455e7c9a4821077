//! Core data structures flowing through `lattice-forge`.
//!
//! - [`cell`] – The authored repeating unit: dims, crosslink points, and
//!   connections with crossing vectors.
//! - [`lattice`] – Points placed in replicas and connections resolved to
//!   global indices, as produced by the assembler.
//! - [`atom`] / [`system`] – The populated particle graph and its bonds.
//! - [`types`] – Atom and bond role tags.
//!
//! The model keeps the authored geometry ([`Cell`]) apart from the derived
//! topology ([`Network`]); the [`crate::forge`] pipeline turns one into the
//! other without mutating its input.
//!
//! [`Cell`]: cell::Cell
//! [`Network`]: system::Network

pub mod atom;
pub mod cell;
pub mod lattice;
pub mod system;
pub mod types;
