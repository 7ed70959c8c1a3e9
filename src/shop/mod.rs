//! Shopping Domain Module
//!
//! This module contains the mock shopping toolset, including:
//! - Domain models (Product, CartItem, Offer, tool inputs and outputs)
//! - The fixed catalog
//! - Business logic helpers (matching rules, offer evaluation, pricing)
//! - The tool operations themselves

pub mod catalog;
pub mod helpers;
pub mod models;
pub mod toolset;
