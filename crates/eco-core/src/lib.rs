//! eco-core - Core library for EcoFlow
//!
//! This crate provides the emission factor reference data, disposal
//! scenarios, product catalog discovery, and configuration parsing shared
//! across all EcoFlow components. The factor table and scenario constants
//! defined here are the single authoritative source for every component
//! that computes emissions, so server-side calculation and client-side
//! recalculation can never drift apart.

pub mod alias;
pub mod catalog;
pub mod config;
pub mod disposal;
pub mod error;
pub mod factors;
pub mod material;
pub mod material_name;
mod newtype_string;
pub mod product;
pub mod product_id;
pub(crate) mod serde_helpers;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{Config, ModelConfig, ServerConfig};
pub use disposal::DisposalMix;
pub use error::{CoreError, CoreResult};
pub use factors::{FactorTable, TRANSPORT_FACTOR_PER_KKM};
pub use material::Material;
pub use material_name::MaterialName;
pub use product::{ProductInput, ProductSpec};
pub use product_id::ProductId;
