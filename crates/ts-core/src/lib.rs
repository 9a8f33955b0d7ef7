//! # ts-core
//!
//! Filter/view synchronization engine for TierScope.
//!
//! This crate holds the catalog data model, the tier taxonomy, the
//! per-category filter state, the URL-fragment codec, the view engine that
//! computes what is visible, and the single-expansion accordion controller.
//! It performs no I/O and renders no markup; the web layer consumes the
//! models produced here.

pub mod accordion;
pub mod catalog;
pub mod filter;
pub mod fragment;
pub mod provider;
pub mod session;
pub mod startup;
pub mod taxonomy;
pub mod view;

pub use accordion::AccordionController;
pub use catalog::{AssetType, Catalog, Category, Item};
pub use filter::FilterStateStore;
pub use fragment::ViewSelection;
pub use provider::{CatalogProvider, ProviderError};
pub use session::ViewSession;
pub use startup::{load_catalog, InitStage, LoadedCatalog};
pub use taxonomy::{TaxonomyDoc, TierTaxonomy};
pub use view::{CatalogView, DetailBody, ItemSummary};
