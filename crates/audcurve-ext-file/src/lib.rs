//! # audcurve Ext File
//!
//! File-based market data and CSV export for the audcurve tools.
//!
//! This crate provides:
//! - RBA F1.1 (money market) and F2 (government bond) CSV readers
//! - A [`MarketDataSource`] trait with file and manual implementations
//! - [`load_market_data`], which keeps going when one snapshot fails
//! - The two-table curve export document
//!
//! Network retrieval is left to the caller: download the RBA files, then
//! point [`RbaFileSource`] at them.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod export;
mod rba;
mod source;

pub use error::{SourceError, SourceResult};
pub use export::{default_export_file_name, write_export, write_export_file};
pub use rba::{read_bond_yields, read_short_rates};
pub use source::{load_market_data, FetchResults, ManualSource, MarketDataSource, RbaFileSource};
