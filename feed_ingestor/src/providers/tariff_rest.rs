//! The vendor's spreadsheet-over-HTTP surcharge feed.

mod provider;
mod workbook;

pub use provider::TariffRestProvider;
