//! # screener-library
//!
//! The standard screener question library and the question set assembler.
//!
//! A standard order is the universal baseline with the block for the
//! study mode inserted right after the introduction:
//!
//! ```rust
//! use screener_library::{assemble, universal};
//! use screener_types::Mode;
//!
//! let online = assemble(Some(Mode::Online));
//! assert_eq!(online.len(), universal().len() + 3);
//! assert_eq!(online[1].id().as_str(), "tech_devices");
//! ```
//!
//! Questions are always handed out as fresh copies, so edits to a build
//! never reach the library.

mod assembler;
pub use assembler::{BLOCK_INSERT_INDEX, assemble, assemble_named, block, universal};

mod baseline;
mod blocks;

mod library;
pub use library::{SearchHit, StandardLibrary};

mod csv;
pub use csv::CsvError;

/// Section names used by the standard library.
pub mod sections {
    pub const INTRODUCTION: &str = "Introduction";
    pub const DEMOGRAPHICS: &str = "Demographics";
    pub const DISQUALIFICATION: &str = "Disqualification";
    pub const HOUSEHOLD: &str = "Household";
    pub const CATEGORY: &str = "Category";
    pub const BRANDS: &str = "Brands";
    pub const ARTICULATION: &str = "Articulation";
    pub const LOGISTICS: &str = "Logistics";
    pub const INVITATION: &str = "Invitation";
    pub const CONSENT: &str = "Consent";

    /// Device checks, only relevant to online studies.
    pub const ONLINE_TECH: &str = "Online / Tech";
    pub const FACILITY: &str = "Facility";
    pub const SHOPPERLAB_MET: &str = "ShopperLab / MET";
    pub const CUSTOM: &str = "Custom";
}
