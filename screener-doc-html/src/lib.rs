//! HTML exporter for screener: generates Word-compatible `.doc` documents
//! from a `ScreenerDocument`.
//!
//! Word opens HTML saved with a `.doc` extension and keeps the fonts,
//! colors and paragraph styling, so no binary format library is needed.

mod generator;

pub use generator::{HtmlError, HtmlExporter, HtmlOptions, to_html, to_html_with_options};
