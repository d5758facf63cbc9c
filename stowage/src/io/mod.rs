mod export;
mod import;

/// External (serde-friendly) representations of instances and solutions
pub mod ext_repr;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_layout_snapshot;
#[doc(inline)]
pub use import::Importer;
