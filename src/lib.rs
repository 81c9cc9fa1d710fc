//! ipex: export generated IP core descriptors into a project source tree.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppError, Descriptor, ExportOptions, ExportReport, Placement, ProjectLayout, export,
    export_with, list, resolve_layout,
};
