//! Furniture SKU normalization engine.
//!
//! - **rules**: the field rule catalog and schema-resolved rule table
//! - **formatter**: raw record to normalized record
//! - **multipack**: set size extraction
//! - **grouping**: parent SKU assignment
//! - **pipeline**: batch orchestration with progress callbacks

pub mod formatter;
pub mod grouping;
pub mod multipack;
pub mod pipeline;
pub mod rules;

pub use formatter::{RecordError, RecordFormatter, preprocess_description};
pub use grouping::ParentGrouper;
pub use multipack::multipack_quantity;
pub use pipeline::{BatchOutcome, NoProgress, PipelineContext, ProgressObserver, normalize_batch};
pub use rules::{
    CatalogEntry, FieldRule, PARENT_SKU_FIELD, ResolvedRule, RuleTable, RuleTableError, SKU_FIELD,
    SeatAxis, TITLE_FIELD, catalog, catalog_schema, rule_for,
};
