//! Data model for the SKU normalization pipeline.
//!
//! - **record**: raw input rows and normalized output records
//! - **schema**: the ordered target field list
//! - **units**: distance and weight units with their conversion factors
//! - **options**: pipeline configuration

pub mod options;
pub mod record;
pub mod schema;
pub mod units;

pub use options::{
    ColumnAliases, CountryOptions, CountryPolicy, DescriptionOptions, ErrorMode, GroupOrder,
    GroupingOptions, PipelineOptions, SourceUnits, UpcOptions,
};
pub use record::{FieldValue, NormalizedRecord, RawRecord};
pub use schema::TargetSchema;
pub use units::{DistanceUnit, WeightUnit};
