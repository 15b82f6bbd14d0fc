//! Field rule catalog and the schema-resolved rule table.
//!
//! Every canonical target field appears exactly once in [`catalog`] with the
//! source column(s) it reads and the conversion applied. A [`RuleTable`] is
//! resolved from a [`TargetSchema`] once, before any record is formatted, so
//! formatting never matches field names per row.

use std::collections::BTreeSet;
use std::fmt;

use sku_model::TargetSchema;
use thiserror::Error;

/// Output field holding the supplier SKU.
pub const SKU_FIELD: &str = "manufacturer_sku";
/// Output field the grouping key is derived from.
pub const TITLE_FIELD: &str = "product__title";
/// Output field written by the parent grouping pass.
pub const PARENT_SKU_FIELD: &str = "product__parent_sku";

pub const ITEM_NUMBER_COLUMN: &str = "item number";
pub const DESCRIPTION_COLUMN: &str = "description";
pub const LONG_DESCRIPTION_COLUMN: &str = "long description";

const SELLING_POINTS: &[&str] = &[
    "selling point 1",
    "selling point 2",
    "selling point 3",
    "selling point 4",
    "selling point 5",
    "selling point 6",
    "selling point 7",
];

/// Size words searched in the description, in priority order.
pub const SIZE_WORDS: [(&str, &str); 5] = [
    ("small", "Small"),
    ("medium", "Medium"),
    ("large", "Large"),
    ("short", "Short"),
    ("tall", "Tall"),
];

/// Which half of a `D x W` seat dimension a rule extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatAxis {
    /// The larger of the two values.
    Depth,
    /// The smaller of the two values.
    Width,
}

/// How a target field is derived from the raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Copy the trimmed source value.
    Copy(&'static str),
    /// Title-case the source value.
    TitleCase(&'static str),
    /// The preprocessed product description.
    Title,
    /// UPC-A validation rendered as EAN-13.
    Ean13(&'static str),
    /// Distance converted to inches from the configured source unit.
    Distance(&'static str),
    /// Weight converted to pounds from the configured source unit.
    Weight(&'static str),
    /// Currency rounded to two decimals.
    Currency(&'static str),
    /// Yes/no text coerced to a flag.
    YesNo(&'static str),
    /// Flag set when any source contains `needle`. Empty when all sources are.
    Contains {
        sources: &'static [&'static str],
        needle: &'static str,
        ignore_case: bool,
    },
    /// Non-empty source values joined with `", "`.
    Join(&'static [&'static str]),
    /// Sum of the all-digit source values.
    SumCounts(&'static [&'static str]),
    /// One half of a `D x W` seat dimension.
    Seat(&'static str, SeatAxis),
    /// Size word found in the description.
    Size(&'static str),
    /// Set size from the item number or the descriptions; defaults to `1`.
    Multipack,
    /// Country name resolved to alpha-3.
    Country(&'static str),
    /// No source data; always empty.
    Blank,
    /// Filled after formatting by the parent grouping pass.
    Deferred,
}

impl FieldRule {
    /// Source columns read by this rule.
    pub fn sources(&self) -> Vec<&'static str> {
        match *self {
            FieldRule::Copy(column)
            | FieldRule::TitleCase(column)
            | FieldRule::Ean13(column)
            | FieldRule::Distance(column)
            | FieldRule::Weight(column)
            | FieldRule::Currency(column)
            | FieldRule::YesNo(column)
            | FieldRule::Seat(column, _)
            | FieldRule::Size(column)
            | FieldRule::Country(column) => vec![column],
            FieldRule::Title => vec![DESCRIPTION_COLUMN],
            FieldRule::Contains { sources, .. }
            | FieldRule::Join(sources)
            | FieldRule::SumCounts(sources) => sources.to_vec(),
            FieldRule::Multipack => vec![
                ITEM_NUMBER_COLUMN,
                DESCRIPTION_COLUMN,
                LONG_DESCRIPTION_COLUMN,
            ],
            FieldRule::Blank | FieldRule::Deferred => Vec::new(),
        }
    }

    /// Short name of the conversion.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldRule::Copy(_) => "copy",
            FieldRule::TitleCase(_) => "title case",
            FieldRule::Title => "description",
            FieldRule::Ean13(_) => "ean-13",
            FieldRule::Distance(_) => "distance",
            FieldRule::Weight(_) => "weight",
            FieldRule::Currency(_) => "currency",
            FieldRule::YesNo(_) => "yes/no",
            FieldRule::Contains { .. } => "contains",
            FieldRule::Join(_) => "join",
            FieldRule::SumCounts(_) => "sum",
            FieldRule::Seat(_, SeatAxis::Depth) => "seat depth",
            FieldRule::Seat(_, SeatAxis::Width) => "seat width",
            FieldRule::Size(_) => "size",
            FieldRule::Multipack => "multipack",
            FieldRule::Country(_) => "alpha-3",
            FieldRule::Blank => "blank",
            FieldRule::Deferred => "parent group",
        }
    }
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRule::Contains {
                needle,
                ignore_case,
                ..
            } => {
                let mode = if *ignore_case { ", any case" } else { "" };
                write!(f, "contains {needle:?}{mode}")
            }
            other => f.write_str(other.kind()),
        }
    }
}

/// One catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub field: &'static str,
    pub rule: FieldRule,
}

const fn entry(field: &'static str, rule: FieldRule) -> CatalogEntry {
    CatalogEntry { field, rule }
}

static CATALOG: &[CatalogEntry] = &[
    entry(SKU_FIELD, FieldRule::Copy(ITEM_NUMBER_COLUMN)),
    entry("ean13", FieldRule::Ean13("upc")),
    entry("weight", FieldRule::Weight("item weight (pounds)")),
    entry("length", FieldRule::Distance("item depth (inches)")),
    entry("width", FieldRule::Distance("item width (inches)")),
    entry("height", FieldRule::Distance("item height (inches)")),
    entry(
        "prop_65",
        FieldRule::Contains {
            sources: &["url california label (jpg)", "url california label (pdf)"],
            needle: "P65",
            ignore_case: false,
        },
    ),
    entry("cost_price", FieldRule::Currency("wholesale ($)")),
    entry("min_price", FieldRule::Currency("map ($)")),
    entry(
        "made_to_order",
        FieldRule::Contains {
            sources: SELLING_POINTS,
            needle: "custom",
            ignore_case: true,
        },
    ),
    entry("product__product_class__name", FieldRule::TitleCase("item category")),
    entry("product__brand__name", FieldRule::TitleCase("brand")),
    entry(TITLE_FIELD, FieldRule::Title),
    entry("product__description", FieldRule::Copy(LONG_DESCRIPTION_COLUMN)),
    entry("product__bullets__0", FieldRule::TitleCase("selling point 1")),
    entry("product__bullets__1", FieldRule::TitleCase("selling point 2")),
    entry("product__bullets__2", FieldRule::TitleCase("selling point 3")),
    entry("product__bullets__3", FieldRule::TitleCase("selling point 4")),
    entry("product__bullets__4", FieldRule::TitleCase("selling point 5")),
    entry("product__bullets__5", FieldRule::TitleCase("selling point 6")),
    entry("product__bullets__6", FieldRule::TitleCase("selling point 7")),
    entry("product__configuration__codes", FieldRule::Blank),
    entry("product__multipack_quantity", FieldRule::Multipack),
    entry(
        "product__country_of_origin__alpha_3",
        FieldRule::Country("country of origin"),
    ),
    entry(PARENT_SKU_FIELD, FieldRule::Deferred),
    entry(
        "product__arm_height",
        FieldRule::Distance("furniture arm height (inches)"),
    ),
    entry("product__assembly_required", FieldRule::Blank),
    entry("attrib__back_material", FieldRule::Blank),
    entry("attrib__blade_finish", FieldRule::Blank),
    entry(
        "attrib__bulb_included",
        FieldRule::Join(&["bulb 1 included", "bulb 2 included"]),
    ),
    entry(
        "attrib__bulb_type",
        FieldRule::Join(&["bulb 1 type", "bulb 2 type"]),
    ),
    entry("attrib__color", FieldRule::Copy("primary color family")),
    entry(
        "attrib__cord_length",
        FieldRule::Distance("cord length (inches)"),
    ),
    entry("attrib__designer_id", FieldRule::Blank),
    entry("attrib__designer", FieldRule::Copy("licensed by")),
    entry(
        "attrib__distressed_finish",
        FieldRule::Contains {
            sources: &["item finish"],
            needle: "distressed",
            ignore_case: true,
        },
    ),
    entry("attrib__fill", FieldRule::Blank),
    entry("attrib__finish", FieldRule::Copy("item finish")),
    entry("attrib__frame_color", FieldRule::Blank),
    entry(
        "attrib__hardwire",
        FieldRule::Contains {
            sources: &["switch type"],
            needle: "hardwired",
            ignore_case: true,
        },
    ),
    entry("attrib__kit", FieldRule::YesNo("conversion kit option")),
    entry("attrib__leg_color", FieldRule::Blank),
    entry("attrib__leg_finish", FieldRule::Blank),
    entry("attrib__material", FieldRule::Copy("item materials")),
    entry(
        "attrib__number_bulbs",
        FieldRule::SumCounts(&["bulb 1 count", "bulb 2 count"]),
    ),
    entry("attrib__orientation", FieldRule::Blank),
    entry("attrib__outdoor_safe", FieldRule::YesNo("outdoor")),
    entry("pile_height", FieldRule::Blank),
    entry(
        "attrib__seat_depth",
        FieldRule::Seat("furniture seat dimensions (inches)", SeatAxis::Depth),
    ),
    entry(
        "attrib__seat_height",
        FieldRule::Distance("furniture seat height (inches)"),
    ),
    entry(
        "attrib__seat_width",
        FieldRule::Seat("furniture seat dimensions (inches)", SeatAxis::Width),
    ),
    entry("attrib__shade", FieldRule::TitleCase("shade/glass description")),
    entry("attrib__size", FieldRule::Size(DESCRIPTION_COLUMN)),
    entry("attrib__switch_type", FieldRule::Copy("switch type")),
    entry(
        "attrib__ul_certified",
        FieldRule::Contains {
            sources: &["safety rating"],
            needle: "UL",
            ignore_case: false,
        },
    ),
    entry("attrib__warranty_years", FieldRule::Blank),
    entry(
        "attrib__wattage",
        FieldRule::Join(&["bulb 1 wattage", "bulb 2 wattage"]),
    ),
    entry("attrib__weave", FieldRule::Blank),
    entry(
        "attrib__weight_capacity",
        FieldRule::Weight("furniture weight capacity (pounds)"),
    ),
    entry("boxes__0__weight", FieldRule::Weight("carton 1 weight (pounds)")),
    entry("boxes__0__length", FieldRule::Distance("carton 1 length (inches)")),
    entry("boxes__0__height", FieldRule::Distance("carton 1 height (inches)")),
    entry("boxes__0__width", FieldRule::Distance("carton 1 width (inches)")),
    entry("boxes__1__weight", FieldRule::Weight("carton 2 weight (pounds)")),
    entry("boxes__1__length", FieldRule::Distance("carton 2 length (inches)")),
    entry("boxes__1__height", FieldRule::Distance("carton 2 height (inches)")),
    entry("boxes__1__width", FieldRule::Distance("carton 2 width (inches)")),
    entry("boxes__2__weight", FieldRule::Weight("carton 3 weight (pounds)")),
    entry("boxes__2__length", FieldRule::Distance("carton 3 length (inches)")),
    entry("boxes__2__height", FieldRule::Distance("carton 3 height (inches)")),
    entry("boxes__2__width", FieldRule::Distance("carton 3 width (inches)")),
    entry("product_styles", FieldRule::Copy("item style")),
];

/// Every known target field with its rule, in default output order.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Look up the rule for a target field.
pub fn rule_for(field: &str) -> Option<FieldRule> {
    CATALOG
        .iter()
        .find(|entry| entry.field == field)
        .map(|entry| entry.rule)
}

/// A schema covering the whole catalog in catalog order.
pub fn catalog_schema() -> TargetSchema {
    TargetSchema::new("catalog", CATALOG.iter().map(|entry| entry.field))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleTableError {
    #[error("schema field {field:?} has no normalization rule")]
    UnknownField { field: String },

    #[error("schema lists field {field:?} more than once")]
    DuplicateField { field: String },

    #[error("schema is missing required field {field:?}")]
    MissingRequiredField { field: &'static str },
}

/// A schema field paired with its rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule {
    pub field: String,
    pub rule: FieldRule,
}

/// Rules for every field of one target schema, in schema order.
#[derive(Debug, Clone)]
pub struct RuleTable {
    schema: TargetSchema,
    rules: Vec<ResolvedRule>,
}

impl RuleTable {
    /// Resolve each schema field against the catalog.
    ///
    /// Fails on unknown or duplicated fields, and when the schema lacks the
    /// title or parent SKU field the grouping pass needs.
    pub fn for_schema(schema: &TargetSchema) -> Result<Self, RuleTableError> {
        let mut seen = BTreeSet::new();
        let mut rules = Vec::with_capacity(schema.len());
        for field in schema.fields() {
            if !seen.insert(field.as_str()) {
                return Err(RuleTableError::DuplicateField {
                    field: field.clone(),
                });
            }
            let rule = rule_for(field).ok_or_else(|| RuleTableError::UnknownField {
                field: field.clone(),
            })?;
            rules.push(ResolvedRule {
                field: field.clone(),
                rule,
            });
        }
        for required in [TITLE_FIELD, PARENT_SKU_FIELD] {
            if !seen.contains(required) {
                return Err(RuleTableError::MissingRequiredField { field: required });
            }
        }
        Ok(Self {
            schema: schema.clone(),
            rules,
        })
    }

    pub fn schema(&self) -> &TargetSchema {
        &self.schema
    }

    pub fn rules(&self) -> &[ResolvedRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_each_field_once() {
        let mut seen = BTreeSet::new();
        for entry in catalog() {
            assert!(seen.insert(entry.field), "duplicate {}", entry.field);
        }
        assert_eq!(seen.len(), 72);
    }

    #[test]
    fn full_catalog_schema_resolves() {
        let table = RuleTable::for_schema(&catalog_schema()).expect("resolve");
        assert_eq!(table.len(), catalog().len());
        assert_eq!(table.rules()[0].field, SKU_FIELD);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let schema = TargetSchema::new("t", [TITLE_FIELD, PARENT_SKU_FIELD, "attrib__sparkle"]);
        assert_eq!(
            RuleTable::for_schema(&schema).unwrap_err(),
            RuleTableError::UnknownField {
                field: "attrib__sparkle".to_string()
            }
        );
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let schema = TargetSchema::new("t", [TITLE_FIELD, PARENT_SKU_FIELD, TITLE_FIELD]);
        assert!(matches!(
            RuleTable::for_schema(&schema),
            Err(RuleTableError::DuplicateField { .. })
        ));
    }

    #[test]
    fn grouping_fields_are_required() {
        let schema = TargetSchema::new("t", [SKU_FIELD, TITLE_FIELD]);
        assert_eq!(
            RuleTable::for_schema(&schema).unwrap_err(),
            RuleTableError::MissingRequiredField {
                field: PARENT_SKU_FIELD
            }
        );
    }

    #[test]
    fn subset_schema_keeps_schema_order() {
        let schema = TargetSchema::new("t", [PARENT_SKU_FIELD, "weight", TITLE_FIELD]);
        let table = RuleTable::for_schema(&schema).expect("resolve");
        let fields: Vec<_> = table.rules().iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, [PARENT_SKU_FIELD, "weight", TITLE_FIELD]);
        assert_eq!(table.rules()[1].rule, FieldRule::Weight("item weight (pounds)"));
    }

    #[test]
    fn rule_sources_and_display() {
        assert_eq!(
            rule_for("attrib__wattage").map(|rule| rule.sources()),
            Some(vec!["bulb 1 wattage", "bulb 2 wattage"])
        );
        assert_eq!(
            rule_for("attrib__hardwire").map(|rule| rule.to_string()),
            Some("contains \"hardwired\", any case".to_string())
        );
        assert_eq!(rule_for(PARENT_SKU_FIELD), Some(FieldRule::Deferred));
    }
}
