//! End-to-end tests for batch normalization.

use sku_core::{
    NoProgress, PARENT_SKU_FIELD, PipelineContext, TITLE_FIELD, catalog_schema, normalize_batch,
};
use sku_model::{ErrorMode, GroupOrder, PipelineOptions, RawRecord, TargetSchema};
use sku_transform::CountryResolver;

fn mini_schema() -> TargetSchema {
    TargetSchema::new(
        "mini",
        [
            "manufacturer_sku",
            TITLE_FIELD,
            "product__multipack_quantity",
            PARENT_SKU_FIELD,
            "prop_65",
        ],
    )
}

fn context(schema: &TargetSchema, options: PipelineOptions) -> PipelineContext {
    PipelineContext::new(
        schema,
        CountryResolver::new([("China", "CHN"), ("Philippines", "PHL")]),
        options,
    )
    .expect("context")
}

fn raw(row: usize, pairs: &[(&str, &str)]) -> RawRecord {
    RawRecord::from_pairs(row, pairs.iter().copied())
}

fn render(ctx: &PipelineContext, records: &[sku_model::NormalizedRecord]) -> String {
    records
        .iter()
        .map(|record| record.render_row(ctx.schema()).join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sample() -> Vec<RawRecord> {
    vec![
        raw(1, &[("item number", "L-RED"), ("description", "lamp red")]),
        raw(2, &[("item number", "L-BLU/S2"), ("description", "lamp blue")]),
        raw(
            3,
            &[
                ("item number", "SF-1"),
                ("description", "sofa large - set of three"),
                ("url california label (jpg)", "https://cdn/SF-1_P65.jpg"),
            ],
        ),
    ]
}

#[test]
fn grouped_output() {
    let schema = mini_schema();
    let ctx = context(&schema, PipelineOptions::default());
    let outcome = normalize_batch(&ctx, &sample(), &mut NoProgress);
    assert_eq!(outcome.groups, 2);
    insta::assert_snapshot!(render(&ctx, &outcome.records), @r"
    L-BLU/S2,Lamp Blue,2,O-100000,
    L-RED,Lamp Red,1,O-100000,
    SF-1,Sofa Large - Set Of 3,3,O-100001,True
    ");
}

#[test]
fn input_order_output() {
    let schema = mini_schema();
    let ctx = context(
        &schema,
        PipelineOptions::default().with_group_order(GroupOrder::Input),
    );
    let outcome = normalize_batch(&ctx, &sample(), &mut NoProgress);
    let rows: Vec<usize> = outcome.records.iter().map(|record| record.row).collect();
    assert_eq!(rows, [1, 2, 3]);
    assert_eq!(outcome.records[0].text(PARENT_SKU_FIELD), "O-100000");
    assert_eq!(outcome.records[2].text(PARENT_SKU_FIELD), "O-100001");
}

#[test]
fn corrected_country_names_resolve() {
    let ctx = context(&catalog_schema(), PipelineOptions::default());
    let rows = [
        raw(1, &[("item number", "A"), ("country of origin", "Phillipines")]),
        raw(2, &[("item number", "B"), ("country of origin", "CHINA")]),
    ];
    let outcome = normalize_batch(&ctx, &rows, &mut NoProgress);
    assert!(!outcome.has_errors());
    let codes: Vec<&str> = outcome
        .records
        .iter()
        .map(|record| record.text("product__country_of_origin__alpha_3"))
        .collect();
    assert_eq!(codes, ["PHL", "CHN"]);
}

#[test]
fn collect_mode_reports_every_failure() {
    let ctx = context(
        &catalog_schema(),
        PipelineOptions::default().with_error_mode(ErrorMode::Collect),
    );
    let rows = [
        raw(1, &[("item number", "A"), ("map ($)", "free")]),
        raw(2, &[("item number", "B"), ("upc", "12345X")]),
        raw(3, &[("item number", "C"), ("outdoor", "maybe")]),
        raw(4, &[("item number", "D"), ("description", "Bench")]),
    ];
    let outcome = normalize_batch(&ctx, &rows, &mut NoProgress);
    let failures: Vec<(&str, &str, &str)> = outcome
        .errors
        .iter()
        .map(|error| (error.sku.as_str(), error.field.as_str(), error.source.kind()))
        .collect();
    assert_eq!(
        failures,
        [
            ("A", "min_price", "InvalidCurrency"),
            ("B", "ean13", "MalformedCode"),
            ("C", "attrib__outdoor_safe", "InvalidBoolean"),
        ]
    );
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].text(PARENT_SKU_FIELD), "O-100000");
}

#[test]
fn auto_corrected_upc_in_batch() {
    let ctx = context(
        &catalog_schema(),
        PipelineOptions::default().with_upc_auto_correct(true),
    );
    let rows = [raw(1, &[("item number", "A"), ("upc", "03600029145")])];
    let outcome = normalize_batch(&ctx, &rows, &mut NoProgress);
    assert_eq!(outcome.records[0].text("ean13"), "003-600029145-2");
}
