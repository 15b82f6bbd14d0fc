//! Property tests for parent grouping.

use proptest::prelude::*;
use sku_core::{PARENT_SKU_FIELD, ParentGrouper, TITLE_FIELD};
use sku_model::{NormalizedRecord, TargetSchema};

fn records(titles: &[String]) -> Vec<NormalizedRecord> {
    let schema = TargetSchema::new("t", [TITLE_FIELD, PARENT_SKU_FIELD]);
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let mut record = NormalizedRecord::empty_for(index + 1, &schema);
            record.set(TITLE_FIELD, title.as_str());
            record
        })
        .collect()
}

fn group_number(record: &NormalizedRecord) -> u64 {
    record
        .text(PARENT_SKU_FIELD)
        .strip_prefix("O-")
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(u64::MAX)
}

proptest! {
    #[test]
    fn every_record_gets_a_parent(titles in prop::collection::vec("[A-C][a-c]{0,2}( [A-C][a-c]{0,2}){0,3}", 0..40)) {
        let mut batch = records(&titles);
        let groups = ParentGrouper::default().assign(&mut batch);
        prop_assert_eq!(batch.len(), titles.len());
        prop_assert!(groups <= titles.len());
        prop_assert_eq!(groups == 0, titles.is_empty());
        for record in &batch {
            prop_assert!(group_number(record) >= 100_000);
        }
    }

    #[test]
    fn grouped_order_numbers_are_contiguous(titles in prop::collection::vec("[a-d]{1,3}( [a-d]{1,3}){0,2}", 1..40)) {
        let mut batch = records(&titles);
        let groups = ParentGrouper::default().assign(&mut batch);
        let numbers: Vec<u64> = batch.iter().map(group_number).collect();
        prop_assert_eq!(numbers[0], 100_000);
        for pair in numbers.windows(2) {
            prop_assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
        }
        prop_assert_eq!(numbers[numbers.len() - 1] - 100_000 + 1, groups as u64);
    }
}
