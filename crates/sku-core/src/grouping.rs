//! Parent SKU assignment for product variants.
//!
//! Variants of one product differ by a color or size word in the title
//! ("Lamp Red", "Lamp Blue"). Records are sorted by a grouping key derived
//! from the title, then each record joins its predecessor's group when the
//! keys are equal or differ by at most one word in the same position.

use sku_model::{GroupOrder, GroupingOptions, NormalizedRecord};
use tracing::debug;

use crate::rules::{PARENT_SKU_FIELD, TITLE_FIELD};

/// Assigns `product__parent_sku` across a whole batch.
#[derive(Debug, Clone)]
pub struct ParentGrouper {
    options: GroupingOptions,
}

impl Default for ParentGrouper {
    fn default() -> Self {
        Self::new(GroupingOptions::default())
    }
}

impl ParentGrouper {
    pub fn new(options: GroupingOptions) -> Self {
        Self { options }
    }

    /// Grouping key for a title: cut at each separator in turn, then drop
    /// standalone strip tokens.
    pub fn grouping_key(&self, title: &str) -> String {
        let mut key = title;
        for separator in &self.options.separators {
            if separator.is_empty() {
                continue;
            }
            if let Some(index) = key.find(separator.as_str()) {
                key = &key[..index];
            }
        }
        key.split_whitespace()
            .filter(|token| !self.options.strip_tokens.iter().any(|strip| strip == token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Parent SKU for a zero-based group counter.
    pub fn parent_sku(&self, counter: u64) -> String {
        format!(
            "{}{}",
            self.options.prefix,
            self.options.base.saturating_add(counter)
        )
    }

    /// Assign parent SKUs in place and return the number of groups.
    ///
    /// The batch is left in grouped order unless the options ask for input
    /// order. An empty batch is untouched.
    pub fn assign(&self, records: &mut Vec<NormalizedRecord>) -> usize {
        if records.is_empty() {
            return 0;
        }
        let mut keyed: Vec<(usize, String, NormalizedRecord)> = std::mem::take(records)
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let key = self.grouping_key(record.text(TITLE_FIELD));
                (index, key, record)
            })
            .collect();
        keyed.sort_by(|a, b| a.1.cmp(&b.1));

        let mut counter: u64 = 0;
        let mut previous: Option<String> = None;
        for (_, key, record) in &mut keyed {
            if let Some(previous) = &previous
                && starts_new_group(previous, key)
            {
                counter += 1;
            }
            record.set(PARENT_SKU_FIELD, self.parent_sku(counter));
            previous = Some(std::mem::take(key));
        }

        if self.options.order == GroupOrder::Input {
            keyed.sort_by_key(|(index, _, _)| *index);
        }
        records.extend(keyed.into_iter().map(|(_, _, record)| record));

        let groups = usize::try_from(counter).map_or(usize::MAX, |count| count + 1);
        debug!(records = records.len(), groups, "assigned parent skus");
        groups
    }
}

/// Whether `current` opens a new group after `previous`.
fn starts_new_group(previous: &str, current: &str) -> bool {
    if previous == current {
        return false;
    }
    let previous_tokens: Vec<&str> = previous.split_whitespace().collect();
    let current_tokens: Vec<&str> = current.split_whitespace().collect();
    if previous_tokens.len() != current_tokens.len() {
        return true;
    }
    let mismatches = previous_tokens
        .iter()
        .zip(&current_tokens)
        .filter(|(a, b)| a != b)
        .count();
    mismatches > 1
}
