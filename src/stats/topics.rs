use std::collections::BTreeMap;

use crate::models::EntryStore;

/// One tag-cloud entry: occurrence count plus a weight in (0, 1]
/// normalized against the most frequent topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicWeight {
    pub topic: String,
    pub count: u32,
    pub weight: f64,
}

/// Count exploring items per topic. Items without a topic land in
/// "misc", mirroring the journal pipeline.
pub fn topic_counts(entries: &EntryStore) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for entry in entries.values() {
        for item in &entry.exploring {
            let topic = if item.topic.trim().is_empty() {
                "misc".to_string()
            } else {
                item.topic.clone()
            };
            *counts.entry(topic).or_insert(0) += 1;
        }
    }
    counts
}

/// Weight and sort topic counts for display: descending by count, then
/// alphabetical for a stable order.
pub fn weighted(counts: &BTreeMap<String, u32>) -> Vec<TopicWeight> {
    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }
    let mut topics: Vec<TopicWeight> = counts
        .iter()
        .map(|(topic, &count)| TopicWeight {
            topic: topic.clone(),
            count,
            weight: count as f64 / max as f64,
        })
        .collect();
    topics.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.topic.cmp(&b.topic)));
    topics
}
