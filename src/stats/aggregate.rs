use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Accum {
    sum: f64,
    count: usize,
}

/// Per-key running means.
///
/// Keys are identified through a set and emitted in first-seen order, so a
/// key observed many times is stored once.
#[derive(Debug, Clone, Default)]
pub struct KeyedMeans {
    seen: HashSet<String>,
    order: Vec<String>,
    accum: HashMap<String, Accum>,
}

impl KeyedMeans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: f64) {
        if self.seen.insert(key.to_string()) {
            self.order.push(key.to_string());
        }
        let entry = self.accum.entry(key.to_string()).or_default();
        entry.sum += value;
        entry.count += 1;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn mean(&self, key: &str) -> Option<f64> {
        self.accum
            .get(key)
            .filter(|a| a.count > 0)
            .map(|a| a.sum / a.count as f64)
    }

    /// Keep only keys observed exactly once; returns how many were dropped.
    pub fn retain_single(&mut self) -> usize {
        let before = self.order.len();
        let accum = &self.accum;
        self.order.retain(|k| accum.get(k).is_some_and(|a| a.count == 1));
        let kept: HashSet<String> = self.order.iter().cloned().collect();
        self.accum.retain(|k, _| kept.contains(k));
        self.seen = kept;
        before - self.order.len()
    }
}

/// Keys present in every aggregation, in the first one's order, with one
/// column of means per aggregation.
pub fn align_means(sets: &[KeyedMeans]) -> (Vec<String>, Vec<Vec<f64>>) {
    let mut keys = Vec::new();
    let mut columns = vec![Vec::new(); sets.len()];
    let Some(first) = sets.first() else {
        return (keys, columns);
    };
    for key in first.keys() {
        let means: Option<Vec<f64>> = sets.iter().map(|s| s.mean(key)).collect();
        if let Some(means) = means {
            for (column, m) in columns.iter_mut().zip(means) {
                column.push(m);
            }
            keys.push(key.to_string());
        }
    }
    (keys, columns)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/aggregate.rs"]
mod tests;
