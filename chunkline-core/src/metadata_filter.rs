use serde::{Deserialize, Serialize};

use crate::{Metadata, Value};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum MetadataFilter {
    Eq(String, Value),
    In(String, Vec<Value>),
    All(Vec<MetadataFilter>),
    Any(Vec<MetadataFilter>),
}

impl MetadataFilter {
    pub fn eq(key: impl Into<String>, value: impl Into<Value>) -> Self {
        MetadataFilter::Eq(key.into(), value.into())
    }

    pub fn matches(&self, metadata: &Metadata) -> bool {
        match self {
            MetadataFilter::Eq(key, value) => metadata.get(key) == Some(value),
            MetadataFilter::In(key, values) => metadata
                .get(key)
                .is_some_and(|entry| values.contains(entry)),
            MetadataFilter::All(filters) => filters.iter().all(|filter| filter.matches(metadata)),
            MetadataFilter::Any(filters) => filters.iter().any(|filter| filter.matches(metadata)),
        }
    }
}
