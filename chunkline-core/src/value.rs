use std::collections::HashMap;

pub type Value = serde_json::Value;

/// Free-form metadata attached to a [`crate::Document`].
pub type Metadata = HashMap<String, Value>;
