use crate::{error::ConfigError, split::SplitStrategy};

/// Tunables of a [`QuadTree`](crate::QuadTree)
///
/// With the `serde` feature this deserializes from e.g.
/// `{"max_bucket_size": 16, "split_strategy": "median"}`; missing fields take
/// their defaults and unknown fields are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct TreeConfig {
    /// A leaf splits once it holds more than this many items
    #[cfg_attr(feature = "serde", serde(default = "TreeConfig::default_max_bucket_size"))]
    pub max_bucket_size: usize,

    #[cfg_attr(feature = "serde", serde(default))]
    pub split_strategy: SplitStrategy,
}

impl TreeConfig {
    const fn default_max_bucket_size() -> usize {
        8
    }

    pub fn with_max_bucket_size(mut self, max_bucket_size: usize) -> Self {
        self.max_bucket_size = max_bucket_size;
        self
    }

    pub fn with_split_strategy(mut self, split_strategy: SplitStrategy) -> Self {
        self.split_strategy = split_strategy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_bucket_size: Self::default_max_bucket_size(),
            split_strategy: SplitStrategy::default(),
        }
    }
}
