use thiserror::Error;

/// Returned when an insert targets a position outside the tree's domain.
///
/// Nothing is stored when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("point ({x}, {y}) lies outside the quadtree domain")]
pub struct OutOfDomain {
    pub x: f64,
    pub y: f64,
}

/// Invalid tree configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_bucket_size must be greater than zero")]
    ZeroBucketSize,
}
