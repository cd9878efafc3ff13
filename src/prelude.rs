pub use crate::builder::CacheBuilder;
pub use crate::cache::Cache;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::listener::{EvictionCause, EvictionListener};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::CacheMetricsSnapshot;
pub use crate::policy::PolicyKind;
pub use crate::traits::{BoundedCache, EvictionPolicy};
