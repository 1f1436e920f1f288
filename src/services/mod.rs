// Service exports
pub mod applications;
pub mod cache;
pub mod directory;
pub mod ranking;

pub use applications::{ApplicationsClient, ApplicationsError};
pub use cache::{CacheError, CacheKey, CacheManager};
pub use directory::{DirectoryClient, DirectoryError};
pub use ranking::{RankError, RankingService};
