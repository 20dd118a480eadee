pub mod models {
    pub mod stats;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use models::stats::{
    format_percentage, AccountInfo, ChartBucket, PageRow, RangeQuery, ReferrerRow, Resolution,
    StatsModel,
};
