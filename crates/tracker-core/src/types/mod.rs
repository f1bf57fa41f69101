//! 공용 타입 정의.

pub mod granularity;
pub mod year_filter;

pub use granularity::*;
pub use year_filter::*;
