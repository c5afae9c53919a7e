pub mod board;
pub mod rate_limit;
pub mod tracker;
pub mod validate;
