//! Value Objects - Immutable domain values

pub mod allow_list;
pub mod user_id;

pub use allow_list::AllowList;
pub use user_id::UserId;
