pub mod listing_ops;
pub mod ownership;
pub mod transfer_ops;

pub use ownership::is_owner;
