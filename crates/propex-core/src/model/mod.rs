pub mod event;
pub mod member;
pub mod property;

pub use event::TransferEvent;
pub use member::Member;
pub use property::Property;
