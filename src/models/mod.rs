pub mod dataset;
pub mod event;
pub mod month;
pub mod tag_kind;

pub use dataset::{Dataset, DatasetIssue};
pub use event::Event;
pub use month::Month;
pub use tag_kind::TagKind;
