pub mod builder;
pub mod nav;
pub mod route;

pub use builder::{DayCell, EventRow, GridSize, MonthCard, MonthGrid, Page, build_page};
pub use nav::{NavControls, Swipe, classify_swipe};
pub use route::View;
