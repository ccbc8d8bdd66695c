pub mod class;
pub mod dispatch;
pub mod grade;
pub mod learner;
pub mod schema;
pub mod setup;
pub mod shared;
pub mod stats;
