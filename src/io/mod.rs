pub mod reporting;
pub mod view;
