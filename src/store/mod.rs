pub mod dataset;

pub use dataset::{AttendanceRow, Dataset, DatasetStore};
