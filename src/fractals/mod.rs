pub mod epsilon;
pub mod escape_time;
pub mod julia_frame;
pub mod julia_series;
pub mod polynomial;
