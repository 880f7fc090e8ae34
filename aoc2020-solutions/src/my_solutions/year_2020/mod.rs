pub mod day_07;
pub mod day_11;
