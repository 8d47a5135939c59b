pub mod answer;
pub mod profile;
pub mod records;
