pub mod detail;
pub mod lookup;
