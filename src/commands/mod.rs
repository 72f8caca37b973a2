pub mod create;
pub mod info;
pub mod welcome;
