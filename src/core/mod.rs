pub mod calculator;
pub mod lifecycle;
pub mod log;
pub mod logic;
pub mod monthly;
pub mod report;
pub mod resolver;
