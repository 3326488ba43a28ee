pub mod calculator;
pub mod clock;
pub mod lifecycle;
pub mod logic;
pub mod receipt;
pub mod summary;
