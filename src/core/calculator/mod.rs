pub mod classify;
pub mod expected;
pub mod overtime;
pub mod surplus;
pub mod timeline;
