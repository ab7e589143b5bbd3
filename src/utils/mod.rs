pub mod colors;
pub mod date;
pub mod formatting;
pub mod time;

pub use formatting::mins2readable;
