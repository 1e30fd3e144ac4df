pub mod storms;

pub use storms::storms;
