pub mod tap;

pub use tap::{TapGesture, TapOutcome};
