mod controller;
mod locale;

pub use controller::{SendOutcome, SessionController};
