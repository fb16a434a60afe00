//! Saving the calculator form between sessions.
//!
//! [`CalculatorState`] is the whole form. It is stored as a
//! [`PersistedState`], a flat JSON object keyed by weekday name, and older
//! saves are normalized when loaded.

mod state;
mod store;

pub use state::{CalculatorState, PersistedDay, PersistedState, PersistedWeek};
pub use store::{JsonFileStore, MemoryStore, StateStore};
