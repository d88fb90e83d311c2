//! Domain Entities
//!
//! - `MeasurementEvent` - A measured request waiting to be logged

mod measurement_event;

pub use measurement_event::MeasurementEvent;
