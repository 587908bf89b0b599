// Surgery Calendar Library
// Slot-grid scheduling and drag-to-reschedule engine

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{SchedulerError, SchedulerResult};
pub use models::event::{Event, EventId};
pub use models::grid::{CellAddress, VisibleWeek};
pub use services::scheduler::{Scheduler, SessionHandle};
