mod controller;
mod error;
mod scheduler;
mod view;
mod window;

pub use controller::TelemetrySyncController;
pub use error::{EntryError, LoadError};
pub use scheduler::PollingScheduler;
pub use view::{Subject, ViewState};
pub use window::SlidingWindow;
