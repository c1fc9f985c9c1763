pub mod dashboard;
pub mod events;
pub mod logging;
pub mod registry;
pub mod session;

pub use dashboard::DashboardState;
pub use events::{PanelCommand, SessionSnapshot};
pub use logging::{InMemorySessionLogWriter, SessionLogWriter, TracingLogWriter};
pub use session::{Session, SessionError, UnmountReport};
