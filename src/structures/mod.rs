mod error;
pub use error::Error;

mod manifest;
pub use manifest::FingerprintManifest;

mod sync_plan;
pub use sync_plan::SyncPlan;

mod sync_report;
pub use sync_report::SyncReport;

mod progress;
pub use progress::{Progress, UpdateEvent};

mod update_state;
pub use update_state::UpdateState;

mod response;
pub use response::Response;

mod remote;
pub use remote::RemoteRepository;

mod launcher;
pub use launcher::Launcher;
