mod error;
mod manifest;
mod sync_plan;
mod progress;
mod response;
mod remote;
mod update_state;
