extern crate json;
extern crate sha2;
extern crate hex;
extern crate futures;
extern crate tokio;
extern crate url;
extern crate tracing;

//Modules
mod functions;
mod implementations;
pub mod structures;
pub mod traits;
mod updater;
mod updater_builder;
#[cfg(test)]
mod test_utils;

pub use crate::functions::{determine_files_to_download, download_file, fingerprints_match, hash_bytes, hash_of_file, launch, load_manifest, retrieve_manifest, save_manifest};
pub use crate::structures::{Error, FingerprintManifest, Launcher, Progress, RemoteRepository, Response, SyncPlan, SyncReport, UpdateEvent, UpdateState};
pub use crate::traits::RemoteSource;
pub use crate::updater::Updater;
pub use crate::updater_builder::{UpdaterBuilder, CACHE_DIRECTORY_NAME, DEFAULT_APPLICATION_NAME, DEFAULT_BRANCH, DEFAULT_MANIFEST_NAME, LOCAL_MANIFEST_NAME};
