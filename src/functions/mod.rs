mod get_hash;
mod write_file;
mod manifest_store;
mod retrieve_manifest;
mod determine_files_to_download;
mod download_file;
mod flow;
mod launch;

pub use get_hash::{fingerprints_match, hash_bytes, hash_of_file};
pub(crate) use write_file::write_file_atomically;
pub use manifest_store::{load_manifest, save_manifest};
pub use retrieve_manifest::retrieve_manifest;
pub use determine_files_to_download::determine_files_to_download;
pub use download_file::download_file;
pub(crate) use flow::flow;
pub use launch::launch;
