use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use futures::StreamExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use launcher_updater::{UpdateEvent, UpdaterBuilder, DEFAULT_APPLICATION_NAME, DEFAULT_BRANCH, DEFAULT_MANIFEST_NAME};

/// Keeps a local copy of an application in sync with a remote repository, then starts it.
#[derive(Parser, Debug)]
#[command(name = "launcher-updater", version, about)]
struct Args {
  /// Base url of the remote repository, files are fetched from `{base_url}/{branch}/{file}`
  #[arg(long, env = "UPDATER_BASE_URL")]
  base_url: String,

  #[arg(long, env = "UPDATER_BRANCH", default_value = DEFAULT_BRANCH)]
  branch: String,

  /// File to keep in sync, repeat for every file; downloads happen in this order
  #[arg(long = "file", env = "UPDATER_FILES", value_delimiter = ',', required = true)]
  files: Vec<String>,

  /// Tracked file that is started after updating, defaults to the first file
  #[arg(long, env = "UPDATER_ENTRY_POINT")]
  entry_point: Option<String>,

  /// Program that runs the entry point, e.g. `node`
  #[arg(long, env = "UPDATER_INTERPRETER")]
  interpreter: Option<PathBuf>,

  /// Name of the directory inside the user's data directory
  #[arg(long, env = "UPDATER_APPLICATION_NAME", default_value = DEFAULT_APPLICATION_NAME)]
  application_name: String,

  /// Use this directory instead of the per-application data directory
  #[arg(long, env = "UPDATER_DATA_DIRECTORY")]
  data_directory: Option<PathBuf>,

  #[arg(long, env = "UPDATER_MANIFEST_NAME", default_value = DEFAULT_MANIFEST_NAME)]
  manifest_name: String,

  /// Seconds to wait for a single file download
  #[arg(long, env = "UPDATER_DOWNLOAD_TIMEOUT", default_value_t = 60)]
  download_timeout: u64,

  /// Only synchronize, do not start the application
  #[arg(long)]
  no_launch: bool,

  /// Arguments passed on to the application
  #[arg(last = true)]
  arguments: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

  let args = Args::parse();
  let (sender, receiver) = futures::channel::mpsc::unbounded();

  let mut builder = UpdaterBuilder::new();
  builder
    .set_base_url(args.base_url)
    .set_branch(args.branch)
    .set_tracked_files(args.files)
    .set_application_name(args.application_name)
    .set_remote_manifest_name(args.manifest_name)
    .set_download_timeout(Duration::from_secs(args.download_timeout))
    .set_launch_arguments(args.arguments)
    .set_event_sender(sender);
  if let Some(entry_point) = args.entry_point {
    builder.set_entry_point(entry_point);
  }
  if let Some(interpreter) = args.interpreter {
    builder.set_interpreter(interpreter);
  }
  if let Some(data_directory) = args.data_directory {
    builder.set_data_directory(data_directory);
  }
  if args.no_launch {
    builder.set_start_delay(Duration::ZERO).set_error_delay(Duration::ZERO);
  }

  let mut updater = match builder.build() {
    Ok(updater) => updater,
    Err(e) => {
      error!("{}", e);
      return ExitCode::FAILURE;
    }
  };

  // Stand-in for a loading window
  let presenter = tokio::spawn(receiver.for_each(|event| async move {
    match event {
      UpdateEvent::Status(status) => eprintln!("{}", status),
      UpdateEvent::Progress { percent, file } => eprintln!("[{:>3}%] {}", percent, file),
      UpdateEvent::Log(_) => {},
    }
  }));

  if args.no_launch {
    let synchronized = updater.synchronize().await.is_some();
    drop(updater);
    let _ = presenter.await;
    return if synchronized { ExitCode::SUCCESS } else { ExitCode::FAILURE };
  }

  let result = updater.run().await;
  drop(updater);
  let _ = presenter.await;
  let mut child = match result {
    Ok(child) => child,
    Err(e) => {
      error!("Launch failed: {}", e);
      return ExitCode::FAILURE;
    }
  };

  match child.wait().await {
    Ok(status) => {
      info!("Application exited with {}", status);
      match status.code() {
        Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
        None => ExitCode::FAILURE,
      }
    },
    Err(e) => {
      error!("Could not wait for the application: {}", e);
      ExitCode::FAILURE
    }
  }
}
