//! # Dependency wiring
//!
//! The only place that depends on lm-infra, lm-platform and lm-app at once.
//! It creates the concrete adapters, applies configuration defaults, and
//! injects everything into [`LocalMediaService`] through its ports. It makes
//! no decisions of its own beyond defaults.

use std::path::PathBuf;
use std::sync::Arc;

use lm_app::app_paths::AppPaths;
use lm_app::storage::DEFAULT_TRANSFER_BUFFER_BYTES;
use lm_app::{LocalMediaDeps, LocalMediaService, TransferSettings};
use lm_core::app_dirs::AppDirs;
use lm_core::config::AppConfig;
use lm_core::ports::AppDirsPort;
use lm_core::AppIdentity;
use lm_infra::fs::{FsFileProvider, FsManagedStore, FsMediaSource};
use lm_platform::app_dirs::DirsAppDirsAdapter;
use lm_platform::capability::HostCapabilityDetector;
use lm_platform::dispatcher::{ForegroundQueue, TokioDispatcher};
use lm_platform::handoff::{ChannelHandoffPresenter, HandoffEventReceiver};
use lm_platform::public_dirs::DirsPublicDirectory;
use lm_platform::ui_context::UiContextSlot;
use tokio::runtime::Handle;

use super::runtime::LocalMediaRuntime;

/// Application id used when the configuration does not name one.
pub const DEFAULT_APPLICATION_ID: &str = "local.media";
/// Name of the shared root exposed when the configuration lists none.
pub const DEFAULT_SHARED_ROOT_NAME: &str = "media";

pub type WiringResult<T> = Result<T, WiringError>;

/// Infrastructure initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directories unavailable: {0}")]
    AppDirs(String),

    #[error("Managed store initialization failed: {0}")]
    ManagedStoreInit(String),

    #[error("Shared roots initialization failed: {0}")]
    SharingInit(String),
}

struct PlatformLayer {
    dispatcher: Arc<TokioDispatcher>,
    foreground: ForegroundQueue,
    ui_context: Arc<UiContextSlot>,
    public_directory: Arc<DirsPublicDirectory>,
    host_capability: Arc<HostCapabilityDetector>,
    presenter: Arc<ChannelHandoffPresenter>,
    handoff_events: HandoffEventReceiver,
}

struct InfraLayer {
    media_source: Arc<FsMediaSource>,
    managed_store: Arc<FsManagedStore>,
    file_provider: Arc<FsFileProvider>,
}

fn create_platform_layer(config: &AppConfig, background: Handle) -> PlatformLayer {
    let (dispatcher, foreground) = TokioDispatcher::new(background);
    let (presenter, handoff_events) = ChannelHandoffPresenter::new();

    PlatformLayer {
        dispatcher: Arc::new(dispatcher),
        foreground,
        ui_context: Arc::new(UiContextSlot::new()),
        public_directory: Arc::new(DirsPublicDirectory::new(config.downloads_dir.clone())),
        host_capability: Arc::new(HostCapabilityDetector::new(config.host_api_level)),
        presenter: Arc::new(presenter),
        handoff_events,
    }
}

fn create_infra_layer(config: &AppConfig, paths: &AppPaths) -> WiringResult<InfraLayer> {
    let store_root = config
        .managed_store_root
        .clone()
        .unwrap_or_else(|| paths.managed_store_root.clone());
    std::fs::create_dir_all(&store_root).map_err(|e| {
        WiringError::ManagedStoreInit(format!(
            "Failed to create {}: {e}",
            store_root.display()
        ))
    })?;

    let roots: Vec<(String, PathBuf)> = if config.shared_roots.is_empty() {
        vec![(
            DEFAULT_SHARED_ROOT_NAME.to_string(),
            paths.shared_media_dir.clone(),
        )]
    } else {
        config
            .shared_roots
            .iter()
            .map(|root| (root.name.clone(), root.path.clone()))
            .collect()
    };
    for (_, path) in &roots {
        std::fs::create_dir_all(path).map_err(|e| {
            WiringError::SharingInit(format!("Failed to create {}: {e}", path.display()))
        })?;
    }
    let file_provider =
        FsFileProvider::new(roots).map_err(|e| WiringError::SharingInit(format!("{e:#}")))?;

    Ok(InfraLayer {
        media_source: Arc::new(FsMediaSource::new()),
        managed_store: Arc::new(FsManagedStore::new(store_root)),
        file_provider: Arc::new(file_provider),
    })
}

fn app_identity(config: &AppConfig) -> AppIdentity {
    if config.application_id.is_empty() {
        AppIdentity::new(DEFAULT_APPLICATION_ID)
    } else {
        AppIdentity::new(config.application_id.clone())
    }
}

fn transfer_settings(config: &AppConfig) -> TransferSettings {
    TransferSettings {
        buffer_bytes: config
            .transfer_buffer_bytes
            .filter(|bytes| *bytes > 0)
            .unwrap_or(DEFAULT_TRANSFER_BUFFER_BYTES),
        absent_resource: config.absent_resource.unwrap_or_default(),
    }
}

/// Wire the service with the given application directories.
///
/// Background work runs on `background`; foreground work is queued on the
/// returned runtime's [`ForegroundQueue`] until the host starts draining it.
pub fn wire_dependencies(
    config: &AppConfig,
    background: Handle,
    app_dirs: &AppDirs,
) -> WiringResult<LocalMediaRuntime> {
    let paths = AppPaths::from_app_dirs(app_dirs);
    let platform = create_platform_layer(config, background);
    let infra = create_infra_layer(config, &paths)?;
    let identity = app_identity(config);
    let transfer = transfer_settings(config);

    tracing::info!(
        application_id = %identity.application_id,
        buffer_bytes = transfer.buffer_bytes,
        absent_resource = ?transfer.absent_resource,
        "Wiring local media service"
    );

    let deps = LocalMediaDeps {
        dispatcher: platform.dispatcher,
        ui_context: platform.ui_context.clone(),
        media_source: infra.media_source,
        managed_store: infra.managed_store,
        public_directory: platform.public_directory,
        host_capability: platform.host_capability,
        transfer,
        reference_authority: infra.file_provider.clone(),
        presenter: platform.presenter,
        identity: identity.clone(),
    };

    Ok(LocalMediaRuntime::new(
        Arc::new(LocalMediaService::new(deps)),
        platform.ui_context,
        infra.file_provider,
        identity,
        platform.handoff_events,
        platform.foreground,
    ))
}

/// Wire the service under the platform's standard application directories.
pub fn wire_default(config: &AppConfig, background: Handle) -> WiringResult<LocalMediaRuntime> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .map_err(|e| WiringError::AppDirs(e.to_string()))?;
    wire_dependencies(config, background, &app_dirs)
}
