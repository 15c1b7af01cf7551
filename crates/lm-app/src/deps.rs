//! # Local media dependencies
//!
//! Parameter grouping for [`LocalMediaService`](crate::LocalMediaService)
//! construction. Not a builder: no defaults, no optional fields, no hidden logic.

use std::sync::Arc;

use lm_core::ports::*;
use lm_core::AppIdentity;

use crate::storage::TransferSettings;

pub struct LocalMediaDeps {
    // Execution
    pub dispatcher: Arc<dyn DispatcherPort>,
    pub ui_context: Arc<dyn UiContextPort>,

    // Storage
    pub media_source: Arc<dyn MediaSourcePort>,
    pub managed_store: Arc<dyn ManagedStorePort>,
    pub public_directory: Arc<dyn PublicDirectoryPort>,
    pub host_capability: Arc<dyn HostCapabilityPort>,
    pub transfer: TransferSettings,

    // Handoff
    pub reference_authority: Arc<dyn ReferenceAuthorityPort>,
    pub presenter: Arc<dyn HandoffPresenterPort>,

    // Identity
    pub identity: AppIdentity,
}
