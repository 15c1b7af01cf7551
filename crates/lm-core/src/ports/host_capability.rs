use crate::media::StorageCapability;

pub trait HostCapabilityPort: Send + Sync {
    /// Storage capability of the host at the time of the call.
    fn storage_capability(&self) -> StorageCapability;
}
