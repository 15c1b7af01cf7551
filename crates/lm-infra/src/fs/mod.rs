pub mod file_provider;
pub mod managed_store;
pub mod media_source;

pub use file_provider::FsFileProvider;
pub use managed_store::FsManagedStore;
pub use media_source::FsMediaSource;
