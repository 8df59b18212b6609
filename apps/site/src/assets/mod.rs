//! Bundled static assets: the store they live in, the build manifest that
//! names the hashed client bundle, and the dev-server fallback.

pub mod manifest;
pub mod proxy;
pub mod resolver;
pub mod store;

pub use manifest::Manifest;
pub use proxy::DevProxy;
pub use store::{AssetError, AssetStore, FsAssetStore};
