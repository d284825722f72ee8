pub mod api_client;
pub mod catalog_decoder;
pub mod network_monitor;

pub use api_client::{ApiClient, CatalogSource};
pub use catalog_decoder::{decode_menu, decode_restaurant_list};
pub use network_monitor::{
    ListenerGuard, ManualReachability, NetworkMonitor, NetworkStatus, ReachabilityPlatform,
    UnavailableReachability,
};

#[cfg(target_arch = "wasm32")]
pub use network_monitor::BrowserReachability;
