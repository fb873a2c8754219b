// Reply timers run on tokio and timestamps read the OS clock; neither is
// available on wasm32-unknown-unknown.
#[cfg(target_arch = "wasm32")]
compile_error!("varuna supports desktop and mobile targets only");

pub mod config;
pub mod session;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
