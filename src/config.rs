//! Command-line configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const DEFAULT_PORT: u16 = 5000;

/// Where `wasm-pack build scene --target web` writes the engine bundle.
fn default_pkg_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scene").join("pkg")
}

#[derive(Parser, Debug, Clone)]
#[command(name = "shapeview", about = "Serve the 3D shape viewer page")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding `scene.js` and `scene_bg.wasm`.
    #[arg(long, default_value_os_t = default_pkg_dir())]
    pub pkg_dir: PathBuf,

    /// Developer diagnostics: request tracing, no-store caching, on-page errors.
    ///
    /// There is no auto-reload; reload the page by hand after rebuilding the bundle.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub dev: bool,
}

impl Config {
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
