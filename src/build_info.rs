//! Compile-time build metadata
//!
//! `build.rs` stamps `UUC_BUILD_NUMBER` and `UUC_BUILD_TIMESTAMP`; builds
//! without the script (e.g. docs) fall back to 0 and "unknown".

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const STAMPED_NUMBER: Option<&str> = option_env!("UUC_BUILD_NUMBER");
const STAMPED_TIMESTAMP: Option<&str> = option_env!("UUC_BUILD_TIMESTAMP");

/// Digits-only decimal parse usable in const context
const fn decimal(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut acc: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return None;
        }
        acc = acc * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    Some(acc)
}

pub const BUILD_NUMBER: u64 = match STAMPED_NUMBER {
    Some(s) => match decimal(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

pub const BUILD_TIMESTAMP: &str = match STAMPED_TIMESTAMP {
    Some(s) => s,
    None => "unknown",
};

/// What the status tool and startup banner report about this binary
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: VERSION,
        build_number: BUILD_NUMBER,
        build_timestamp: BUILD_TIMESTAMP,
    };

    pub fn current() -> Self {
        Self::CURRENT
    }

    /// e.g. "uuc 1.0.0 (build 42)"
    pub fn label(&self) -> String {
        format!("{} {} (build {})", self.name, self.version, self.build_number)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("Universal Unit Converter - {}", info.label());
    eprintln!("Compiled {}", info.build_timestamp);
}
