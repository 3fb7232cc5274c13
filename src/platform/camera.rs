//! Camera capability probe.
//!
//! Only asks whether a capture device exists; no stream is ever opened.
//! On Linux this means scanning `/dev` for `video*` nodes. Hosts without
//! a probe implementation report `Unsupported`.

use super::Capability;

/// A capture device found by the probe.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraDevice {
    /// Device node path, e.g. `/dev/video0`.
    pub path: String,
}

/// Look for a capture device on this host.
pub fn probe() -> Capability<CameraDevice> {
    let result = probe_impl();
    log::info!("Camera probe: {}", result.status_label());
    result
}

#[cfg(target_os = "linux")]
fn probe_impl() -> Capability<CameraDevice> {
    let entries = match std::fs::read_dir("/dev") {
        Ok(entries) => entries,
        Err(e) => return Capability::Denied(format!("Cannot scan /dev: {}", e)),
    };

    let mut nodes: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("video") && name["video".len()..].parse::<u32>().is_ok())
        .collect();
    nodes.sort();

    match nodes.first() {
        Some(name) => Capability::Granted(CameraDevice {
            path: format!("/dev/{}", name),
        }),
        None => Capability::Denied("No capture device present".to_string()),
    }
}

#[cfg(not(target_os = "linux"))]
fn probe_impl() -> Capability<CameraDevice> {
    Capability::Unsupported
}
