//! Resident set size of the current process

/// Process status file; only procfs platforms (Linux) have it
const PROC_STATUS: &str = "/proc/self/status";

/// Current RSS in MiB, or `None` where the platform has no procfs
pub fn rss_mb() -> Option<f64> {
    let status = std::fs::read_to_string(PROC_STATUS).ok()?;
    parse_vm_rss_kb(&status).map(|kb| kb as f64 / 1024.0)
}

/// Extract the `VmRSS:` value (kB) from a `/proc/<pid>/status` dump
fn parse_vm_rss_kb(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|kb| kb.parse().ok())
}
