// Mon Aug 24 2026 - Alex

/// Renders a byte count the way the report displays it: `%.2fM` when the
/// mebibyte value is strictly greater than 1, otherwise `%.2fK`. The
/// strict comparison means exactly 1 MiB renders as `1024.00K`.
pub fn human_size(bytes: u64) -> String {
    let k = bytes as f64 / 1024.0;
    let m = k / 1024.0;
    if m > 1.0 {
        format!("{:.2}M", m)
    } else {
        format!("{:.2}K", k)
    }
}

/// The trailer total is always in mebibytes, two decimals.
pub fn total_megabytes(bytes: u64) -> String {
    format!("{:.2}M", bytes as f64 / 1024.0 / 1024.0)
}
