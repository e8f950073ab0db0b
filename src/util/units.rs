//! Units formatting and conversion utilities
//!
//! Provides functions for human-readable formatting of sizes and durations,
//! and the derived metrics reported for each trial.

/// Exact byte count, followed by a binary-unit approximation once the
/// value reaches 1 KiB
///
/// # Examples
/// ```
/// use fpbench::util::units::format_bytes;
///
/// assert_eq!(format_bytes(100), "100 B");
/// assert_eq!(format_bytes(4096), "4096 B (4.00 KiB)");
/// assert_eq!(format_bytes(94_289_920), "94289920 B (89.92 MiB)");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let exponent = ((63 - bytes.leading_zeros()) / 10).min(UNITS.len() as u32);
    let scaled = bytes as f64 / (1u64 << (10 * exponent)) as f64;
    format!("{} B ({:.2} {})", bytes, scaled, UNITS[exponent as usize - 1])
}

/// Format a duration given in seconds
///
/// # Examples
/// ```
/// use fpbench::util::units::format_seconds;
///
/// assert_eq!(format_seconds(90.0), "1m 30s");
/// assert_eq!(format_seconds(1.5), "1.50s");
/// assert_eq!(format_seconds(0.25), "250ms");
/// ```
pub fn format_seconds(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "n/a".to_string();
    }

    if secs >= 60.0 {
        let whole = secs as u64;
        format!("{}m {}s", whole / 60, whole % 60)
    } else if secs >= 1.0 {
        format!("{:.2}s", secs)
    } else {
        format!("{:.0}ms", secs * 1000.0)
    }
}

/// Calculate throughput in MiB/s from bytes and elapsed seconds
///
/// # Examples
/// ```
/// use fpbench::util::units::calculate_throughput_mbps;
///
/// let throughput = calculate_throughput_mbps(1048576, 1.0);
/// assert!((throughput - 1.0).abs() < 0.01);
/// ```
pub fn calculate_throughput_mbps(bytes: u64, secs: f64) -> f64 {
    if secs <= 0.0 || !secs.is_finite() {
        return 0.0;
    }

    let megabytes = bytes as f64 / 1_048_576.0; // 1 MiB = 1,048,576 bytes
    megabytes / secs
}

/// Raw size over compressed size; 0.0 when nothing was written
pub fn compression_ratio(raw_size: u64, compressed_size: u64) -> f64 {
    if compressed_size == 0 {
        return 0.0;
    }
    raw_size as f64 / compressed_size as f64
}
