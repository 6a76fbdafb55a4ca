//! Speedometer as an SVG document.
//!
//! ```text
//! <svg width=D height=D>
//!   <path d="M .. A .."  stroke=track  stroke-width=10 fill=none/>   background arc
//!   <path d="M c L c-len" stroke=accent stroke-width=3 transform="rotate(..)"/>  needle
//!   <circle cx cy r=8 fill=accent/>                                   hub
//! </svg>
//! ```
//!
//! Colors are written as the exact web hex strings rather than round-tripped
//! through `Rgb565`, which would lose the low bits.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context as _;
use fleet_common::config::{GAUGE_TRACK_WIDTH, HUB_RADIUS, NEEDLE_WIDTH};
use fleet_common::gauge::{GaugeConfig, SvgError};
use fleet_common::shell::{Host, RootShell};
use fleet_common::theme::ThemeMode;
use tracing::info;

const ACCENT_HEX: &str = "#007AFF";

const fn track_hex(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "#ddd",
        ThemeMode::Dark => "#333",
    }
}

/// Render the gauge for `speed` as a standalone SVG document.
pub fn speedometer_svg(
    gauge: &GaugeConfig,
    speed: f32,
    mode: ThemeMode,
) -> Result<String, SvgError> {
    let arc = gauge.arc_path().to_svg()?;
    let needle = gauge.needle(speed);
    let transform = needle.to_svg_transform()?;
    let center = gauge.center();
    let tip_y = center.y - gauge.needle_length();

    let mut doc = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size:.0}" height="{size:.0}" viewBox="0 0 {size:.0} {size:.0}">"#,
        size = gauge.size,
    );
    let _ = writeln!(
        doc,
        r#"  <path d="{arc}" stroke="{track}" stroke-width="{GAUGE_TRACK_WIDTH}" fill="none"/>"#,
        track = track_hex(mode),
    );
    let _ = writeln!(
        doc,
        r#"  <path d="M {cx:.2} {cy:.2} L {cx:.2} {tip_y:.2}" stroke="{ACCENT_HEX}" stroke-width="{NEEDLE_WIDTH}" transform="{transform}"/>"#,
        cx = center.x,
        cy = center.y,
    );
    let _ = writeln!(
        doc,
        r#"  <circle cx="{cx:.2}" cy="{cy:.2}" r="{HUB_RADIUS}" fill="{ACCENT_HEX}"/>"#,
        cx = center.x,
        cy = center.y,
    );
    doc.push_str("</svg>\n");
    Ok(doc)
}

/// Write the gauge for `speed` to `path`, then report ready to `host`.
///
/// Export mode mounts no dashboard, so a bare shell sends the one-time ready
/// notification once the file is on disk.
pub fn export<H>(
    gauge: &GaugeConfig,
    speed: f32,
    mode: ThemeMode,
    path: &Path,
    host: &mut H,
) -> anyhow::Result<()>
where
    H: Host + ?Sized,
{
    let doc = speedometer_svg(gauge, speed, mode)?;
    std::fs::write(path, doc).with_context(|| format!("writing svg to {}", path.display()))?;
    info!(path = %path.display(), "svg saved");
    RootShell::new().on_ready(host);
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
