//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the full report plus per-file byte counts.
    Verbose,
    /// Show the full report.
    #[default]
    Normal,
    /// Show only status lines (no banners, file listings, or instructions).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows report sections (headers, listings, hints).
    pub fn shows_report(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows exact byte counts next to file sizes.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
