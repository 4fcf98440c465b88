//! Static description of the expected external dataset.

/// An externally hosted dataset that has to be downloaded by hand.
///
/// The checker never fetches anything; the [`page_url`](Self::page_url) is
/// only ever printed as part of the manual download instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSource {
    /// Human-readable dataset name.
    pub name: &'static str,
    /// Kaggle dataset slug (`owner/dataset`).
    pub slug: &'static str,
    /// Dataset page the user downloads from.
    pub page_url: &'static str,
    /// Expected data file extension, without the leading dot.
    pub data_extension: &'static str,
    /// Smallest size, in bytes, a data file can have and still be usable.
    /// Files at or below this size are reported as invalid.
    pub min_valid_bytes: u64,
}

impl DatasetSource {
    /// Extension in upper case, for display ("CSV file(s)").
    pub fn extension_upper(&self) -> String {
        self.data_extension.to_uppercase()
    }
}

/// The Kaggle basketball dataset the checker looks for.
pub const KAGGLE_BASKETBALL: DatasetSource = DatasetSource {
    name: "NBA Basketball",
    slug: "wyattowalsh/basketball",
    page_url: "https://www.kaggle.com/datasets/wyattowalsh/basketball",
    data_extension: "csv",
    min_valid_bytes: 100,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kaggle_basketball_points_at_kaggle() {
        assert!(KAGGLE_BASKETBALL.page_url.starts_with("https://www.kaggle.com/"));
        assert!(KAGGLE_BASKETBALL.page_url.ends_with(KAGGLE_BASKETBALL.slug));
    }

    #[test]
    fn extension_upper_for_display() {
        assert_eq!(KAGGLE_BASKETBALL.extension_upper(), "CSV");
    }

    #[test]
    fn size_floor_is_one_hundred_bytes() {
        assert_eq!(KAGGLE_BASKETBALL.min_valid_bytes, 100);
    }
}
