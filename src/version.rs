//! The version path segment that selects one of the page themes.
//!
//! The three versions render the same data with the same validation rules;
//! only the look of the pages differs.

use std::fmt::Display;

use crate::Error;

/// One of the recognized page versions.
///
/// Every versioned URL starts with a segment such as `v1`. Requests using any
/// other segment are rejected with a not-found response before any database
/// work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppVersion {
    /// The original, table-heavy look.
    V1,
    /// A compact, card-based look.
    V2,
    /// A high-contrast look.
    V3,
}

impl AppVersion {
    /// All recognized versions, in the order they are shown on the landing
    /// page.
    pub const ALL: [AppVersion; 3] = [AppVersion::V1, AppVersion::V2, AppVersion::V3];

    /// Parse a raw path segment such as `v1`.
    ///
    /// # Errors
    /// Returns [Error::UnknownVersion] for anything other than `v1`, `v2` or
    /// `v3`.
    pub fn from_path_segment(segment: &str) -> Result<Self, Error> {
        match segment {
            "v1" => Ok(AppVersion::V1),
            "v2" => Ok(AppVersion::V2),
            "v3" => Ok(AppVersion::V3),
            other => Err(Error::UnknownVersion(other.to_string())),
        }
    }

    /// The segment used to build URLs for this version.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            AppVersion::V1 => "v1",
            AppVersion::V2 => "v2",
            AppVersion::V3 => "v3",
        }
    }

    /// A short human-readable name for the landing page.
    pub fn display_name(&self) -> &'static str {
        match self {
            AppVersion::V1 => "Classic",
            AppVersion::V2 => "Compact",
            AppVersion::V3 => "Contrast",
        }
    }

    /// Tailwind classes for this version's page heading.
    pub fn heading_style(&self) -> &'static str {
        match self {
            AppVersion::V1 => "text-xl font-bold text-blue-700 dark:text-blue-400",
            AppVersion::V2 => "text-lg font-semibold text-emerald-700 dark:text-emerald-400",
            AppVersion::V3 => "text-2xl font-black uppercase text-gray-900 dark:text-white",
        }
    }

    /// Tailwind classes for this version's section cards.
    pub fn card_style(&self) -> &'static str {
        match self {
            AppVersion::V1 => {
                "rounded border border-gray-200 bg-white px-4 py-3 shadow-sm \
                dark:border-gray-700 dark:bg-gray-800"
            }
            AppVersion::V2 => {
                "rounded-lg border border-emerald-100 bg-emerald-50/40 px-3 py-2 \
                dark:border-emerald-900 dark:bg-gray-800"
            }
            AppVersion::V3 => {
                "border-2 border-gray-900 bg-white px-4 py-3 \
                dark:border-white dark:bg-gray-900"
            }
        }
    }
}

impl Display for AppVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

#[cfg(test)]
mod app_version_tests {
    use crate::Error;

    use super::AppVersion;

    #[test]
    fn recognized_segments_parse() {
        assert_eq!(AppVersion::from_path_segment("v1"), Ok(AppVersion::V1));
        assert_eq!(AppVersion::from_path_segment("v2"), Ok(AppVersion::V2));
        assert_eq!(AppVersion::from_path_segment("v3"), Ok(AppVersion::V3));
    }

    #[test]
    fn unrecognized_segments_are_rejected() {
        for segment in ["v9", "v0", "V1", "1", "", "v1 "] {
            assert_eq!(
                AppVersion::from_path_segment(segment),
                Err(Error::UnknownVersion(segment.to_string()))
            );
        }
    }

    #[test]
    fn path_segments_round_trip() {
        for version in AppVersion::ALL {
            assert_eq!(
                AppVersion::from_path_segment(version.as_path_segment()),
                Ok(version)
            );
        }
    }
}
