//! Root font sizing for large displays and the large-text toggle.
//!
//! Everything in the stylesheet is sized in `rem`, so changing the root font
//! size scales the whole kiosk. Larger screens get a bigger base; the
//! large-text toggle adds 12.5% on top.

#[cfg(test)]
#[path = "text_scale_test.rs"]
mod text_scale_test;

pub const STANDARD_PX: u32 = 16;
pub const WIDE_PX: u32 = 14;
pub const QHD_PX: u32 = 20;
pub const LARGE_TEXT_FACTOR: f64 = 1.125;

pub const WIDE_MEDIA_QUERY: &str = "(min-width: 1400px)";
pub const QHD_MEDIA_QUERY: &str = "(min-width: 2560px)";

/// Display size buckets that change the base font size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenClass {
    #[default]
    Standard,
    /// At least 1400px wide.
    Wide,
    /// At least 2560px wide.
    Qhd,
}

impl ScreenClass {
    /// Classify from the two media query results; QHD takes precedence.
    pub fn from_matches(qhd: bool, wide: bool) -> Self {
        if qhd {
            Self::Qhd
        } else if wide {
            Self::Wide
        } else {
            Self::Standard
        }
    }
}

/// Root font size in pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn root_font_size_px(screen: ScreenClass, large_text: bool) -> u32 {
    let base = match screen {
        ScreenClass::Standard => STANDARD_PX,
        ScreenClass::Wide => WIDE_PX,
        ScreenClass::Qhd => QHD_PX,
    };
    if large_text { (f64::from(base) * LARGE_TEXT_FACTOR).round() as u32 } else { base }
}

/// Classify the current window. Native builds report `Standard`.
pub fn detect_screen_class() -> ScreenClass {
    #[cfg(feature = "csr")]
    {
        let matches = |query: &str| {
            web_sys::window()
                .and_then(|w| w.match_media(query).ok().flatten())
                .map_or(false, |mq| mq.matches())
        };
        ScreenClass::from_matches(matches(QHD_MEDIA_QUERY), matches(WIDE_MEDIA_QUERY))
    }
    #[cfg(not(feature = "csr"))]
    {
        ScreenClass::Standard
    }
}
