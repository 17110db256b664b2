//! Transformation options
//!
//! Every option the gateway understands is an explicit field here, so the
//! full set of accepted values and their validation rules is visible at
//! compile time instead of being probed at call time.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How the gateway fits the image into the requested dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Scale to fit within the box, preserving aspect ratio
    FitIn,
    /// Stretch to the exact box, ignoring aspect ratio
    Stretch,
}

impl Fit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FitIn => "fit-in",
            Self::Stretch => "stretch",
        }
    }
}

impl FromStr for Fit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fit-in" => Ok(Fit::FitIn),
            "stretch" => Ok(Fit::Stretch),
            _ => Err(Error::invalid_option(format!("unknown fit mode: {}", s))),
        }
    }
}

/// Horizontal alignment of the crop window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl FromStr for HAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(Error::invalid_option(format!(
                "unknown horizontal alignment: {}",
                s
            ))),
        }
    }
}

/// Vertical alignment of the crop window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for VAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VAlign::Top),
            "middle" => Ok(VAlign::Middle),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(Error::invalid_option(format!(
                "unknown vertical alignment: {}",
                s
            ))),
        }
    }
}

/// Output format emitted through the format() filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
    Avif,
    Gif,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "webp" => Ok(ImageFormat::Webp),
            "avif" => Ok(ImageFormat::Avif),
            "gif" => Ok(ImageFormat::Gif),
            _ => Err(Error::invalid_option(format!("unknown format: {}", s))),
        }
    }
}

/// Three-valued option: inherit the configured default, suppress the
/// default entirely, or set an explicit value
///
/// This keeps "option absent" and "option explicitly disabled" distinct,
/// which the path grammar depends on: a thumbnail URL must render a plain
/// `WxH` segment even when a default fit mode is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Setting<T> {
    /// Use the configured default
    #[default]
    Inherit,
    /// Suppress the configured default and emit nothing
    Off,
    /// Use this explicit value
    Set(T),
}

impl<T> Setting<T> {
    /// Resolve against the configured default
    pub fn resolve(self, default: Option<T>) -> Option<T> {
        match self {
            Setting::Inherit => default,
            Setting::Off => None,
            Setting::Set(value) => Some(value),
        }
    }
}

/// Manual crop window applied before resizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crop {
    /// Rectangle given as left/top and right/bottom corner coordinates
    Region {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },
    /// Preformatted crop segment passed through as-is
    Raw(String),
}

impl Crop {
    pub fn region(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Crop::Region {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Render the crop path segment
    ///
    /// A region whose right/bottom corner does not lie below and to the
    /// right of its left/top corner selects no pixels and is rejected.
    pub(crate) fn render(&self) -> Result<String, Error> {
        match self {
            Crop::Region {
                left,
                top,
                right,
                bottom,
            } => {
                if right <= left || bottom <= top {
                    return Err(Error::invalid_option(format!(
                        "crop region {}x{}:{}x{} selects no pixels",
                        left, top, right, bottom
                    )));
                }
                Ok(format!("{}x{}:{}x{}", left, top, right, bottom))
            }
            Crop::Raw(spec) => {
                if spec.is_empty() {
                    return Err(Error::invalid_option("crop string cannot be empty"));
                }
                Ok(spec.clone())
            }
        }
    }
}

/// Horizontal or vertical placement of a watermark overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkOffset {
    /// Center on this axis
    #[default]
    Center,
    /// Tile along this axis
    Repeat,
    /// Pixel offset from the top/left edge; negative counts from the
    /// opposite edge
    Pixels(i32),
}

impl fmt::Display for WatermarkOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Center => write!(f, "center"),
            Self::Repeat => write!(f, "repeat"),
            Self::Pixels(px) => write!(f, "{}", px),
        }
    }
}

/// Watermark overlay composited by the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct Watermark {
    /// URL of the overlay image
    pub url: String,
    /// Horizontal placement (default: center)
    pub x: WatermarkOffset,
    /// Vertical placement (default: center)
    pub y: WatermarkOffset,
    /// Overlay transparency 0-100 (default: 100)
    pub alpha: u8,
}

impl Watermark {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            x: WatermarkOffset::Center,
            y: WatermarkOffset::Center,
            alpha: 100,
        }
    }

    pub(crate) fn render(&self) -> String {
        format!("watermark({},{},{},{})", self.url, self.x, self.y, self.alpha)
    }
}

/// Transformation options for a single gateway URL
///
/// Construct with struct update syntax over [`Transformation::default`] (or
/// over a preset), setting only the fields a call cares about. Field
/// defaults mirror the gateway's own: zero dimensions mean "auto", and the
/// automatic format flags start enabled so configured auto-formats apply
/// unless a call opts out.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    // === Geometry ===
    /// Target width in pixels (0 = auto)
    pub width: u32,
    /// Target height in pixels (0 = auto)
    pub height: u32,
    /// Trim surrounding whitespace before any other operation
    pub trim: bool,
    /// Manual crop window
    pub crop: Option<Crop>,
    /// Fit mode; inherits the configured default
    pub fit: Setting<Fit>,
    /// Horizontal alignment within the crop window
    pub halign: Option<HAlign>,
    /// Vertical alignment within the crop window
    pub valign: Option<VAlign>,
    /// Content-aware smart cropping
    pub smart: bool,

    // === Encoding ===
    /// Output quality 1-100; inherits the configured default
    pub quality: Setting<u8>,
    /// Explicit output format; inherits the configured default
    pub format: Setting<ImageFormat>,
    /// Master switch for automatic format injection on this URL
    pub auto_format: bool,
    /// Allow automatic AVIF for this URL
    pub auto_avif: bool,
    /// Allow automatic WebP for this URL
    pub auto_webp: bool,

    // === Effects ===
    /// Gaussian blur radius
    pub blur: Option<f32>,
    /// Sharpen amount
    pub sharpen: Option<f32>,
    /// Brightness adjustment, -100 to 100
    pub brightness: Option<i32>,
    /// Contrast adjustment, -100 to 100
    pub contrast: Option<i32>,
    /// Saturation adjustment, -100 to 100
    pub saturation: Option<i32>,
    /// Convert to grayscale
    pub grayscale: bool,
    /// Fill color behind transparent sources (hex RGB or color name)
    pub background_color: Option<String>,
    /// Watermark overlay
    pub watermark: Option<Watermark>,
    /// Rounded corner radius in pixels
    pub round_corner: Option<u32>,

    // === Metadata ===
    /// Remove EXIF metadata
    pub strip_exif: bool,
    /// Remove the ICC profile
    pub strip_icc: bool,

    /// Raw filter chain appended verbatim after the generated filters
    pub raw_filters: Option<String>,
}

impl Transformation {
    /// Plain resize to the given box
    pub fn resize(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            trim: false,
            crop: None,
            fit: Setting::Inherit,
            halign: None,
            valign: None,
            smart: false,
            quality: Setting::Inherit,
            format: Setting::Inherit,
            auto_format: true,
            auto_avif: true,
            auto_webp: true,
            blur: None,
            sharpen: None,
            brightness: None,
            contrast: None,
            saturation: None,
            grayscale: false,
            background_color: None,
            watermark: None,
            round_corner: None,
            strip_exif: false,
            strip_icc: false,
            raw_filters: None,
        }
    }
}
