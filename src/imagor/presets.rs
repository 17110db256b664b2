//! Named transformation presets
//!
//! Ready-made [`Transformation`] values for the usual cases. Combine them
//! with struct update syntax, overriding only the fields a call cares about
//! (later fields win, like merging option sets):
//!
//! ```
//! use shirube::imagor::options::Transformation;
//! use shirube::imagor::presets;
//!
//! let t = Transformation {
//!     grayscale: true,
//!     ..presets::social_facebook()
//! };
//! assert_eq!(t.width, 1200);
//! ```

use crate::imagor::options::{ImageFormat, Setting, Transformation};

/// Square or rectangular smart crop with the default fit suppressed, the
/// shape shared by every social/thumbnail/avatar preset
fn smart_box(width: u32, height: u32) -> Transformation {
    Transformation {
        width,
        height,
        fit: Setting::Off,
        smart: true,
        ..Default::default()
    }
}

fn with_quality(quality: u8) -> Transformation {
    Transformation {
        quality: Setting::Set(quality),
        ..Default::default()
    }
}

fn with_format(format: ImageFormat) -> Transformation {
    Transformation {
        format: Setting::Set(format),
        ..Default::default()
    }
}

// =============================================================================
// Quality tiers
// =============================================================================

pub fn quality_low() -> Transformation {
    with_quality(60)
}

pub fn quality_medium() -> Transformation {
    with_quality(75)
}

pub fn quality_high() -> Transformation {
    with_quality(85)
}

/// Lossless tier; renders no quality filter at all
pub fn quality_lossless() -> Transformation {
    with_quality(100)
}

// =============================================================================
// Formats
// =============================================================================

pub fn format_webp() -> Transformation {
    with_format(ImageFormat::Webp)
}

pub fn format_avif() -> Transformation {
    with_format(ImageFormat::Avif)
}

pub fn format_jpeg() -> Transformation {
    with_format(ImageFormat::Jpeg)
}

pub fn format_png() -> Transformation {
    with_format(ImageFormat::Png)
}

// =============================================================================
// Effects
// =============================================================================

pub fn grayscale() -> Transformation {
    Transformation {
        grayscale: true,
        ..Default::default()
    }
}

pub fn blur_light() -> Transformation {
    Transformation {
        blur: Some(2.0),
        ..Default::default()
    }
}

pub fn blur_medium() -> Transformation {
    Transformation {
        blur: Some(5.0),
        ..Default::default()
    }
}

pub fn blur_heavy() -> Transformation {
    Transformation {
        blur: Some(10.0),
        ..Default::default()
    }
}

pub fn sharpen() -> Transformation {
    Transformation {
        sharpen: Some(1.0),
        ..Default::default()
    }
}

// =============================================================================
// Social card sizes
// =============================================================================

pub fn social_facebook() -> Transformation {
    smart_box(1200, 630)
}

pub fn social_twitter() -> Transformation {
    smart_box(1200, 675)
}

pub fn social_instagram() -> Transformation {
    smart_box(1080, 1080)
}

pub fn social_linkedin() -> Transformation {
    smart_box(1200, 627)
}

// =============================================================================
// Thumbnails and avatars
// =============================================================================

pub fn thumb_small() -> Transformation {
    smart_box(50, 50)
}

pub fn thumb_medium() -> Transformation {
    smart_box(100, 100)
}

pub fn thumb_large() -> Transformation {
    smart_box(200, 200)
}

pub fn avatar_xs() -> Transformation {
    smart_box(32, 32)
}

pub fn avatar_sm() -> Transformation {
    smart_box(48, 48)
}

pub fn avatar_md() -> Transformation {
    smart_box(64, 64)
}

pub fn avatar_lg() -> Transformation {
    smart_box(96, 96)
}

pub fn avatar_xl() -> Transformation {
    smart_box(128, 128)
}

// =============================================================================
// Composite presets
// =============================================================================

/// Sensible web delivery defaults: quality 80, WebP, metadata stripped
pub fn web_optimized() -> Transformation {
    Transformation {
        quality: Setting::Set(80),
        format: Setting::Set(ImageFormat::Webp),
        strip_exif: true,
        strip_icc: true,
        ..Default::default()
    }
}

/// High-DPI variant: lower quality compensates for the doubled pixel count
pub fn retina_2x() -> Transformation {
    Transformation {
        quality: Setting::Set(75),
        format: Setting::Set(ImageFormat::Webp),
        ..Default::default()
    }
}
