// Gateway URL building module
//
// Turns a source URL plus transformation options into the canonical path the
// image gateway parses, and signs that path into a shareable URL. Segment and
// filter order is fixed: identical option sets always render byte-identical
// paths, so signed URLs stay stable across processes and cache correctly on
// the receiving side.

pub mod options;
pub mod presets;
pub mod signer;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::constants::{QUALITY_NOOP, UNSAFE_MARKER};
use crate::error::Error;
use options::{Fit, ImageFormat, Transformation};
use signer::{PathSigner, SignerType};

/// Builds canonical transformation paths and signs them into full URLs
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    host: String,
    signer: Option<PathSigner>,
    default_fit: Option<Fit>,
    default_quality: Option<u8>,
    default_format: Option<ImageFormat>,
    auto_webp: bool,
    auto_avif: bool,
}

impl UrlBuilder {
    /// Create a builder from a validated gateway configuration
    ///
    /// In unsafe mode no signer is constructed and [`UrlBuilder::build`]
    /// never touches the digest algorithm.
    pub fn new(config: &GatewayConfig) -> Result<Self, Error> {
        config.validate()?;

        let signer = if config.unsafe_mode {
            None
        } else {
            let signer_type = config.signer_type.parse::<SignerType>()?;
            Some(PathSigner::new(
                config.secret.as_bytes().to_vec(),
                signer_type,
                config.signer_truncate,
            ))
        };

        Ok(Self {
            host: config.host.trim_end_matches('/').to_string(),
            signer,
            // Unknown default fit/format strings are dropped, not errors,
            // matching how per-call values outside the closed enums are
            // impossible to express in the first place.
            default_fit: config
                .default_fit
                .as_deref()
                .and_then(|s| s.parse::<Fit>().ok()),
            default_quality: config.default_quality,
            default_format: config
                .default_format
                .as_deref()
                .and_then(|s| s.parse::<ImageFormat>().ok()),
            auto_webp: config.auto_webp,
            auto_avif: config.auto_avif,
        })
    }

    /// Build the canonical transformation path for a source URL
    ///
    /// The only failure is a malformed crop; every other out-of-range value
    /// is unrepresentable or silently dropped.
    pub fn build_path(&self, source: &str, t: &Transformation) -> Result<String, Error> {
        let mut parts: Vec<String> = Vec::new();

        if t.trim {
            parts.push("trim".to_string());
        }

        if let Some(crop) = &t.crop {
            parts.push(crop.render()?);
        }

        if let Some(fit) = t.fit.resolve(self.default_fit) {
            parts.push(fit.as_str().to_string());
        }

        parts.push(format!("{}x{}", t.width, t.height));

        if let Some(halign) = t.halign {
            parts.push(halign.as_str().to_string());
        }

        if let Some(valign) = t.valign {
            parts.push(valign.as_str().to_string());
        }

        if t.smart {
            parts.push("smart".to_string());
        }

        let filters = self.build_filters(t);
        if !filters.is_empty() {
            parts.push(format!("filters:{}", filters.join(":")));
        }

        parts.push(URL_SAFE_NO_PAD.encode(source.as_bytes()));

        Ok(format!("/{}", parts.join("/")))
    }

    /// Build a complete gateway URL: signature (or the unsafe marker)
    /// followed by the canonical path
    pub fn build(&self, source: &str, t: &Transformation) -> Result<String, Error> {
        let path = self.build_path(source, t)?;

        let url = match &self.signer {
            Some(signer) => format!("{}/{}{}", self.host, signer.sign(&path), path),
            None => format!("{}/{}{}", self.host, UNSAFE_MARKER, path),
        };

        debug!(source = %source, signed = self.signer.is_some(), "built gateway url");
        Ok(url)
    }

    /// Filter chain in its fixed emission order
    fn build_filters(&self, t: &Transformation) -> Vec<String> {
        let mut filters = Vec::new();

        // Quality 100 means "leave the source alone" and is never emitted.
        if let Some(quality) = t.quality.resolve(self.default_quality) {
            if quality != QUALITY_NOOP {
                filters.push(format!("quality({})", quality));
            }
        }

        if let Some(format) = t.format.resolve(self.default_format) {
            filters.push(format!("format({})", format.as_str()));
        }

        // AVIF wins over WebP when both are enabled; a per-call opt-out of
        // AVIF falls back to WebP rather than disabling auto-format.
        if t.auto_format {
            if self.auto_avif && t.auto_avif {
                filters.push("format(avif)".to_string());
            } else if self.auto_webp && t.auto_webp {
                filters.push("format(webp)".to_string());
            }
        }

        if let Some(blur) = t.blur {
            filters.push(format!("blur({})", blur));
        }
        if let Some(sharpen) = t.sharpen {
            filters.push(format!("sharpen({})", sharpen));
        }
        if let Some(brightness) = t.brightness {
            filters.push(format!("brightness({})", brightness));
        }
        if let Some(contrast) = t.contrast {
            filters.push(format!("contrast({})", contrast));
        }
        if let Some(saturation) = t.saturation {
            filters.push(format!("saturation({})", saturation));
        }
        if t.grayscale {
            filters.push("grayscale()".to_string());
        }
        if let Some(color) = &t.background_color {
            filters.push(format!("background_color({})", color));
        }
        if let Some(watermark) = &t.watermark {
            filters.push(watermark.render());
        }
        if let Some(radius) = t.round_corner {
            filters.push(format!("round_corner({})", radius));
        }
        if t.strip_exif {
            filters.push("strip_exif()".to_string());
        }
        if t.strip_icc {
            filters.push("strip_icc()".to_string());
        }
        if let Some(raw) = &t.raw_filters {
            filters.push(raw.clone());
        }

        filters
    }
}
