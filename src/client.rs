// Client facade
//
// One handle over both URL surfaces: gateway paths for transformed
// images and presigned storage URLs for the originals. Construction
// validates the gateway settings and, when storage credentials are
// present, wires up a presigner against the configured bucket.

use crate::config::{Config, StorageConfig};
use crate::constants::DEFAULT_SRCSET_WIDTHS;
use crate::error::Error;
use crate::imagor::options::{Fit, Setting, Transformation};
use crate::imagor::UrlBuilder;
use crate::s3::Presigner;

#[derive(Debug)]
pub struct Client {
    builder: UrlBuilder,
    presigner: Option<Presigner>,
    storage: StorageConfig,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let builder = UrlBuilder::new(&config.gateway)?;
        let presigner = if config.storage.is_configured() {
            Some(Presigner::new(&config.storage)?)
        } else {
            None
        };

        Ok(Client {
            builder,
            presigner,
            storage: config.storage.clone(),
        })
    }

    /// Full gateway URL for one transformed rendition of `source`
    pub fn url(&self, source: &str, transformation: &Transformation) -> Result<String, Error> {
        self.builder.build(source, transformation)
    }

    /// Comma-separated srcset attribute value covering several widths
    ///
    /// Every entry keeps the caller's filters but forces fit-in at the
    /// entry's width with a free height, so the browser picks purely by
    /// viewport width. An empty `widths` slice falls back to the stock
    /// ladder.
    pub fn srcset(
        &self,
        source: &str,
        transformation: &Transformation,
        widths: &[u32],
    ) -> Result<String, Error> {
        let widths = if widths.is_empty() {
            DEFAULT_SRCSET_WIDTHS
        } else {
            widths
        };

        let mut entries = Vec::with_capacity(widths.len());
        for &width in widths {
            let variant = Transformation {
                width,
                height: 0,
                fit: Setting::Set(Fit::FitIn),
                ..transformation.clone()
            };
            entries.push(format!("{} {}w", self.builder.build(source, &variant)?, width));
        }
        Ok(entries.join(", "))
    }

    /// Square thumbnail with smart cropping
    ///
    /// Fit is suppressed so the rendition fills the square instead of
    /// letterboxing into it.
    pub fn thumbnail(&self, source: &str, size: u32) -> Result<String, Error> {
        let transformation = Transformation {
            width: size,
            height: size,
            fit: Setting::Off,
            smart: true,
            ..Transformation::default()
        };
        self.builder.build(source, &transformation)
    }

    /// Cover image cropped to exact dimensions with smart cropping
    pub fn cover(&self, source: &str, width: u32, height: u32) -> Result<String, Error> {
        let transformation = Transformation {
            width,
            height,
            fit: Setting::Off,
            smart: true,
            ..Transformation::default()
        };
        self.builder.build(source, &transformation)
    }

    /// Presigned download URL for an object in the configured bucket
    ///
    /// `expires_in` overrides the configured lifetime for this one URL.
    pub fn presigned_url(&self, key: &str, expires_in: Option<u64>) -> Result<String, Error> {
        let presigner = self.require_presigner()?;
        let expires_in = expires_in.unwrap_or(self.storage.expires_in);
        Ok(presigner.presigned_get_url(&self.storage.bucket, key, expires_in))
    }

    /// Presigned upload URL for an object in the configured bucket
    pub fn presigned_upload_url(
        &self,
        key: &str,
        content_type: Option<&str>,
        expires_in: Option<u64>,
    ) -> Result<String, Error> {
        let presigner = self.require_presigner()?;
        let expires_in = expires_in.unwrap_or(self.storage.expires_in);
        Ok(presigner.presigned_put_url(&self.storage.bucket, key, content_type, expires_in))
    }

    fn require_presigner(&self) -> Result<&Presigner, Error> {
        self.presigner
            .as_ref()
            .ok_or_else(|| Error::config("storage is not configured"))
    }
}
