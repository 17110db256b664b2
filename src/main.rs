use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shirube::client::Client;
use shirube::config::Config;
use shirube::imagor::options::{ImageFormat, Setting, Transformation};

/// Shirube - deterministic signed URLs for image gateways and S3 stores
#[derive(Parser, Debug)]
#[command(name = "shirube")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file; falls back to environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a signed gateway URL for one source image
    Url {
        /// Source image URL or storage path
        source: String,

        /// Target width in pixels (0 keeps the aspect ratio)
        #[arg(long, default_value_t = 0)]
        width: u32,

        /// Target height in pixels (0 keeps the aspect ratio)
        #[arg(long, default_value_t = 0)]
        height: u32,

        /// Crop around detected focal points
        #[arg(long)]
        smart: bool,

        /// Convert to grayscale
        #[arg(long)]
        grayscale: bool,

        /// Gaussian blur radius
        #[arg(long)]
        blur: Option<f32>,

        /// Output quality, 1-100
        #[arg(long)]
        quality: Option<u8>,

        /// Output format: jpeg, png, webp, avif or gif
        #[arg(long)]
        format: Option<String>,
    },

    /// Build a srcset attribute value across several widths
    Srcset {
        /// Source image URL or storage path
        source: String,

        /// Widths to generate, e.g. --widths 320,640,1280
        #[arg(long, value_delimiter = ',')]
        widths: Vec<u32>,
    },

    /// Presign a storage URL for an object in the configured bucket
    Presign {
        /// Object key inside the bucket
        key: String,

        /// Sign a PUT for uploading instead of a GET
        #[arg(long)]
        upload: bool,

        /// Content type to pin into an upload signature
        #[arg(long)]
        content_type: Option<String>,

        /// Lifetime in seconds, overriding the configured default
        #[arg(long)]
        expires_in: Option<u64>,
    },

    /// Load and validate the configuration, then exit
    Check,
}

fn main() {
    // Parse first so --json-logs can shape the subscriber
    let args = Args::parse();

    shirube::logging::init_subscriber(args.json_logs)
        .expect("Failed to initialize logging subsystem");

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Config::from_env(),
    };

    tracing::info!(
        gateway_host = %config.gateway.host,
        signer_type = %config.gateway.signer_type,
        unsafe_mode = config.gateway.unsafe_mode,
        storage_configured = config.storage.is_configured(),
        "configuration loaded"
    );

    match args.command {
        Command::Url {
            source,
            width,
            height,
            smart,
            grayscale,
            blur,
            quality,
            format,
        } => {
            let client = Client::new(&config)?;

            let mut transformation = Transformation::resize(width, height);
            transformation.smart = smart;
            transformation.grayscale = grayscale;
            transformation.blur = blur;
            if let Some(quality) = quality {
                transformation.quality = Setting::Set(quality);
            }
            if let Some(format) = format {
                let format: ImageFormat = format.parse()?;
                transformation.format = Setting::Set(format);
            }

            println!("{}", client.url(&source, &transformation)?);
        }

        Command::Srcset { source, widths } => {
            let client = Client::new(&config)?;
            println!(
                "{}",
                client.srcset(&source, &Transformation::default(), &widths)?
            );
        }

        Command::Presign {
            key,
            upload,
            content_type,
            expires_in,
        } => {
            let client = Client::new(&config)?;
            let url = if upload {
                client.presigned_upload_url(&key, content_type.as_deref(), expires_in)?
            } else {
                client.presigned_url(&key, expires_in)?
            };
            println!("{}", url);
        }

        Command::Check => {
            config.validate().context("configuration invalid")?;
            println!("configuration ok");
        }
    }

    Ok(())
}
