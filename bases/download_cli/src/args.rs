// bases/download_cli/src/args.rs
use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use ytdl_args::{CustomFormat, DownloadConfig, Format, Quality};

/// Print the downloader command line for a single episode
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Video URL of the episode
    pub url: String,

    /// Output path or template passed to the downloader
    #[arg(short, long)]
    pub output: String,

    /// Feed format: audio, video or custom
    #[arg(short, long, default_value = "video")]
    pub format: Format,

    /// Quality tier: high or low (unset picks the best tier without a height cap)
    #[arg(short, long)]
    pub quality: Option<Quality>,

    /// Maximum video height, only applied with --quality high
    #[arg(long, default_value_t = 0)]
    pub max_height: u32,

    /// Format selector used with --format custom
    #[arg(long)]
    pub custom_format: Option<String>,

    /// File extension used with --format custom
    #[arg(long)]
    pub custom_extension: Option<String>,

    /// Print the arguments as a JSON array instead of one per line
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra downloader arguments, given after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl Args {
    /// Assemble the feed download policy from the command line
    pub fn download_config(&self) -> Result<DownloadConfig> {
        let custom_format = match self.format {
            Format::Custom => {
                let selector = self
                    .custom_format
                    .clone()
                    .ok_or_else(|| eyre!("--format custom requires --custom-format"))?;
                let extension = self
                    .custom_extension
                    .clone()
                    .ok_or_else(|| eyre!("--format custom requires --custom-extension"))?;
                CustomFormat::new(selector, extension)
            }
            Format::Audio | Format::Video => CustomFormat::default(),
        };

        Ok(DownloadConfig {
            format: self.format,
            quality: self.quality.unwrap_or_default(),
            custom_format,
            max_height: self.max_height,
            youtube_dl_args: self.extra.clone(),
        })
    }
}
