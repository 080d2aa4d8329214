// components/ytdl_args/src/args.rs
use crate::selector::{height_cap, video_selector};
use crate::types::{DownloadConfig, Episode, Format};

/// Build the downloader command line for one episode.
///
/// The result starts with the format specific flags, followed by the feed's
/// extra arguments, sponsor segment removal, the output template and finally
/// the video URL.
pub fn build_args(config: &DownloadConfig, episode: &Episode, output: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();

    match config.format {
        Format::Audio => {
            args.extend(["--extract-audio", "--audio-format", "mp3"].map(String::from));
            args.extend([
                "--format".to_string(),
                format!("{}audio", config.quality.tier()),
            ]);
        }
        Format::Video => {
            let selector = video_selector(config.quality.tier(), height_cap(config));
            args.extend(["--format".to_string(), selector.to_string()]);
        }
        Format::Custom => {
            args.extend([
                "--audio-format".to_string(),
                config.custom_format.extension.clone(),
                "--format".to_string(),
                config.custom_format.youtube_dl_format.clone(),
            ]);
        }
    }

    args.extend(config.youtube_dl_args.iter().cloned());

    args.extend(["--sponsorblock-remove", "all"].map(String::from));
    args.extend(["--output".to_string(), output.to_string()]);
    args.push(episode.video_url.clone());

    tracing::debug!(
        "Built {} downloader arguments for {} ({} format)",
        args.len(),
        episode.video_url,
        config.format
    );

    args
}
