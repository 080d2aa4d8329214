// components/ytdl_args/src/types.rs
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of media a feed publishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Audio only, converted to mp3.
    Audio,
    /// mp4 video, preferring H.264 streams.
    #[default]
    Video,
    /// A caller supplied selector and file extension.
    Custom,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Audio => "audio",
            Format::Video => "video",
            Format::Custom => "custom",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audio" => Ok(Format::Audio),
            "video" => Ok(Format::Video),
            "custom" => Ok(Format::Custom),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Requested quality tier.
///
/// `Unspecified` picks the same tier as `High`, but only an explicit `High`
/// lets `max_height` cap the video resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    #[serde(rename = "", alias = "unspecified")]
    Unspecified,
    Low,
    High,
}

impl Quality {
    pub fn tier(&self) -> Tier {
        match self {
            Quality::Low => Tier::Worst,
            Quality::High | Quality::Unspecified => Tier::Best,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Unspecified => "",
            Quality::Low => "low",
            Quality::High => "high",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "unspecified" => Ok(Quality::Unspecified),
            "low" => Ok(Quality::Low),
            "high" => Ok(Quality::High),
            _ => Err(ParseError::UnknownQuality(s.to_string())),
        }
    }
}

/// Direction keyword that prefixes every format selector clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Best,
    Worst,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Best => "best",
            Tier::Worst => "worst",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selector and extension used verbatim when the feed format is `Custom`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFormat {
    /// Value passed to `--format`
    pub youtube_dl_format: String,

    /// Value passed to `--audio-format`
    pub extension: String,
}

impl CustomFormat {
    pub fn new(youtube_dl_format: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            youtube_dl_format: youtube_dl_format.into(),
            extension: extension.into(),
        }
    }
}

/// Download policy of a single feed, as handed over by the config provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub format: Format,

    pub quality: Quality,

    /// Only read when `format` is `Custom`
    pub custom_format: CustomFormat,

    /// Maximum video height in pixels, 0 means no cap
    pub max_height: u32,

    /// Extra downloader flags, passed through in order
    pub youtube_dl_args: Vec<String>,
}

/// The episode being downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub video_url: String,
}

impl Episode {
    pub fn new(video_url: impl Into<String>) -> Self {
        Self {
            video_url: video_url.into(),
        }
    }
}
