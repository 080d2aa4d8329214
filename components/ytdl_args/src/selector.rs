// components/ytdl_args/src/selector.rs
use crate::types::{DownloadConfig, Quality, Tier};
use std::fmt;

/// A single stream pick such as `bestvideo[ext=mp4]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    base: String,
    filters: Vec<String>,
}

impl Clause {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            filters: Vec::new(),
        }
    }

    /// Append a bracketed filter
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Append `[height<=N]` when a cap is given, nothing otherwise
    pub fn max_height(self, cap: Option<u32>) -> Self {
        match cap {
            Some(height) => self.filter(format!("height<={height}")),
            None => self,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for filter in &self.filters {
            write!(f, "[{filter}]")?;
        }
        Ok(())
    }
}

/// Ordered fallback chain of alternatives.
///
/// Alternatives render joined with `/` and are tried left to right by the
/// downloader. Clauses inside one alternative are merged with `+`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Vec<Clause>>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alternative that merges the given clauses into one download
    pub fn or_merged(mut self, clauses: impl IntoIterator<Item = Clause>) -> Self {
        self.alternatives.push(clauses.into_iter().collect());
        self
    }

    /// Add an alternative made of a single clause
    pub fn or(self, clause: Clause) -> Self {
        self.or_merged([clause])
    }

    pub fn alternatives(&self) -> &[Vec<Clause>] {
        &self.alternatives
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            for (j, clause) in alternative.iter().enumerate() {
                if j > 0 {
                    f.write_str("+")?;
                }
                write!(f, "{clause}")?;
            }
        }
        Ok(())
    }
}

/// Resolution cap applied to the video selector.
///
/// Only an explicit `High` quality honours `max_height`; `Unspecified` and
/// `Low` ignore it even though `Unspecified` otherwise behaves like `High`.
pub fn height_cap(config: &DownloadConfig) -> Option<u32> {
    match config.quality {
        Quality::High if config.max_height > 0 => Some(config.max_height),
        Quality::High | Quality::Low | Quality::Unspecified => None,
    }
}

/// mp4 selector preferring separate H.264 video and m4a audio streams,
/// falling back to progressively looser single-file picks.
pub fn video_selector(tier: Tier, cap: Option<u32>) -> Selector {
    let h264 = |base: String| {
        Clause::new(base)
            .max_height(cap)
            .filter("ext=mp4")
            .filter("vcodec^=avc1")
    };

    Selector::new()
        .or_merged([
            h264(format!("{tier}video")),
            Clause::new(format!("{tier}audio")).filter("ext=m4a"),
        ])
        .or(h264(tier.to_string()))
        .or(Clause::new(tier.as_str()).filter("ext=mp4"))
        .or(Clause::new(tier.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn clause_renders_filters_in_order() {
        let clause = Clause::new("bestvideo")
            .filter("ext=mp4")
            .filter("vcodec^=avc1");
        assert_eq!(clause.to_string(), "bestvideo[ext=mp4][vcodec^=avc1]");
    }

    #[test]
    fn clause_without_cap_has_no_empty_brackets() {
        let clause = Clause::new("best").max_height(None);
        assert_eq!(clause.to_string(), "best");
    }

    #[test]
    fn selector_joins_merges_and_fallbacks() {
        let selector = Selector::new()
            .or_merged([Clause::new("a"), Clause::new("b")])
            .or(Clause::new("c"));
        assert_eq!(selector.to_string(), "a+b/c");
    }

    #[test]
    fn empty_selector_renders_empty() {
        assert_eq!(Selector::new().to_string(), "");
    }

    #[rstest]
    #[case(
        Tier::Best,
        None,
        "bestvideo[ext=mp4][vcodec^=avc1]+bestaudio[ext=m4a]/best[ext=mp4][vcodec^=avc1]/best[ext=mp4]/best"
    )]
    #[case(
        Tier::Worst,
        None,
        "worstvideo[ext=mp4][vcodec^=avc1]+worstaudio[ext=m4a]/worst[ext=mp4][vcodec^=avc1]/worst[ext=mp4]/worst"
    )]
    #[case(
        Tier::Best,
        Some(1024),
        "bestvideo[height<=1024][ext=mp4][vcodec^=avc1]+bestaudio[ext=m4a]/best[height<=1024][ext=mp4][vcodec^=avc1]/best[ext=mp4]/best"
    )]
    fn video_selector_renders(#[case] tier: Tier, #[case] cap: Option<u32>, #[case] expected: &str) {
        assert_eq!(video_selector(tier, cap).to_string(), expected);
    }

    #[test]
    fn video_selector_has_four_alternatives() {
        let selector = video_selector(Tier::Best, Some(480));
        let sizes: Vec<_> = selector.alternatives().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 1, 1, 1]);
    }

    #[test]
    fn height_filter_only_lands_in_h264_clauses() {
        let selector = video_selector(Tier::Best, Some(720));
        let rendered = selector.to_string();
        assert_eq!(rendered.matches("height<=720").count(), 2);

        for clause in selector.alternatives().iter().flatten() {
            let text = clause.to_string();
            assert_eq!(
                text.contains("height<="),
                text.contains("vcodec^=avc1"),
                "clause '{}' has a height filter without an H.264 filter or vice versa",
                text
            );
        }
    }

    #[rstest]
    #[case(Quality::High, 1080, Some(1080))]
    #[case(Quality::High, 0, None)]
    #[case(Quality::Unspecified, 720, None)]
    #[case(Quality::Low, 720, None)]
    fn height_cap_requires_explicit_high(
        #[case] quality: Quality,
        #[case] max_height: u32,
        #[case] expected: Option<u32>,
    ) {
        let config = DownloadConfig {
            quality,
            max_height,
            ..Default::default()
        };
        assert_eq!(height_cap(&config), expected);
    }
}
