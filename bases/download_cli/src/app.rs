// bases/download_cli/src/app.rs
use crate::args::Args;
use crate::output::OutputHandler;
use color_eyre::Result;
use ytdl_args::{build_args, Episode};

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        let output = OutputHandler::new(args.json, args.verbose);
        Self { args, output }
    }

    /// Downloader arguments for the episode named on the command line
    pub fn downloader_args(&self) -> Result<Vec<String>> {
        let config = self.args.download_config()?;
        let episode = Episode::new(&self.args.url);

        tracing::info!(
            "Rendering {} download of {} (quality '{}', max height {})",
            config.format,
            episode.video_url,
            config.quality,
            config.max_height
        );

        Ok(build_args(&config, &episode, &self.args.output))
    }

    pub fn run(&self) -> Result<()> {
        let args = self.downloader_args()?;
        self.output.print_args(&args)
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
