// bases/download_cli/src/output.rs
use color_eyre::Result;

pub struct OutputHandler {
    json: bool,
    verbose: bool,
}

impl OutputHandler {
    pub fn new(json: bool, verbose: bool) -> Self {
        Self { json, verbose }
    }

    pub fn render(&self, args: &[String]) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string(args)?)
        } else {
            Ok(args.join("\n"))
        }
    }

    pub fn print_args(&self, args: &[String]) -> Result<()> {
        println!("{}", self.render(args)?);
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
