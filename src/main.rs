//! imagegen - generate images from a text prompt and show them in the terminal

use clap::Parser;
use openai_imagegen::auth::DEFAULT_KEY_FILE;
use openai_imagegen::client::parse_base_url;
use openai_imagegen::pipeline::ensure_output_dir;
use openai_imagegen::prelude::*;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "imagegen")]
#[command(author, version, about = "Generate images with the OpenAI image API", long_about = None)]
struct Cli {
    /// File holding the API key
    #[arg(long, env = "OPENAI_API_KEY_FILE", default_value = DEFAULT_KEY_FILE)]
    key_file: PathBuf,

    /// Image description (skips the prompt)
    #[arg(long)]
    prompt: Option<String>,

    /// Number of images, 1-10 (skips the prompt)
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// 256x256, 512x512 or 1024x1024 (skips the prompt)
    #[arg(short, long)]
    size: Option<String>,

    /// Directory receiving image_<i>.png
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Save images without drawing them
    #[arg(long)]
    no_display: bool,

    /// Wait for Enter after each displayed image
    #[arg(long, conflicts_with = "no_display")]
    pause: bool,

    /// Give up after this many invalid answers to one question
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// API base URL (overrides OPENAI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> ImageGenResult<ImageGenConfig> {
        let mut config = ImageGenConfig::from_key_file(&self.key_file)?.apply_env()?;

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(parse_base_url(base_url)?);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        ensure_output_dir(&self.output_dir)?;

        config.validate()?;
        Ok(config)
    }

    fn presets(&self) -> Presets {
        Presets {
            prompt: self.prompt.clone(),
            count: self.count,
            size: self.size.clone(),
        }
    }

    fn renderer(&self) -> Box<dyn Renderer> {
        if self.no_display {
            Box::new(NullRenderer)
        } else {
            Box::new(TerminalRenderer::stdout().with_pause(self.pause))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "openai_imagegen=debug,imagegen=debug"
    } else {
        "openai_imagegen=info,imagegen=info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: &Cli) -> ImageGenResult<Vec<PathBuf>> {
    let config = cli.config()?;
    let client = ImageGenClientBuilder::new().with_config(config).build()?;

    let params = {
        let mut collector = ParameterCollector::new(io::stdin().lock(), io::stdout())
            .with_max_attempts(cli.max_attempts);
        collector.collect(&cli.presets())?
    };
    info!(count = params.count, size = %params.size, "Requesting images");

    let response = client.images().generate(params.into_request()).await?;
    let urls = response.urls()?;

    let pipeline = FetchAndRender::new(client.transport(), &cli.output_dir);
    let mut renderer = cli.renderer();
    pipeline.run(&urls, renderer.as_mut()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(paths) => {
            info!(saved = paths.len(), "Done");
            ExitCode::SUCCESS
        }
        Err(ImageGenError::Cancelled) => ExitCode::from(130),
        Err(e) => {
            error!(error = %e, "imagegen failed");
            ExitCode::FAILURE
        }
    }
}
