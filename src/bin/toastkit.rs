use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use toastkit::{ColorSpec, Engine, Preset, ToastOptions, ToastOutcome, Toaster};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "toastkit", version, allow_negative_numbers = true)]
/// Show a transient toast notification through the rendering engine.
struct Cli {
    /// Message text; multiple words are joined with spaces.
    #[arg(required = true)]
    message: Vec<String>,

    /// Style preset (success, error, warning, info).
    #[arg(long)]
    preset: Option<Preset>,

    /// JSON file with toast options; flags given here take precedence.
    #[arg(long = "options")]
    options_path: Option<PathBuf>,

    /// Rendering engine executable (defaults to $TOASTKIT_ENGINE, then toast-hud on PATH).
    #[arg(long)]
    engine: Option<PathBuf>,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Background color, #RRGGBB or #RRGGBBAA.
    #[arg(long)]
    bg: Option<String>,

    /// Text color, #RRGGBB or #RRGGBBAA.
    #[arg(long)]
    text_color: Option<String>,

    /// Anchor: top-right, top-left, bottom-right, bottom-left or center.
    #[arg(long, conflicts_with = "x")]
    position: Option<String>,

    /// Explicit x coordinate (requires --y).
    #[arg(long, requires = "y")]
    x: Option<f64>,

    /// Explicit y coordinate (requires --x).
    #[arg(long, requires = "x")]
    y: Option<f64>,

    #[arg(long)]
    font_size: Option<f64>,

    #[arg(long)]
    corner_radius: Option<f64>,

    /// Seconds the toast stays fully visible.
    #[arg(long)]
    display_duration: Option<f64>,

    #[arg(long)]
    fade_in_duration: Option<f64>,

    #[arg(long)]
    fade_out_duration: Option<f64>,

    /// normal, floating, status, modal, max or screensaver.
    #[arg(long)]
    window_level: Option<String>,

    /// Symbolic icon name, resolved by the engine.
    #[arg(long)]
    icon: Option<String>,

    /// Bundled sound name or absolute path to a sound file.
    #[arg(long)]
    sound: Option<String>,

    #[arg(long, conflicts_with = "no_click_to_dismiss")]
    click_to_dismiss: bool,

    #[arg(long)]
    no_click_to_dismiss: bool,

    /// Size the toast from its content.
    #[arg(long)]
    auto_size: bool,

    #[arg(long)]
    min_width: Option<f64>,

    #[arg(long)]
    max_width: Option<f64>,

    /// Return as soon as the engine is spawned.
    #[arg(long)]
    no_wait: bool,

    /// Fail when the engine exits non-zero.
    #[arg(long)]
    check: bool,

    /// Print the engine command line and exit without spawning it.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn flag_options(&self) -> ToastOptions {
        let click_to_dismiss = if self.click_to_dismiss {
            Some(true)
        } else if self.no_click_to_dismiss {
            Some(false)
        } else {
            None
        };

        ToastOptions {
            preset: self.preset,
            width: self.width,
            height: self.height,
            bg: self.bg.clone().map(ColorSpec::from),
            text_color: self.text_color.clone().map(ColorSpec::from),
            position: match (self.x, self.y, &self.position) {
                (Some(x), Some(y), _) => Some((x, y).into()),
                (_, _, Some(tag)) => Some(tag.as_str().into()),
                _ => None,
            },
            font_size: self.font_size,
            corner_radius: self.corner_radius,
            display_duration: self.display_duration,
            fade_in_duration: self.fade_in_duration,
            fade_out_duration: self.fade_out_duration,
            window_level: self.window_level.as_deref().map(Into::into),
            icon: self.icon.clone(),
            click_to_dismiss,
            sound: self.sound.clone().map(Into::into),
            auto_size: self.auto_size.then_some(true),
            min_width: self.min_width,
            max_width: self.max_width,
            blocking: self.no_wait.then_some(false),
            check: self.check.then_some(true),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file_options = match &cli.options_path {
        Some(path) => ToastOptions::load(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => ToastOptions::default(),
    };
    let options = cli.flag_options().merged_over(file_options);
    let message = cli.message.join(" ");

    let engine = match &cli.engine {
        Some(path) => Engine::new(path),
        None => Engine::from_env(),
    };
    let mut toaster = Toaster::new(engine);

    if cli.dry_run {
        let toast = toaster.prepare(&message, &options)?;
        let cmd = toaster.engine().command(&toast.config);
        let mut line = cmd.get_program().to_string_lossy().into_owned();
        for arg in cmd.get_args() {
            line.push(' ');
            line.push_str(&format!("{:?}", arg.to_string_lossy()));
        }
        println!("{line}");
        return Ok(ExitCode::SUCCESS);
    }

    match toaster.show(&message, &options)? {
        ToastOutcome::Completed(done) => {
            if !done.stderr.is_empty() {
                eprintln!("{}", done.stderr);
            }
            Ok(done
                .code()
                .map(|c| ExitCode::from(c.clamp(0, 255) as u8))
                .unwrap_or(ExitCode::FAILURE))
        }
        ToastOutcome::Running(handle) => {
            eprintln!("toast running as pid {}", handle.id());
            Ok(ExitCode::SUCCESS)
        }
    }
}
