use anyhow::{Context, Result};
use console::Term;
use tokio::sync::mpsc;
use tracing_subscriber::FmtSubscriber;
use walkthrough::cli::commands::{
    build_script, load_config, PlayCommand, RunCommand, StepsCommand, ValidateCommand,
};
use walkthrough::cli::output::*;
use walkthrough::cli::{Cli, Command};
use walkthrough::control::{spawn_key_reader, Keymap, SpeedSlider};
use walkthrough::surface::{PlainSurface, TerminalSurface};
use walkthrough::{ControlInput, Controller, Walkthrough};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stderr keeps log lines out of the redrawn screen
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Play(cmd) => play(cmd).await?,
        Command::Run(cmd) => run(cmd).await?,
        Command::Validate(cmd) => validate(cmd)?,
        Command::Steps(cmd) => list_steps(cmd)?,
    }

    Ok(())
}

async fn play(cmd: &PlayCommand) -> Result<()> {
    let config = load_config(cmd.file.as_deref()).context("Failed to load script")?;
    let script = build_script(&config, cmd.speed);

    let term = Term::stdout();
    if !term.is_term() {
        anyhow::bail!("`play` needs an interactive terminal; use `run` instead");
    }

    let playback = *script.playback();
    let keymap = Keymap::new(
        SpeedSlider::new(playback.speed, playback.interval_ms),
        script.len(),
    );

    let surface = TerminalSurface::new(&script);
    surface.enter().context("Failed to prepare terminal")?;

    let (controller, timers) = Controller::new(script, surface);
    let mut walkthrough = Walkthrough::new(controller, timers);

    let (sender, inputs) = mpsc::channel(32);
    if cmd.autoplay {
        sender
            .send(ControlInput::ToggleAutoPlay)
            .await
            .context("Failed to queue auto-play")?;
    }
    let reader = spawn_key_reader(term.clone(), keymap, sender);

    walkthrough.run(inputs).await;
    reader.await.context("Key reader failed")?;

    drop(walkthrough);
    term.clear_screen()?;
    println!("{} Walkthrough finished", CHECK);
    Ok(())
}

async fn run(cmd: &RunCommand) -> Result<()> {
    let config = load_config(cmd.file.as_deref()).context("Failed to load script")?;
    let script = build_script(&config, cmd.speed);

    println!(
        "{} Playing {} ({} steps, {}ms per step)",
        ROCKET,
        style(script.name()).bold(),
        style(script.len()).cyan(),
        script.playback().interval_ms
    );

    let surface = PlainSurface::new(&script);
    let (controller, timers) = Controller::new(script, surface);
    let mut walkthrough = Walkthrough::new(controller, timers);
    walkthrough.run_to_end().await;

    let surface = walkthrough.into_controller().into_surface();
    surface.finish();
    println!("{} Walkthrough complete", CHECK);
    Ok(())
}

fn validate(cmd: &ValidateCommand) -> Result<()> {
    println!("{} Validating script...", INFO);

    match load_config(Some(&cmd.file)) {
        Ok(config) => {
            println!("{} Script is valid!", CHECK);
            println!("{}", format_script_summary(&config));

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(e).red());
            std::process::exit(1);
        }
    }
}

fn list_steps(cmd: &StepsCommand) -> Result<()> {
    let config = load_config(cmd.file.as_deref()).context("Failed to load script")?;
    let script = config.to_script();

    if cmd.json {
        let data = serde_json::json!({
            "name": script.name(),
            "steps": script.steps(),
        });
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!(
        "{} {} ({} steps)",
        INFO,
        style(script.name()).bold(),
        style(script.len()).cyan()
    );
    for (index, step) in script.steps().iter().enumerate() {
        println!("{}", format_step(index, step));
    }
    Ok(())
}
