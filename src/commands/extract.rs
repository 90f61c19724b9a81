use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Result;
use is_terminal::IsTerminal;

use romex::config::{load_or_default, Config};
use romex::domain::ports::{ExtractEventSink, SelectionPrompt};
use romex::domain::services::{AssetLayout, FingerprintRegistry, PlanBuilder, PlanRequest};
use romex::infrastructure::{
    CommandRunner, ConsoleEventSink, ConsoleStyle, ExecutableSource, ExtractorLocator,
    ImageProber, JsonEventSink, LinePrompt, TerminalPrompt,
};
use romex::{ExtractMode, ExtractOptions, ExtractUseCase};

use crate::cli::Cli;
use crate::ui::output::{print_config_warnings, print_config_warnings_json};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Run one extraction. `Ok(false)` means at least one image failed.
pub fn cmd_extract(cli: &Cli) -> Result<bool> {
    let cwd = std::env::current_dir()?;
    let loaded = load_or_default(cli.config.as_deref(), &cwd)?;
    if cli.json {
        print_config_warnings_json(&loaded.warnings);
    } else if let Some(source) = &loaded.source {
        print_config_warnings(source, &loaded.warnings);
    }
    let config = loaded.config;

    let mode = ExtractMode::from_flags(cli.gen_headers, cli.norom)?;
    let request = plan_request(cli, &config, mode);

    let explicit = cli.zapd.clone().or_else(|| config.extractor.path.clone());
    let executable = ExtractorLocator::default().resolve(explicit.as_deref());
    if cli.verbose && !cli.json && executable.source == ExecutableSource::Fallback {
        eprintln!(
            "No extractor found in the usual build locations, trying {}",
            executable.path.display()
        );
    }

    let layout = AssetLayout::default()
        .with_xml_root(cli.xml_root.clone().unwrap_or(config.extractor.xml_root))
        .with_extractor_dir(config.extractor.assets_dir);
    let planner = PlanBuilder::new(executable.path, layout);

    let registry = FingerprintRegistry::builtin()?;
    let prober = ImageProber::new(registry).with_content_hash(cli.verbose);

    let search_dir: PathBuf = cli
        .search_dir
        .clone()
        .unwrap_or(config.discovery.search_dir);
    let mut options = ExtractOptions::new(request)
        .with_search_dir(search_dir)
        .with_interactive(!cli.non_interactive)
        .with_all(cli.all)
        .with_verbose(cli.verbose)
        .with_dry_run(cli.dry_run);
    if let Some(rom) = &cli.rom {
        options = options.with_rom(rom);
    }

    let caps = detect_capabilities();
    let sink: Box<dyn ExtractEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ConsoleStyle {
            verbose: cli.verbose,
            color: caps.supports_color,
            unicode: caps.supports_unicode,
        }))
    };
    let mut prompt = selection_prompt(cli, &caps);

    let use_case = ExtractUseCase::new(prober, planner, CommandRunner::new().quiet(cli.json));
    let result = use_case.execute(&options, prompt.as_mut(), sink.as_ref())?;

    Ok(result.is_success())
}

fn plan_request(cli: &Cli, config: &Config, mode: ExtractMode) -> PlanRequest {
    let archive = &config.archive;
    PlanRequest {
        mode,
        custom_assets_path: cli
            .custom_assets_path
            .clone()
            .or_else(|| archive.custom_assets_path.clone()),
        custom_otr_file: cli
            .custom_otr_file
            .clone()
            .or_else(|| archive.custom_otr_file.clone()),
        otr_file: cli.otr_file.clone().or_else(|| archive.otr_file.clone()),
        port_version: cli
            .port_ver
            .clone()
            .or_else(|| archive.port_version.clone()),
    }
}

/// Dialoguer on a real terminal, plain line reading otherwise.
///
/// Prompt text goes to stderr under `--json` so stdout stays NDJSON.
fn selection_prompt(cli: &Cli, caps: &TerminalCapabilities) -> Box<dyn SelectionPrompt> {
    let interactive_tty = io::stdin().is_terminal() && io::stderr().is_terminal();
    if wants_terminal_prompt(cli.json, caps, interactive_tty) {
        return Box::new(TerminalPrompt::new(cli.verbose));
    }
    let output: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    Box::new(LinePrompt::new(BufReader::new(io::stdin()), output).verbose(cli.verbose))
}

/// CI runners often allocate a pseudo-terminal nobody answers; read lines there.
fn wants_terminal_prompt(json: bool, caps: &TerminalCapabilities, interactive_tty: bool) -> bool {
    !json && !caps.is_ci && interactive_tty
}
