//! SkillBridge CLI entry point

use std::process::ExitCode;

use clap::Parser;

use skillbridge::cli::{
    app::{load_merged_config, run_analyze, EXIT_ERROR},
    args::{AnalyzeOptions, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use skillbridge::domain::config::AppConfig;
use skillbridge::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        analysis_model: cli.analysis_model.clone(),
        vision_model: cli.vision_model.clone(),
        camera_index: cli.camera_index,
        clipboard: if cli.clipboard { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    let options = AnalyzeOptions {
        text: cli.text,
        scan: cli.scan,
        image: cli.image,
        flash: cli.flash,
        zoom: cli.zoom,
        camera_index: config.camera_index_or_default(),
        clipboard: config.clipboard_or_default(),
        json: cli.json,
        analysis_model: config.analysis_model_or_default().to_string(),
        vision_model: config.vision_model_or_default().to_string(),
    };

    run_analyze(options).await
}
