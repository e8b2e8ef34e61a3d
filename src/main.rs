mod app;
mod args;
mod logging;
mod terminal;

use args::Args;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use vselect::config::{DemoConfig, default_config_path, load_config, load_options};
use vselect::select::DelayedLoader;
use vselect::{SelectOption, VirtualizedSelect, VirtualizedSelectProps};

fn run_with_args(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = args.log_file.as_deref() {
        logging::init_logging(path)?;
    }
    let cfg = config_from_args(&args)?;
    let props = props_from_config(&args, &cfg)?;
    let mut select = VirtualizedSelect::new(props);
    tracing::info!(component = select.component().name(), "demo started");
    app::run(&mut select)?;
    println!("{}", serde_json::to_string(select.value())?);
    Ok(())
}

fn config_from_args(args: &Args) -> Result<DemoConfig, Box<dyn std::error::Error>> {
    let path = args
        .config
        .as_deref()
        .map(PathBuf::from)
        .or_else(default_config_path);
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    load_config(&path).map_err(|e| format!("配置文件错误：{} ({})", path.display(), e).into())
}

fn props_from_config(
    args: &Args,
    cfg: &DemoConfig,
) -> Result<VirtualizedSelectProps, Box<dyn std::error::Error>> {
    let mut options = match args.options.as_deref() {
        Some(path) => load_options(Path::new(path))?,
        None => cfg.options.clone(),
    };
    if options.is_empty() {
        options = sample_options(args.sample);
    }
    let is_async = args.is_async || cfg.is_async;
    let props = cfg.to_props()?.async_options(is_async);
    if !is_async {
        return Ok(props.options(options));
    }
    let loader = DelayedLoader::new(
        options,
        cfg.label_key.clone(),
        Duration::from_millis(args.latency_ms),
    );
    Ok(props.options(Vec::new()).loader(loader))
}

fn sample_options(count: usize) -> Vec<SelectOption> {
    (0..count)
        .map(|i| {
            SelectOption::new(format!("选项 {i:05}"))
                .with_value(i.to_string())
                .disabled(i % 7 == 3)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run_with_args(args)
}
