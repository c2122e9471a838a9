use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use php_obfuscator::config::load_config;
use php_obfuscator::errors::AppError;
use php_obfuscator::logger;
use php_obfuscator::obfuscator::Obfuscator;

#[derive(Parser)]
#[command(name = "php-obfuscator", version)]
struct Cli {
    /// PHP file to obfuscate
    file: PathBuf,

    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Leave control whitespace as-is (no collapsing to single spaces)
    #[arg(long)]
    keep_whitespace: bool,

    /// Leave $variables untouched
    #[arg(long)]
    skip_variables: bool,

    /// Also rename declared function and class names (second pass)
    #[arg(long)]
    rename_declarations: bool,

    /// Variable name never to rename; repeatable
    #[arg(long = "exclude-variable")]
    exclude_variables: Vec<String>,

    /// Function or class name never to rename; repeatable
    #[arg(long = "exclude-function")]
    exclude_functions: Vec<String>,
}

fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();

    let mut cfg = load_config(cli.config.as_deref())?;
    if cli.keep_whitespace {
        cfg.remove_whitespace = false;
    }
    if cli.skip_variables {
        cfg.obfuscate_variables = false;
    }
    if cli.rename_declarations {
        cfg.obfuscate_declared_names = true;
    }
    for name in &cli.exclude_variables {
        cfg.exclude_variable(name);
    }
    for name in &cli.exclude_functions {
        cfg.exclude_function(name);
    }

    let obfuscator = Obfuscator::new(cfg);
    match obfuscator.start(&cli.file)? {
        Some(out) => info!("wrote {}", out.display()),
        None => info!("nothing to do for {}", cli.file.display()),
    }
    Ok(())
}
