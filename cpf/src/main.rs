use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cpf::config::CPFConfig;
use cpf::io::cli::Cli;
use cpf::io::output::CPFOutput;
use cpf::opt::CPFOptimizer;
use cpf::{EPOCH, io};
use log::{info, warn};
use stowage::io::{Importer, export};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CPFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed CPFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("invalid input file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let importer = Importer::new(config.n_decimals);
    let instance = importer.import_instance(&ext_instance)?;

    let solution = CPFOptimizer::new(instance.clone(), config).solve();

    let output = CPFOutput {
        instance: ext_instance,
        solution: export(&instance, &solution, *EPOCH),
        config,
    };

    let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, solution_path.as_path())?;

    Ok(())
}
