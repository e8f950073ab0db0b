use fpbench::bench::TrialRunner;
use fpbench::catalog::Catalog;
use fpbench::config::BenchConfig;
use fpbench::logging::init_logging;
use fpbench::models::TrialResult;
use fpbench::Result;
use tracing::{error, info};

fn report(result: &TrialResult) -> Result<()> {
    info!("{} ratio: {:.3}", result.to_json()?, result.ratio());
    println!("{:?}", result);
    Ok(())
}

fn run() -> Result<()> {
    let config = BenchConfig::load()?;
    let catalog = Catalog::new(&config.data_dir);
    let dataset = catalog.get(config.dataset_index)?;
    let runner = TrialRunner::new(config.clone());

    for result in runner.fpzip_sweep(&catalog, config.fpzip_sweep)? {
        report(&result)?;
    }

    info!("start: {}", dataset.name);
    for &level in &config.levels {
        report(&runner.run_trial(dataset, level)?)?;
        if config.include_stream {
            report(&runner.run_zstd_stream(dataset, level)?)?;
        }
    }
    if config.include_fpzip {
        report(&runner.run_fpzip(dataset)?)?;
    }
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("{}", fpbench::error::user_friendly_message(&e));
        std::process::exit(1);
    }
}
