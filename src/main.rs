use anyhow::Result;
use std::env;

use card_portfolio::{generate_summary, run_pipeline, PipelineConfig};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("test");

    match mode {
        "run" => run_production()?,
        "test" => run_test()?,
        "report" => run_report(&PipelineConfig::production())?,
        "report-test" => run_report(&PipelineConfig::test_mode())?,
        other => {
            eprintln!("❌ Unknown mode: {other}");
            eprintln!("   Usage: card-portfolio [run|test|report|report-test]");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run_production() -> Result<()> {
    println!("🗂️  Card Portfolio ETL - Production Mode");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = PipelineConfig::production();
    run_pipeline(&config)?;

    println!("\n✅ Production pipeline complete");
    Ok(())
}

fn run_test() -> Result<()> {
    eprintln!("⚙️  Running card-portfolio in Test Mode...");

    let config = PipelineConfig::test_mode();
    run_pipeline(&config)?;
    Ok(())
}

fn run_report(config: &PipelineConfig) -> Result<()> {
    println!("📊 Generating portfolio summary...");

    if let Err(e) = generate_summary(&config.output_file) {
        eprintln!("❌ {e}");
        eprintln!("   Run the ETL step first: card-portfolio run");
        std::process::exit(1);
    }

    Ok(())
}
