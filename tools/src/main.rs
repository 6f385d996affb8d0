//! datagen-runner: writes customers.csv, orders.csv and payments.csv.
//!
//! Usage:
//!   datagen-runner                 (built-in defaults)
//!   datagen-runner datagen.json    (JSON config, omitted keys keep defaults)

use anyhow::Result;
use std::{env, path::Path};
use vehicle_sales_core::{
    config::GeneratorConfig,
    engine::GenerationEngine,
    export::export_dataset,
    report::{DatasetSummary, RunReport},
};

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => GeneratorConfig::load(&path)?,
        None => GeneratorConfig::default(),
    };
    let today = chrono::Local::now().date_naive();

    let engine = GenerationEngine::build(config, today)?;
    let config = &engine.config;

    println!("Vehicle sales dataset generator");
    println!("  customers:    {}", config.customer_count);
    println!("  seeds:        general={} fiction={}", config.seeds.general, config.seeds.fiction);
    println!("  as_of:        {}", engine.clock.as_of);
    println!("  output_dir:   {}", config.output_dir);
    println!();

    let dataset = engine.run()?;
    let report = RunReport::build(&dataset);

    println!("Verifying email-name matching...");
    println!(
        "  {}/{} emails match customer names ({:.1}%)",
        report.email_match.matched,
        report.email_match.checked,
        report.email_match.percentage()
    );

    let files = export_dataset(&dataset, Path::new(&config.output_dir))?;
    log::debug!(
        "wrote {}, {} and {}",
        files.customers.display(),
        files.orders.display(),
        files.payments.display()
    );
    println!();
    println!("Datasets created successfully.");

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &RunReport) {
    print_dataset(&report.orders);

    print_dataset(&report.customers);
    println!();
    println!("Sample data with matching emails:");
    for sample in &report.email_samples {
        println!("  Name: {:30} | Email: {}", sample.name, sample.email);
    }

    print_dataset(&report.payments);

    println!();
    println!("=== DATASET RELATIONSHIPS ===");
    println!("  orders    <-> customers: linked by 'customer_id'");
    println!("  orders    <-> payments:  linked by 'order_id'");
    println!("  customers <-> payments:  linked by 'customer_id'");

    println!();
    println!("=== DATA QUALITY SUMMARY ===");
    for summary in report.datasets() {
        println!(
            "  {:10} total nulls: {} ({:.1}%)",
            summary.name,
            summary.total_nulls(),
            summary.null_density_pct()
        );
    }
}

fn print_dataset(summary: &DatasetSummary) {
    println!();
    println!("=== {} ===", summary.name.to_uppercase());
    println!("  records: {}", summary.rows);
    println!("  null values per column:");
    for column in &summary.columns {
        println!("    {:20} {}", column.column, column.nulls);
    }
}
