use anyhow::Context;
use colored::Colorize;
use tracing::info;
use xlsx_sql_exporter::{
    config::Config,
    domain::exporter::{log_summary, run, setup_logging},
};

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()
        .context("Failed to load configuration from environment variables")?
        .with_args(std::env::args().skip(1));

    setup_logging(config.log_level)?;
    info!("Configuration loaded successfully");

    let summary = run(&config).with_context(|| {
        format!(
            "Failed to export '{}' to '{}'",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;
    log_summary(&summary);

    println!(
        "{} {} ({} statements)",
        "SQL file generated successfully:".green(),
        summary.output_path.display(),
        format_number(summary.rows_written)
    );
    Ok(())
}
