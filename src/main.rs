use std::process;

use clap::Parser;
use colored::Colorize;
use ktally::{
    cli::Args,
    error::KtallyError,
    histogram::{compute_histogram, histogram_stats},
    input::Input,
    run::{self, OutputOptions},
};

fn main() {
    let args = Args::parse();

    let input = Input::from_path(&args.path);
    let workers = args.threads.unwrap_or_else(run::default_workers);

    if !args.quiet {
        let data = if input.is_stdin() {
            "stdin".to_string()
        } else {
            args.path.display().to_string()
        };
        eprintln!("{}: {}", "k-length".bold(), args.k.to_string().blue().bold());
        eprintln!("{}: {}", "data".bold(), data.underline().bold().blue());
        eprintln!("{}: {}", "workers".bold(), workers.to_string().blue().bold());
        eprintln!();
    }

    if let Err(e) = try_main(&args, &input, workers) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

fn try_main(args: &Args, input: &Input, workers: usize) -> Result<(), KtallyError> {
    let counts = run::count_kmers_with_workers(input, args.k, workers)?;

    if args.histogram {
        let histogram = compute_histogram(counts.values());
        run::output_histogram(&histogram)?;

        if !args.quiet {
            let stats = histogram_stats(&histogram);
            eprintln!();
            eprintln!(
                "{}: {} {}, {} {}, {} {:.2}",
                "summary".bold(),
                stats.total_kmers.to_string().blue().bold(),
                "total",
                stats.distinct_kmers.to_string().blue().bold(),
                "distinct",
                "mean count".bold(),
                stats.mean_count
            );
        }
        return Ok(());
    }

    run::output_counts(
        counts,
        &OutputOptions {
            format: args.format,
            min_count: args.min_count,
            sort: args.sort,
        },
    )
}
