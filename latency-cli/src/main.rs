use clap::{CommandFactory, Parser};
use latency_cli::args::Args;
use latency_cli::config;
use latency_cli::display::Output;
use latency_probe::{HttpProbe, Monitor};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init_logger();
    let args = Args::parse();

    let url = args.url().unwrap_or_else(|| {
        eprintln!("Error: missing url");
        Args::command().write_help(&mut std::io::stderr()).ok();
        process::exit(1);
    });

    let probe = HttpProbe::new(url, args.timeout()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    log::info!("probing {} every {:?} ({:?})", probe.url(), args.pacing(), args.limit());

    let mut monitor = Monitor::new(probe, args.pacing(), args.limit());
    let mut output = Output::new(args.format, std::io::stdout());

    // Installed once so an interrupt during `report` is still seen on the next turn.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            next = monitor.next() => match next {
                Some(report) => output.report(&report)?,
                None => break,
            },
            _ = &mut ctrl_c => {
                log::info!("interrupted after {} samples", monitor.statistics().count());
                break;
            }
        }
    }

    Ok(())
}
