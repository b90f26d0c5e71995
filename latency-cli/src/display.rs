use latency_probe::Report;
use latency_stats::{format, format_json};
use std::io::{self, Write};

use crate::args::OutputFormat;

/// Cursor up one line, then erase that line.
const ERASE_PREV_LINE: &str = "\x1b[1A\x1b[2K";

/// Keeps one block of text on screen and redraws it in place.
pub struct LiveWriter<W: Write> {
    out: W,
    /// Lines of the block currently on screen.
    lines: usize,
}

impl<W: Write> LiveWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Replace the block on screen with `block`.
    pub fn render(&mut self, block: &str) -> io::Result<()> {
        self.erase()?;
        self.out.write_all(block.as_bytes())?;
        if !block.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        self.lines = block.lines().count();
        self.out.flush()
    }

    /// Print `line` where the block was. It stays on screen; the next block
    /// is drawn below it.
    pub fn message(&mut self, line: &str) -> io::Result<()> {
        self.erase()?;
        writeln!(self.out, "{line}")?;
        self.lines = 0;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn erase(&mut self) -> io::Result<()> {
        for _ in 0..self.lines {
            self.out.write_all(ERASE_PREV_LINE.as_bytes())?;
        }
        Ok(())
    }
}

/// Where reports end up.
pub enum Output<W: Write> {
    Live(LiveWriter<W>),
    Json(W),
}

impl<W: Write> Output<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        match format {
            OutputFormat::Text => Output::Live(LiveWriter::new(out)),
            OutputFormat::Json => Output::Json(out),
        }
    }

    /// Show one report. A failed request is announced, but its snapshot is
    /// shown all the same.
    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        match self {
            Output::Live(live) => {
                if let Err(e) = &report.measurement.outcome {
                    live.message(&format!("Error: {e}"))?;
                }
                live.render(&format(&report.snapshot))
            }
            // stdout carries only snapshots; failures go to the log.
            Output::Json(out) => {
                if let Err(e) = &report.measurement.outcome {
                    log::warn!("request failed after {:?}: {e}", report.measurement.elapsed);
                }
                writeln!(out, "{}", format_json(&report.snapshot))?;
                out.flush()
            }
        }
    }

    pub fn into_inner(self) -> W {
        match self {
            Output::Live(live) => live.into_inner(),
            Output::Json(out) => out,
        }
    }
}
