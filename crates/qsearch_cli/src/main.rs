//! QSearch - Grover database search validation
//!
//! Runs repeated searches on the sampling backend and compares the observed
//! success rate with the closed-form prediction.
//!
//! ```text
//! qsearch                              # 6 qubits, 3 iterates, 100 trials
//! qsearch -n 2 -i 1 -r 1000 --seed 42
//! qsearch -n 8 --optimal --format json
//! qsearch --config run.json --interactive
//! ```

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Args, Format};
use qsearch_backend::{SampledSearchBackend, SearchBackend};
use qsearch_harness::{
    JsonLinesReport, NoPause, PromptGate, ReportSink, StepGate, TextReport, TrialHarness,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();

    let config = args
        .resolve_config()
        .context("invalid search configuration")?;
    args.validate_confidence()
        .context("invalid search configuration")?;

    let mut backend = SampledSearchBackend::ideal()
        .with_readout_error(args.readout_error)
        .context("invalid backend configuration")?;
    if let Some(seed) = args.seed {
        backend = backend.with_seed(seed);
    }
    log::info!(
        "backend {} (readout error {}, seed {:?})",
        backend.name(),
        backend.readout_error(),
        backend.seed()
    );

    let mut sink: Box<dyn ReportSink> = match args.format {
        Format::Text => Box::new(TextReport::stdout()),
        Format::Json => Box::new(JsonLinesReport::new(std::io::stdout())),
    };
    let mut gate: Box<dyn StepGate> = if args.interactive {
        Box::new(PromptGate::stdio())
    } else {
        Box::new(NoPause)
    };

    let mut harness =
        TrialHarness::new(config, backend).context("search backend rejected the configuration")?;
    let summary = harness
        .run(&mut *sink, &mut *gate)
        .with_context(|| format!("run aborted ({})", config))?;

    if !summary.is_consistent(args.confidence)? {
        log::warn!(
            "empirical success rate {:.4} deviates from predicted {:.4} (z = {:.3}) at {:.0}% confidence",
            summary.empirical_rate,
            summary.prediction.quantum_probability,
            summary.z_score,
            args.confidence * 100.0
        );
    }

    Ok(())
}
