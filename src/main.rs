use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;

use flounder::batch::{self, ScoreOpt};
use flounder::io::{self, SeqRecord};
use flounder::report::{self, OutputFormat};
use flounder::{logging, Method};

#[derive(Parser, Debug)]
#[command(name = "flounder", author, version, about = "Flounder scores for DNA/RNA sequences", arg_required_else_help = true)]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score sequences from FASTA, FASTQ or plain-text files
    Score {
        /// Input files ('-' for stdin)
        #[arg(required = true)]
        inputs: Vec<String>,
        #[command(flatten)]
        opts: CommonOpts,
    },
    /// Score sequences given on the command line
    Seq {
        #[arg(required = true)]
        sequences: Vec<String>,
        #[command(flatten)]
        opts: CommonOpts,
    },
}

#[derive(Args, Debug)]
struct CommonOpts {
    #[arg(short, long, value_enum, default_value_t = Method::Plain)]
    method: Method,
    /// Report one row per base (or per codon)
    #[arg(long = "per-unit")]
    per_unit: bool,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,
    /// Output path (stdout if omitted)
    #[arg(short, long)]
    out: Option<String>,
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Commands::Score { inputs, opts } => {
            let records = io::read_inputs(&inputs)?;
            run_score(&records, &opts)
        }
        Commands::Seq { sequences, opts } => {
            let records: Vec<SeqRecord> = sequences
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    let seq: String = s.chars().filter(|c| !c.is_whitespace()).collect();
                    SeqRecord::new(format!("arg{}", i + 1), seq)
                })
                .collect();
            run_score(&records, &opts)
        }
    }
}

fn run_score(records: &[SeqRecord], opts: &CommonOpts) -> Result<()> {
    if records.is_empty() {
        log::warn!("no sequences to score");
    }
    let opt = ScoreOpt {
        method: opts.method,
        per_unit: opts.per_unit,
        threads: opts.threads,
    };
    let results = batch::score_records(records, &opt)?;

    let mut out: Box<dyn Write> = if let Some(p) = &opts.out {
        let fh = std::fs::File::create(p).with_context(|| format!("cannot create output '{}'", p))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };
    report::write_report(&mut out, &results, opt.method, opts.format)?;
    out.flush()?;
    log::info!("wrote {} results", results.len());
    Ok(())
}
