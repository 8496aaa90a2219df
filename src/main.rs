use std::time::Instant;

use anyhow::Result;
use clap::Parser;

mod align;
mod index;
mod io;
mod stats;

#[derive(Parser, Debug)]
#[command(
    name = "samap-rust",
    author,
    version,
    about = "Suffix-array based short-read mapper: aligns FASTQ reads against a FASTA reference"
)]
struct Cli {
    /// Reference genome (FASTA)
    #[arg(
        short = 'g',
        value_name = "FILE",
        default_value = "data/GCF_000005845.2_ASM584v2_genomic.fna"
    )]
    genome: String,

    /// Reads file (FASTQ)
    #[arg(short = 'r', value_name = "FILE", default_value = "data/ERR022075_1.fastq")]
    reads: String,

    /// Max reads to process (-1 = all)
    #[arg(
        short = 'n',
        value_name = "NUM",
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    max_reads: i64,

    /// Seed length
    #[arg(short = 's', value_name = "LEN", default_value_t = 20)]
    seed_len: usize,

    /// Max errors allowed
    #[arg(short = 'e', value_name = "NUM", default_value_t = 3)]
    max_errors: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let opt = align::MapOpt {
        seed_len: cli.seed_len,
        max_errors: cli.max_errors,
        ..align::MapOpt::default()
    };
    opt.validate()?;

    let start_time = Instant::now();

    eprintln!("Loading reference genome...");
    let genome = io::fasta::load_reference(&cli.genome)?;
    if genome.is_empty() {
        anyhow::bail!("reference FASTA '{}' contains no sequence data", cli.genome);
    }
    eprintln!("Genome size: {} bp", genome.len());

    eprintln!("Building suffix array...");
    let sa_start = Instant::now();
    let suffix_array = index::sa::build_sa(&genome);
    eprintln!("Suffix array built in {} ms", sa_start.elapsed().as_millis());

    let fh = std::fs::File::open(&cli.reads)
        .map_err(|e| anyhow::anyhow!("cannot open reads FASTQ '{}': {}", cli.reads, e))?;
    let mut reader = io::fastq::FastqReader::new(std::io::BufReader::new(fh));

    eprintln!("Mapping reads...");
    let run_stats = align::run_mapping(&genome, &suffix_array, &mut reader, &opt, cli.max_reads)?;
    eprintln!();

    let ctx = stats::ReportContext {
        genome_file: &cli.genome,
        reads_file: &cli.reads,
        genome_len: genome.len(),
        seed_len: opt.seed_len,
        max_errors: opt.max_errors,
        elapsed_secs: start_time.elapsed().as_secs_f64(),
    };
    let mut out = std::io::stdout().lock();
    run_stats.write_report(&mut out, &ctx)?;

    Ok(())
}
