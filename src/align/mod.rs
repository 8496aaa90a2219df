pub mod edit;
pub mod map;

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::io::fastq::FastqReader;
use crate::stats::RunStats;

pub use edit::{
    banded_edit_distance, banded_edit_distance_with_buf, within_edit_distance, EditBuffer,
};
pub use map::{map_read, map_read_with_buf, MapOpt, MapStatus, MappingResult, BAND_LIMIT};

/// 进度提示间隔（读数）
const PROGRESS_INTERVAL: u64 = 100_000;

/// 驱动 mapper 处理整个 read 流并聚合统计。
/// max_reads 为负表示不限制；达到上限或流结束时停止。
pub fn run_mapping<R: BufRead>(
    genome: &[u8],
    suffix_array: &[u32],
    reader: &mut FastqReader<R>,
    opt: &MapOpt,
    max_reads: i64,
) -> Result<RunStats> {
    opt.validate()?;

    let mut stats = RunStats::new(genome.len());
    let mut buf = EditBuffer::new();

    while let Some(rec) = reader.next_record()? {
        if max_reads >= 0 && stats.total_reads >= max_reads as u64 {
            break;
        }

        let result = map::map_read_with_buf(genome, suffix_array, &rec.seq, opt, &mut buf);
        stats.record(&result, rec.seq.len());

        if stats.total_reads % PROGRESS_INTERVAL == 0 {
            eprint!(
                "\rProcessed {} reads... {:.2}% mapped",
                stats.total_reads,
                stats.mapped_percent()
            );
            let _ = std::io::stderr().flush();
        }
    }

    Ok(stats)
}
