use std::io::{self, Write};

use crate::align::map::{MapStatus, MappingResult};

/// 一次运行的聚合统计：映射计数与逐碱基覆盖度。
/// 覆盖度只统计唯一映射的 read。
#[derive(Debug)]
pub struct RunStats {
    pub total_reads: u64,
    pub mapped_reads: u64,
    pub unique_mapped: u64,
    pub multi_mapped: u64,
    pub total_edit_dist: u64,
    coverage: Vec<u32>,
}

impl RunStats {
    pub fn new(genome_len: usize) -> Self {
        Self {
            total_reads: 0,
            mapped_reads: 0,
            unique_mapped: 0,
            multi_mapped: 0,
            total_edit_dist: 0,
            coverage: vec![0; genome_len],
        }
    }

    /// 记入一条映射结果
    pub fn record(&mut self, result: &MappingResult, read_len: usize) {
        self.total_reads += 1;
        match result.status {
            MapStatus::Unmapped => {}
            MapStatus::Unique => {
                self.mapped_reads += 1;
                self.total_edit_dist += result.edit_dist as u64;
                self.unique_mapped += 1;

                let start = (result.position as usize).min(self.coverage.len());
                let end = (start + read_len).min(self.coverage.len());
                for c in &mut self.coverage[start..end] {
                    *c += 1;
                }
            }
            MapStatus::Multi => {
                self.mapped_reads += 1;
                self.total_edit_dist += result.edit_dist as u64;
                self.multi_mapped += 1;
            }
        }
    }

    pub fn coverage(&self) -> &[u32] {
        &self.coverage
    }

    /// 覆盖度大于 0 的碱基数
    pub fn covered_bases(&self) -> u64 {
        self.coverage.iter().filter(|&&c| c > 0).count() as u64
    }

    /// 覆盖度总和（全部唯一映射 read 的覆盖区间长度之和）
    pub fn total_coverage(&self) -> u64 {
        self.coverage.iter().map(|&c| c as u64).sum()
    }

    pub fn mapped_percent(&self) -> f64 {
        percent(self.mapped_reads, self.total_reads)
    }

    /// 输出完整文本报告
    pub fn write_report<W: Write>(&self, out: &mut W, ctx: &ReportContext) -> io::Result<()> {
        let unmapped = self.total_reads - self.mapped_reads;
        let avg_edit = if self.mapped_reads > 0 {
            self.total_edit_dist as f64 / self.mapped_reads as f64
        } else {
            0.0
        };
        let genome_len = ctx.genome_len as u64;
        let avg_depth = if genome_len > 0 {
            self.total_coverage() as f64 / genome_len as f64
        } else {
            0.0
        };

        writeln!(out, "=== Genome Mapping Report ===")?;
        writeln!(out)?;
        writeln!(out, "Algorithms used:")?;
        writeln!(out, "  - Suffix array O(n log^2 n) construction")?;
        writeln!(out, "  - Seed-and-extend with {}-mer seeds", ctx.seed_len)?;
        writeln!(
            out,
            "  - Band-limited edit distance (max {} errors)",
            ctx.max_errors
        )?;
        writeln!(out)?;
        writeln!(out, "Reference: {}", ctx.genome_file)?;
        writeln!(out, "Genome size: {} bp", ctx.genome_len)?;
        writeln!(out)?;
        writeln!(out, "Reads file: {}", ctx.reads_file)?;
        writeln!(out, "Total reads processed: {}", self.total_reads)?;
        writeln!(out)?;
        writeln!(out, "Mapping statistics:")?;
        writeln!(
            out,
            "  Mapped reads: {} ({:.2}%)",
            self.mapped_reads,
            percent(self.mapped_reads, self.total_reads)
        )?;
        writeln!(
            out,
            "  Unmapped reads: {} ({:.2}%)",
            unmapped,
            percent(unmapped, self.total_reads)
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "  Uniquely mapped: {} ({:.2}%)",
            self.unique_mapped,
            percent(self.unique_mapped, self.total_reads)
        )?;
        writeln!(
            out,
            "  Multi-mapped: {} ({:.2}%)",
            self.multi_mapped,
            percent(self.multi_mapped, self.total_reads)
        )?;
        writeln!(out)?;
        writeln!(out, "Alignment quality:")?;
        writeln!(out, "  Average edit distance: {:.2}", avg_edit)?;
        writeln!(out)?;
        writeln!(out, "Genome coverage (from uniquely mapped reads):")?;
        writeln!(
            out,
            "  Covered bases: {} ({:.2}%)",
            self.covered_bases(),
            percent(self.covered_bases(), genome_len)
        )?;
        writeln!(out, "  Average depth: {:.2}x", avg_depth)?;
        writeln!(out)?;
        writeln!(out, "Total runtime: {:.1} seconds", ctx.elapsed_secs)?;
        Ok(())
    }
}

/// 报告所需的运行上下文
pub struct ReportContext<'a> {
    pub genome_file: &'a str,
    pub reads_file: &'a str,
    pub genome_len: usize,
    pub seed_len: usize,
    pub max_errors: usize,
    pub elapsed_secs: f64,
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique(position: i64, edit_dist: i64) -> MappingResult {
        MappingResult {
            status: MapStatus::Unique,
            position,
            edit_dist,
        }
    }

    fn multi(position: i64, edit_dist: i64) -> MappingResult {
        MappingResult {
            status: MapStatus::Multi,
            position,
            edit_dist,
        }
    }

    fn unmapped() -> MappingResult {
        MappingResult {
            status: MapStatus::Unmapped,
            position: -1,
            edit_dist: -1,
        }
    }

    #[test]
    fn counters_follow_statuses() {
        let mut stats = RunStats::new(100);
        stats.record(&unique(0, 1), 10);
        stats.record(&multi(5, 2), 10);
        stats.record(&unmapped(), 10);

        assert_eq!(stats.total_reads, 3);
        assert_eq!(stats.mapped_reads, 2);
        assert_eq!(stats.unique_mapped, 1);
        assert_eq!(stats.multi_mapped, 1);
        assert_eq!(stats.total_edit_dist, 3);
        assert_eq!(stats.mapped_reads, stats.unique_mapped + stats.multi_mapped);
    }

    #[test]
    fn only_unique_reads_touch_coverage() {
        let mut stats = RunStats::new(20);
        stats.record(&unique(2, 0), 5);
        stats.record(&multi(0, 0), 5);
        stats.record(&unmapped(), 5);

        let cov = stats.coverage();
        assert!(cov[..2].iter().all(|&c| c == 0));
        assert!(cov[2..7].iter().all(|&c| c == 1));
        assert!(cov[7..].iter().all(|&c| c == 0));
        assert_eq!(stats.covered_bases(), 5);
        assert_eq!(stats.total_coverage(), 5);
    }

    #[test]
    fn overlapping_unique_reads_accumulate() {
        let mut stats = RunStats::new(10);
        stats.record(&unique(0, 0), 6);
        stats.record(&unique(3, 0), 6);

        assert_eq!(stats.coverage(), &[1, 1, 1, 2, 2, 2, 1, 1, 1, 0]);
        assert_eq!(stats.covered_bases(), 9);
        assert_eq!(stats.total_coverage(), 12);
    }

    #[test]
    fn coverage_is_clamped_at_genome_end() {
        let mut stats = RunStats::new(8);
        stats.record(&unique(6, 0), 5);
        assert_eq!(stats.coverage(), &[0, 0, 0, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn coverage_bounded_by_unique_reads() {
        let mut stats = RunStats::new(50);
        let read_len = 10usize;
        for pos in [0i64, 10, 20, 5] {
            stats.record(&unique(pos, 0), read_len);
        }
        assert!(stats.total_coverage() <= stats.unique_mapped * read_len as u64);
    }

    #[test]
    fn report_contains_every_field() {
        let mut stats = RunStats::new(100);
        stats.record(&unique(0, 1), 10);
        stats.record(&multi(5, 1), 10);
        stats.record(&unmapped(), 10);

        let ctx = ReportContext {
            genome_file: "ref.fna",
            reads_file: "reads.fastq",
            genome_len: 100,
            seed_len: 20,
            max_errors: 3,
            elapsed_secs: 1.25,
        };
        let mut out = Vec::new();
        stats.write_report(&mut out, &ctx).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("=== Genome Mapping Report ==="));
        assert!(report.contains("Seed-and-extend with 20-mer seeds"));
        assert!(report.contains("Band-limited edit distance (max 3 errors)"));
        assert!(report.contains("Reference: ref.fna"));
        assert!(report.contains("Genome size: 100 bp"));
        assert!(report.contains("Reads file: reads.fastq"));
        assert!(report.contains("Total reads processed: 3"));
        assert!(report.contains("Mapped reads: 2 (66.67%)"));
        assert!(report.contains("Unmapped reads: 1 (33.33%)"));
        assert!(report.contains("Uniquely mapped: 1 (33.33%)"));
        assert!(report.contains("Multi-mapped: 1 (33.33%)"));
        assert!(report.contains("Average edit distance: 1.00"));
        assert!(report.contains("Covered bases: 10 (10.00%)"));
        assert!(report.contains("Average depth: 0.10x"));
        assert!(report.contains("Total runtime: 1.2 seconds"));
    }

    #[test]
    fn empty_run_report_has_no_nan() {
        let stats = RunStats::new(0);
        let ctx = ReportContext {
            genome_file: "ref.fna",
            reads_file: "reads.fastq",
            genome_len: 0,
            seed_len: 20,
            max_errors: 3,
            elapsed_secs: 0.0,
        };
        let mut out = Vec::new();
        stats.write_report(&mut out, &ctx).unwrap();
        let report = String::from_utf8(out).unwrap();
        assert!(!report.contains("NaN"));
        assert!(report.contains("Mapped reads: 0 (0.00%)"));
        assert!(report.contains("Average edit distance: 0.00"));
    }
}
