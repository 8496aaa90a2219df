use anyhow::{bail, Result};

use crate::align::edit::{banded_edit_distance_with_buf, EditBuffer};
use crate::index::sa;

/// 验证器的固定带宽：候选验证一律以此带宽调用带限编辑距离。
/// 配置的 max_errors 不得超过该上限。
pub const BAND_LIMIT: usize = 10;

/// 单条 read 的映射结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    Unmapped,
    Unique,
    Multi,
}

/// 映射结果；未映射时 position 与 edit_dist 均为 -1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingResult {
    pub status: MapStatus,
    pub position: i64,
    pub edit_dist: i64,
}

impl MappingResult {
    fn unmapped() -> Self {
        Self {
            status: MapStatus::Unmapped,
            position: -1,
            edit_dist: -1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MapOpt {
    pub seed_len: usize,
    pub max_errors: usize,
    pub num_seeds: usize,
    pub max_hits_per_seed: usize,
}

impl Default for MapOpt {
    fn default() -> Self {
        Self {
            seed_len: 20,
            max_errors: 3,
            num_seeds: 3,
            max_hits_per_seed: 100,
        }
    }
}

impl MapOpt {
    /// 配置检查：非法组合在进入映射循环前报错
    pub fn validate(&self) -> Result<()> {
        if self.seed_len == 0 {
            bail!("seed length must be at least 1");
        }
        if self.num_seeds == 0 {
            bail!("number of seeds must be at least 1");
        }
        if self.max_hits_per_seed == 0 {
            bail!("per-seed hit cap must be at least 1");
        }
        if self.max_errors > BAND_LIMIT {
            bail!(
                "max errors {} exceeds the verifier band limit {}",
                self.max_errors,
                BAND_LIMIT
            );
        }
        Ok(())
    }
}

/// 映射单条 read：精确匹配快速路径，失败后多种子生成候选并逐一验证
pub fn map_read(genome: &[u8], suffix_array: &[u32], read: &[u8], opt: &MapOpt) -> MappingResult {
    map_read_with_buf(genome, suffix_array, read, opt, &mut EditBuffer::new())
}

pub fn map_read_with_buf(
    genome: &[u8],
    suffix_array: &[u32],
    read: &[u8],
    opt: &MapOpt,
    buf: &mut EditBuffer,
) -> MappingResult {
    // 首碱基为 N 的 read 直接放弃（Illumina 低质量首碱基会产生大量假种子）
    if read.is_empty() || read[0] == b'N' {
        return MappingResult::unmapped();
    }

    // 精确匹配快速路径；区间首条目即报告位置
    let lo = sa::lower_bound(genome, suffix_array, read);
    let hi = sa::upper_bound(genome, suffix_array, read);
    if hi > lo {
        let status = if hi - lo == 1 {
            MapStatus::Unique
        } else {
            MapStatus::Multi
        };
        return MappingResult {
            status,
            position: suffix_array[lo] as i64,
            edit_dist: 0,
        };
    }

    // 短于种子长度的 read 无法产生种子
    if read.len() < opt.seed_len {
        return MappingResult::unmapped();
    }

    let candidates = collect_candidates(genome, suffix_array, read, opt);
    if candidates.is_empty() {
        return MappingResult::unmapped();
    }

    verify_candidates(genome, read, &candidates, opt, buf)
}

/// 沿 read 均匀取种子，经 SA 区间查询与位置回投生成候选起点。
/// 每个种子只取区间前 max_hits_per_seed 个命中，返回排序去重后的候选。
fn collect_candidates(
    genome: &[u8],
    suffix_array: &[u32],
    read: &[u8],
    opt: &MapOpt,
) -> Vec<usize> {
    let n = genome.len();
    let step = (read.len() - opt.seed_len) / (opt.num_seeds - 1).max(1);
    let mut candidates: Vec<usize> = Vec::new();

    for i in 0..opt.num_seeds {
        let offset = i * step;
        if offset + opt.seed_len > read.len() {
            break;
        }
        let seed = &read[offset..offset + opt.seed_len];
        // 含 N 的种子跳过
        if seed.contains(&b'N') {
            continue;
        }

        let slo = sa::lower_bound(genome, suffix_array, seed);
        let shi = sa::upper_bound(genome, suffix_array, seed);
        for j in slo..shi.min(slo + opt.max_hits_per_seed) {
            let start = suffix_array[j] as i64 - offset as i64;
            if start >= 0 && start as usize + read.len() <= n {
                candidates.push(start as usize);
            }
        }
    }

    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

/// 按升序逐个验证候选；首见最优原则决定报告位置
fn verify_candidates(
    genome: &[u8],
    read: &[u8],
    candidates: &[usize],
    opt: &MapOpt,
    buf: &mut EditBuffer,
) -> MappingResult {
    let mut best_dist = opt.max_errors + 1;
    let mut best_pos: i64 = -1;
    let mut best_count = 0usize;

    for &cand in candidates {
        let segment = &genome[cand..cand + read.len()];
        let dist = banded_edit_distance_with_buf(segment, read, BAND_LIMIT, buf);

        if dist < best_dist {
            best_dist = dist;
            best_pos = cand as i64;
            best_count = 1;
        } else if dist == best_dist && cand as i64 != best_pos {
            best_count += 1;
        }
    }

    if best_dist > opt.max_errors {
        return MappingResult::unmapped();
    }
    let status = if best_count == 1 {
        MapStatus::Unique
    } else {
        MapStatus::Multi
    };
    MappingResult {
        status,
        position: best_pos,
        edit_dist: best_dist as i64,
    }
}
