//! # samap-rust
//!
//! 受经典 seed-and-extend 比对器启发的 Rust 版短读段映射器。
//!
//! 本 crate 基于后缀数组索引将 DNA 短读段映射到参考基因组，包括：
//!
//! - **索引构建**：参考序列的后缀数组（倍增法构建 + 二分区间检索）
//! - **种子定位**：多种子查询与位置回投，生成候选比对起点
//! - **候选验证**：带限编辑距离（对角带滚动行 DP）
//! - **统计汇总**：映射计数、逐碱基覆盖度与文本报告
//!
//! ## 快速示例
//!
//! ```rust
//! use samap_rust::index::sa;
//! use samap_rust::align::{map_read, MapOpt, MapStatus};
//!
//! let genome = b"ACGTACGTAGCTGATCGTAG";
//! let suffix_array = sa::build_sa(genome);
//!
//! let opt = MapOpt { seed_len: 5, max_errors: 1, ..MapOpt::default() };
//! let result = map_read(genome, &suffix_array, b"GCTGATCGTAG", &opt);
//! assert_eq!(result.status, MapStatus::Unique);
//! assert_eq!(result.position, 9);
//! assert_eq!(result.edit_dist, 0);
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA / FASTQ 文件解析
//! - [`index`] — 后缀数组构建与模式区间检索
//! - [`align`] — 映射算法（种子生成、带限编辑距离、run 驱动）
//! - [`stats`] — 运行统计与覆盖度报告

pub mod align;
pub mod index;
pub mod io;
pub mod stats;
