use std::cmp::Ordering;

/// 构建后缀数组（基于倍增法，每轮比较排序，整体 O(n log^2 n)）。
/// 输入为原始字节文本，不追加哨兵，按无符号字节序比较。
/// 返回 [0, n) 的一个排列，使各起点后缀按字典序递增。
pub fn build_sa(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }
    let mut sa: Vec<usize> = (0..n).collect();
    let mut rank: Vec<i32> = text.iter().map(|&b| b as i32).collect();
    let mut tmp: Vec<i32> = vec![0; n];

    let mut k = 1usize;
    while k < n {
        sa.sort_unstable_by(|&i, &j| {
            let r1 = rank[i];
            let r2 = rank[j];
            if r1 != r2 {
                return r1.cmp(&r2);
            }
            let r1n = if i + k < n { rank[i + k] } else { -1 };
            let r2n = if j + k < n { rank[j + k] } else { -1 };
            r1n.cmp(&r2n)
        });

        tmp[sa[0]] = 0;
        for i in 1..n {
            let a = sa[i - 1];
            let b = sa[i];
            let prev = (rank[a], if a + k < n { rank[a + k] } else { -1 });
            let curr = (rank[b], if b + k < n { rank[b + k] } else { -1 });
            tmp[b] = tmp[a] + if curr != prev { 1 } else { 0 };
        }

        // 复制回 rank；全部名次互异时提前结束
        rank.copy_from_slice(&tmp);
        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k <<= 1;
    }

    sa.into_iter().map(|x| x as u32).collect()
}

/// 比较 text[pos..] 起始的后缀与模式，最多比较 |pat| 个字节。
/// 前 |pat| 个字节全部相等视为相等；后缀不足 |pat| 字节且前缀相等时视为小于。
fn cmp_suffix(text: &[u8], pos: usize, pat: &[u8]) -> Ordering {
    let suffix = &text[pos..];
    let take = suffix.len().min(pat.len());
    match suffix[..take].cmp(&pat[..take]) {
        Ordering::Equal if take < pat.len() => Ordering::Less,
        ord => ord,
    }
}

/// 下界：第一个后缀 >= pat 的 SA 下标
pub fn lower_bound(text: &[u8], sa: &[u32], pat: &[u8]) -> usize {
    let mut lo = 0usize;
    let mut hi = sa.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if cmp_suffix(text, sa[mid] as usize, pat) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// 上界：第一个后缀 > pat 的 SA 下标
pub fn upper_bound(text: &[u8], sa: &[u32], pat: &[u8]) -> usize {
    let mut lo = 0usize;
    let mut hi = sa.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if cmp_suffix(text, sa[mid] as usize, pat) != Ordering::Greater {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// 模式在文本中的全部出现位置（[lower, upper) 区间内的 SA 条目）
pub fn find_all(text: &[u8], sa: &[u32], pat: &[u8]) -> Vec<u32> {
    let lo = lower_bound(text, sa, pat);
    let hi = upper_bound(text, sa, pat);
    sa[lo..hi].to_vec()
}

/// 模式是否恰好出现一次
pub fn has_unique_match(text: &[u8], sa: &[u32], pat: &[u8]) -> bool {
    let lo = lower_bound(text, sa, pat);
    let hi = upper_bound(text, sa, pat);
    hi - lo == 1
}

/// 唯一出现时返回其位置，否则返回 -1
pub fn unique_match_position(text: &[u8], sa: &[u32], pat: &[u8]) -> i64 {
    let lo = lower_bound(text, sa, pat);
    let hi = upper_bound(text, sa, pat);
    if hi - lo == 1 {
        sa[lo] as i64
    } else {
        -1
    }
}
