//! Rank-driven bigram merge engine (C4)
//!
//! Applies the merge table to one pre-token at a time: repeatedly find
//! the lowest-rank adjacent pair and merge every non-overlapping
//! occurrence of it, left to right, until no ranked pair remains.
//!
//! Follows the reference's structure directly (`original_source/ttok.cpp`,
//! `BPE::bpe`): each pass rebuilds `words` into a fresh `Vec` rather than
//! editing the previous one in place, and the merge-rank lookup uses a
//! plain `HashMap<(String, String), usize>` — the standard composite hash
//! for tuple keys, no custom pair-hashing scheme.

use std::collections::{HashMap, HashSet};

use crate::Error;

/// Ordered merge rules, keyed by `(left, right)` for O(1) rank lookup.
pub struct MergeTable {
    ranks: HashMap<(String, String), usize>,
}

impl MergeTable {
    /// Build from an ordered list of `(left, right)` pairs; position in
    /// the list is the rank. Fails with `Error::ConfigMalformed` if the
    /// same pair appears more than once (ranks must be unique per §3).
    pub fn new(merges: &[(String, String)]) -> Result<Self, Error> {
        let mut ranks = HashMap::with_capacity(merges.len());
        for (rank, (left, right)) in merges.iter().enumerate() {
            if ranks
                .insert((left.clone(), right.clone()), rank)
                .is_some()
            {
                return Err(Error::ConfigMalformed(format!(
                    "duplicate merge rule: \"{left} {right}\""
                )));
            }
        }
        Ok(Self { ranks })
    }

    pub fn rank(&self, left: &str, right: &str) -> Option<usize> {
        self.ranks.get(&(left.to_string(), right.to_string())).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Parse the external merge-rule strings (`"<LEFT> <RIGHT>"`, §6) into
/// `(left, right)` pairs. The space is located by first-occurrence
/// search, matching the reference's `s_merge.find(" ")`.
pub fn parse_merge_rules(lines: &[String]) -> Result<Vec<(String, String)>, Error> {
    lines
        .iter()
        .map(|line| {
            let space_idx = line.find(' ').ok_or_else(|| {
                Error::ConfigMalformed(format!("merge rule has no separating space: \"{line}\""))
            })?;
            let (left, right) = line.split_at(space_idx);
            Ok((left.to_string(), right[1..].to_string()))
        })
        .collect()
}

fn bigrams(words: &[String]) -> HashSet<(String, String)> {
    words
        .windows(2)
        .map(|w| (w[0].clone(), w[1].clone()))
        .collect()
}

/// Merge one pre-token (§4.4) and append the resulting sub-tokens to
/// `out`.
pub fn merge_pretoken(pretoken: &str, merges: &MergeTable, out: &mut Vec<String>) {
    let mut words: Vec<String> = pretoken.chars().map(|c| c.to_string()).collect();
    if words.len() < 2 {
        out.extend(words);
        return;
    }

    let mut pairs = bigrams(&words);
    #[cfg(debug_assertions)]
    let mut rank_history = Vec::new();

    loop {
        let best = pairs
            .iter()
            .filter_map(|(l, r)| merges.rank(l, r).map(|rank| (rank, l.clone(), r.clone())))
            .min_by_key(|(rank, _, _)| *rank);

        let Some((rank, left, right)) = best else {
            break;
        };
        #[cfg(debug_assertions)]
        {
            crate::invariants::assert_merge_rank_nondecreasing(&rank_history, rank);
            rank_history.push(rank);
        }

        let mut rebuilt = Vec::with_capacity(words.len());
        let mut i = 0;
        while i < words.len() {
            if i + 1 < words.len() && words[i] == left && words[i + 1] == right {
                rebuilt.push(format!("{left}{right}"));
                i += 2;
            } else {
                rebuilt.push(words[i].clone());
                i += 1;
            }
        }
        words = rebuilt;
        pairs = bigrams(&words);
    }

    out.extend(words);
}
