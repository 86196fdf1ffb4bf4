//! ECO opening codes: classification of raw header values into table keys,
//! and human-readable opening names loaded from a local `eco.json`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Shared bucket for games whose ECO value is empty or not a real code.
pub const UNCLASSIFIED: &str = "U00";

/// True for a canonical three-character code: letter `A`-`E` then two digits.
/// Exact case, no trimming; the normalizer passes values through verbatim.
pub fn is_eco_code(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 3 && (b'A'..=b'E').contains(&b[0]) && b[1].is_ascii_digit() && b[2].is_ascii_digit()
}

/// Table key for a raw ECO value: canonical codes key themselves, everything
/// else (empty, `?`, nonstandard variants) lands in [`UNCLASSIFIED`].
pub fn table_key(raw: &str) -> &str {
    if is_eco_code(raw) {
        raw
    } else {
        UNCLASSIFIED
    }
}

#[derive(Debug, Deserialize)]
struct EcoEntry {
    eco: String,
    name: String,
}

/// Opening names keyed by ECO code.
///
/// `eco.json` lists one entry per named variation, so several entries share
/// a code; the first one (the main line) wins.
#[derive(Debug, Default)]
pub struct EcoNames {
    names: HashMap<String, String>,
}

impl EcoNames {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    fn parse(raw: &str) -> anyhow::Result<Self> {
        let entries: Vec<EcoEntry> = serde_json::from_str(raw)?;
        let mut names = HashMap::with_capacity(entries.len());
        for e in entries {
            names.entry(e.eco).or_insert(e.name);
        }
        Ok(Self { names })
    }

    pub fn name_of(&self, eco: &str) -> Option<&str> {
        self.names.get(eco).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
