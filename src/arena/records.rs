//! Results of the contests played during one menu session
//!
//! Records are kept in memory only and vanish with the session.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchRecords {
    results: BTreeMap<u32, String>,
}

impl MatchRecords {
    /// Store a result under the next match number (starting at 1) and return that number
    pub fn record(&mut self, result: impl Into<String>) -> u32 {
        let match_no = self.results.len() as u32 + 1;
        self.results.insert(match_no, result.into());
        match_no
    }

    pub fn get(&self, match_no: u32) -> Option<&str> {
        self.results.get(&match_no).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// (match number, result) in play order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.results.iter().map(|(no, result)| (*no, result.as_str()))
    }
}
