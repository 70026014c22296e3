use super::ISequenceRepo;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Mutex;

pub struct InMemorySequenceRepo {
    counters: Mutex<HashMap<(String, NaiveDate), i64>>,
}

impl InMemorySequenceRepo {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySequenceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ISequenceRepo for InMemorySequenceRepo {
    async fn next(&self, prefix: &str, day: NaiveDate) -> anyhow::Result<i64> {
        let mut counters = self.counters.lock().unwrap();
        let value = counters.entry((prefix.to_string(), day)).or_insert(0);
        *value += 1;
        Ok(*value)
    }
}
