use crate::errors::DataError;
use crate::replay::HistoricalRecord;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
pub struct ReplayLog {
    pub n_arms: usize,
    pub records: Vec<HistoricalRecord>,
}

/// Reads `(arm, reward)` rows, header first. Columns are taken by position.
pub fn read_log<R: Read>(reader: R) -> Result<ReplayLog, DataError> {
    let records = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize::<(usize, f64)>()
        .map(|row| row.map(HistoricalRecord::from))
        .collect::<Result<Vec<_>, _>>()?;

    let n_arms = records
        .iter()
        .map(|record| record.arm_id)
        .collect::<HashSet<_>>()
        .len();

    if n_arms == 0 {
        return Err(DataError::NoArms);
    }

    Ok(ReplayLog { n_arms, records })
}

pub fn load_log<P: AsRef<Path>>(path: P) -> Result<ReplayLog, DataError> {
    let path = path.as_ref();
    let log = read_log(File::open(path)?)?;

    info!(
        path = ?path,
        records = log.records.len(),
        n_arms = log.n_arms,
        "Loaded replay log"
    );

    Ok(log)
}
