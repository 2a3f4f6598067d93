//! In-memory snapshot of the player-season table
//!
//! A `PlayerTable` is built once per session and never mutated. Filters return
//! new tables over the same schema; aggregations return plain vectors of
//! `GroupTotal`.

use std::io::Read;
use std::sync::Arc;
use ahash::AHashMap;
use arrow::array::{Array, ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::compute::{cast, filter_record_batch};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use nfl_core::{columns, GroupKey, Metric};

use crate::aggregate::{GroupTotal, GroupValue};
use crate::sources::read_csv;
use crate::DataError;

/// Immutable player-season table
#[derive(Debug, Clone)]
pub struct PlayerTable {
    batch: RecordBatch,
    source_name: String,
}

impl PlayerTable {
    /// Parse a table from CSV text with a header row
    pub fn from_csv_reader<R: Read>(source_name: impl Into<String>, reader: R) -> Result<Self, DataError> {
        let batch = read_csv(reader)?;
        Ok(Self::from_batch(source_name, batch))
    }

    pub fn from_batch(source_name: impl Into<String>, batch: RecordBatch) -> Self {
        Self {
            batch,
            source_name: source_name.into(),
        }
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Where the rows came from
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&ArrayRef, DataError> {
        self.batch
            .column_by_name(name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// Values of a numeric column as f64, nulls preserved
    pub fn numeric_values(&self, name: &str) -> Result<Float64Array, DataError> {
        column_f64(&self.batch, name)
    }

    /// Rows whose player name contains `query`, ignoring case.
    /// An empty query keeps every row.
    pub fn filter_by_name(&self, query: &str) -> Result<PlayerTable, DataError> {
        if query.is_empty() {
            return Ok(self.clone());
        }

        let names = text_column(self.column(columns::PLAYER_NAME)?)?;
        let needle = query.to_lowercase();
        let mask: BooleanArray = names
            .iter()
            .map(|name| Some(name.map_or(false, |n| n.to_lowercase().contains(&needle))))
            .collect();

        let filtered = self.with_mask(&mask)?;
        tracing::debug!("Name filter '{}' kept {} of {} rows", query, filtered.num_rows(), self.num_rows());
        Ok(filtered)
    }

    /// Rows where `metric` is strictly positive
    pub fn filter_positive_metric(&self, metric: Metric) -> Result<PlayerTable, DataError> {
        self.filter_metric_above(metric, 0.0)
    }

    /// Rows where `metric` is strictly greater than `threshold`. Nulls never pass.
    pub fn filter_metric_above(&self, metric: Metric, threshold: f64) -> Result<PlayerTable, DataError> {
        let values = self.numeric_values(metric.column())?;
        let mask: BooleanArray = values
            .iter()
            .map(|v| Some(v.map_or(false, |v| v > threshold)))
            .collect();

        let filtered = self.with_mask(&mask)?;
        tracing::debug!(
            "{} > {} kept {} of {} rows",
            metric.column(),
            threshold,
            filtered.num_rows(),
            self.num_rows()
        );
        Ok(filtered)
    }

    /// The `n` groups with the largest sums of `metric`, largest first.
    /// Equal sums are ordered by ascending key.
    pub fn top_n(&self, metric: Metric, key: GroupKey, n: usize) -> Result<Vec<GroupTotal>, DataError> {
        let mut totals = self.group_sums(metric, key)?;
        totals.sort_by(|a, b| b.total.total_cmp(&a.total).then_with(|| a.key.cmp(&b.key)));
        totals.truncate(n);
        Ok(totals)
    }

    /// Sum of `metric` per group, ordered by ascending key
    pub fn aggregate_by(&self, metric: Metric, key: GroupKey) -> Result<Vec<GroupTotal>, DataError> {
        let mut totals = self.group_sums(metric, key)?;
        totals.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(totals)
    }

    /// Sum of `metric` per season, earliest season first
    pub fn season_aggregate(&self, metric: Metric) -> Result<Vec<GroupTotal>, DataError> {
        self.aggregate_by(metric, GroupKey::Season)
    }

    /// Sum of `metric` over every row, skipping nulls
    pub fn metric_total(&self, metric: Metric) -> Result<f64, DataError> {
        let values = self.numeric_values(metric.column())?;
        Ok(values.iter().flatten().sum())
    }

    fn with_mask(&self, mask: &BooleanArray) -> Result<PlayerTable, DataError> {
        let batch = filter_record_batch(&self.batch, mask)?;
        Ok(Self::from_batch(self.source_name.clone(), batch))
    }

    fn group_sums(&self, metric: Metric, key: GroupKey) -> Result<Vec<GroupTotal>, DataError> {
        let keys = group_values(self.column(key.column())?)?;
        let values = self.numeric_values(metric.column())?;

        let mut sums: AHashMap<GroupValue, f64> = AHashMap::new();
        for (group, value) in keys.into_iter().zip(values.iter()) {
            // Rows without a key are not grouped
            let Some(group) = group else { continue };
            let entry = sums.entry(group).or_insert(0.0);
            if let Some(v) = value {
                *entry += v;
            }
        }

        tracing::debug!("Grouped {} by {} into {} groups", metric.column(), key.column(), sums.len());

        Ok(sums
            .into_iter()
            .map(|(key, total)| GroupTotal { key, total })
            .collect())
    }
}

/// Numeric column of any batch as f64, nulls and NaN as null
pub fn column_f64(batch: &RecordBatch, name: &str) -> Result<Float64Array, DataError> {
    let array = batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
    numeric_column(array, name)
}

/// Display text of every cell in a column, nulls as `None`
pub fn column_labels(batch: &RecordBatch, name: &str) -> Result<Vec<Option<String>>, DataError> {
    let array = batch
        .column_by_name(name)
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))?;
    Ok(group_values(array)?
        .into_iter()
        .map(|v| v.map(|v| v.to_string()))
        .collect())
}

fn numeric_column(array: &ArrayRef, name: &str) -> Result<Float64Array, DataError> {
    match array.data_type() {
        DataType::Float64
        | DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32 => {
            let casted = cast(array, &DataType::Float64)?;
            let values = casted
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| DataError::NotNumeric(name.to_string()))?;
            // NaN counts as missing
            Ok(values.iter().map(|v| v.filter(|v| !v.is_nan())).collect())
        }
        _ => Err(DataError::NotNumeric(name.to_string())),
    }
}

fn text_column(array: &ArrayRef) -> Result<StringArray, DataError> {
    let casted = cast(array, &DataType::Utf8)?;
    Ok(casted
        .as_any()
        .downcast_ref::<StringArray>()
        .cloned()
        .unwrap_or_else(|| StringArray::from(Vec::<Option<&str>>::new())))
}

fn group_values(array: &ArrayRef) -> Result<Vec<Option<GroupValue>>, DataError> {
    if let Some(ints) = array.as_any().downcast_ref::<Int64Array>() {
        return Ok(ints.iter().map(|v| v.map(GroupValue::Int)).collect());
    }
    if let Some(strings) = array.as_any().downcast_ref::<StringArray>() {
        return Ok(strings
            .iter()
            .map(|v| v.map(|s| GroupValue::Text(s.to_string())))
            .collect());
    }

    let mut values = Vec::with_capacity(array.len());
    for i in 0..array.len() {
        if array.is_null(i) {
            values.push(None);
        } else {
            values.push(Some(GroupValue::Text(array_value_to_string(array, i)?)));
        }
    }
    Ok(values)
}

/// Shared handle to the session's table
pub type SharedTable = Arc<PlayerTable>;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::sources::DataSource;

    const SAMPLE: &str = "\
player_name,season,passing_yards,receiving_yards,rushing_yards,total_yards,fantasy_points_ppr
Tom Brady,2019,4057,0,34,4091,262.7
Tom Brady,2020,4633,0,6,4639,337.3
Derrick Henry,2019,0,206,1540,1746,294.6
Derrick Henry,2020,0,114,2027,2141,333.3
Davante Adams,2020,0,1374,0,1374,358.4
Mark Brady,2020,0,,12,12,
,2021,10,0,0,10,1.0
";

    fn sample() -> PlayerTable {
        PlayerTable::from_csv_reader("test", SAMPLE.as_bytes()).unwrap()
    }

    fn names(table: &PlayerTable) -> Vec<Option<String>> {
        let array = table.column(columns::PLAYER_NAME).unwrap();
        let names = array.as_any().downcast_ref::<StringArray>().unwrap();
        names.iter().map(|n| n.map(str::to_string)).collect()
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive_substring() {
        let table = sample();
        for query in ["brady", "BRADY", "Henry", "a", "zzz", " "] {
            let filtered = table.filter_by_name(query).unwrap();
            let expected: Vec<Option<String>> = names(&table)
                .into_iter()
                .filter(|n| n.as_ref().map_or(false, |n| n.to_lowercase().contains(&query.to_lowercase())))
                .collect();
            assert_eq!(names(&filtered), expected, "query {query:?}");
        }
        assert_eq!(table.filter_by_name("brady").unwrap().num_rows(), 3);
    }

    #[test]
    fn test_empty_query_keeps_all_rows() {
        let table = sample();
        let filtered = table.filter_by_name("").unwrap();
        assert_eq!(filtered.num_rows(), table.num_rows());
        assert_eq!(names(&filtered), names(&table));
    }

    #[test]
    fn test_no_match_gives_empty_table() {
        let filtered = sample().filter_by_name("z").unwrap();
        assert!(filtered.is_empty());
        assert_eq!(filtered.batch().num_columns(), 7);
    }

    #[test]
    fn test_positive_metric_filter() {
        let table = sample();
        let filtered = table.filter_positive_metric(Metric::ReceivingYards).unwrap();
        let values = filtered.numeric_values(columns::RECEIVING_YARDS).unwrap();
        assert_eq!(filtered.num_rows(), 3);
        assert!(values.iter().all(|v| v.map_or(false, |v| v > 0.0)));

        let passing = table.filter_positive_metric(Metric::PassingYards).unwrap();
        assert_eq!(passing.num_rows(), 3);
    }

    #[test]
    fn test_threshold_is_strict() {
        let filtered = sample().filter_metric_above(Metric::RushingYards, 1540.0).unwrap();
        assert_eq!(filtered.num_rows(), 1);
    }

    #[test]
    fn test_top_n_size_and_order() {
        let table = sample();
        for n in [0, 1, 2, 3, 10] {
            let top = table.top_n(Metric::TotalYards, GroupKey::PlayerName, n).unwrap();
            // four named players, the unnamed row is not grouped
            assert_eq!(top.len(), n.min(4));
            assert!(top.windows(2).all(|w| w[0].total >= w[1].total));
        }

        let top = table.top_n(Metric::TotalYards, GroupKey::PlayerName, 1).unwrap();
        assert_eq!(top[0].key, GroupValue::Text("Tom Brady".to_string()));
        assert_eq!(top[0].total, 8730.0);
    }

    #[test]
    fn test_top_n_ties_break_by_key() {
        let csv = "player_name,season,rushing_yards\nB,2020,50\nA,2020,50\nC,2020,10\n";
        let table = PlayerTable::from_csv_reader("ties", csv.as_bytes()).unwrap();
        let top = table.top_n(Metric::RushingYards, GroupKey::PlayerName, 2).unwrap();
        assert_eq!(top[0].key, GroupValue::Text("A".to_string()));
        assert_eq!(top[1].key, GroupValue::Text("B".to_string()));
    }

    #[test]
    fn test_season_aggregate_conserves_total() {
        let table = sample();
        for metric in Metric::ALL {
            let per_season = table.season_aggregate(metric).unwrap();
            let summed: f64 = per_season.iter().map(|g| g.total).sum();
            assert!((summed - table.metric_total(metric).unwrap()).abs() < 1e-9, "{metric}");
        }

        let seasons: Vec<_> = table
            .season_aggregate(Metric::FantasyPointsPpr)
            .unwrap()
            .into_iter()
            .map(|g| g.key)
            .collect();
        assert_eq!(seasons, vec![GroupValue::Int(2019), GroupValue::Int(2020), GroupValue::Int(2021)]);
    }

    #[test]
    fn test_all_null_group_still_listed() {
        let csv = "player_name,season,fantasy_points_ppr\nA,2020,\nB,2021,3.5\n";
        let table = PlayerTable::from_csv_reader("nulls", csv.as_bytes()).unwrap();
        let totals = table.season_aggregate(Metric::FantasyPointsPpr).unwrap();
        assert_eq!(totals[0], GroupTotal { key: GroupValue::Int(2020), total: 0.0 });
        assert_eq!(totals[1].total, 3.5);
    }

    #[test]
    fn test_top_one_player() {
        let csv = "player_name,season,rushing_yards\nA,2020,100\nB,2020,50\n";
        let table = PlayerTable::from_csv_reader("a", csv.as_bytes()).unwrap();
        let top = table.top_n(Metric::RushingYards, GroupKey::PlayerName, 1).unwrap();
        assert_eq!(top, vec![GroupTotal { key: GroupValue::Text("A".to_string()), total: 100.0 }]);
    }

    #[test]
    fn test_single_season_sum() {
        let csv = "player_name,season,rushing_yards\nA,2020,100\nB,2020,50\n";
        let table = PlayerTable::from_csv_reader("b", csv.as_bytes()).unwrap();
        let totals = table.season_aggregate(Metric::RushingYards).unwrap();
        assert_eq!(totals, vec![GroupTotal { key: GroupValue::Int(2020), total: 150.0 }]);
    }

    #[test]
    fn test_zero_row_dropped_from_filter_but_counted_in_sums() {
        let csv = "player_name,season,rushing_yards\nA,2020,100\nB,2020,0\nB,2021,30\n";
        let table = PlayerTable::from_csv_reader("d", csv.as_bytes()).unwrap();

        let positive = table.filter_positive_metric(Metric::RushingYards).unwrap();
        assert_eq!(positive.num_rows(), 2);

        let top = table.top_n(Metric::RushingYards, GroupKey::PlayerName, 10).unwrap();
        assert_eq!(top.len(), 2);
        let seasons = table.season_aggregate(Metric::RushingYards).unwrap();
        assert_eq!(seasons[0].total, 100.0);
    }

    #[test]
    fn test_missing_column_reported() {
        let table = PlayerTable::from_csv_reader("m", "player_name,season\nA,2020\n".as_bytes()).unwrap();
        match table.filter_positive_metric(Metric::PassingYards) {
            Err(DataError::MissingColumn(name)) => assert_eq!(name, "passing_yards"),
            other => panic!("unexpected result: {other:?}"),
        }
        let err = table.top_n(Metric::TotalYards, GroupKey::PlayerName, 3).unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_text_column_is_not_numeric() {
        let table = sample();
        assert!(matches!(
            table.numeric_values(columns::PLAYER_NAME),
            Err(DataError::NotNumeric(_))
        ));
    }

    struct StaticSource(&'static str);

    #[async_trait]
    impl DataSource for StaticSource {
        async fn load(&self) -> Result<PlayerTable, DataError> {
            PlayerTable::from_csv_reader(self.source_name(), self.0.as_bytes())
        }

        fn source_name(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn test_load_through_data_source() {
        let table = StaticSource(SAMPLE).load().await.unwrap();
        assert_eq!(table.num_rows(), 7);
        assert_eq!(table.source_name(), "static");

        let broken = StaticSource("a,b\n1,2,3\n").load().await.unwrap_err();
        assert!(broken.is_fatal());
    }
}
