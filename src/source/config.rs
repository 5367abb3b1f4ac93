pub struct Config {
    pub stations_file_name: String,
    pub trips_file_name: String,
    /// Entry to read when the trips file is a zip archive.
    /// The first `.csv` entry is used when unset.
    pub trips_entry_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_file_name: "stations.json".into(),
            trips_file_name: "trips.csv".into(),
            trips_entry_name: None,
        }
    }
}
