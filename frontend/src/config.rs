pub struct Config;

impl Config {
    /// Title shown in the document title bar
    pub fn app_title() -> String {
        "Usage Statistics".to_string()
    }

    /// Id of the script element carrying the embedded state blob
    pub fn stats_data_id() -> &'static str {
        "stats-data"
    }

    /// LocalStorage key the opt-out preference persists under
    pub fn optout_storage_key() -> &'static str {
        "optout"
    }
}
