mod client;
mod env;

pub use client::ModuleClient;
pub use env::{EnvVars, optional_env_var, parsed_env_var, required_env_var};

use chrono::NaiveDateTime;
use chrono_tz::Tz;

/// Zone the catalog stores its banner schedule in.
pub const CATALOG_TIMEZONE: Tz = chrono_tz::Asia::Ho_Chi_Minh;

/// Wall-clock time in the catalog's local zone, comparable with stored banner dates.
pub fn catalog_now() -> NaiveDateTime {
    chrono::Utc::now().with_timezone(&CATALOG_TIMEZONE).naive_local()
}
