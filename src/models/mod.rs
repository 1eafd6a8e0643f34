pub mod record;
pub mod settings;

pub use record::{RawRecord, Record};
pub use settings::Settings;
