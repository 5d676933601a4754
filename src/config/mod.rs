// Config module
// JSON configuration describing files, columns, fixed amounts and labels

mod settings;

pub use settings::{Columns, Config, FileLocation, FixedAmount, LabelRule};
