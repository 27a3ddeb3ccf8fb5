pub mod args;

pub use args::{parse_path_list, Args, BackendChoice, Preset, ReportFormat};
