pub mod analyzer;
pub mod checks;
pub mod config;
pub mod domain_utils;
pub mod error;
pub mod field;
pub mod indicator;
pub mod obfuscator;
pub mod params;
pub mod render;
pub mod scoring;
pub mod url_checker;

pub use analyzer::{AnalysisResult, EmailAnalyzer};
pub use checks::sender::SenderStatus;
pub use config::Config;
pub use error::CheckError;
pub use field::{compute_field, FieldParams, FieldPlot};
pub use indicator::{Indicator, IndicatorKind, Severity};
pub use obfuscator::{ObfuscationReport, Obfuscator};
pub use params::{parse_params, ParamValue, Params};
pub use render::{Context, Language, OutputFormat, Page, Theme};
pub use scoring::{ScoreAggregator, Verdict};
pub use url_checker::{UrlCheckResult, UrlChecker};
