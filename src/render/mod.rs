pub mod i18n;
pub mod text;

use crate::analyzer::AnalysisResult;
use crate::error::CheckError;
use crate::field::FieldPlot;
use crate::obfuscator::ObfuscationReport;
use crate::url_checker::UrlCheckResult;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;
use std::str::FromStr;

pub use text::TextRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
    Bn,
    Ur,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Te,
        Language::Bn,
        Language::Ur,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Bn => "bn",
            Language::Ur => "ur",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            log::warn!("Unsupported language '{code}', falling back to English");
            Language::En
        })
    }
}

/// Config files get the same English fallback as the command line.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code_or_default(&code))
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.code() == code)
            .ok_or_else(|| anyhow::anyhow!("unknown language '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => anyhow::bail!("unknown theme '{other}', expected dark or light"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    EmailChecker,
    UrlChecker,
    Obfuscator,
    FieldVisualizer,
}

/// Presentation settings handed to every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub language: Language,
    pub theme: Theme,
    pub page: Page,
}

impl Context {
    pub fn new(language: Language, theme: Theme, page: Page) -> Self {
        Self {
            language,
            theme,
            page,
        }
    }

    pub fn strings(&self) -> &'static i18n::Strings {
        i18n::strings(self.language)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unsupported format '{other}', use text or json"),
        }
    }
}

pub trait Renderer {
    fn analysis(&self, ctx: &Context, result: &AnalysisResult) -> String;
    fn url_check(&self, ctx: &Context, result: &UrlCheckResult) -> String;
    fn obfuscation(&self, ctx: &Context, report: &ObfuscationReport) -> String;
    fn field(&self, ctx: &Context, plot: &FieldPlot) -> String;
    /// Message for a rejected submission or a failed copy.
    fn error(&self, ctx: &Context, error: &CheckError) -> String;
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Localized warning text for missing input on the current page.
pub fn input_warning(ctx: &Context) -> &'static str {
    let strings = ctx.strings();
    match ctx.page {
        Page::EmailChecker => strings.no_content_warning,
        Page::UrlChecker => strings.url_warning,
        Page::Obfuscator => "Please upload a C or C++ source file to proceed.",
        Page::FieldVisualizer => "Nothing to render.",
    }
}

#[derive(Debug, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    fn pretty<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
    }
}

impl Renderer for JsonRenderer {
    fn analysis(&self, _ctx: &Context, result: &AnalysisResult) -> String {
        Self::pretty(result)
    }

    fn url_check(&self, _ctx: &Context, result: &UrlCheckResult) -> String {
        Self::pretty(result)
    }

    fn obfuscation(&self, _ctx: &Context, report: &ObfuscationReport) -> String {
        Self::pretty(report)
    }

    fn field(&self, _ctx: &Context, plot: &FieldPlot) -> String {
        Self::pretty(plot)
    }

    fn error(&self, ctx: &Context, error: &CheckError) -> String {
        let value = match error {
            CheckError::InputMissing { .. } => json!({ "warning": input_warning(ctx) }),
            CheckError::Io { .. } => json!({ "error": error.to_string() }),
        };
        Self::pretty(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::EmailAnalyzer;
    use crate::config::Config;

    fn ctx(page: Page) -> Context {
        Context::new(Language::En, Theme::Dark, page)
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hi);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::from_code_or_default("fr"), Language::En);
        assert_eq!(Language::from_code_or_default("bn"), Language::Bn);
    }

    #[test]
    fn test_theme_and_format_parsing() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_input_warning_follows_page_and_language() {
        assert_eq!(
            input_warning(&ctx(Page::UrlChecker)),
            "Please enter a URL to check."
        );
        let hindi = Context::new(Language::Hi, Theme::Light, Page::EmailChecker);
        assert_eq!(
            input_warning(&hindi),
            "कृपया विश्लेषण के लिए कुछ ईमेल सामग्री पेस्ट करें।"
        );
    }

    #[test]
    fn test_json_analysis_shape() {
        let analyzer = EmailAnalyzer::new(&Config::default()).unwrap();
        let result =
            analyzer.analyze("From: support@gmai1.com\nYour account is suspended, act now!");
        let rendered = JsonRenderer.analysis(&ctx(Page::EmailChecker), &result);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["sender"], "support@gmai1.com");
        assert_eq!(value["score"], 60);
        assert_eq!(value["verdict"], "moderately_suspicious");
        assert_eq!(value["indicators"][0]["kind"], "suspicious_sender");
        assert_eq!(value["indicators"][1]["severity"], "medium");
    }

    #[test]
    fn test_json_error_shapes() {
        let warning = JsonRenderer.error(
            &ctx(Page::EmailChecker),
            &CheckError::input_missing("email content"),
        );
        let value: serde_json::Value = serde_json::from_str(&warning).unwrap();
        assert_eq!(value["warning"], "Please paste some email content to analyze.");

        let failure = JsonRenderer.error(
            &ctx(Page::Obfuscator),
            &CheckError::io("out.bin", std::io::Error::other("disk full")),
        );
        let value: serde_json::Value = serde_json::from_str(&failure).unwrap();
        assert!(value["error"].as_str().unwrap().contains("disk full"));
    }
}
