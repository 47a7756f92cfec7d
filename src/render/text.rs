use super::{input_warning, Context, Page, Renderer, Theme};
use crate::analyzer::AnalysisResult;
use crate::error::CheckError;
use crate::field::{linspace, FieldMode, FieldPlot, Polarity};
use crate::indicator::Severity;
use crate::obfuscator::ObfuscationReport;
use crate::scoring::Verdict;
use crate::url_checker::{UrlCheckResult, UrlReason};
use console::Style;
use std::f64::consts::FRAC_PI_4;
use std::fmt::Write;

struct Palette {
    danger: Style,
    warning: Style,
    success: Style,
    heading: Style,
    muted: Style,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                danger: Style::new().red().bright().bold(),
                warning: Style::new().yellow().bright(),
                success: Style::new().green().bright(),
                heading: Style::new().cyan().bright().bold(),
                muted: Style::new().white().dim(),
            },
            Theme::Light => Self {
                danger: Style::new().red().bold(),
                warning: Style::new().magenta(),
                success: Style::new().green(),
                heading: Style::new().blue().bold(),
                muted: Style::new().black().dim(),
            },
        }
    }

    fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::High => &self.danger,
            Severity::Medium => &self.warning,
            Severity::Low => &self.muted,
        }
    }
}

fn page_title(ctx: &Context) -> &'static str {
    match ctx.page {
        Page::EmailChecker => ctx.strings().email_title,
        Page::UrlChecker => ctx.strings().url_title,
        Page::Obfuscator => "Code Obfuscator",
        Page::FieldVisualizer => "Electromagnetic Field Visualizer",
    }
}

fn verdict_badge(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::HighlySuspicious => "🔴",
        Verdict::ModeratelySuspicious => "🟠",
        Verdict::LikelySafe => "🟢",
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🚨",
        Severity::Medium => "⚠️",
        Severity::Low => "ℹ️",
    }
}

/// Direction of an in-plane field vector as one of eight arrows.
fn arrow_glyph(u: f64, v: f64) -> char {
    const GLYPHS: [char; 8] = ['→', '↗', '↑', '↖', '←', '↙', '↓', '↘'];
    if u.hypot(v) < 1e-12 {
        return '·';
    }
    let sector = ((v.atan2(u) / FRAC_PI_4).round() as i64).rem_euclid(8);
    GLYPHS[sector as usize]
}

/// Terminal view of the field: arrows in the xy-slice closest to `z = 0`.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    fn header(out: &mut String, ctx: &Context, palette: &Palette) {
        let _ = writeln!(out, "{}", palette.heading.apply_to(page_title(ctx)));
        let _ = writeln!(out);
    }

    fn slice_map(plot: &FieldPlot) -> Vec<String> {
        let axis = linspace(plot.params.grid);
        let Some(z0) = axis
            .iter()
            .copied()
            .min_by(|a, b| a.abs().total_cmp(&b.abs()))
        else {
            return Vec::new();
        };
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;

        axis.iter()
            .rev()
            .map(|&y| {
                axis.iter()
                    .map(|&x| {
                        plot.samples
                            .iter()
                            .find(|s| {
                                close(s.position[0], x)
                                    && close(s.position[1], y)
                                    && close(s.position[2], z0)
                            })
                            .map(|s| arrow_glyph(s.vector[0], s.vector[1]))
                            .unwrap_or('●')
                    })
                    .flat_map(|glyph| [glyph, ' '])
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

impl Renderer for TextRenderer {
    fn analysis(&self, ctx: &Context, result: &AnalysisResult) -> String {
        let palette = Palette::for_theme(ctx.theme);
        let strings = ctx.strings();
        let mut out = String::new();
        Self::header(&mut out, ctx, &palette);

        let verdict_style = match result.verdict {
            Verdict::HighlySuspicious => &palette.danger,
            Verdict::ModeratelySuspicious => &palette.warning,
            Verdict::LikelySafe => &palette.success,
        };
        let _ = writeln!(
            out,
            "📊 {}: {} {}",
            strings.analysis_results,
            verdict_badge(result.verdict),
            verdict_style.apply_to(result.verdict.label())
        );
        let _ = writeln!(out, "   {}: {}/100", strings.phishing_score, result.score);
        let _ = writeln!(
            out,
            "   {}: {}",
            strings.detected_sender,
            result.sender.as_deref().unwrap_or(strings.sender_not_found)
        );
        let _ = writeln!(out);

        if result.indicators.is_empty() {
            let _ = writeln!(out, "✅ {}", palette.success.apply_to(strings.no_indicators));
        } else {
            let _ = writeln!(out, "{}", palette.heading.apply_to(strings.indicators));
            for indicator in &result.indicators {
                let style = palette.severity(indicator.severity);
                let _ = writeln!(
                    out,
                    "  {} {} ({} Severity)",
                    severity_icon(indicator.severity),
                    style.apply_to(indicator.kind.title()),
                    indicator.severity.as_str().to_uppercase()
                );
                let _ = writeln!(out, "     {}", indicator.message);
            }
        }

        if result.is_clean_trusted_sender() {
            let _ = writeln!(out, "🛡️ {}", palette.success.apply_to(strings.safe_sender));
        }

        out
    }

    fn url_check(&self, ctx: &Context, result: &UrlCheckResult) -> String {
        let palette = Palette::for_theme(ctx.theme);
        let strings = ctx.strings();
        let mut out = String::new();
        Self::header(&mut out, ctx, &palette);

        let _ = writeln!(out, "🔗 URL: {}", result.url);
        for reason in &result.reasons {
            let line = match reason {
                UrlReason::KeywordDetected => format!(
                    "{} [{}]",
                    strings.keyword_detected,
                    result.matched_keywords.join(", ")
                ),
                UrlReason::TldDetected => {
                    format!("{} '{}'", strings.tld_detected, result.tail_segment())
                }
                UrlReason::HeuristicFlag => strings.heuristics_warning.to_string(),
            };
            let _ = writeln!(out, "  {}", palette.warning.apply_to(line));
        }

        if result.flagged {
            let _ = writeln!(out, "{}", palette.danger.apply_to(strings.url_suspicious));
        } else {
            let _ = writeln!(out, "{}", palette.success.apply_to(strings.url_safe));
        }
        out
    }

    fn obfuscation(&self, ctx: &Context, report: &ObfuscationReport) -> String {
        let palette = Palette::for_theme(ctx.theme);
        let mut out = String::new();
        Self::header(&mut out, ctx, &palette);

        let params = &report.input_parameters;
        let _ = writeln!(out, "{}", palette.heading.apply_to("1. Input Parameters"));
        let _ = writeln!(out, "   File: {}", params.original_filename);
        let _ = writeln!(out, "   Platform: {}", params.platform);
        let _ = writeln!(out, "   Obfuscation Level: {}", params.obfuscation_level);
        if params.custom_params.is_empty() {
            let _ = writeln!(out, "   Custom Parameters: {}", palette.muted.apply_to("none"));
        } else {
            let _ = writeln!(out, "   Custom Parameters:");
            for (key, value) in &params.custom_params {
                let _ = writeln!(out, "     {key} = {value}");
            }
        }

        let _ = writeln!(out, "{}", palette.heading.apply_to("2. Output File Attributes"));
        let _ = writeln!(out, "   Size: {} bytes", report.output_file_size);
        let _ = writeln!(out, "   Method: {}", report.method_of_obfuscation);
        let _ = writeln!(
            out,
            "{} {}",
            palette.heading.apply_to("3. Bogus Code Generated:"),
            report.bogus_code_generated
        );
        let _ = writeln!(
            out,
            "{} {}",
            palette.heading.apply_to("4. Cycles Completed:"),
            report.cycles_completed
        );
        let _ = writeln!(
            out,
            "{} {}",
            palette.heading.apply_to("5. Strings Obfuscated:"),
            report.string_obfuscations
        );
        let _ = writeln!(
            out,
            "{} {}",
            palette.heading.apply_to("6. Fake Loops Inserted:"),
            report.fake_loops_inserted
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "📦 {} {}",
            palette.success.apply_to("Output written to"),
            report.output_file.display()
        );
        out
    }

    fn field(&self, ctx: &Context, plot: &FieldPlot) -> String {
        let palette = Palette::for_theme(ctx.theme);
        let mut out = String::new();
        Self::header(&mut out, ctx, &palette);

        let params = &plot.params;
        let mode = match params.mode {
            FieldMode::PointCharge => "Point Charge",
            FieldMode::Dipole => "Oscillating Dipole",
        };
        let _ = writeln!(out, "⚡ Mode: {mode}");
        let _ = writeln!(
            out,
            "   Charge: {:.2}  Scale: {:.2}  Grid: {}  Time: {:.2}",
            params.charge, params.scale, params.grid, params.time
        );
        let _ = writeln!(
            out,
            "   Arrows: {}  Normalization: {:.4e}  Longest arrow: {:.3}",
            plot.samples.len(),
            plot.normalization,
            plot.max_arrow_length()
        );

        for marker in &plot.charges {
            let (symbol, style) = match marker.polarity {
                Polarity::Positive => ("+", &palette.danger),
                Polarity::Negative => ("-", &palette.heading),
            };
            let _ = writeln!(
                out,
                "   Charge {} at ({:.2}, {:.2}, {:.2})",
                style.apply_to(symbol),
                marker.position[0],
                marker.position[1],
                marker.position[2]
            );
        }

        let _ = writeln!(out);
        for row in Self::slice_map(plot) {
            let _ = writeln!(out, "   {}", palette.muted.apply_to(row));
        }
        out
    }

    fn error(&self, ctx: &Context, error: &CheckError) -> String {
        let palette = Palette::for_theme(ctx.theme);
        match error {
            CheckError::InputMissing { .. } => {
                format!("⚠️ {}", palette.warning.apply_to(input_warning(ctx)))
            }
            CheckError::Io { .. } => format!("❌ {}", palette.danger.apply_to(error)),
        }
    }
}
