//! # Build Guide Report
//!
//! Renders a design record into a multi-page PDF build guide using Typst.
//!
//! ## Architecture
//!
//! - The document preamble is an embedded template with `{{PLACEHOLDER}}`s
//! - Page sections ([`pages`]) and diagrams ([`diagrams`]) emit Typst markup
//!   as strings; everything user-visible goes through [`escape_typst`]
//! - Compilation happens in memory against the fonts bundled in
//!   `typst-assets`; nothing is read from disk
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use forge_core::calculations::compute_specs;
//! use forge_core::input::ChamberInput;
//! use forge_core::report::{render_build_guide, ReportOptions};
//!
//! let specs = compute_specs(&ChamberInput::default());
//! let pdf_bytes = render_build_guide(&specs, &ReportOptions::default())?;
//! std::fs::write("Forge_Build_Guide_504ci.pdf", pdf_bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod content;
pub mod diagrams;
pub mod pages;

use chrono::Datelike;
use once_cell::sync::Lazy;
use tracing::{debug, info, warn};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::calculations::ForgeSpecs;
use crate::errors::{ForgeError, ForgeResult};
use crate::formulas::formulas_appendix_typst;

/// What goes into the rendered guide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Log Typst warnings and compile detail
    pub verbose: bool,
    /// Append the formula reference with this design's values
    pub formulas_appendix: bool,
}

// ============================================================================
// Typst World Implementation
// ============================================================================

/// Fonts bundled with typst-assets, parsed once per process.
static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    let mut fonts = Vec::new();
    for font_bytes in typst_assets::fonts() {
        let buffer = Bytes::new(font_bytes.to_vec());
        for font in Font::iter(buffer) {
            fonts.push(font);
        }
    }
    debug!(count = fonts.len(), "loaded bundled fonts");
    fonts
});

/// A minimal Typst world with a single in-memory source.
struct GuideWorld {
    main: Source,
    book: LazyHash<FontBook>,
    library: LazyHash<Library>,
    /// Date of the design record, so the document is reproducible
    today: Option<Datetime>,
}

impl GuideWorld {
    fn new(source: String, specs: &ForgeSpecs) -> Self {
        let date = specs.generated_timestamp.date_naive();
        GuideWorld {
            main: Source::detached(source),
            book: LazyHash::new(FontBook::from_fonts(FONTS.iter())),
            library: LazyHash::new(Library::default()),
            today: Datetime::from_ymd(date.year(), date.month() as u8, date.day() as u8),
        }
    }
}

impl World for GuideWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        self.today
    }
}

// ============================================================================
// Document Template
// ============================================================================

const PREAMBLE: &str = r##"
#set document(title: "Ribbon Burner Forge Build Guide ({{VOLUME}} ci)")

#set page(
  paper: "us-letter",
  margin: (top: 0.75in, bottom: 0.75in, left: 0.75in, right: 0.75in),
  header: context {
    if counter(page).get().first() > 1 [
      #align(right)[#text(size: 8pt, fill: gray)[Ribbon Burner Forge: {{VOLUME}} ci]]
    ]
  },
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(2pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 8pt)[{{DIMENSIONS}}]],
      align(right)[#text(size: 8pt)[Page #counter(page).display()]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 10pt)
#set smartquote(enabled: false)
#set par(justify: false)
#set heading(numbering: "1.")
#show heading.where(level: 1): set text(size: 15pt, fill: rgb("#2c3e50"))
#show heading.where(level: 1): set block(below: 10pt)

#let subhead(body) = block(above: 10pt, below: 6pt)[
  #text(size: 11pt, weight: "bold", fill: rgb("#34495e"))[#body]
]

#let warning(body) = block(
  width: 100%,
  fill: rgb("#fdecea"),
  stroke: 1pt + rgb("#c0392b"),
  inset: 8pt,
  radius: 3pt,
)[#body]

"##;

/// Escape text for use inside Typst markup.
///
/// Markup characters are backslash-escaped. A leading `-`, `+` or `=` would
/// start a list or heading, so those are escaped too, as is the second slash
/// of `//`.
pub fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for (i, c) in s.chars().enumerate() {
        match c {
            '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']' | '~' => {
                out.push('\\');
                out.push(c);
            }
            '-' | '+' | '=' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            '/' if prev == Some('/') => out.push_str("\\/"),
            _ => out.push(c),
        }
        prev = Some(c);
    }
    out
}

/// Full Typst source of the build guide. Pure; no compilation.
pub fn build_guide_source(specs: &ForgeSpecs, options: &ReportOptions) -> String {
    let input = &specs.input;
    let dimensions = format!(
        "{} x {} x {} in, {}",
        crate::units::format_trimmed(input.width_in, 2),
        crate::units::format_trimmed(input.height_in, 2),
        crate::units::format_trimmed(input.length_in, 2),
        input.door_config.display_name()
    );

    let mut source = PREAMBLE
        .replace("{{VOLUME}}", &specs.volume_label().to_string())
        .replace("{{DIMENSIONS}}", &escape_typst(&dimensions));

    let sections = [
        pages::title_page(specs),
        pages::contents(),
        pages::safety(),
        pages::design_overview(specs),
        pages::bill_of_materials(specs),
        pages::steel_cut_list(specs),
        pages::body_construction(specs),
        pages::ribbon_burner(specs),
        pages::door_system(specs),
        pages::air_and_gas(specs),
        pages::refractory_and_curing(specs),
        pages::operation(),
        pages::flame_tuning(),
        pages::troubleshooting(),
        pages::maintenance(specs),
    ];
    for section in &sections {
        source.push_str(section);
    }

    if options.formulas_appendix {
        source.push_str(&formulas_appendix_typst(specs));
    }

    source
}

/// Render the build guide to PDF bytes.
///
/// # Errors
///
/// `RenderFailed` if Typst rejects the generated source or PDF export fails.
pub fn render_build_guide(specs: &ForgeSpecs, options: &ReportOptions) -> ForgeResult<Vec<u8>> {
    let source = build_guide_source(specs, options);
    debug!(bytes = source.len(), appendix = options.formulas_appendix, "generated guide source");

    let world = GuideWorld::new(source, specs);
    let warned = typst::compile::<PagedDocument>(&world);

    if options.verbose {
        for warning in &warned.warnings {
            warn!(message = %warning.message, "typst warning");
        }
    }

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        ForgeError::render_failed("compile", error_msgs.join("; "))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        ForgeError::render_failed("pdf export", error_msgs.join("; "))
    })?;

    info!(
        volume_ci = specs.volume_label(),
        pages = document.pages.len(),
        bytes = pdf_bytes.len(),
        "rendered build guide"
    );
    Ok(pdf_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::compute_specs;
    use crate::input::{ChamberInput, DoorConfig};

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_typst("Hello World"), "Hello World");
        assert_eq!(escape_typst("#1 *bold*"), "\\#1 \\*bold\\*");
        assert_eq!(escape_typst("$371.00"), "\\$371.00");
        assert_eq!(escape_typst("~8\""), "\\~8\"");
        assert_eq!(escape_typst("[x]"), "\\[x\\]");
        assert_eq!(escape_typst("a_b"), "a\\_b");
    }

    #[test]
    fn test_escape_line_starts_and_comments() {
        assert_eq!(escape_typst("- item"), "\\- item");
        assert_eq!(escape_typst("+5"), "\\+5");
        assert_eq!(escape_typst("= title"), "\\= title");
        assert_eq!(escape_typst("0-30 PSI"), "0-30 PSI");
        assert_eq!(escape_typst("a//b"), "a/\\/b");
        assert_eq!(escape_typst("1/4\""), "1/4\"");
    }

    #[test]
    fn test_source_has_every_section() {
        let specs = compute_specs(&ChamberInput::default());
        let source = build_guide_source(&specs, &ReportOptions::default());

        assert!(source.contains("#set smartquote(enabled: false)"));
        assert!(source.contains("Ribbon Burner Forge: 504 ci"));
        assert!(source.contains("#outline(title: [Table of Contents], depth: 1)"));
        for title in [
            "= Safety Requirements & Warnings",
            "= Design Overview & Specifications",
            "= Complete Bill of Materials",
            "= Steel Cut List",
            "= Forge Body Construction",
            "= Ribbon Burner Assembly",
            "= Sliding Door System",
            "= Air & Gas Supply Systems",
            "= Refractory Lining & Curing",
            "= Operation Procedures",
            "= Flame Tuning Guide",
            "= Troubleshooting",
            "= Maintenance Schedule",
        ] {
            assert!(source.contains(title), "missing section: {title}");
        }
        assert!(!source.contains("{{"), "unreplaced placeholder");
        assert!(!source.contains("Appendix: Formulas Used"));
    }

    #[test]
    fn test_source_appendix_optional() {
        let specs = compute_specs(&ChamberInput::default());
        let options = ReportOptions {
            formulas_appendix: true,
            ..Default::default()
        };
        let source = build_guide_source(&specs, &options);
        assert!(source.contains("Appendix: Formulas Used"));
    }

    #[test]
    fn test_source_is_deterministic() {
        let specs = compute_specs(&ChamberInput::new(8.0, 6.0, 18.0, 2.0, DoorConfig::FrontAndRear));
        let options = ReportOptions::default();
        assert_eq!(build_guide_source(&specs, &options), build_guide_source(&specs, &options));
    }

    #[test]
    fn test_render_pdf() {
        let specs = compute_specs(&ChamberInput::default());
        let pdf = render_build_guide(&specs, &ReportOptions::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF"), "output is not a PDF");
        assert!(pdf.len() > 1000, "PDF suspiciously small: {} bytes", pdf.len());
    }

    #[test]
    fn test_render_pdf_with_appendix_and_rear_door() {
        let specs = compute_specs(&ChamberInput::new(8.0, 6.0, 18.0, 2.5, DoorConfig::FrontAndRear));
        let options = ReportOptions {
            verbose: true,
            formulas_appendix: true,
        };
        let pdf = render_build_guide(&specs, &options).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
