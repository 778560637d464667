//! PDF Renderer — draws a computed page flow into PDF bytes.
//!
//! The backend draws with the builtin Helvetica faces, so no font assets
//! are embedded or read from disk. All positioning decisions are made by
//! `layout::flow`; this module only emits.

use std::io::BufWriter;

use chrono::NaiveDate;
use printpdf::{
    BuiltinFont, CustomPdfConformance, Mm, PdfConformance, PdfDocument, PdfLayerReference,
};
use thiserror::Error;

use crate::layout::{lay_out_document, FontFace, PageConfig};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF backend error: {0}")]
    Backend(String),
}

/// Renders a titled document into PDF bytes.
///
/// `footer_date` feeds the "Generated on ..." footer line, passed in by the
/// caller so rendering stays a pure function of its inputs. An empty body
/// produces a single page carrying the title only, not an error.
pub fn render_document(
    title: &str,
    body: &str,
    footer_date: NaiveDate,
    config: &PageConfig,
) -> Result<Vec<u8>, RenderError> {
    let footer = format!("Generated on {}", footer_date.format("%B %d, %Y"));
    let pages = lay_out_document(title, body, &footer, config);

    let page_width = Mm(config.page_width_mm as f64);
    let page_height = Mm(config.page_height_mm as f64);

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, page_width, page_height, "Layer 1");
    // The default conformance wants ICC profiles and XMP metadata; neither
    // serves a generated text document.
    let doc = doc.with_conformance(PdfConformance::Custom(CustomPdfConformance {
        requires_icc_profile: false,
        requires_xmp_metadata: false,
        ..Default::default()
    }));

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Backend(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    for (index, page) in pages.iter().enumerate() {
        let layer: PdfLayerReference = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(page_width, page_height, "Layer 1");
            doc.get_page(page_index).get_layer(layer_index)
        };

        for run in &page.runs {
            let font = match run.face {
                FontFace::Helvetica => &regular,
                FontFace::HelveticaBold => &bold,
            };
            layer.use_text(
                run.text.as_str(),
                run.size_pt as f64,
                Mm(run.x_mm as f64),
                Mm(run.y_mm as f64),
                font,
            );
        }
    }

    let mut bytes: Vec<u8> = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    Ok(bytes)
}
