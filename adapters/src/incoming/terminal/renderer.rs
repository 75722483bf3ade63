use std::io::{self, Write};

use domain::result::{ImagePreview, RenderedResult};

/// Writes submission results and preview lines to the terminal.
pub struct ResultRenderer<W: Write> {
    out: W,
}

impl<W: Write> ResultRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render_result(&mut self, result: &RenderedResult) -> io::Result<()> {
        match result {
            RenderedResult::Image { path } => {
                writeln!(self.out, "Processed image saved to {}", path.display())
            }
            RenderedResult::Listing { body } => writeln!(self.out, "{body}"),
            RenderedResult::Error { message } => {
                writeln!(
                    self.out,
                    "Image processing failed: {message}. Please try again."
                )
            }
        }
    }

    pub fn render_preview(&mut self, preview: &ImagePreview) -> io::Result<()> {
        writeln!(
            self.out,
            "Preview: {}x{} {} ({} bytes)",
            preview.width, preview.height, preview.format, preview.byte_len
        )
    }

    pub fn render_notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use domain::result::ImageFormatName;
    use std::path::PathBuf;

    fn rendered(result: &RenderedResult) -> String {
        let mut out = Vec::new();
        ResultRenderer::new(&mut out).render_result(result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn image_results_point_at_the_stored_file() {
        let text = rendered(&RenderedResult::Image {
            path: PathBuf::from("processed/processed-0001.png"),
        });
        assert_eq!(text, "Processed image saved to processed/processed-0001.png\n");
    }

    #[test]
    fn error_results_use_the_failure_message() {
        let text = rendered(&RenderedResult::Error {
            message: "HTTP 500: Internal Server Error".to_string(),
        });
        assert_eq!(
            text,
            "Image processing failed: HTTP 500: Internal Server Error. Please try again.\n"
        );
    }

    #[test]
    fn listings_pass_through_verbatim() {
        let text = rendered(&RenderedResult::Listing {
            body: "{\n  \"fonts\": []\n}".to_string(),
        });
        assert_eq!(text, "{\n  \"fonts\": []\n}\n");
    }

    #[test]
    fn previews_show_dimensions_format_and_size() {
        let mut out = Vec::new();
        ResultRenderer::new(&mut out)
            .render_preview(&ImagePreview {
                width: 640,
                height: 480,
                format: ImageFormatName("png"),
                byte_len: 1234,
            })
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Preview: 640x480 png (1234 bytes)\n"
        );
    }
}
