use crate::error::DocketError;
use crate::extraction::{BBox, PageInfo, PdfDocument, PdfExtractor};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::NamedTempFile;

/// PDF extraction backend using pdftotext and pdfinfo (from poppler-utils).
///
/// Uses `pdfinfo` to probe per-page geometry and `pdftotext -layout` to
/// pull text, page by page, optionally restricted to a crop rectangle.
pub struct PopplerExtractor;

impl PopplerExtractor {
    pub fn new() -> Self {
        PopplerExtractor
    }

    /// Check if the poppler binaries are available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PopplerExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PopplerExtractor {
    fn open(&self, pdf_bytes: &[u8]) -> Result<Box<dyn PdfDocument>, DocketError> {
        // Write PDF bytes to a temp file that lives as long as the document
        let mut tmpfile =
            NamedTempFile::new().map_err(|e| DocketError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| DocketError::Extraction(e.to_string()))?;

        let pages = probe_pages(tmpfile.path())?;
        tracing::debug!(pages = pages.len(), "opened document via pdfinfo");

        Ok(Box::new(PopplerDocument {
            file: tmpfile,
            pages,
        }))
    }

    fn backend_name(&self) -> &str {
        "poppler"
    }
}

struct PopplerDocument {
    file: NamedTempFile,
    pages: Vec<PageInfo>,
}

impl PdfDocument for PopplerDocument {
    fn pages(&self) -> &[PageInfo] {
        &self.pages
    }

    fn extract_text(&self, page: usize, crop: Option<BBox>) -> Result<String, DocketError> {
        let mut cmd = Command::new("pdftotext");
        cmd.arg("-layout")
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string());

        if let Some(bbox) = crop {
            for (flag, value) in crop_args(&bbox) {
                cmd.arg(flag).arg(value.to_string());
            }
        }

        let output = cmd
            .arg(self.file.path())
            .arg("-") // output to stdout
            .output()
            .map_err(map_spawn_err)?;

        if !output.status.success() {
            return Err(tool_failed("pdftotext", &output));
        }

        // pdftotext terminates each page with a form feed
        let text = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\n', '\x0c'])
            .to_string();
        Ok(text)
    }
}

/// Probe page count and per-page dimensions with pdfinfo.
fn probe_pages(pdf_path: &Path) -> Result<Vec<PageInfo>, DocketError> {
    let output = Command::new("pdfinfo")
        .arg("-f")
        .arg("1")
        .arg("-l")
        .arg("100000") // report the size of every page
        .arg(pdf_path)
        .output()
        .map_err(map_spawn_err)?;

    if !output.status.success() {
        // pdfinfo rejecting the file means the document itself is unreadable
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let reason = if stderr.is_empty() {
            "pdfinfo could not read the document".to_string()
        } else {
            stderr
        };
        return Err(DocketError::InvalidDocument(reason));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let pages = parse_pdfinfo_pages(&stdout);
    if pages.is_empty() {
        return Err(DocketError::InvalidDocument(
            "pdfinfo reported no page geometry".into(),
        ));
    }

    Ok(pages)
}

/// Parse `Page  N size: W x H pts` lines from pdfinfo output.
fn parse_pdfinfo_pages(output: &str) -> Vec<PageInfo> {
    let mut pages = Vec::new();

    for line in output.lines() {
        // e.g. ["Page", "3", "size:", "595.276", "x", "841.89", "pts", "(A4)"]
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 || fields[0] != "Page" || fields[2] != "size:" || fields[4] != "x" {
            continue;
        }
        if let (Ok(number), Ok(width), Ok(height)) =
            (fields[1].parse(), fields[3].parse(), fields[5].parse())
        {
            pages.push(PageInfo {
                number,
                width,
                height,
            });
        }
    }

    pages
}

/// Crop flags for pdftotext. Edges are rounded to whole points before
/// widths are taken, so two crops sharing an edge neither overlap nor
/// leave a gap.
fn crop_args(bbox: &BBox) -> [(&'static str, i64); 4] {
    let x = bbox.x0.round() as i64;
    let y = bbox.y0.round() as i64;
    let w = bbox.x1.round() as i64 - x;
    let h = bbox.y1.round() as i64 - y;
    [("-x", x), ("-y", y), ("-W", w), ("-H", h)]
}

fn map_spawn_err(e: std::io::Error) -> DocketError {
    if e.kind() == std::io::ErrorKind::NotFound {
        DocketError::PopplerNotFound
    } else {
        DocketError::Extraction(e.to_string())
    }
}

fn tool_failed(tool: &'static str, output: &std::process::Output) -> DocketError {
    DocketError::ToolFailed {
        tool,
        code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pdfinfo_pages() {
        let output = "\
Title:          Service Report
Pages:          4
Page    1 size: 595.276 x 841.89 pts (A4)
Page    1 rot:  0
Page    2 size: 595.276 x 841.89 pts (A4)
Page    2 rot:  0
Page    3 size: 612 x 792 pts (letter)
Page    3 rot:  0
Page    4 size: 595.276 x 841.89 pts (A4)
File size:      102400 bytes
";
        let pages = parse_pdfinfo_pages(output);
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[2].width, 612.0);
        assert_eq!(pages[2].height, 792.0);
    }

    #[test]
    fn test_parse_pdfinfo_ignores_non_size_lines() {
        let output = "Pages:          2\nPage rot:       0\n";
        assert!(parse_pdfinfo_pages(output).is_empty());
    }

    #[test]
    fn test_crop_args_shared_edge_has_no_overlap() {
        let width = 595.276f32;
        let split = width * 0.5;
        let left = BBox {
            x0: 0.0,
            y0: 0.0,
            x1: split,
            y1: 841.89,
        };
        let right = BBox {
            x0: split,
            y0: 0.0,
            x1: width,
            y1: 841.89,
        };

        let left_args = crop_args(&left);
        let right_args = crop_args(&right);

        let left_end = left_args[0].1 + left_args[2].1; // x + W
        let right_start = right_args[0].1;
        assert_eq!(left_end, right_start);

        let right_end = right_args[0].1 + right_args[2].1;
        assert_eq!(right_end, width.round() as i64);
    }
}
