//! PNG rasterization of rendered SVG via resvg

use std::path::Path;

use log::debug;
use resvg::{tiny_skia, usvg};

use super::RenderError;

/// Rasterize an SVG document to PNG bytes.
///
/// The configured font file (if any) is loaded into the rasterizer's font
/// database alongside the system fonts so `<text>` elements resolve to the
/// same face the layout was measured with.
pub fn rasterize(
    svg: &str,
    font_path: Option<&Path>,
    width: f64,
    height: f64,
) -> Result<Vec<u8>, RenderError> {
    if width < 1.0 || height < 1.0 {
        return Err(RenderError::Canvas { width, height });
    }

    let mut opt = usvg::Options::default();
    if let Some(path) = font_path {
        opt.fontdb_mut().load_font_file(path).map_err(|e| {
            RenderError::Font(crate::font::FontError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
    }
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| RenderError::Encode(e.to_string()))?;
    let size = tree.size().to_int_size();
    debug!("rasterizing {}x{} canvas", size.width(), size.height());

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(
        RenderError::Canvas { width, height },
    )?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20"><line x1="0" y1="0" x2="40" y2="20" stroke="#000"/></svg>"##;

    #[test]
    fn test_rasterize_produces_png_bytes() {
        let png = rasterize(MINIMAL_SVG, None, 40.0, 20.0).unwrap();
        // PNG signature
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn test_degenerate_canvas_rejected() {
        let err = rasterize(MINIMAL_SVG, None, 0.0, 20.0).unwrap_err();
        assert!(matches!(err, RenderError::Canvas { .. }));
    }

    #[test]
    fn test_invalid_svg_rejected() {
        let err = rasterize("<svg", None, 40.0, 20.0).unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
    }
}
