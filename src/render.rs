use crate::error::RenderError;
use tiny_skia::{Pixmap, Transform};

/// Renders SVG bytes onto a `size`x`size` canvas and returns PNG bytes.
///
/// The drawing is scaled uniformly to fit the square and centered along the
/// shorter axis, so non-square sources keep their aspect ratio. Text is
/// shaped with the system fonts.
pub fn rasterize(source: &[u8], size: u32) -> Result<Vec<u8>, RenderError> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(source, &opts)?;

    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::Canvas { size })?;
    resvg::render(&tree, fit_transform(tree.size(), size), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(Box::new(e)))
}

fn fit_transform(svg_size: usvg::Size, size: u32) -> Transform {
    let target = size as f32;
    let scale_x = target / svg_size.width();
    let scale_y = target / svg_size.height();
    let scale = scale_x.min(scale_y); // Maintain aspect ratio

    let dx = (target - svg_size.width() * scale) / 2.0;
    let dy = (target - svg_size.height() * scale) / 2.0;
    Transform::from_row(scale, 0.0, 0.0, scale, dx, dy)
}
