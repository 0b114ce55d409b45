//! Embedded artwork and rasterization helpers

// Square viewBox — shared by the card avatar and the window/taskbar icon
pub const AVATAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><defs><style>.bg{fill:#115e59}.fg{fill:#ccfbf1}</style></defs><rect class="bg" width="200" height="200"/><circle class="fg" cx="100" cy="76" r="34"/><path class="fg" d="m100,122c-39,0-64,21-64,50v28h128v-28c0-29-25-50-64-50z"/></svg>"#;

/// Rasterize the avatar SVG to a square RGBA image at the given size.
pub fn rasterize_avatar(size: u32) -> (Vec<u8>, u32, u32) {
    let tree = resvg::usvg::Tree::from_str(AVATAR_SVG, &resvg::usvg::Options::default()).unwrap();
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size).unwrap();
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    (premul_to_straight(&pixmap), size, size)
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_rasterizes_opaque_square() {
        let (pixels, w, h) = rasterize_avatar(32);
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        // The artwork fills its viewBox, so every pixel is opaque
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}
