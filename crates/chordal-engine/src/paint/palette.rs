use super::Color;

/// Fixed palette for the capture tool.
///
/// Roles rather than raw colors: a host can substitute its own palette while
/// the session only ever asks for "preview", "committed circle", and so on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    /// Surface clear color.
    pub background: Color,
    /// Transient drag previews (both shapes).
    pub preview: Color,
    /// Committed circle outline.
    pub circle: Color,
    /// Committed line segment.
    pub segment: Color,
    /// Intersection point markers.
    pub marker: Color,
    /// X axis line.
    pub axis_x: Color,
    /// Y axis line.
    pub axis_y: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::opaque(0.1, 0.2, 0.3),
            preview: Color::opaque(0.5, 0.5, 0.5),
            circle: Color::opaque(1.0, 0.0, 1.0),
            segment: Color::opaque(0.0, 1.0, 1.0),
            marker: Color::opaque(1.0, 1.0, 0.0),
            axis_x: Color::opaque(0.4, 0.1, 0.1),
            axis_y: Color::opaque(0.1, 0.4, 0.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accents_match_the_demo_palette() {
        let p = Palette::default();
        assert_eq!(p.circle, Color::opaque(1.0, 0.0, 1.0)); // magenta
        assert_eq!(p.segment, Color::opaque(0.0, 1.0, 1.0)); // cyan
        assert_eq!(p.marker, Color::opaque(1.0, 1.0, 0.0)); // yellow
        assert_eq!(p.preview, Color::opaque(0.5, 0.5, 0.5)); // gray
    }
}
