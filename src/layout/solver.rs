/// Reference landscape height the art was authored against.
const REFERENCE_LANDSCAPE_HEIGHT: f64 = 2048.0;
/// Reference portrait width the art was authored against.
const REFERENCE_PORTRAIT_WIDTH: f64 = 2103.0;

/// Screen dimensions plus the derived world scale.
///
/// Pages lay out in world units; the controller maps world units to screen
/// pixels with [`Viewport::scale`], recomputed on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen width in pixels.
    pub width: f64,
    /// Screen height in pixels.
    pub height: f64,
    /// World-to-screen scale factor.
    pub scale: f64,
}

impl Viewport {
    /// Build a viewport for the given screen size.
    pub fn new(width: f64, height: f64) -> Self {
        let scale = if width >= height {
            height / REFERENCE_LANDSCAPE_HEIGHT
        } else {
            0.85 * width / REFERENCE_PORTRAIT_WIDTH
        };
        Self {
            width,
            height,
            scale,
        }
    }

    /// Horizontal center in pixels.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Vertical center in pixels.
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Whether the display is landscape (width >= height).
    pub fn is_horizontal(&self) -> bool {
        self.width >= self.height
    }

    /// Screen width expressed in world units.
    pub fn world_width(&self) -> f64 {
        self.width / self.scale
    }

    /// Screen height expressed in world units.
    pub fn world_height(&self) -> f64 {
        self.height / self.scale
    }

    /// Horizontal center in world units.
    pub fn world_center_x(&self) -> f64 {
        self.center_x() / self.scale
    }

    /// Vertical center in world units.
    pub fn world_center_y(&self) -> f64 {
        self.center_y() / self.scale
    }
}

/// Horizontal alignment of an arranged row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RowAlign {
    /// First element starts at the row origin.
    Start,
    /// Row is centered on the middle element (odd count) or the midpoint of
    /// the middle pair (even count).
    #[default]
    Center,
    /// Row ends at the row origin.
    End,
}

/// One element to arrange: its unscaled width and a per-element scale.
#[derive(Clone, Copy, Debug)]
pub struct RowItem {
    /// Unscaled element width.
    pub width: f64,
    /// Extra scale applied on top of the row scale.
    pub scale: f64,
}

/// Row arrangement parameters.
#[derive(Clone, Copy, Debug)]
pub struct RowArgs {
    /// Alignment mode.
    pub align: RowAlign,
    /// Horizontal offset applied after alignment.
    pub x: f64,
    /// Gap between adjacent elements.
    pub spacing: f64,
    /// Base scale applied to every element.
    pub scale: f64,
}

impl Default for RowArgs {
    fn default() -> Self {
        Self {
            align: RowAlign::Center,
            x: 0.0,
            spacing: 10.0,
            scale: 1.0,
        }
    }
}

/// Place elements in a horizontal row and return their center x positions.
///
/// Elements advance left to right by half-width, spacing, half-width; the
/// whole row is then shifted according to `args.align` and `args.x`. Final
/// element scale is `args.scale * item.scale` (callers apply it themselves).
pub fn arrange_row(items: &[RowItem], args: &RowArgs) -> Vec<f64> {
    let mut positions = Vec::with_capacity(items.len());
    let mut left = 0.0;

    for item in items {
        let width = item.width * args.scale * item.scale;
        left += width / 2.0;
        positions.push(left);
        left += width / 2.0 + args.spacing;
    }

    match args.align {
        RowAlign::Center if !items.is_empty() => {
            let middle = items.len() / 2;
            let center = if items.len() % 2 == 1 {
                positions[middle]
            } else {
                (positions[middle] + positions[middle - 1]) / 2.0
            };
            for x in &mut positions {
                *x -= center;
            }
        }
        RowAlign::End => {
            for x in &mut positions {
                *x -= left;
            }
        }
        _ => {}
    }

    for x in &mut positions {
        *x += args.x;
    }

    positions
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
