use iced::{Point, Rectangle, Size};
use thiserror::Error;

/// Result of scaling a set of physical display rectangles into a preview pane.
///
/// `previews` is parallel to the input slice: `previews[i]` is the pane-local
/// rectangle for input rectangle `i`. All rectangles share the same `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneLayout {
    pub scale: f32,
    pub previews: Vec<Rectangle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot lay out an empty display list")]
    NoDisplays,
}

/// Maps physical display rectangles into `pane`, preserving each display's
/// aspect ratio and the relative arrangement of the whole set.
///
/// One uniform scale factor is derived from the bounding box of all displays:
/// whichever axis of the bounding box is wider relative to the pane binds the
/// scale, so the scaled set always fits. The scaled set is then centered in
/// the pane on both axes.
pub fn scale_to_pane(displays: &[Rectangle], pane: Size) -> Result<PaneLayout, LayoutError> {
    let Some(first) = displays.first() else {
        return Err(LayoutError::NoDisplays);
    };

    let mut union = *first;
    for rect in &displays[1..] {
        union = bounding(union, *rect);
    }

    let src_aspect = union.width / union.height;
    let dst_aspect = pane.width / pane.height;

    // The union is taller relative to the pane when src_aspect < dst_aspect,
    // so height binds; otherwise width binds.
    let (scaled, scale) = if src_aspect < dst_aspect {
        let width = pane.height * src_aspect;
        (Size::new(width, pane.height), width / union.width)
    } else {
        let height = pane.width / src_aspect;
        (Size::new(pane.width, height), height / union.height)
    };

    let dx = (pane.width - scaled.width) / 2.0;
    let dy = (pane.height - scaled.height) / 2.0;

    let previews = displays
        .iter()
        .map(|rect| {
            Rectangle::new(
                Point::new((rect.x - union.x) * scale + dx, (rect.y - union.y) * scale + dy),
                Size::new(rect.width * scale, rect.height * scale),
            )
        })
        .collect();

    Ok(PaneLayout { scale, previews })
}

/// Index of the first preview rectangle containing `point`, if any.
pub fn hit_test(previews: &[Rectangle], point: Point) -> Option<usize> {
    previews.iter().position(|rect| rect.contains(point))
}

fn bounding(a: Rectangle, b: Rectangle) -> Rectangle {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let right = (a.x + a.width).max(b.x + b.width);
    let bottom = (a.y + a.height).max(b.y + b.height);

    Rectangle::new(Point::new(x, y), Size::new(right - x, bottom - y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPSILON, "expected {b}, got {a}");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            scale_to_pane(&[], Size::new(400.0, 300.0)),
            Err(LayoutError::NoDisplays)
        );
    }

    #[test]
    fn side_by_side_displays_bind_width() {
        // Union is 3200x1080, wider relative to a 400x300 pane, so the scale
        // comes from the width ratio: 400 / 3200 = 0.125.
        let displays = [
            rect(0.0, 0.0, 1920.0, 1080.0),
            rect(1920.0, 0.0, 1280.0, 1024.0),
        ];
        let layout = scale_to_pane(&displays, Size::new(400.0, 300.0)).unwrap();

        assert_close(layout.scale, 0.125);

        let a = layout.previews[0];
        let b = layout.previews[1];
        assert_close(a.width, 240.0);
        assert_close(a.height, 135.0);
        assert_close(b.width, 160.0);
        assert_close(b.height, 128.0);

        // Vertically centered: the scaled union is 400x135 in a 400x300 pane.
        assert_close(a.x, 0.0);
        assert_close(a.y, (300.0 - 135.0) / 2.0);

        // Physical adjacency survives scaling: B starts where A ends.
        assert_close(b.x, a.x + a.width);
        assert_close(b.y, a.y);
    }

    #[test]
    fn stacked_displays_bind_height() {
        let displays = [
            rect(0.0, 0.0, 1920.0, 1080.0),
            rect(0.0, 1080.0, 1920.0, 1080.0),
        ];
        let layout = scale_to_pane(&displays, Size::new(400.0, 300.0)).unwrap();

        // Union is 1920x2160 (aspect 0.889 < pane aspect 1.333): height binds.
        assert_close(layout.scale, 300.0 / 2160.0);

        let a = layout.previews[0];
        let b = layout.previews[1];
        assert_close(a.y, 0.0);
        assert_close(b.y, a.y + a.height);

        // Horizontally centered.
        let scaled_width = 1920.0 * layout.scale;
        assert_close(a.x, (400.0 - scaled_width) / 2.0);
    }

    #[test]
    fn previews_never_overflow_the_pane() {
        let pane = Size::new(400.0, 300.0);
        let arrangements: &[&[Rectangle]] = &[
            &[rect(0.0, 0.0, 1920.0, 1080.0)],
            &[
                rect(0.0, 0.0, 800.0, 600.0),
                rect(-1600.0, -200.0, 1600.0, 900.0),
            ],
            &[
                rect(0.0, 0.0, 2560.0, 1440.0),
                rect(2560.0, 400.0, 1920.0, 1080.0),
                rect(-1080.0, -500.0, 1080.0, 1920.0),
            ],
        ];

        for displays in arrangements {
            let layout = scale_to_pane(displays, pane).unwrap();
            for preview in &layout.previews {
                assert!(preview.x >= -EPSILON);
                assert!(preview.y >= -EPSILON);
                assert!(preview.x + preview.width <= pane.width + EPSILON);
                assert!(preview.y + preview.height <= pane.height + EPSILON);
            }
        }
    }

    #[test]
    fn relative_positions_are_preserved() {
        let displays = [
            rect(0.0, 0.0, 1920.0, 1080.0),
            rect(1920.0, -300.0, 1280.0, 1024.0),
            rect(-1080.0, 200.0, 1080.0, 1920.0),
        ];
        let layout = scale_to_pane(&displays, Size::new(400.0, 300.0)).unwrap();

        for i in 0..displays.len() {
            for j in 0..displays.len() {
                let physical_dx = (displays[i].x - displays[j].x) * layout.scale;
                let physical_dy = (displays[i].y - displays[j].y) * layout.scale;
                let preview_dx = layout.previews[i].x - layout.previews[j].x;
                let preview_dy = layout.previews[i].y - layout.previews[j].y;
                assert_close(preview_dx, physical_dx);
                assert_close(preview_dy, physical_dy);
            }
        }
    }

    #[test]
    fn single_display_fills_the_binding_axis() {
        let layout =
            scale_to_pane(&[rect(0.0, 0.0, 1920.0, 1080.0)], Size::new(400.0, 300.0)).unwrap();
        let preview = layout.previews[0];

        // 16:9 display in a 4:3 pane: width binds.
        assert_close(preview.width, 400.0);
        assert_close(preview.x, 0.0);
        assert_close(preview.y, (300.0 - preview.height) / 2.0);
    }

    #[test]
    fn hit_test_finds_the_containing_preview() {
        let previews = [
            rect(0.0, 82.5, 240.0, 135.0),
            rect(240.0, 82.5, 160.0, 128.0),
        ];

        assert_eq!(hit_test(&previews, Point::new(100.0, 100.0)), Some(0));
        assert_eq!(hit_test(&previews, Point::new(300.0, 100.0)), Some(1));
        assert_eq!(hit_test(&previews, Point::new(300.0, 290.0)), None);
        assert_eq!(hit_test(&previews, Point::new(10.0, 10.0)), None);
    }
}
