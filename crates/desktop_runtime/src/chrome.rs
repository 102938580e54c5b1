//! Window chrome geometry: drag offsets, edge resizing and the render-time on-screen clamp.
//!
//! Stored window geometry is never rewritten by the clamp; [`effective_geometry`] is applied when
//! painting so a window dragged partially off-screen comes back into reach after the viewport
//! changes, without losing the position the user chose.

use crate::model::{Geometry, Position, ResizeEdge, Size, WindowRecord};

/// Hard minimum window width during resize.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Hard minimum window height during resize.
pub const MIN_WINDOW_HEIGHT: i32 = 300;
/// Pixels of a window that must stay inside the work area when painted.
pub const MIN_VISIBLE_PX: i32 = 100;
/// Height of the title bar; the painted top edge never goes above zero.
pub const TITLEBAR_HEIGHT_PX: i32 = 30;
/// Height reserved for the taskbar at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 40;

/// Region windows live in: the viewport minus the taskbar, with its origin at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkArea {
    pub width: i32,
    pub height: i32,
}

impl WorkArea {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Work area for a full viewport of `width` x `height` with the taskbar reserved.
    pub fn from_viewport(width: i32, height: i32) -> Self {
        Self {
            width: width.max(320),
            height: (height - TASKBAR_HEIGHT_PX).max(220),
        }
    }

    pub fn as_geometry(self) -> Geometry {
        Geometry {
            position: Position::new(0, 0),
            size: Size::new(self.width, self.height),
        }
    }
}

/// Offset between the pointer and the window origin when a drag starts.
pub fn drag_offset(pointer: Position, window_origin: Position) -> Position {
    pointer.delta_from(window_origin)
}

/// Window origin for the current pointer during a drag.
///
/// Only the top edge is constrained while dragging; horizontal travel is free.
pub fn drag_position(pointer: Position, offset: Position) -> Position {
    Position {
        x: pointer.x - offset.x,
        y: (pointer.y - offset.y).max(0),
    }
}

/// Geometry after dragging `edge` by (`dx`, `dy`) from the geometry captured at gesture start.
///
/// Sizes never fall below [`MIN_WINDOW_WIDTH`] x [`MIN_WINDOW_HEIGHT`]. East and south edges
/// stop at the work area boundary measured from the window origin; west and north edges keep
/// the opposite edge fixed and stop at the work area origin.
pub fn resize_geometry(
    origin: Geometry,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    work_area: WorkArea,
) -> Geometry {
    let (x, width) = resize_axis(
        origin.position.x,
        origin.size.width,
        dx,
        edge.moves_west(),
        edge.moves_east(),
        MIN_WINDOW_WIDTH,
        work_area.width,
    );
    let (y, height) = resize_axis(
        origin.position.y,
        origin.size.height,
        dy,
        edge.moves_north(),
        edge.moves_south(),
        MIN_WINDOW_HEIGHT,
        work_area.height,
    );

    Geometry {
        position: Position::new(x, y),
        size: Size::new(width, height),
    }
}

fn resize_axis(
    start: i32,
    length: i32,
    delta: i32,
    moves_start: bool,
    moves_end: bool,
    min_length: i32,
    limit: i32,
) -> (i32, i32) {
    if moves_end {
        let max_length = (limit - start).max(min_length);
        return (start, (length + delta).max(min_length).min(max_length));
    }

    if moves_start {
        let end = start + length;
        let lowest = start.min(0);
        let highest = (end - min_length).max(lowest);
        let next_start = (start + delta).max(lowest).min(highest);
        return (next_start, (end - next_start).max(min_length));
    }

    (start, length)
}

/// Keeps at least [`MIN_VISIBLE_PX`] of the window inside the work area and the title bar
/// below the top edge. The size is not changed.
pub fn clamp_to_work_area(geometry: Geometry, work_area: WorkArea) -> Geometry {
    let min_x = MIN_VISIBLE_PX - geometry.size.width;
    let max_x = (work_area.width - MIN_VISIBLE_PX).max(min_x);
    let max_y = (work_area.height - TITLEBAR_HEIGHT_PX).max(0);

    Geometry {
        position: Position {
            x: geometry.position.x.max(min_x).min(max_x),
            y: geometry.position.y.max(0).min(max_y),
        },
        size: geometry.size,
    }
}

/// Geometry a window is painted with: the full work area when maximized, otherwise the stored
/// geometry clamped on-screen.
pub fn effective_geometry(window: &WindowRecord, work_area: WorkArea) -> Geometry {
    if window.is_maximized {
        return work_area.as_geometry();
    }
    clamp_to_work_area(
        Geometry {
            position: window.position,
            size: window.size,
        },
        work_area,
    )
}

/// Inline style for a painted window; `layer` is its rank in the paint order.
pub fn window_style(geometry: Geometry, layer: usize) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        geometry.position.x,
        geometry.position.y,
        geometry.size.width,
        geometry.size.height,
        layer + 10,
    )
}

/// CSS class suffix for a resize handle.
pub fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "n",
        ResizeEdge::South => "s",
        ResizeEdge::East => "e",
        ResizeEdge::West => "w",
        ResizeEdge::NorthEast => "ne",
        ResizeEdge::NorthWest => "nw",
        ResizeEdge::SouthEast => "se",
        ResizeEdge::SouthWest => "sw",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const AREA: WorkArea = WorkArea::new(1280, 760);

    fn geometry(x: i32, y: i32, width: i32, height: i32) -> Geometry {
        Geometry {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[test]
    fn drag_follows_pointer_minus_offset() {
        let offset = drag_offset(Position::new(150, 60), Position::new(100, 50));
        assert_eq!(offset, Position::new(50, 10));
        assert_eq!(
            drag_position(Position::new(400, 300), offset),
            Position::new(350, 290)
        );
    }

    #[test]
    fn drag_clamps_top_edge_but_not_horizontal() {
        let offset = Position::new(50, 10);
        assert_eq!(
            drag_position(Position::new(-200, 0), offset),
            Position::new(-250, 0)
        );
        assert_eq!(
            drag_position(Position::new(5000, 5), offset),
            Position::new(4950, 0)
        );
    }

    #[test]
    fn east_resize_grows_and_stops_at_work_area() {
        let start = geometry(100, 100, 640, 480);
        assert_eq!(
            resize_geometry(start, ResizeEdge::East, 60, 999, AREA),
            geometry(100, 100, 700, 480)
        );
        assert_eq!(
            resize_geometry(start, ResizeEdge::East, 5000, 0, AREA),
            geometry(100, 100, 1180, 480)
        );
    }

    #[test]
    fn resize_never_shrinks_below_minimum() {
        let start = geometry(100, 100, 640, 480);
        assert_eq!(
            resize_geometry(start, ResizeEdge::SouthEast, -1000, -1000, AREA),
            geometry(100, 100, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );
    }

    #[test]
    fn west_and_north_resize_keep_opposite_edge_fixed() {
        let start = geometry(300, 200, 640, 480);
        let grown = resize_geometry(start, ResizeEdge::NorthWest, -100, -50, AREA);
        assert_eq!(grown, geometry(200, 150, 740, 530));

        let shrunk = resize_geometry(start, ResizeEdge::West, 500, 0, AREA);
        assert_eq!(shrunk, geometry(540, 200, MIN_WINDOW_WIDTH, 480));
        assert_eq!(
            shrunk.position.x + shrunk.size.width,
            start.position.x + start.size.width
        );
    }

    #[test]
    fn west_resize_stops_at_work_area_origin() {
        let start = geometry(100, 100, 640, 480);
        assert_eq!(
            resize_geometry(start, ResizeEdge::West, -400, 0, AREA),
            geometry(0, 100, 740, 480)
        );
    }

    #[test]
    fn single_axis_edges_ignore_the_other_delta() {
        let start = geometry(100, 100, 640, 480);
        assert_eq!(
            resize_geometry(start, ResizeEdge::South, 300, 40, AREA),
            geometry(100, 100, 640, 520)
        );
        assert_eq!(
            resize_geometry(start, ResizeEdge::North, 300, 40, AREA),
            geometry(100, 140, 640, 440)
        );
    }

    #[test]
    fn clamp_pulls_far_off_windows_back_into_reach() {
        let off_right = clamp_to_work_area(geometry(5000, 5000, 640, 480), AREA);
        assert_eq!(off_right, geometry(1180, 730, 640, 480));

        let off_left = clamp_to_work_area(geometry(-5000, -20, 640, 480), AREA);
        assert_eq!(off_left, geometry(-540, 0, 640, 480));
    }

    #[test]
    fn clamp_leaves_visible_windows_alone() {
        let inside = geometry(200, 120, 640, 480);
        assert_eq!(clamp_to_work_area(inside, AREA), inside);
    }

    #[test]
    fn work_area_reserves_taskbar() {
        assert_eq!(WorkArea::from_viewport(1280, 800), WorkArea::new(1280, 760));
        assert_eq!(WorkArea::from_viewport(100, 100), WorkArea::new(320, 220));
    }

    #[test]
    fn window_style_offsets_z_index() {
        assert_eq!(
            window_style(geometry(1, 2, 400, 300), 5),
            "left:1px;top:2px;width:400px;height:300px;z-index:15;"
        );
    }
}
