//! Pointer drag math for windows and desktop icons.

use shared_types::Point;

/// Icon footprint used to keep icons inside the canvas
pub const ICON_SIZE_PX: i32 = 70;

/// An in-progress drag of one element.
///
/// Captures where the pointer grabbed the element so later pointer positions
/// translate into element origins without jumping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_id: i32,
    start_pointer: Point,
    start_origin: Point,
}

impl DragSession {
    pub fn begin(pointer_id: i32, pointer: Point, origin: Point) -> Self {
        Self {
            pointer_id,
            start_pointer: pointer,
            start_origin: origin,
        }
    }

    /// Offset between the pointer and the element origin at grab time.
    pub fn grab_offset(&self) -> Point {
        Point::new(
            self.start_pointer.x - self.start_origin.x,
            self.start_pointer.y - self.start_origin.y,
        )
    }

    /// Element origin for the current pointer position.
    pub fn origin_for(&self, pointer: Point) -> Point {
        self.start_origin.offset(
            pointer.x - self.start_pointer.x,
            pointer.y - self.start_pointer.y,
        )
    }

    /// Same as [`origin_for`](Self::origin_for) but kept inside a canvas of
    /// the given size.
    pub fn clamped_origin_for(&self, pointer: Point, canvas: (i32, i32)) -> Point {
        clamp_icon_position(self.origin_for(pointer), canvas)
    }
}

/// Tracks at most one drag and reports positions only while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragTracker {
    active: Option<DragSession>,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, pointer_id: i32, pointer: Point, origin: Point) {
        self.active = Some(DragSession::begin(pointer_id, pointer, origin));
    }

    /// New origin for a pointer move, or `None` when no drag is active or the
    /// move belongs to another pointer.
    pub fn update(&self, pointer_id: i32, pointer: Point) -> Option<Point> {
        self.active
            .filter(|session| session.pointer_id == pointer_id)
            .map(|session| session.origin_for(pointer))
    }

    pub fn session(&self) -> Option<DragSession> {
        self.active
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        match self.active {
            Some(session) if session.pointer_id == pointer_id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

pub fn clamp_icon_position(point: Point, (width, height): (i32, i32)) -> Point {
    let max_x = (width - ICON_SIZE_PX).max(0);
    let max_y = (height - ICON_SIZE_PX).max(0);
    Point::new(point.x.clamp(0, max_x), point.y.clamp(0, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_delta_matches_pointer_delta() {
        let mut tracker = DragTracker::default();
        tracker.start(1, Point::new(210, 65), Point::new(200, 50));

        for (px, py) in [(215, 70), (300, 20), (-40, 500), (210, 65)] {
            let origin = tracker.update(1, Point::new(px, py)).unwrap();
            assert_eq!(origin.x - 200, px - 210);
            assert_eq!(origin.y - 50, py - 65);
        }
    }

    #[test]
    fn release_stops_updates() {
        let mut tracker = DragTracker::default();
        tracker.start(3, Point::new(0, 0), Point::new(10, 10));
        assert!(tracker.update(3, Point::new(5, 5)).is_some());

        assert!(tracker.end(3));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.update(3, Point::new(50, 50)), None);
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut tracker = DragTracker::default();
        tracker.start(1, Point::new(0, 0), Point::new(0, 0));
        assert_eq!(tracker.update(2, Point::new(9, 9)), None);
        assert!(!tracker.end(2));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn windows_are_not_clamped() {
        let session = DragSession::begin(1, Point::new(100, 100), Point::new(90, 90));
        assert_eq!(
            session.origin_for(Point::new(-500, -500)),
            Point::new(-510, -510)
        );
        assert_eq!(session.grab_offset(), Point::new(10, 10));
    }

    #[test]
    fn icons_stay_inside_canvas() {
        let session = DragSession::begin(1, Point::new(30, 30), Point::new(20, 20));
        assert_eq!(
            session.clamped_origin_for(Point::new(-100, 2000), (800, 600)),
            Point::new(0, 530)
        );
        assert_eq!(
            clamp_icon_position(Point::new(5000, 10), (800, 600)),
            Point::new(730, 10)
        );
        assert_eq!(clamp_icon_position(Point::new(5, 5), (40, 40)), Point::new(0, 0));
    }
}
