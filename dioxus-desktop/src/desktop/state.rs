use std::collections::HashMap;

use shared_types::{ContentItem, Point};

/// Fixed window id of the music player.
pub const MUSIC_PLAYER_ID: &str = "MUSIC_PLAYER";

pub const WINDOW_STAGGER_PX: i32 = 20;
pub const WINDOW_ORIGIN: Point = Point::new(100, 50);
pub const DEFAULT_WINDOW_POSITION: Point = Point::new(50, 50);
pub const MUSIC_PLAYER_POSITION: Point = Point::new(300, 100);
const BASE_Z_INDEX: usize = 10;

const ICON_ORIGIN: Point = Point::new(20, 20);
const ICON_SPACING_PX: i32 = 100;

/// Open windows and their recorded positions.
///
/// `order` is the stacking order: the last id is the topmost, focused window.
/// `opened` keeps open order and never changes on focus, so rendered window
/// nodes stay put and stacking is left to `z_index`.
/// Positions outlive the window so a reopened window comes back where it was.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowRegistry {
    order: Vec<String>,
    opened: Vec<String>,
    positions: HashMap<String, Point>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Open windows in the order they were opened.
    pub fn render_order(&self) -> &[String] {
        &self.opened
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.order.iter().any(|w| w == id)
    }

    pub fn focused(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    pub fn open(&mut self, id: &str) {
        if self.is_open(id) {
            return;
        }
        if !self.positions.contains_key(id) {
            let offset = self.order.len() as i32 * WINDOW_STAGGER_PX;
            self.positions
                .insert(id.to_string(), WINDOW_ORIGIN.offset(offset, offset));
        }
        self.order.push(id.to_string());
        self.opened.push(id.to_string());
    }

    /// Open at a fixed position unless one is already recorded.
    pub fn open_at(&mut self, id: &str, initial: Point) {
        self.positions.entry(id.to_string()).or_insert(initial);
        self.open(id);
    }

    pub fn close(&mut self, id: &str) {
        self.order.retain(|w| w != id);
        self.opened.retain(|w| w != id);
    }

    pub fn focus(&mut self, id: &str) {
        if self.focused() == Some(id) {
            return;
        }
        let Some(index) = self.order.iter().position(|w| w == id) else {
            return;
        };
        let window = self.order.remove(index);
        self.order.push(window);
    }

    /// Record a position for a window the registry knows about.
    pub fn set_position(&mut self, id: &str, point: Point) {
        if self.is_open(id) || self.positions.contains_key(id) {
            self.positions.insert(id.to_string(), point);
        }
    }

    pub fn position(&self, id: &str) -> Point {
        self.positions
            .get(id)
            .copied()
            .unwrap_or(DEFAULT_WINDOW_POSITION)
    }

    pub fn z_index(&self, id: &str) -> usize {
        self.order
            .iter()
            .position(|w| w == id)
            .map(|index| BASE_Z_INDEX + index)
            .unwrap_or(BASE_Z_INDEX)
    }
}

/// Positions of the desktop icons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconLayout {
    positions: HashMap<String, Point>,
}

impl IconLayout {
    /// Lay the root items out in a single row.
    pub fn for_items(items: &[ContentItem]) -> Self {
        let positions = items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.id.clone(), icon_slot(index)))
            .collect();
        Self { positions }
    }

    /// Give hidden items a slot after the visible ones, keeping any earlier drag.
    pub fn reveal(&mut self, visible_count: usize, hidden: &[ContentItem]) {
        for (offset, item) in hidden.iter().enumerate() {
            self.positions
                .entry(item.id.clone())
                .or_insert_with(|| icon_slot(visible_count + offset));
        }
    }

    pub fn position(&self, id: &str) -> Point {
        self.positions.get(id).copied().unwrap_or_default()
    }

    pub fn set_position(&mut self, id: &str, point: Point) {
        if let Some(slot) = self.positions.get_mut(id) {
            *slot = point;
        }
    }
}

fn icon_slot(index: usize) -> Point {
    ICON_ORIGIN.offset(index as i32 * ICON_SPACING_PX, 0)
}
