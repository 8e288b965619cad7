use dioxus::prelude::*;
use shared_types::Point;

use crate::interop::pointer_point;

const ZOOM_STEP: f64 = 0.1;
const MIN_SCALE: f64 = 0.2;
const MAX_SCALE: f64 = 4.0;

fn zoom(scale: f64, steps: i32) -> f64 {
    (scale + ZOOM_STEP * f64::from(steps)).clamp(MIN_SCALE, MAX_SCALE)
}

#[component]
pub fn ImageViewer(src: String, alt: String) -> Element {
    let mut scale = use_signal(|| 1.0f64);
    let mut offset = use_signal(Point::default);
    let mut drag_origin = use_signal(|| None::<Point>);

    let on_reset = move |_| {
        scale.set(1.0);
        offset.set(Point::default());
    };
    let Point { x: offset_x, y: offset_y } = offset();

    rsx! {
        div {
            class: "image-viewer",
            div {
                class: "image-viewer-toolbar",
                button { onclick: move |_| scale.set(zoom(scale(), 1)), "+" }
                button { onclick: move |_| scale.set(zoom(scale(), -1)), "-" }
                button { onclick: on_reset, "Reset" }
            }
            div {
                class: "image-viewer-stage",
                onpointerdown: move |e| drag_origin.set(Some(pointer_point(&e))),
                onpointerup: move |_| drag_origin.set(None),
                onpointerleave: move |_| drag_origin.set(None),
                onpointermove: move |e| {
                    let Some(start) = drag_origin() else {
                        return;
                    };
                    let now = pointer_point(&e);
                    offset.set(offset().offset(now.x - start.x, now.y - start.y));
                    drag_origin.set(Some(now));
                },
                img {
                    src: "{src}",
                    alt: "{alt}",
                    draggable: "false",
                    style: "transform: translate(calc(-50% + {offset_x}px), calc(-50% + {offset_y}px)) scale({scale});",
                }
            }
        }
    }
}
