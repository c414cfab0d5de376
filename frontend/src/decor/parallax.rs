use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::decor::placement::seeded_fraction;

/// Where a floating image sits; decides which way it drifts on scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Custom,
}

/// Scroll progress at which the drift is complete.
const DRIFT_END: f64 = 0.4;

/// Mouse parallax in px: the pointer's offset from the viewport centre,
/// scaled by depth.
pub fn mouse_offset(client: (f64, f64), viewport: (f64, f64), depth: f64) -> (f64, f64) {
    if viewport.0 <= 0.0 || viewport.1 <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client.0 / viewport.0 - 0.5) * depth * 100.0,
        (client.1 / viewport.1 - 0.5) * depth * 100.0,
    )
}

/// How far the element travels once the page has scrolled `DRIFT_END` of
/// the way down.
pub fn scroll_destination(
    position: FloatPosition,
    class: &str,
    viewport: (f64, f64),
    depth: f64,
    scroll_speed: f64,
) -> (f64, f64) {
    let (w, h) = viewport;
    match position {
        FloatPosition::TopLeft => (-w * 0.5 * scroll_speed, -h * 0.5 * scroll_speed),
        FloatPosition::TopRight => (w * 0.5 * scroll_speed, -h * 0.5 * scroll_speed),
        FloatPosition::BottomLeft => (-w * 0.3 * scroll_speed, h * 0.9 * scroll_speed),
        FloatPosition::BottomRight => (w * 0.3 * scroll_speed, h * 0.9 * scroll_speed),
        FloatPosition::Custom => {
            let left = class.contains("left");
            let right = class.contains("right");
            let top = class.contains("top");
            let bottom = class.contains("bottom");
            if left && top {
                (-w * 0.6 * scroll_speed, -h * 0.6 * scroll_speed)
            } else if right && top {
                (w * 0.6 * scroll_speed, -h * 0.6 * scroll_speed)
            } else if left && bottom {
                (-w * 0.4 * scroll_speed, h * 0.9 * scroll_speed)
            } else if right && bottom {
                (w * 0.4 * scroll_speed, h * 0.9 * scroll_speed)
            } else {
                let sign = |seed: f64| if seeded_fraction(seed) > 0.5 { 1.0 } else { -1.0 };
                let distance = depth * 300.0 * scroll_speed;
                (distance * sign(depth * 1000.0 + 1.0), distance * sign(depth * 1000.0 + 2.0))
            }
        }
    }
}

/// Page scroll progress in [0, 1].
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Linear drift from the resting place to `destination`, complete at
/// `DRIFT_END` progress.
pub fn scroll_translate(progress: f64, destination: (f64, f64)) -> (f64, f64) {
    let t = (progress / DRIFT_END).clamp(0.0, 1.0);
    (destination.0 * t, destination.1 * t)
}

fn viewport() -> (f64, f64) {
    web_sys::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0))
}

fn current_scroll_progress() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, document_height, viewport().1)
}

#[derive(Properties, PartialEq)]
pub struct FloatingProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Floating)]
pub fn floating(props: &FloatingProps) -> Html {
    html! {
        <div class={classes!("floating", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingElementProps {
    #[prop_or(1.0)]
    pub depth: f64,
    #[prop_or(FloatPosition::Custom)]
    pub position: FloatPosition,
    #[prop_or(1.0)]
    pub scroll_speed: f64,
    #[prop_or_default]
    pub class: AttrValue,
    pub children: Children,
}

#[function_component(FloatingElement)]
pub fn floating_element(props: &FloatingElementProps) -> Html {
    let mouse = use_state(|| (0.0_f64, 0.0_f64));
    let progress = use_state(|| 0.0_f64);

    {
        let mouse = mouse.clone();
        let progress = progress.clone();
        let depth = props.depth;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
                    mouse.set(mouse_offset(
                        (e.client_x() as f64, e.client_y() as f64),
                        viewport(),
                        depth,
                    ));
                }) as Box<dyn FnMut(MouseEvent)>);

                let on_scroll = Closure::wrap(Box::new(move || {
                    progress.set(current_scroll_progress());
                }) as Box<dyn FnMut()>);

                if let Some(window) = window.as_ref() {
                    let _ = window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                        let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            depth.to_bits(),
        );
    }

    let destination = scroll_destination(props.position, &props.class, viewport(), props.depth, props.scroll_speed);
    let (drift_x, drift_y) = scroll_translate(*progress, destination);
    let (mouse_x, mouse_y) = *mouse;
    let style = format!(
        "transform: translate({}px, {}px); transition: transform 0.3s ease-out;",
        mouse_x + drift_x,
        mouse_y + drift_y
    );

    html! {
        <div class={classes!("floating-element", props.class.to_string())} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: (f64, f64) = (1000.0, 800.0);

    #[test]
    fn pointer_at_centre_does_not_move_anything() {
        assert_eq!(mouse_offset((500.0, 400.0), SCREEN, 2.0), (0.0, 0.0));
    }

    #[test]
    fn deeper_elements_move_further() {
        let shallow = mouse_offset((1000.0, 0.0), SCREEN, 0.5);
        let deep = mouse_offset((1000.0, 0.0), SCREEN, 2.0);
        assert_eq!(shallow, (25.0, -25.0));
        assert_eq!(deep, (100.0, -100.0));
    }

    #[test]
    fn corners_drift_outward() {
        assert_eq!(scroll_destination(FloatPosition::TopLeft, "", SCREEN, 1.0, 1.0), (-500.0, -400.0));
        assert_eq!(scroll_destination(FloatPosition::TopRight, "", SCREEN, 1.0, 2.0), (1000.0, -800.0));
        assert_eq!(scroll_destination(FloatPosition::BottomLeft, "", SCREEN, 1.0, 1.0), (-300.0, 720.0));
        assert_eq!(scroll_destination(FloatPosition::BottomRight, "", SCREEN, 1.0, 1.0), (300.0, 720.0));
    }

    #[test]
    fn custom_position_reads_the_class() {
        assert_eq!(
            scroll_destination(FloatPosition::Custom, "top-[10%] left-[5%]", SCREEN, 1.0, 1.0),
            (-600.0, -480.0)
        );
        assert_eq!(
            scroll_destination(FloatPosition::Custom, "bottom-0 right-4", SCREEN, 1.0, 1.0),
            (400.0, 720.0)
        );
    }

    #[test]
    fn unplaced_element_drifts_by_depth_and_stays_put_between_renders() {
        let first = scroll_destination(FloatPosition::Custom, "centre", SCREEN, 0.5, 1.0);
        let again = scroll_destination(FloatPosition::Custom, "centre", SCREEN, 0.5, 1.0);
        assert_eq!(first, again);
        assert_eq!(first.0.abs(), 150.0);
        assert_eq!(first.1.abs(), 150.0);
    }

    #[test]
    fn drift_completes_at_forty_percent() {
        let destination = (-500.0, 900.0);
        assert_eq!(scroll_translate(0.0, destination), (0.0, 0.0));
        assert_eq!(scroll_translate(0.2, destination), (-250.0, 450.0));
        assert_eq!(scroll_translate(0.4, destination), destination);
        assert_eq!(scroll_translate(1.0, destination), destination);
    }

    #[test]
    fn progress_handles_short_pages() {
        assert_eq!(scroll_progress(100.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(600.0, 2000.0, 800.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 2000.0, 800.0), 1.0);
    }
}
