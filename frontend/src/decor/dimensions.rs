use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::decor::placement::Dimensions;

fn observed((width, height): (u32, u32)) -> Dimensions {
    Dimensions {
        width: f64::from(width),
        height: f64::from(height),
    }
}

/// Size of the element behind `node`, zero until it has been laid out.
/// Follows the element itself, so a reflow that leaves the window alone
/// still re-measures.
#[hook]
pub fn use_dimensions(node: NodeRef) -> Dimensions {
    observed(use_size(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decor::placement::place_shapes;

    const COLORS: [&str; 2] = ["#ff5941", "#ff8e7a"];

    #[test]
    fn unobserved_element_has_no_area() {
        assert!(!observed((0, 0)).is_measured());
        assert!(place_shapes(&COLORS, observed((0, 0))).is_empty());
    }

    #[test]
    fn growing_container_resizes_the_circles() {
        let before = place_shapes(&COLORS, observed((640, 360)));
        let after = place_shapes(&COLORS, observed((960, 360)));
        assert_eq!(after[0].width, before[0].width * 1.5);
        assert_eq!(after[1].height, before[1].height * 1.5);
    }

    #[test]
    fn repeated_measurement_compares_equal() {
        assert_eq!(observed((640, 360)), observed((640, 360)));
        assert_ne!(observed((640, 360)), observed((640, 361)));
    }
}
