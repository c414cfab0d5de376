//! Placement of the blurred circles behind gradient cards.
//!
//! `seeded_fraction` is a fixed formula, not a random number generator. Its
//! only job is to scatter shapes the same way on every render so the layout
//! does not jump between the first paint and later ones.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    /// Percent of the container.
    pub top: f64,
    pub left: f64,
    /// Pixels.
    pub width: f64,
    pub height: f64,
    /// Keyframe translations, each component in [-0.5, 0.5).
    pub offsets: [(f64, f64); 4],
}

impl ShapeDescriptor {
    /// Inline style for the `<svg>`; the keyframes read the `--tx-n`/`--ty-n`
    /// custom properties.
    pub fn style(&self, speed: f64) -> String {
        let mut style = format!(
            "top: {}%; left: {}%; --background-gradient-speed: {}s;",
            self.top,
            self.left,
            1.0 / speed
        );
        for (i, (tx, ty)) in self.offsets.iter().enumerate() {
            style.push_str(&format!(" --tx-{n}: {tx}; --ty-{n}: {ty};", n = i + 1, tx = tx, ty = ty));
        }
        style
    }
}

/// `frac(sin(seed) * 10000)`, in [0, 1).
pub fn seeded_fraction(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

/// Integer step in `[min, max]` offset by `min`, matching the scale factor
/// the gradient has always used (0.5 or 1.5 for the 0.5..1.5 range).
pub fn seeded_int(min: f64, max: f64, seed: f64) -> f64 {
    (seeded_fraction(seed) * (max - min + 1.0)).floor() + min
}

pub fn place_shapes<C>(colors: &[C], container: Dimensions) -> Vec<ShapeDescriptor> {
    if !container.is_measured() {
        return Vec::new();
    }
    let circle_size = container.width.max(container.height);

    (0..colors.len())
        .map(|index| {
            let seed = (index * 1000) as f64;
            let f = |step: f64| seeded_fraction(seed + step);
            ShapeDescriptor {
                top: f(1.0) * 50.0,
                left: f(2.0) * 50.0,
                offsets: [
                    (f(3.0) - 0.5, f(4.0) - 0.5),
                    (f(5.0) - 0.5, f(6.0) - 0.5),
                    (f(7.0) - 0.5, f(8.0) - 0.5),
                    (f(9.0) - 0.5, f(10.0) - 0.5),
                ],
                width: circle_size * seeded_int(0.5, 1.5, seed + 11.0),
                height: circle_size * seeded_int(0.5, 1.5, seed + 12.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: [&str; 3] = ["#ff5941", "#ff8e7a", "#ffb4a8"];

    fn card() -> Dimensions {
        Dimensions {
            width: 640.0,
            height: 360.0,
        }
    }

    #[test]
    fn fraction_stays_in_unit_interval() {
        for seed in 0..5000 {
            let value = seeded_fraction(seed as f64);
            assert!((0.0..1.0).contains(&value), "seed {} gave {}", seed, value);
        }
    }

    #[test]
    fn same_input_same_shapes() {
        let first = place_shapes(&COLORS, card());
        let second = place_shapes(&COLORS, card());
        assert_eq!(first.len(), 3);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.top.to_bits(), b.top.to_bits());
            assert_eq!(a.left.to_bits(), b.left.to_bits());
            assert_eq!(a.width.to_bits(), b.width.to_bits());
            assert_eq!(a.height.to_bits(), b.height.to_bits());
            for (x, y) in a.offsets.iter().zip(&b.offsets) {
                assert_eq!(x.0.to_bits(), y.0.to_bits());
                assert_eq!(x.1.to_bits(), y.1.to_bits());
            }
        }
    }

    #[test]
    fn shapes_stay_in_bounds() {
        for shape in place_shapes(&["a"; 12], card()) {
            assert!((0.0..50.0).contains(&shape.top));
            assert!((0.0..50.0).contains(&shape.left));
            assert!(shape.width >= 640.0 * 0.5 && shape.width <= 640.0 * 1.5);
            assert!(shape.height >= 640.0 * 0.5 && shape.height <= 640.0 * 1.5);
            for (tx, ty) in shape.offsets {
                assert!((-0.5..0.5).contains(&tx));
                assert!((-0.5..0.5).contains(&ty));
            }
        }
    }

    #[test]
    fn first_shape_uses_seeds_one_through_twelve() {
        let shape = &place_shapes(&COLORS, card())[0];
        assert_eq!(shape.top, seeded_fraction(1.0) * 50.0);
        assert_eq!(shape.left, seeded_fraction(2.0) * 50.0);
        assert_eq!(shape.offsets[3].1, seeded_fraction(10.0) - 0.5);
        assert_eq!(shape.width, 640.0 * seeded_int(0.5, 1.5, 11.0));
    }

    #[test]
    fn index_offsets_the_seed_by_a_thousand() {
        let shapes = place_shapes(&COLORS, card());
        assert_eq!(shapes[2].top, seeded_fraction(2001.0) * 50.0);
    }

    #[test]
    fn nothing_is_placed_before_measurement() {
        assert!(place_shapes(&COLORS, Dimensions::default()).is_empty());
        let half = Dimensions {
            width: 300.0,
            height: 0.0,
        };
        assert!(place_shapes(&COLORS, half).is_empty());
    }

    #[test]
    fn size_follows_the_container() {
        let small = place_shapes(&COLORS, card());
        let large = place_shapes(
            &COLORS,
            Dimensions {
                width: 1280.0,
                height: 720.0,
            },
        );
        assert_eq!(large[0].top, small[0].top);
        assert_eq!(large[0].width, small[0].width * 2.0);
    }

    #[test]
    fn style_exposes_every_offset() {
        let style = place_shapes(&COLORS, card())[0].style(0.05);
        assert!(style.contains("--background-gradient-speed: 20s;"));
        assert!(style.contains("--tx-4:"));
        assert!(style.contains("--ty-1:"));
    }
}
