use yew::prelude::*;

use crate::decor::dimensions::use_dimensions;
use crate::decor::placement::place_shapes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blur {
    Light,
    Medium,
    Heavy,
}

impl Blur {
    fn class(&self) -> &'static str {
        match self {
            Blur::Light => "blur-light",
            Blur::Medium => "blur-medium",
            Blur::Heavy => "blur-heavy",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedGradientProps {
    pub colors: Vec<AttrValue>,
    #[prop_or(5.0)]
    pub speed: f64,
    #[prop_or(Blur::Light)]
    pub blur: Blur,
}

#[function_component(AnimatedGradient)]
pub fn animated_gradient(props: &AnimatedGradientProps) -> Html {
    let container = use_node_ref();
    let dimensions = use_dimensions(container.clone());
    let shapes = use_memo(
        |(colors, dimensions)| place_shapes(colors, *dimensions),
        (props.colors.clone(), dimensions),
    );

    html! {
        <div ref={container} class="animated-gradient">
            <style>
                {r#"
                .animated-gradient {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .animated-gradient .blur-layer {
                    position: absolute;
                    inset: 0;
                }
                .animated-gradient .blur-light { filter: blur(40px); }
                .animated-gradient .blur-medium { filter: blur(64px); }
                .animated-gradient .blur-heavy { filter: blur(100px); }
                .animated-gradient svg {
                    position: absolute;
                    animation: background-gradient var(--background-gradient-speed, 15s) cubic-bezier(0.445, 0.05, 0.55, 0.95) infinite alternate;
                }
                .animated-gradient circle { opacity: 0.3; }
                @keyframes background-gradient {
                    0%, 100% { transform: translate(0, 0); }
                    20% { transform: translate(calc(100% * var(--tx-1, 1)), calc(100% * var(--ty-1, 1))); }
                    40% { transform: translate(calc(100% * var(--tx-2, -1)), calc(100% * var(--ty-2, 1))); }
                    60% { transform: translate(calc(100% * var(--tx-3, 1)), calc(100% * var(--ty-3, -1))); }
                    80% { transform: translate(calc(100% * var(--tx-4, -1)), calc(100% * var(--ty-4, -1))); }
                }
                "#}
            </style>
            <div class={classes!("blur-layer", props.blur.class())}>
                { for shapes.iter().zip(props.colors.iter()).map(|(shape, color)| html! {
                    <svg
                        style={shape.style(props.speed)}
                        width={shape.width.to_string()}
                        height={shape.height.to_string()}
                        viewBox="0 0 100 100"
                    >
                        <circle cx="50" cy="50" r="50" fill={color.clone()} />
                    </svg>
                }) }
            </div>
        </div>
    }
}
