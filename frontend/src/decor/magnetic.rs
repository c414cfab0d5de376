use web_sys::{Element, MouseEvent};
use yew::prelude::*;

/// Pull toward the pointer, as a fraction of its distance from the centre.
pub fn magnetic_offset(pointer: (f64, f64), centre: (f64, f64), distance: f64) -> (f64, f64) {
    ((pointer.0 - centre.0) * distance, (pointer.1 - centre.1) * distance)
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    #[prop_or(0.6)]
    pub distance: f64,
    pub children: Children,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0_f64, 0.0_f64));

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        let distance = props.distance;
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                let centre = (rect.left() + rect.width() / 2.0, rect.top() + rect.height() / 2.0);
                offset.set(magnetic_offset((e.client_x() as f64, e.client_y() as f64), centre, distance));
            }
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set((0.0, 0.0)))
    };

    let (x, y) = *offset;
    let style = format!(
        "display: inline-block; transform: translate({}px, {}px); transition: transform 0.2s ease-out;",
        x, y
    );

    html! {
        <div ref={node} class="magnetic" {style} {onmousemove} {onmouseleave}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroVariant {
    Primary,
    Secondary,
}

#[derive(Properties, PartialEq)]
pub struct HeroButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or(HeroVariant::Primary)]
    pub variant: HeroVariant,
    #[prop_or_default]
    pub full_width: bool,
    pub children: Children,
}

/// Call-to-action pill wrapped in a `MagneticButton`.
#[function_component(HeroButton)]
pub fn hero_button(props: &HeroButtonProps) -> Html {
    let variant = match props.variant {
        HeroVariant::Primary => "hero-button primary",
        HeroVariant::Secondary => "hero-button secondary",
    };
    html! {
        <MagneticButton distance={0.3}>
            <button
                class={classes!(variant, props.full_width.then(|| "full-width"))}
                onclick={props.onclick.clone()}
            >
                { for props.children.iter() }
            </button>
        </MagneticButton>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_a_fraction_of_the_way() {
        assert_eq!(magnetic_offset((150.0, 50.0), (100.0, 100.0), 0.3), (15.0, -15.0));
        assert_eq!(magnetic_offset((100.0, 100.0), (100.0, 100.0), 0.3), (0.0, 0.0));
    }
}
