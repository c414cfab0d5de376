use yew::prelude::*;

use crate::decor::counter::AnimatedCounter;
use crate::decor::gradient::{AnimatedGradient, Blur};

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub colors: Vec<AttrValue>,
    /// Entrance delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(true)]
    pub animated: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    let style = format!("animation-delay: {}s;", props.delay);

    html! {
        <div class={classes!("bento-card", props.class.clone())} {style}>
            <AnimatedGradient colors={props.colors.clone()} speed={0.05} blur={Blur::Medium} />
            <div class="bento-content">
                <h3>{ &props.title }</h3>
                <div class="bento-value">
                    <AnimatedCounter value={props.value.clone()} animated={props.animated} />
                </div>
                if let Some(subtitle) = &props.subtitle {
                    <p class="bento-subtitle">{ subtitle }</p>
                }
            </div>
        </div>
    }
}

struct Stat {
    title: &'static str,
    value: &'static str,
    subtitle: &'static str,
    colors: [&'static str; 3],
    span: &'static str,
}

const STATS: [Stat; 5] = [
    Stat {
        title: "Print Orders Completed",
        value: "10,000+",
        subtitle: "Quality prints delivered to happy customers",
        colors: ["#ff5941", "#ff8e7a", "#ffb4a8"],
        span: "span-2",
    },
    Stat {
        title: "Customer Satisfaction",
        value: "98%",
        subtitle: "Based on verified customer reviews",
        colors: ["#ff8e7a", "#ffb4a8", "#ff5941"],
        span: "span-1",
    },
    Stat {
        title: "Average Delivery Time",
        value: "2 Days",
        subtitle: "Fast and reliable service",
        colors: ["#ff5941", "#d6380e", "#ff8e7a"],
        span: "span-1",
    },
    Stat {
        title: "Business Cards Printed",
        value: "1.5M+",
        subtitle: "Helping businesses make great first impressions",
        colors: ["#d6380e", "#ff5941", "#ff8e7a"],
        span: "span-2",
    },
    Stat {
        title: "Our Commitment to Quality",
        value: "100%",
        subtitle: "We guarantee the quality of our prints, offering reprints if you're not completely satisfied with the results",
        colors: ["#ff5941", "#ff8e7a", "#b81c00"],
        span: "span-3",
    },
];

#[function_component(PrintingStats)]
pub fn printing_stats() -> Html {
    html! {
        <section class="printing-stats">
            <style>
                {r#"
                .printing-stats {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                .printing-stats h2 {
                    font-size: 3.5rem;
                    font-weight: 300;
                    text-align: center;
                }
                .printing-stats h2 span { color: #ff5941; }
                .printing-stats .lead {
                    max-width: 40rem;
                    margin: 0 auto 3rem;
                    text-align: center;
                    color: #52525b;
                }
                .bento-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .bento-grid .span-1 { grid-column: span 1; }
                .bento-grid .span-2 { grid-column: span 2; }
                .bento-grid .span-3 { grid-column: span 3; }
                .bento-card {
                    position: relative;
                    overflow: hidden;
                    min-height: 180px;
                    background: #fff;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    opacity: 0;
                    animation: bento-fade-in 0.5s ease forwards;
                }
                .bento-content {
                    position: relative;
                    z-index: 10;
                    padding: 2rem;
                    backdrop-filter: blur(4px);
                }
                .bento-content h3 { font-weight: 300; }
                .bento-value { font-size: 3rem; font-weight: 300; margin-bottom: 1rem; }
                .bento-subtitle { color: #52525b; font-size: 0.9rem; }
                @keyframes bento-fade-in { to { opacity: 1; } }
                @media (max-width: 768px) {
                    .bento-grid { grid-template-columns: 1fr; }
                    .bento-grid .span-2, .bento-grid .span-3 { grid-column: span 1; }
                }
                "#}
            </style>
            <h2>{"Print "}<span>{"Statistics"}</span></h2>
            <p class="lead">
                {"Our track record of delivering high-quality printing services and customer satisfaction"}
            </p>
            <div class="bento-grid">
                { for STATS.iter().enumerate().map(|(i, stat)| html! {
                    <BentoCard
                        class={stat.span}
                        title={stat.title}
                        value={stat.value}
                        subtitle={Some(AttrValue::from(stat.subtitle))}
                        colors={stat.colors.iter().map(|c| AttrValue::from(*c)).collect::<Vec<_>>()}
                        delay={0.2 * (i + 1) as f64}
                    />
                }) }
            </div>
        </section>
    }
}
