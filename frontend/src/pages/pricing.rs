use yew::prelude::*;
use yew_router::prelude::*;

use crate::shop::pricing::PackageTier;
use crate::Route;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <main class="pricing-page">
            <style>
                {r#"
                .pricing-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                }
                .pricing-page h1 { text-align: center; font-size: 2.5rem; margin-bottom: 3rem; }
                .tier-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .tier-card {
                    display: flex;
                    flex-direction: column;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 8px 20px rgba(0, 0, 0, 0.06);
                }
                .tier-card.popular { background: #fff5f3; border-color: #ffb4a8; }
                .tier-card .badge {
                    width: fit-content;
                    background: #ff5941;
                    color: #fff;
                    font-size: 0.8rem;
                    padding: 0.25rem 1rem;
                    border-radius: 999px;
                }
                .tier-card .price { font-size: 2rem; font-weight: 700; }
                .tier-card .extra { color: #6b7280; font-size: 0.9rem; }
                .tier-card ul { flex-grow: 1; padding-left: 1.2rem; }
                .tier-card .choose {
                    background: #000;
                    color: #fff;
                    text-align: center;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    text-decoration: none;
                }
                .pricing-page .back { text-align: center; margin-top: 3rem; }
                @media (max-width: 768px) {
                    .tier-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <h1>{"Our Pricing Plans"}</h1>
            <div class="tier-grid">
                { for PackageTier::ALL.iter().map(|tier| {
                    let terms = tier.terms();
                    let popular = *tier == PackageTier::default();
                    html! {
                        <div key={tier.key()} class={classes!("tier-card", popular.then(|| "popular"))}>
                            if popular {
                                <div class="badge">{"POPULAR"}</div>
                            }
                            <h2>{terms.name}</h2>
                            <p>{terms.blurb}</p>
                            <div class="price">{format!("${}", terms.base_price)}</div>
                            <p class="extra">
                                {format!("{} images included, ${} per extra image", terms.included_images, terms.per_extra_image)}
                            </p>
                            <ul>
                                { for terms.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                            <Link<Route> to={Route::Upload} classes="choose">
                                {"Choose Plan"}
                            </Link<Route>>
                        </div>
                    }
                }) }
            </div>
            <div class="back">
                <Link<Route> to={Route::Home}>{"← Back to home"}</Link<Route>>
            </div>
        </main>
    }
}
