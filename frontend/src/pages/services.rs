use yew::prelude::*;
use yew_router::prelude::*;

use crate::decor::magnetic::{HeroButton, HeroVariant};
use crate::Route;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub applications: &'static [&'static str],
}

pub const SERVICES: [Service; 3] = [
    Service {
        id: "digital-printing",
        title: "Digital Printing",
        image: "/image/digital.png",
        description: "High-quality digital printing for business cards, flyers, brochures, and more with quick turnaround times.",
        features: &[
            "Full-color printing with exceptional quality",
            "Fast turnaround - same day service available",
            "Variable data printing for personalized materials",
            "Wide range of paper stocks and finishes",
            "Eco-friendly printing options",
        ],
        applications: &["Business Cards", "Flyers", "Brochures", "Postcards", "Booklets", "Menus", "Stickers"],
    },
    Service {
        id: "large-format",
        title: "Large Format Printing",
        image: "/image/largeformatprinting.png",
        description: "Eye-catching banners, posters, and signage to showcase your brand in large scale exhibitions and events.",
        features: &[
            "High-resolution printing up to 1440dpi",
            "Wide format prints up to 60 inches wide",
            "Indoor and outdoor durable materials",
            "Weather-resistant and UV-protected options",
            "Custom sizes and shapes available",
        ],
        applications: &["Posters", "Banners", "Canvas Prints", "Signage", "Trade Show Displays", "Window Graphics", "Vehicle Wraps"],
    },
    Service {
        id: "offset-printing",
        title: "Offset Printing",
        image: "/image/Offset.png",
        description: "Professional offset printing for catalogs, magazines, books and packaging with exceptional quality and detail.",
        features: &[
            "Superior image quality with sharp details",
            "Cost-effective for large volume printing",
            "Pantone color matching available",
            "Special finishes including foil stamping and embossing",
            "Premium paper stocks and binding options",
        ],
        applications: &["Catalogs", "Magazines", "Books", "Packaging", "Calendars", "Annual Reports", "Direct Mail Campaigns"],
    },
];

/// Button click that routes somewhere.
pub fn go_to(navigator: &Option<Navigator>, route: Route) -> Callback<MouseEvent> {
    let navigator = navigator.clone();
    Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&route);
        }
    })
}

#[function_component(Services)]
pub fn services() -> Html {
    let navigator = use_navigator();

    html! {
        <div class="services-page">
            <style>
                {r#"
                .services-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                }
                .services-page h1 { font-size: 3.5rem; font-weight: 300; text-align: center; }
                .services-page h1 span, .service-row .bullet { color: #ff5941; }
                .services-page .lead { text-align: center; color: #4b5563; max-width: 40rem; margin: 0 auto 3rem; }
                .service-row {
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    margin-bottom: 6rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .service-row.reversed { flex-direction: row-reverse; }
                .service-row img { width: 100%; max-width: 28rem; height: 320px; object-fit: contain; }
                .service-row ul { list-style: none; padding: 0; }
                .applications { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                .applications span {
                    background: #f3f4f6;
                    color: #374151;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                }
                .services-cta {
                    background: #f9fafb;
                    border-radius: 1rem;
                    padding: 3rem;
                    text-align: center;
                }
                .services-cta .actions { display: flex; justify-content: center; gap: 1rem; }
                @media (max-width: 900px) {
                    .service-row, .service-row.reversed { flex-direction: column; }
                }
                "#}
            </style>
            <h1>{"Our "}<span>{"Services"}</span></h1>
            <p class="lead">
                {"Explore our comprehensive range of printing services designed to bring your ideas to life with exceptional quality and attention to detail."}
            </p>

            { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                <div id={service.id} class={classes!("service-row", (index % 2 == 1).then(|| "reversed"))}>
                    <img src={service.image} alt={service.title} />
                    <div>
                        <h2>{service.title}</h2>
                        <p>{service.description}</p>
                        <h3>{"Key Features"}</h3>
                        <ul>
                            { for service.features.iter().map(|feature| html! {
                                <li><span class="bullet">{"• "}</span>{*feature}</li>
                            }) }
                        </ul>
                        <h3>{"Applications"}</h3>
                        <div class="applications">
                            { for service.applications.iter().map(|app| html! { <span>{*app}</span> }) }
                        </div>
                        <HeroButton onclick={go_to(&navigator, Route::Contact)}>
                            {"Get Started"}
                        </HeroButton>
                    </div>
                </div>
            }) }

            <div class="services-cta">
                <h2>{"Ready to bring your project to life?"}</h2>
                <p>
                    {"Contact our team today for a personalized quote or to discuss your specific printing needs. We're here to help bring your vision to reality."}
                </p>
                <div class="actions">
                    <HeroButton onclick={go_to(&navigator, Route::Contact)}>{"Contact Us"}</HeroButton>
                    <HeroButton onclick={go_to(&navigator, Route::Pricing)} variant={HeroVariant::Secondary}>
                        {"See Pricing"}
                    </HeroButton>
                </div>
            </div>
        </div>
    }
}
