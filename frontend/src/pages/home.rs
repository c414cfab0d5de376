use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bento::PrintingStats;
use crate::decor::magnetic::{HeroButton, HeroVariant};
use crate::decor::parallax::{FloatPosition, Floating, FloatingElement};
use crate::pages::services::{go_to, SERVICES};
use crate::Route;

const ROTATING_WORDS: [&str; 12] = [
    "Vision", "Photos", "Memories", "Logos", "Banners", "Cards",
    "Dreams", "Ideas", "Designs", "Identity", "Artwork", "Branding",
];

const ROTATION_MS: u32 = 3000;

struct HeroImage {
    src: &'static str,
    title: &'static str,
    depth: f64,
    position: FloatPosition,
    scroll_speed: f64,
    class: &'static str,
}

const HERO_IMAGES: [HeroImage; 5] = [
    HeroImage {
        src: "/image/hero/logo.png",
        title: "Professional logo printing",
        depth: 0.8,
        position: FloatPosition::TopLeft,
        scroll_speed: 1.2,
        class: "hero-logo",
    },
    HeroImage {
        src: "/image/hero/banner.png",
        title: "Banner printing",
        depth: 1.2,
        position: FloatPosition::TopLeft,
        scroll_speed: 1.5,
        class: "hero-banner",
    },
    HeroImage {
        src: "/image/hero/businesscard.png",
        title: "Business card printing",
        depth: 0.7,
        position: FloatPosition::BottomLeft,
        scroll_speed: 0.8,
        class: "hero-card",
    },
    HeroImage {
        src: "/image/hero/menu.png",
        title: "Menu printing",
        depth: 1.0,
        position: FloatPosition::TopRight,
        scroll_speed: 1.3,
        class: "hero-menu",
    },
    HeroImage {
        src: "/image/hero/menu2.png",
        title: "Custom menu design",
        depth: 0.6,
        position: FloatPosition::BottomRight,
        scroll_speed: 1.0,
        class: "hero-menu-alt",
    },
];

struct ProcessVideo {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    src: &'static str,
}

const PROCESS_VIDEOS: [ProcessVideo; 2] = [
    ProcessVideo {
        id: "printing-process",
        title: "Printing Process",
        description: "See our professional printing machines in action",
        src: "https://res.cloudinary.com/read-cv/video/upload/t_v_b/v1/1/profileItems/W2azTw5BVbMXfj7F53G92hMVIn32/newProfileItem/d898be8a-7037-4c71-af0c-8997239b050d.mp4?_a=DATAdtAAZAA0",
    },
    ProcessVideo {
        id: "finished-products",
        title: "Finished Products",
        description: "High-quality printed materials for your business",
        src: "https://res.cloudinary.com/read-cv/video/upload/t_v_b/v1/1/profileItems/W2azTw5BVbMXfj7F53G92hMVIn32/XSfIvT7BUWbPRXhrbLed/ee6871c9-8400-49d2-8be9-e32675eabf7e.mp4?_a=DATAdtAAZAA0",
    },
];

fn next_word(index: usize) -> usize {
    (index + 1) % ROTATING_WORDS.len()
}

#[function_component(RotatingWord)]
fn rotating_word() -> Html {
    let index = use_state(|| 0_usize);

    {
        let index = index.clone();
        use_effect_with_deps(move |_| {
            let mut current = 0;
            let ticker = Interval::new(ROTATION_MS, move || {
                current = next_word(current);
                index.set(current);
            });
            move || drop(ticker)
        }, ());
    }

    // Keyed so the entrance animation replays on every change.
    html! {
        <span class="rotating-word" key={*index}>
            { ROTATING_WORDS[*index] }
        </span>
    }
}

/// Muted, looping clips of the print floor and finished work.
#[function_component(VideoSection)]
fn video_section() -> Html {
    html! {
        <section class="videos">
            <h2>{"Our Printing "}<span>{"Process"}</span></h2>
            <p class="lead">
                {"Watch how we transform your designs into high-quality printed materials using state-of-the-art technology"}
            </p>
            <div class="video-grid">
                { for PROCESS_VIDEOS.iter().map(|video| html! {
                    <div key={video.id} class="video-card">
                        <video src={video.src} title={video.title} autoplay=true loop=true muted=true playsinline=true />
                        <h3>{ video.title }</h3>
                        <p>{ video.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();

    html! {
        <main class="home">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .floating {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    z-index: 30;
                }
                .floating-element { position: absolute; }
                .floating-element img { object-fit: contain; border-radius: 0.75rem; }
                .hero-logo { top: 15%; left: 10%; }
                .hero-logo img { width: 14rem; }
                .hero-banner { top: 5%; left: 28%; transform: rotate(-6deg); }
                .hero-banner img { width: 30rem; }
                .hero-card { bottom: 12%; left: 15%; }
                .hero-card img { width: 20rem; }
                .hero-menu { top: 8%; right: 20%; }
                .hero-menu img { width: 18rem; }
                .hero-menu-alt { bottom: 10%; right: 15%; }
                .hero-menu-alt img { width: 18rem; }
                .hero h1 {
                    font-size: 5.5rem;
                    font-weight: 300;
                    text-align: center;
                    line-height: 1.1;
                    z-index: 20;
                }
                .rotating-word {
                    display: inline-block;
                    color: #fff;
                    background: #ff5941;
                    border-radius: 0.5rem;
                    padding: 0 0.75rem;
                    animation: word-in 0.4s ease-out;
                }
                @keyframes word-in {
                    from { transform: translateY(100%); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                .hero .subtitle { max-width: 28rem; text-align: center; font-weight: 500; z-index: 20; }
                .hero .actions { display: flex; gap: 1.5rem; margin-top: 3rem; z-index: 50; }
                .hero-button {
                    border: none;
                    border-radius: 999px;
                    padding: 1rem 2.5rem;
                    font-size: 1.1rem;
                    color: #fff;
                    cursor: pointer;
                }
                .hero-button.primary { background: #ff5941; }
                .hero-button.secondary { background: #000; }
                .hero-button.full-width { width: 100%; }
                .videos {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .videos h2 { font-size: 3.5rem; font-weight: 300; text-align: center; }
                .videos h2 span { color: #ff5941; }
                .videos .lead { max-width: 42rem; margin: 0 auto 3rem; text-align: center; color: #52525b; }
                .video-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 3rem; }
                .video-card video {
                    width: 100%;
                    aspect-ratio: 16 / 9;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .video-card h3 { font-size: 1.5rem; font-weight: 300; margin: 1rem 0 0.25rem; }
                .video-card p { color: #52525b; margin: 0; }
                .featured {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .featured h2 { font-size: 3.5rem; font-weight: 300; text-align: center; }
                .featured h2 span { color: #ff5941; }
                .featured-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .featured-card {
                    display: flex;
                    flex-direction: column;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    text-align: center;
                }
                .featured-card img { width: 100%; height: 14rem; object-fit: cover; }
                .featured-card .body { padding: 1.5rem; flex-grow: 1; }
                @media (max-width: 768px) {
                    .floating { display: none; }
                    .hero h1 { font-size: 3rem; }
                    .hero .actions { flex-direction: column; width: 100%; padding: 0 1.5rem; }
                    .featured-grid { grid-template-columns: 1fr; }
                    .video-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <section class="hero">
                <Floating>
                    { for HERO_IMAGES.iter().map(|image| html! {
                        <FloatingElement
                            depth={image.depth}
                            position={image.position}
                            scroll_speed={image.scroll_speed}
                            class={image.class}
                        >
                            <img src={image.src} alt={image.title} />
                        </FloatingElement>
                    }) }
                </Floating>

                <h1>
                    <span class="hero-lead">{"We Print"}</span>
                    <br />
                    {"your "}<RotatingWord />
                </h1>
                <p class="subtitle">
                    {"Premium quality photo printing services for your most precious moments. Fast delivery, exceptional results."}
                </p>
                <div class="actions">
                    <HeroButton onclick={go_to(&navigator, Route::Pricing)} variant={HeroVariant::Secondary}>
                        {"See pricing →"}
                    </HeroButton>
                    <HeroButton onclick={go_to(&navigator, Route::Contact)}>
                        {"Contact Us"}
                    </HeroButton>
                </div>
            </section>

            <VideoSection />

            <section class="featured">
                <h2>{"Featured Products & "}<span>{"Services"}</span></h2>
                <div class="featured-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.id} class="featured-card">
                            <img src={service.image} alt={service.title} />
                            <div class="body">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <HeroButton onclick={go_to(&navigator, Route::Services)} variant={HeroVariant::Secondary}>
                                    {"View Details"}
                                </HeroButton>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <PrintingStats />
        </main>
    }
}
