use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Six-digit order reference from a random fraction in [0, 1).
pub fn order_number(fraction: f64) -> u32 {
    (100_000.0 + fraction.clamp(0.0, 1.0) * 900_000.0).floor().min(999_999.0) as u32
}

#[function_component(Confirmation)]
pub fn confirmation() -> Html {
    // Drawn once per visit, not per render.
    let number = use_state(|| order_number(Math::random()));

    html! {
        <main class="confirmation-page">
            <style>
                {r#"
                .confirmation-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 7rem 1.5rem 4rem;
                }
                .confirmation-card {
                    max-width: 36rem;
                    width: 100%;
                    background: #fff;
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                    text-align: center;
                    animation: pop-in 0.5s ease-out;
                }
                .confirmation-card .tick {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #22c55e;
                    font-size: 2.5rem;
                    line-height: 5rem;
                }
                .order-number { background: #f9fafb; padding: 1rem; border-radius: 0.5rem; }
                .order-number strong { font-family: monospace; font-size: 1.3rem; }
                .next-steps { text-align: left; }
                .confirmation-card .home-link {
                    display: block;
                    background: #ff5941;
                    color: #fff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                }
                @keyframes pop-in {
                    from { transform: scale(0.8); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
            <div class="confirmation-card">
                <div class="tick">{"✓"}</div>
                <h1>{"Order Confirmed!"}</h1>
                <p>{"Thank you for your order. We've received your printing request and are working on it."}</p>
                <div class="order-number">
                    <p>{"Order Number:"}</p>
                    <strong>{ *number }</strong>
                </div>
                <div class="next-steps">
                    <h2>{"What happens next?"}</h2>
                    <ol>
                        <li>{"Our team will process your photos"}</li>
                        <li>{"Your prints will be carefully prepared and packaged"}</li>
                        <li>{"You'll receive a shipping confirmation with tracking details"}</li>
                        <li>{"Your beautiful prints will arrive at your doorstep"}</li>
                    </ol>
                </div>
                <Link<Route> to={Route::Home} classes="home-link">{"Return to Home"}</Link<Route>>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_six_digits() {
        assert_eq!(order_number(0.0), 100_000);
        assert_eq!(order_number(0.5), 550_000);
        assert_eq!(order_number(0.999_999_9), 999_999);
        assert_eq!(order_number(1.0), 999_999);
    }
}
