use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid #f4f4f5;
                    padding: 4rem 1.5rem;
                    background: #fff;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }
                .footer-grid h4 { text-transform: uppercase; font-weight: 500; }
                .footer-grid ul { list-style: none; padding: 0; }
                .footer-grid li { margin-bottom: 0.75rem; }
                .footer-grid a { color: #18181b; text-decoration: none; }
                .footer-grid a:hover { text-decoration: underline; }
                .footer-grid .accent { color: #ff5941; }
                .footer-tagline { text-transform: uppercase; font-weight: 300; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    color: #71717a;
                    font-size: 0.85rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <p>{format!("{}, {}", config::SHOP_STREET, config::SHOP_CITY)}</p>
                    <p>{config::SHOP_PHONE}{" · F "}{config::SHOP_FAX}</p>
                    <div class="footer-tagline">
                        <p>{"HIGH QUALITY OFFSET PRINTING"}</p>
                        <p>{"SINCE 1991"}</p>
                    </div>
                    <a class="accent" href={format!("mailto:{}", config::SHOP_EMAIL)}>{config::SHOP_EMAIL}</a>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { for ["Business Cards", "Brochures", "Flyers", "Banners", "Restaurant Menus"].iter().map(|label| html! {
                            <li><Link<Route> to={Route::Services}>{*label}</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::Contact}>{"Contact Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Pricing}>{"Pricing"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {}. All rights reserved.", config::SHOP_NAME)}
            </div>
        </footer>
    }
}
