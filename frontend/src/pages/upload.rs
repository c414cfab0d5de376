use log::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::shop::order::{parse_image_count, CheckoutQuery};
use crate::shop::pricing::{compute_total, PackageTier};
use crate::Route;

/// Entry point of the print flow: how many images the order covers.
/// Hands the count to `/checkout` as `?images=N`.
#[function_component(Upload)]
pub fn upload() -> Html {
    let navigator = use_navigator();
    let count_input = use_state(|| String::from("20"));
    let invalid = use_state(|| false);

    let oninput = {
        let count_input = count_input.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: InputEvent| {
            count_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
            invalid.set(false);
        })
    };

    let onsubmit = {
        let count_input = count_input.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let images = match parse_image_count(Some(count_input.as_str())) {
                Some(images) if images > 0 => images,
                _ => {
                    invalid.set(true);
                    return;
                }
            };
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.push_with_query(&Route::Checkout, &CheckoutQuery { images }) {
                    error!("Could not open checkout: {:?}", e);
                }
            }
        })
    };

    let estimate = parse_image_count(Some(count_input.as_str()))
        .map(|images| compute_total(PackageTier::default(), images));

    html! {
        <main class="upload-page">
            <style>
                {r#"
                .upload-page {
                    max-width: 32rem;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                    text-align: center;
                }
                .upload-page input {
                    width: 8rem;
                    padding: 0.75rem;
                    font-size: 1.2rem;
                    text-align: center;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                }
                .upload-page input.invalid { border-color: #ef4444; }
                .upload-page .estimate { color: #6b7280; }
                .upload-page button {
                    margin-top: 1.5rem;
                    background: #ff5941;
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    padding: 0.75rem 2.5rem;
                    cursor: pointer;
                }
                "#}
            </style>
            <h1>{"How many photos are we printing?"}</h1>
            <form {onsubmit}>
                <input
                    type="number"
                    min="1"
                    value={(*count_input).clone()}
                    class={classes!((*invalid).then(|| "invalid"))}
                    {oninput}
                />
                if *invalid {
                    <p class="field-error">{"Enter a whole number of images greater than zero."}</p>
                }
                if let Some(total) = estimate {
                    <p class="estimate">{ format!("From ${} with the Premium package", total) }</p>
                }
                <div>
                    <button type="submit">{"Continue to checkout"}</button>
                </div>
            </form>
            <p>
                {"Not sure which package fits? "}
                <Link<Route> to={Route::Pricing}>{"Compare plans"}</Link<Route>>
                {" or "}
                <Link<Route> to={Route::Contact}>{"ask us"}</Link<Route>>
                {"."}
            </p>
        </main>
    }
}
