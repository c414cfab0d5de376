use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::forms::state::{FormAction, FormState, SubmitCheck, SubmitPhase};
use crate::forms::submit::{submit_order, OrderRequest};
use crate::forms::validation::{CheckoutField, FormField};
use crate::shop::order::{parse_image_count, OrderAction, OrderDraft};
use crate::shop::pricing::PackageTier;
use crate::Route;

type CheckoutForm = UseReducerHandle<FormState<CheckoutField>>;

fn on_edit(form: &CheckoutForm, field: CheckoutField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = match e.target_dyn_into::<HtmlTextAreaElement>() {
            Some(area) => area.value(),
            None => e.target_unchecked_into::<HtmlInputElement>().value(),
        };
        form.dispatch(FormAction::Edit(field, value));
    })
}

fn input_class(form: &CheckoutForm, field: CheckoutField) -> Classes {
    classes!("field-input", form.error(field).is_some().then(|| "invalid"))
}

fn field_error(form: &CheckoutForm, field: CheckoutField) -> Html {
    match form.error(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn text_field(form: &CheckoutForm, field: CheckoutField, label: &str, input_type: &str) -> Html {
    html! {
        <div class="field">
            <label for={field.name()}>{ label }</label>
            <input
                type={input_type.to_string()}
                id={field.name()}
                name={field.name()}
                value={form.value(field)}
                class={input_class(form, field)}
                oninput={on_edit(form, field)}
            />
            { field_error(form, field) }
        </div>
    }
}

/// Redirects to the upload flow unless the URL carries a usable `images` count.
#[function_component(Checkout)]
pub fn checkout() -> Html {
    let images = use_search_param("images".to_string());

    match parse_image_count(images.as_deref()) {
        Some(image_count) => html! { <CheckoutContent {image_count} /> },
        None => {
            info!("Checkout opened without an image count, redirecting to upload");
            html! { <Redirect<Route> to={Route::Upload} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct CheckoutContentProps {
    image_count: u32,
}

#[function_component(CheckoutContent)]
fn checkout_content(props: &CheckoutContentProps) -> Html {
    let order = use_reducer(|| OrderDraft::new(props.image_count));
    let form = use_reducer(FormState::<CheckoutField>::default);
    let navigator = use_navigator();

    {
        let order = order.clone();
        use_effect_with_deps(
            move |image_count| {
                order.dispatch(OrderAction::SetImageCount(*image_count));
                || ()
            },
            props.image_count,
        );
    }

    let on_tier = {
        let order = order.clone();
        Callback::from(move |e: Event| {
            let key = e.target_unchecked_into::<HtmlSelectElement>().value();
            order.dispatch(OrderAction::SelectTier(PackageTier::from_key_or_default(Some(&key))));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let order = order.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.check() {
                SubmitCheck::Busy => {}
                SubmitCheck::Invalid(errors) => form.dispatch(FormAction::ShowErrors(errors)),
                SubmitCheck::Ready(fields) => {
                    form.dispatch(FormAction::Started);
                    let request = OrderRequest {
                        fields,
                        tier: order.tier,
                        image_count: order.image_count,
                        total: order.total(),
                    };
                    let form = form.clone();
                    let navigator = navigator.clone();
                    spawn_local(async move {
                        let result = submit_order(&request).await;
                        let succeeded = result.is_ok();
                        if let Err(e) = &result {
                            gloo_console::error!("Order submission failed:", e.to_string());
                        }
                        form.dispatch(FormAction::Finished(result));
                        if succeeded {
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Confirmation);
                            }
                        }
                    });
                }
            }
        })
    };

    let total = order.total();
    let busy = form.is_busy();

    html! {
        <main class="checkout-page">
            <style>
                {r#"
                .checkout-page {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                }
                .checkout-page h1 { text-align: center; }
                .checkout-grid { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
                .order-summary { background: #f9fafb; padding: 1.5rem; border-radius: 0.75rem; }
                .order-summary .line { display: flex; justify-content: space-between; }
                .order-summary .line.total { font-weight: 700; font-size: 1.1rem; margin-top: 0.5rem; }
                .order-summary select { width: 100%; padding: 0.5rem; border-radius: 0.5rem; }
                .field { margin-bottom: 1rem; }
                .field label { display: block; font-size: 0.9rem; color: #374151; margin-bottom: 0.25rem; }
                .field-input {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                }
                .field-input.invalid { border-color: #ef4444; }
                .field-error { color: #ef4444; font-size: 0.85rem; margin-top: 0.25rem; }
                .field-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .submit-order {
                    width: 100%;
                    background: #ff5941;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                }
                .submit-order:disabled { opacity: 0.7; cursor: not-allowed; }
                .submit-failure {
                    background: #fef2f2;
                    color: #b91c1c;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }
                .checkout-page .back { text-align: center; margin-top: 3rem; }
                @media (max-width: 768px) {
                    .checkout-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <h1>{"Checkout"}</h1>
            <div class="checkout-grid">
                <div class="order-summary">
                    <h2>{"Order Summary"}</h2>
                    <p>{"Number of images:"}</p>
                    <p><strong>{ order.image_count }</strong></p>
                    <p>{"Package:"}</p>
                    <select onchange={on_tier} disabled={busy}>
                        { for PackageTier::ALL.iter().map(|tier| html! {
                            <option value={tier.key()} selected={*tier == order.tier}>
                                { format!("{} - ${}", tier.terms().name, tier.terms().base_price) }
                            </option>
                        }) }
                    </select>
                    <hr />
                    <div class="line"><span>{"Subtotal:"}</span><span>{ format!("${}", total) }</span></div>
                    <div class="line"><span>{"Shipping:"}</span><span>{"FREE"}</span></div>
                    <div class="line total"><span>{"Total:"}</span><span>{ format!("${}", total) }</span></div>
                </div>

                <form {onsubmit} novalidate=true>
                    if let SubmitPhase::Failed(message) = &form.phase {
                        <div class="submit-failure">{ message }</div>
                    }
                    { text_field(&form, CheckoutField::Name, "Full Name", "text") }
                    { text_field(&form, CheckoutField::Email, "Email", "email") }
                    <div class="field">
                        <label for={CheckoutField::Address.name()}>{"Shipping Address"}</label>
                        <textarea
                            id={CheckoutField::Address.name()}
                            name={CheckoutField::Address.name()}
                            rows="3"
                            value={form.value(CheckoutField::Address)}
                            class={input_class(&form, CheckoutField::Address)}
                            oninput={on_edit(&form, CheckoutField::Address)}
                        />
                        { field_error(&form, CheckoutField::Address) }
                    </div>
                    <div class="field-pair">
                        { text_field(&form, CheckoutField::City, "City", "text") }
                        { text_field(&form, CheckoutField::ZipCode, "Zip Code", "text") }
                    </div>
                    { text_field(&form, CheckoutField::Country, "Country", "text") }
                    <button type="submit" class="submit-order" disabled={busy}>
                        if busy {
                            {"Processing..."}
                        } else {
                            { format!("Complete Order - ${}", total) }
                        }
                    </button>
                </form>
            </div>
            <div class="back">
                <Link<Route> to={Route::Upload}>{"← Back to upload"}</Link<Route>>
            </div>
        </main>
    }
}
