use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, FileList, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::forms::state::{FormAction, SubmitCheck, SubmitPhase};
use crate::forms::submit::{submit_contact, ContactRequest};
use crate::forms::validation::{ContactField, FormField};
use crate::uploads::attachments::{ContactAction, ContactState};
use crate::uploads::intake::admit_files;
use crate::uploads::object_url::BrowserObjectUrls;
use crate::Route;

const SUBJECTS: [&str; 6] = [
    "Order Inquiry",
    "Technical Support",
    "Print Quality",
    "Shipping & Delivery",
    "Pricing Questions",
    "Other",
];

type ContactHandle = UseReducerHandle<ContactState<File>>;

fn files_of(list: Option<FileList>) -> Vec<File> {
    match list {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}

/// Runs a dropped or picked batch through the intake guard.
fn admit(state: &ContactHandle, incoming: Vec<File>) {
    let intake = admit_files(state.files.len(), incoming, &BrowserObjectUrls);
    for message in &intake.rejected {
        gloo_console::log!("Attachment rejected:", message);
    }
    state.dispatch(ContactAction::Admit(intake));
}

fn edit(state: &ContactHandle, field: ContactField, value: String) {
    state.dispatch(ContactAction::Form(FormAction::Edit(field, value)));
}

fn field_class(state: &ContactHandle, field: ContactField) -> Classes {
    classes!("field-input", state.form.error(field).is_some().then(|| "invalid"))
}

fn field_error(state: &ContactHandle, field: ContactField) -> Html {
    match state.form.error(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn text_field(state: &ContactHandle, field: ContactField, input_type: &str) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            edit(&state, field, e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    html! {
        <div class="field">
            <label for={field.name()}>{ field.label() }</label>
            <input
                type={input_type.to_string()}
                id={field.name()}
                name={field.name()}
                value={state.form.value(field)}
                class={field_class(state, field)}
                {oninput}
            />
            { field_error(state, field) }
        </div>
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.0} KB", (bytes as f64 / 1024.0).ceil())
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer(ContactState::<File>::default);

    let on_drag_over = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            if !state.drag_active {
                state.dispatch(ContactAction::DragActive(true));
            }
        })
    };

    let on_drag_leave = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            state.dispatch(ContactAction::DragActive(false));
        })
    };

    let on_drop = {
        let state = state.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            let dropped = files_of(e.data_transfer().and_then(|dt| dt.files()));
            admit(&state, dropped);
        })
    };

    let on_pick = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            admit(&state, files_of(input.files()));
            // Lets the same file be picked again after removal.
            input.set_value("");
        })
    };

    let on_subject = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            edit(&state, ContactField::Subject, e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            edit(&state, ContactField::Message, e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match state.form.check() {
                SubmitCheck::Busy => {}
                SubmitCheck::Invalid(errors) => {
                    state.dispatch(ContactAction::Form(FormAction::ShowErrors(errors)));
                }
                SubmitCheck::Ready(fields) => {
                    state.dispatch(ContactAction::Form(FormAction::Started));
                    let request = ContactRequest {
                        fields,
                        attachments: state.attachment_summaries(),
                    };
                    let state = state.clone();
                    spawn_local(async move {
                        let result = submit_contact(&request).await;
                        if let Err(e) = &result {
                            gloo_console::error!("Contact submission failed:", e.to_string());
                        }
                        state.dispatch(ContactAction::Form(FormAction::Finished(result)));
                    });
                }
            }
        })
    };

    let start_over = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::StartOver))
    };

    let busy = state.form.is_busy();
    let subject = state.form.value(ContactField::Subject);

    html! {
        <main class="contact-page">
            <style>
                {r#"
                .contact-page {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                }
                .contact-page h1 { font-size: 3.5rem; font-weight: 300; text-align: center; }
                .contact-page h1 span { color: #ff5941; }
                .contact-page .lead { text-align: center; color: #4b5563; max-width: 40rem; margin: 0 auto 3rem; }
                .contact-grid { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
                .contact-info { background: #f9fafb; padding: 1.5rem; border-radius: 0.75rem; }
                .contact-info h3 { font-weight: 500; margin-bottom: 0.25rem; }
                .contact-info p { color: #4b5563; }
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
                .file-errors {
                    background: #fef2f2;
                    border: 1px solid #fecaca;
                    color: #b91c1c;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }
                .drop-zone {
                    border: 2px dashed #d1d5db;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                    transition: background 0.2s ease, border-color 0.2s ease;
                }
                .drop-zone.active { border-color: #ff5941; background: #fff7ed; }
                .drop-zone .browse {
                    display: inline-block;
                    background: #ff5941;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    cursor: pointer;
                }
                .drop-zone input { display: none; }
                .drop-zone .hint { color: #6b7280; font-size: 0.8rem; }
                .preview-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .preview { position: relative; }
                .preview img { width: 100%; height: 6rem; object-fit: cover; border-radius: 0.5rem; }
                .preview p { font-size: 0.75rem; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
                .preview .remove {
                    position: absolute;
                    top: 0.25rem;
                    right: 0.25rem;
                    width: 1.25rem;
                    height: 1.25rem;
                    border: none;
                    border-radius: 50%;
                    background: #ef4444;
                    color: #fff;
                    cursor: pointer;
                }
                .send-button {
                    width: 100%;
                    background: #ff5941;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    margin-top: 1rem;
                    cursor: pointer;
                }
                .send-button:disabled { opacity: 0.7; cursor: not-allowed; }
                .submit-failure {
                    background: #fef2f2;
                    color: #b91c1c;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }
                .sent-panel {
                    background: #f0fdf4;
                    border: 1px solid #bbf7d0;
                    color: #15803d;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                }
                .sent-panel button {
                    background: #16a34a;
                    color: #fff;
                    border: none;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }
                .contact-page .back { text-align: center; margin-top: 3rem; }
                @media (max-width: 768px) {
                    .contact-grid, .field-pair { grid-template-columns: 1fr; }
                    .preview-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <h1>{"Contact "}<span>{"Us"}</span></h1>
            <p class="lead">
                {"Have questions about our printing services? We're here to help. Fill out the form below and we'll get back to you as soon as possible."}
            </p>

            <div class="contact-grid">
                <div class="contact-info">
                    <h2>{"Our Information"}</h2>
                    <h3>{"Address"}</h3>
                    <p>{config::SHOP_STREET}<br />{config::SHOP_CITY}</p>
                    <h3>{"Email"}</h3>
                    <p>{config::SHOP_EMAIL}</p>
                    <h3>{"Phone"}</h3>
                    <p>{config::SHOP_PHONE}<br />{format!("F {}", config::SHOP_FAX)}</p>
                </div>

                <div>
                    if state.form.phase == SubmitPhase::Succeeded {
                        <div class="sent-panel">
                            <h2>{"Message Sent!"}</h2>
                            <p>{"Thank you for contacting us. We have received your message and will get back to you shortly."}</p>
                            <button onclick={start_over}>{"Send Another Message"}</button>
                        </div>
                    } else {
                        <form {onsubmit} novalidate=true>
                            if let SubmitPhase::Failed(message) = &state.form.phase {
                                <div class="submit-failure">{ message }</div>
                            }
                            <div class="field-pair">
                                { text_field(&state, ContactField::Name, "text") }
                                { text_field(&state, ContactField::Email, "email") }
                            </div>

                            <div class="field">
                                <label for={ContactField::Subject.name()}>{"Subject"}</label>
                                <select
                                    id={ContactField::Subject.name()}
                                    name={ContactField::Subject.name()}
                                    class={field_class(&state, ContactField::Subject)}
                                    onchange={on_subject}
                                >
                                    <option value="" selected={subject.is_empty()}>{"Select a subject"}</option>
                                    { for SUBJECTS.iter().map(|option| html! {
                                        <option value={*option} selected={subject == *option}>{*option}</option>
                                    }) }
                                </select>
                                { field_error(&state, ContactField::Subject) }
                            </div>

                            <div class="field">
                                <label for={ContactField::Message.name()}>{"Message"}</label>
                                <textarea
                                    id={ContactField::Message.name()}
                                    name={ContactField::Message.name()}
                                    rows="4"
                                    value={state.form.value(ContactField::Message)}
                                    class={field_class(&state, ContactField::Message)}
                                    oninput={on_message}
                                />
                                { field_error(&state, ContactField::Message) }
                            </div>

                            <div class="field">
                                <label>{"Attach Images (Optional)"}</label>
                                if !state.file_errors.is_empty() {
                                    <div class="file-errors">
                                        <p>{"Please fix the following errors:"}</p>
                                        <ul>
                                            { for state.file_errors.iter().map(|message| html! { <li>{ message }</li> }) }
                                        </ul>
                                    </div>
                                }
                                <div
                                    class={classes!("drop-zone", state.drag_active.then(|| "active"))}
                                    ondragenter={on_drag_over.clone()}
                                    ondragover={on_drag_over}
                                    ondragleave={on_drag_leave}
                                    ondrop={on_drop}
                                >
                                    <p>{"Drag and drop your images here, or"}</p>
                                    <label class="browse">
                                        {"Browse Files"}
                                        <input type="file" multiple=true accept="image/*" onchange={on_pick} />
                                    </label>
                                    <p class="hint">
                                        { format!("Upload up to {} images (Max 5MB each)", config::MAX_FILES) }
                                    </p>
                                </div>

                                if !state.files.is_empty() {
                                    <p>{ format!("Selected Images ({})", state.files.len()) }</p>
                                    <div class="preview-grid">
                                        { for state.files.iter().enumerate().map(|(index, entry)| {
                                            let remove = {
                                                let state = state.clone();
                                                Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::Remove(index)))
                                            };
                                            html! {
                                                <div key={entry.url.as_str().to_string()} class="preview">
                                                    <img src={entry.url.as_str().to_string()} alt={format!("Upload preview {}", index)} />
                                                    <button type="button" class="remove" aria-label="Remove image" onclick={remove}>
                                                        {"×"}
                                                    </button>
                                                    <p>{ &entry.name }{" · "}{ format_size(entry.size) }</p>
                                                </div>
                                            }
                                        }) }
                                    </div>
                                }
                            </div>

                            <button type="submit" class="send-button" disabled={busy}>
                                { if busy { "Sending..." } else { "Send Message" } }
                            </button>
                        </form>
                    }
                </div>
            </div>

            <div class="back">
                <Link<Route> to={Route::Home}>{"← Back to home"}</Link<Route>>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_read_naturally() {
        assert_eq!(format_size(1), "1 KB");
        assert_eq!(format_size(2048), "2 KB");
        assert_eq!(format_size(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
