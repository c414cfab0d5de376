use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const ALL_CATEGORIES: &str = "all";

pub const CATEGORIES: [&str; 7] = [ALL_CATEGORIES, "orders", "products", "technical", "payment", "shipping", "returns"];

pub const FAQ_ENTRIES: [FaqEntry; 10] = [
    FaqEntry {
        question: "How long does printing and shipping take?",
        answer: "Standard orders are typically processed within 1-2 business days. Shipping time depends on your location and selected shipping method. Standard shipping usually takes 3-5 business days, while expedited shipping can take 1-2 business days.",
        category: "orders",
    },
    FaqEntry {
        question: "What file formats do you accept?",
        answer: "We accept most common image formats including JPEG, PNG, TIFF, and HEIC. For best quality, we recommend high-resolution files with at least 300 DPI.",
        category: "technical",
    },
    FaqEntry {
        question: "Can I cancel or modify my order?",
        answer: "You can cancel or modify your order within 2 hours of placing it by contacting our customer support. Once your order enters production, we cannot cancel or modify it.",
        category: "orders",
    },
    FaqEntry {
        question: "What print sizes do you offer?",
        answer: "We offer a wide range of print sizes including 4×6, 5×7, 8×10, 11×14, and 16×20 inches. Custom sizes are also available upon request.",
        category: "products",
    },
    FaqEntry {
        question: "Do you offer framing services?",
        answer: "Yes, we offer high-quality frames in various styles and materials. You can select framing options during checkout or order frames separately.",
        category: "products",
    },
    FaqEntry {
        question: "How should I prepare my images for best print quality?",
        answer: "For optimal print quality, use high-resolution images (300 DPI or higher), ensure proper lighting and color balance, and avoid heavy cropping or over-filtering. If you're unsure, our team can provide a free quality assessment before printing.",
        category: "technical",
    },
    FaqEntry {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards, PayPal, and Apple Pay. Payment information is securely processed and we never store your full credit card details.",
        category: "payment",
    },
    FaqEntry {
        question: "Can I return my order if I'm not satisfied?",
        answer: "Yes, we offer a 100% satisfaction guarantee. If you're not completely satisfied with your prints, please contact us within 14 days of receiving your order for a replacement or refund.",
        category: "returns",
    },
    FaqEntry {
        question: "Do you ship internationally?",
        answer: "Yes, we ship to most countries worldwide. International shipping rates and delivery times vary by location. You can view estimated costs and delivery times during checkout.",
        category: "shipping",
    },
    FaqEntry {
        question: "What paper types do you offer?",
        answer: "We offer several paper options including glossy, matte, pearl, metallic, and fine art papers. Each has unique characteristics that enhance different types of photography.",
        category: "products",
    },
];

/// Case-insensitive substring search over question and answer, narrowed to
/// one category unless `category` is "all".
pub fn filter_faqs<'a>(entries: &'a [FaqEntry], query: &str, category: &str) -> Vec<&'a FaqEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle)
        })
        .filter(|entry| category == ALL_CATEGORIES || entry.category == category)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    ontoggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            ontoggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let query = use_state(String::new);
    let category = use_state(|| ALL_CATEGORIES);
    // Keyed by question so the open item survives re-filtering.
    let open = use_state(|| None::<&'static str>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            query.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let clear_filters = {
        let query = query.clone();
        let category = category.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(String::new());
            category.set(ALL_CATEGORIES);
        })
    };

    let visible = filter_faqs(&FAQ_ENTRIES, &query, *category);

    html! {
        <main class="faq-page">
            <style>
                {r#"
                .faq-page {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                }
                .faq-page h1 { text-align: center; }
                .faq-page .lead { text-align: center; color: #4b5563; }
                .faq-search {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    margin-bottom: 1rem;
                }
                .faq-categories { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 2rem; }
                .faq-categories button {
                    border: none;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    background: #f3f4f6;
                    color: #374151;
                    cursor: pointer;
                }
                .faq-categories button.active { background: #ff5941; color: #fff; }
                .faq-item { border: 1px solid #e5e7eb; border-radius: 0.5rem; margin-bottom: 1rem; overflow: hidden; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 1rem;
                    background: none;
                    border: none;
                    text-align: left;
                    font-weight: 500;
                    cursor: pointer;
                }
                .faq-answer { padding: 0 1rem 1rem; background: #f9fafb; color: #374151; }
                .faq-empty { text-align: center; color: #6b7280; padding: 2rem 0; }
                .faq-empty button { background: none; border: none; color: #ff5941; cursor: pointer; }
                .faq-cta { background: #f9fafb; padding: 1.5rem; border-radius: 0.75rem; text-align: center; }
                .faq-page .back { text-align: center; margin-top: 3rem; }
                "#}
            </style>
            <h1>{"Frequently Asked Questions"}</h1>
            <p class="lead">
                {"Find answers to common questions about our printing services, ordering process, and more."}
            </p>

            <input
                type="text"
                class="faq-search"
                placeholder="Search questions..."
                value={(*query).clone()}
                oninput={on_search}
            />
            <div class="faq-categories">
                { for CATEGORIES.iter().map(|name| {
                    let onclick = {
                        let category = category.clone();
                        let name = *name;
                        Callback::from(move |_: MouseEvent| category.set(name))
                    };
                    html! {
                        <button key={*name} class={classes!((*category == *name).then(|| "active"))} {onclick}>
                            { capitalize(name) }
                        </button>
                    }
                }) }
            </div>

            if visible.is_empty() {
                <div class="faq-empty">
                    <p>{"No questions found matching your search."}</p>
                    <button onclick={clear_filters}>{"Clear filters"}</button>
                </div>
            } else {
                { for visible.into_iter().map(|entry| {
                    let is_open = *open == Some(entry.question);
                    let ontoggle = {
                        let open = open.clone();
                        let question = entry.question;
                        Callback::from(move |_: ()| {
                            open.set(if is_open { None } else { Some(question) });
                        })
                    };
                    html! {
                        <FaqItem key={entry.question} question={entry.question} open={is_open} {ontoggle}>
                            <p>{ entry.answer }</p>
                        </FaqItem>
                    }
                }) }
            }

            <div class="faq-cta">
                <h2>{"Still have questions?"}</h2>
                <p>{"We're here to help with any questions you may have."}</p>
                <Link<Route> to={Route::Contact}>{"Contact Us"}</Link<Route>>
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

    fn questions(found: Vec<&FaqEntry>) -> Vec<&'static str> {
        found.into_iter().map(|entry| entry.question).collect()
    }

    #[test]
    fn empty_query_and_all_shows_everything() {
        assert_eq!(filter_faqs(&FAQ_ENTRIES, "", ALL_CATEGORIES).len(), 10);
    }

    #[test]
    fn search_ignores_case_and_reads_answers() {
        let found = questions(filter_faqs(&FAQ_ENTRIES, "PAYPAL", ALL_CATEGORIES));
        assert_eq!(found, vec!["What payment methods do you accept?"]);
    }

    #[test]
    fn category_narrows_the_search() {
        assert_eq!(filter_faqs(&FAQ_ENTRIES, "", "products").len(), 3);
        let found = questions(filter_faqs(&FAQ_ENTRIES, "order", "orders"));
        assert_eq!(
            found,
            vec!["How long does printing and shipping take?", "Can I cancel or modify my order?"]
        );
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter_faqs(&FAQ_ENTRIES, "holographic", ALL_CATEGORIES).is_empty());
        assert!(filter_faqs(&FAQ_ENTRIES, "paypal", "shipping").is_empty());
    }

    #[test]
    fn category_labels_are_capitalized() {
        assert_eq!(capitalize("technical"), "Technical");
        assert_eq!(capitalize(""), "");
    }
}
