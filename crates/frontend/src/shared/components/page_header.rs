use leptos::prelude::*;

const APP_TITLE: &str = "شرکت قالین";

fn document_title(page: &str) -> String {
    if page.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{} | {}", page, APP_TITLE)
    }
}

/// Page title with action buttons on the opposite side.
/// Also names the browser tab after the page.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&document_title(&title));
    }

    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <p class="page-header__subtitle">{s}</p>
                    })}
                </div>
            </div>
            <div class="page-header__actions">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("کارمندان"), "کارمندان | شرکت قالین");
        assert_eq!(document_title(""), "شرکت قالین");
    }
}
