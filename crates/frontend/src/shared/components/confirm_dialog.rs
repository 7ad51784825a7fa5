use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog. `on_confirm` runs on "yes"; "no" just closes it.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "بلی".to_string());

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>{message}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_label}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| open.set(false)
                        >
                            "نخیر"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Browser confirm box used before deleting a record
pub fn confirm_delete(what: &str) -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message(&format!("آیا می‌خواهید این {} را حذف کنید؟", what))
                .ok()
        })
        .unwrap_or(false)
}
