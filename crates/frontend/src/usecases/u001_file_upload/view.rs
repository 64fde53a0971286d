//! File Upload - View Component

use super::api::FetchTransport;
use super::form::{StatusKind, StatusMessage};
use super::model::{submit_upload, UploadTarget};
use super::view_model::UploadFormVm;
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use crate::shared::presentation::{Presentation, Slot};
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_file_upload::FileUpload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn FileUploadPage() -> impl IntoView {
    let config = use_context::<PortalConfig>().expect("PortalConfig not provided");
    let auth = use_auth();
    let skin = config.presentation;
    let target = StoredValue::new(UploadTarget::from_config(&config));
    let vm = UploadFormVm::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        vm.select_file(file);
        // Clear input so picking the same file again fires `change`
        input.set_value("");
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(true);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if file.is_some() {
            vm.select_file(file);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = auth.session();
        let target = target.get_value();
        spawn_local(async move {
            submit_upload(&vm.form, &*session, &FetchTransport, &target).await;
            auth.refresh();
        });
    };

    view! {
        <div class=skin.class(Slot::Page) style=skin.style(Slot::Page)>
            <div class=skin.class(Slot::Card) style=skin.style(Slot::Card)>
                <h1 class=skin.class(Slot::Title) style=skin.style(Slot::Title)>
                    {FileUpload::display_name()}
                </h1>

                <div class=skin.class(Slot::SessionBar) style=skin.style(Slot::SessionBar)>
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=move || view! {
                            <button
                                type="button"
                                class=skin.class(Slot::SignInButton)
                                style=skin.style(Slot::SignInButton)
                                on:click=move |_| auth.sign_in()
                            >
                                <span class=skin.class(Slot::ButtonIcon) style=skin.style(Slot::ButtonIcon)>
                                    {icon("log-in")}
                                </span>
                                "Sign In"
                            </button>
                        }
                    >
                        <button
                            type="button"
                            class=skin.class(Slot::SignOutButton)
                            style=skin.style(Slot::SignOutButton)
                            on:click=move |_| auth.sign_out()
                        >
                            <span class=skin.class(Slot::ButtonIcon) style=skin.style(Slot::ButtonIcon)>
                                {icon("log-out")}
                            </span>
                            "Sign Out"
                        </button>
                    </Show>
                </div>

                {move || auth.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                })}

                <RequireAuth>
                    <div class=skin.class(Slot::Section) style=skin.style(Slot::Section)>
                        <h2 class=skin.class(Slot::Subtitle) style=skin.style(Slot::Subtitle)>
                            {FileUpload::description()}
                        </h2>

                        <form
                            class=skin.class(Slot::Form)
                            style=skin.style(Slot::Form)
                            on:submit=on_submit
                        >
                            <label
                                for="file-input"
                                class=skin.class(Slot::Label)
                                style=skin.style(Slot::Label)
                            >
                                "Choose a file:"
                            </label>
                            <div class=skin.class(Slot::DropZoneWrap) style=skin.style(Slot::DropZoneWrap)>
                                <label
                                    for="file-input"
                                    class=move || skin.class(drop_zone_slot(vm.is_dragging.get()))
                                    style=move || skin.style(drop_zone_slot(vm.is_dragging.get()))
                                    on:dragover=on_drag_over
                                    on:dragleave=move |_| vm.is_dragging.set(false)
                                    on:drop=on_drop
                                >
                                    <div class=skin.class(Slot::DropZoneBody) style=skin.style(Slot::DropZoneBody)>
                                        <span class=skin.class(Slot::DropZoneIcon) style=skin.style(Slot::DropZoneIcon)>
                                            {icon("cloud-upload")}
                                        </span>
                                        <p class=skin.class(Slot::DropHint) style=skin.style(Slot::DropHint)>
                                            <strong>"Click to upload"</strong>
                                            " or drag and drop"
                                        </p>
                                        <p class=skin.class(Slot::FileHint) style=skin.style(Slot::FileHint)>
                                            {move || vm.form.with(|form| match form.file() {
                                                Some(file) => format!("Selected: {}", file.name()),
                                                None => "Any file type is acceptable".to_string(),
                                            })}
                                        </p>
                                    </div>
                                    <input
                                        id="file-input"
                                        type="file"
                                        class=skin.class(Slot::HiddenInput)
                                        style=skin.style(Slot::HiddenInput)
                                        on:change=on_file_change
                                    />
                                </label>
                            </div>

                            <button
                                type="submit"
                                class=move || skin.class(submit_button_slot(vm.can_submit()))
                                style=move || skin.style(submit_button_slot(vm.can_submit()))
                                disabled=move || !vm.can_submit()
                            >
                                {move || if vm.is_uploading() {
                                    view! {
                                        <span class=skin.class(Slot::ButtonIcon) style=skin.style(Slot::ButtonIcon)>
                                            <Spinner size=SpinnerSize::Tiny />
                                        </span>
                                        "Uploading..."
                                    }.into_any()
                                } else {
                                    view! {
                                        <span class=skin.class(Slot::ButtonIcon) style=skin.style(Slot::ButtonIcon)>
                                            {icon("file-up")}
                                        </span>
                                        "Upload File"
                                    }.into_any()
                                }}
                            </button>
                        </form>

                        {move || vm.form.with(|form| form.status().cloned()).map(|status| view! {
                            <StatusPanel status=status skin=skin />
                        })}
                    </div>
                </RequireAuth>
            </div>
        </div>
    }
}

fn drop_zone_slot(is_dragging: bool) -> Slot {
    if is_dragging {
        Slot::DropZoneActive
    } else {
        Slot::DropZone
    }
}

fn submit_button_slot(enabled: bool) -> Slot {
    if enabled {
        Slot::SubmitButton
    } else {
        Slot::SubmitButtonDisabled
    }
}

/// Status line, coloured by its kind
#[component]
#[allow(non_snake_case)]
fn StatusPanel(status: StatusMessage, skin: Presentation) -> impl IntoView {
    let (slot, icon_name) = match status.kind {
        StatusKind::Info => (Slot::StatusInfo, "info"),
        StatusKind::Success => (Slot::StatusSuccess, "check-circle"),
        StatusKind::Error => (Slot::StatusError, "x-circle"),
    };

    view! {
        <div class=skin.class(slot) style=skin.style(slot) role="status">
            <span class=skin.class(Slot::StatusIcon) style=skin.style(Slot::StatusIcon)>
                {icon(icon_name)}
            </span>
            {status.text}
        </div>
    }
}
