//! Devices Page

use backend_client::models::{Device, DeviceStatus, Entity};
use leptos::prelude::*;

use crate::components::{Badge, DashboardLayout, Dialog, EmptyState, EnumSelect, PageHeader};
use crate::context::use_app;
use crate::flow;
use crate::forms::{self, FormValues, DEVICE_FIELDS, DEVICE_REQUIRED};
use crate::table_page::TablePage;

/// Optional column text, or "N/A".
fn or_na(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[component]
pub fn DevicesPage() -> impl IntoView {
    let ctx = use_app();
    let page = TablePage::<Device>::mount(ctx);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(values) = FormValues::from_submit(&ev, &DEVICE_FIELDS) {
            page.submit(ctx, forms::device_draft(&values));
        }
    };

    let text_field = |name: &'static str, label: &'static str| {
        let required = DEVICE_REQUIRED.contains(&name);
        view! {
            <label class="field">
                <span class="field-label">{label}</span>
                <input class="input" name=name required=required />
            </label>
        }
    };

    view! {
        <DashboardLayout>
            <div class="stack">
                <PageHeader title="Devices" subtitle="Manage your device inventory">
                    <button type="button" class="btn btn-primary" on:click=move |_| page.open_dialog()>
                        "+ Add Device"
                    </button>
                </PageHeader>

                <Dialog open=page.dialog_open title="Add New Device" description="Enter device details to add to inventory">
                    <form class="form" on:submit=on_submit>
                        <div class="grid-2">
                            {text_field("device_name", "Device Name")}
                            {text_field("device_type", "Type")}
                            {text_field("manufacturer", "Manufacturer")}
                            {text_field("model", "Model")}
                            {text_field("serial_number", "Serial Number")}
                            <EnumSelect
                                name="status"
                                label="Status"
                                options=forms::device_status_options()
                                selected=DeviceStatus::default().as_str()
                            />
                        </div>
                        {text_field("location", "Location")}
                        <label class="field">
                            <span class="field-label">"Notes"</span>
                            <textarea class="input" name="notes"></textarea>
                        </label>
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || page.submitting.get()>
                            {move || if page.submitting.get() { "Adding..." } else { "Add Device" }}
                        </button>
                    </form>
                </Dialog>

                {move || page.rows.with(|rows| flow::empty_state(rows.as_slice())).map(|message| view! { <EmptyState message=message /> })}
                <div class="grid-3">
                    <For
                        each=move || page.rows.get()
                        key=|device: &Device| device.id()
                        children=|device: Device| view! { <DeviceCard device=device /> }
                    />
                </div>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn DeviceCard(device: Device) -> impl IntoView {
    let detail = |label: &'static str, value: String| {
        view! {
            <div class="small">
                <span class="font-medium">{label}</span>" "{value}
            </div>
        }
    };

    view! {
        <div class="card">
            <div class="card-header-row">
                <h3 class="card-title">{device.device_name.clone()}</h3>
                <Badge value=device.status />
            </div>
            {detail("Type:", device.device_type.clone())}
            {detail("Manufacturer:", or_na(&device.manufacturer))}
            {detail("Model:", or_na(&device.model))}
            {detail("Serial:", or_na(&device.serial_number))}
            {device
                .location
                .clone()
                .filter(|l| !l.is_empty())
                .map(|location| detail("Location:", location))}
        </div>
    }
}
