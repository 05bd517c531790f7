//! Tickets Page

use backend_client::models::{Entity, Priority, Ticket, TicketCategory};
use leptos::prelude::*;

use crate::components::{Badge, DashboardLayout, Dialog, EmptyState, EnumSelect, OutlineBadge, PageHeader};
use crate::context::use_app;
use crate::flow;
use crate::format::timestamp_date;
use crate::forms::{self, FormValues, TICKET_FIELDS, TICKET_REQUIRED};
use crate::table_page::TablePage;

#[component]
pub fn TicketsPage() -> impl IntoView {
    let ctx = use_app();
    let page = TablePage::<Ticket>::mount(ctx);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(values) = FormValues::from_submit(&ev, &TICKET_FIELDS) else {
            return;
        };
        let created_by = ctx.user_id();
        page.submit(ctx, forms::ticket_draft(&values, created_by));
    };

    view! {
        <DashboardLayout>
            <div class="stack">
                <PageHeader title="Tickets" subtitle="Manage and track support tickets">
                    <button type="button" class="btn btn-primary" on:click=move |_| page.open_dialog()>
                        "+ New Ticket"
                    </button>
                </PageHeader>

                <Dialog
                    open=page.dialog_open
                    title="Create New Ticket"
                    description="Fill in the details to create a new support ticket"
                >
                    <form class="form" on:submit=on_submit>
                        <label class="field">
                            <span class="field-label">"Title"</span>
                            <input class="input" name="title" required={TICKET_REQUIRED.contains(&"title")} />
                        </label>
                        <label class="field">
                            <span class="field-label">"Description"</span>
                            <textarea class="input" name="description" required={TICKET_REQUIRED.contains(&"description")}></textarea>
                        </label>
                        <div class="grid-2">
                            <EnumSelect
                                name="priority"
                                label="Priority"
                                options=forms::priority_options()
                                selected=Priority::default().as_str()
                            />
                            <EnumSelect
                                name="category"
                                label="Category"
                                options=forms::category_options()
                                selected=TicketCategory::default().as_str()
                            />
                        </div>
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || page.submitting.get()>
                            {move || if page.submitting.get() { "Creating..." } else { "Create Ticket" }}
                        </button>
                    </form>
                </Dialog>

                {move || page.rows.with(|rows| flow::empty_state(rows.as_slice())).map(|message| view! { <EmptyState message=message /> })}
                <div class="list">
                    <For
                        each=move || page.rows.get()
                        key=|ticket: &Ticket| ticket.id()
                        children=|ticket: Ticket| view! { <TicketCard ticket=ticket /> }
                    />
                </div>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn TicketCard(ticket: Ticket) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header-row">
                <div>
                    <h3 class="card-title">{ticket.title}</h3>
                    <p class="text-muted-foreground small">{timestamp_date(&ticket.created_at)}</p>
                </div>
                <div class="badge-row">
                    <Badge value=ticket.priority />
                    <Badge value=ticket.status />
                </div>
            </div>
            <p class="text-muted-foreground small">{ticket.description.unwrap_or_default()}</p>
            <div class="card-footer">
                <OutlineBadge text=ticket.category.as_str() />
            </div>
        </div>
    }
}
