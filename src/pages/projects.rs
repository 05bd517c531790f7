//! Projects Page

use backend_client::models::{Entity, Priority, Project, ProjectStatus};
use leptos::prelude::*;

use crate::components::{Badge, DashboardLayout, Dialog, EmptyState, EnumSelect, PageHeader};
use crate::context::use_app;
use crate::flow;
use crate::format::calendar_date;
use crate::forms::{self, FormValues, PROJECT_FIELDS, PROJECT_REQUIRED};
use crate::table_page::TablePage;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app();
    let page = TablePage::<Project>::mount(ctx);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(values) = FormValues::from_submit(&ev, &PROJECT_FIELDS) else {
            return;
        };
        let owner_id = ctx.user_id();
        page.submit(ctx, forms::project_draft(&values, owner_id));
    };

    view! {
        <DashboardLayout>
            <div class="stack">
                <PageHeader title="Projects" subtitle="Track and manage your projects">
                    <button type="button" class="btn btn-primary" on:click=move |_| page.open_dialog()>
                        "+ New Project"
                    </button>
                </PageHeader>

                <Dialog open=page.dialog_open title="Create New Project" description="Fill in the project details">
                    <form class="form" on:submit=on_submit>
                        <label class="field">
                            <span class="field-label">"Project Name"</span>
                            <input class="input" name="name" required={PROJECT_REQUIRED.contains(&"name")} />
                        </label>
                        <label class="field">
                            <span class="field-label">"Description"</span>
                            <textarea class="input" name="description" required={PROJECT_REQUIRED.contains(&"description")}></textarea>
                        </label>
                        <div class="grid-2">
                            <EnumSelect
                                name="priority"
                                label="Priority"
                                options=forms::priority_options()
                                selected=Priority::default().as_str()
                            />
                            <EnumSelect
                                name="status"
                                label="Status"
                                options=forms::project_status_options()
                                selected=ProjectStatus::default().as_str()
                            />
                            <label class="field">
                                <span class="field-label">"Start Date"</span>
                                <input class="input" name="start_date" type="date" />
                            </label>
                            <label class="field">
                                <span class="field-label">"Due Date"</span>
                                <input class="input" name="due_date" type="date" />
                            </label>
                        </div>
                        <button type="submit" class="btn btn-primary btn-block" disabled=move || page.submitting.get()>
                            {move || if page.submitting.get() { "Creating..." } else { "Create Project" }}
                        </button>
                    </form>
                </Dialog>

                {move || page.rows.with(|rows| flow::empty_state(rows.as_slice())).map(|message| view! { <EmptyState message=message /> })}
                <div class="grid-2">
                    <For
                        each=move || page.rows.get()
                        key=|project: &Project| project.id()
                        children=|project: Project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </div>
        </DashboardLayout>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header-row">
                <div>
                    <h3 class="card-title">{project.name}</h3>
                    {project.start_date.map(|d| view! {
                        <p class="text-muted-foreground small">"Start: " {calendar_date(&d)}</p>
                    })}
                </div>
                <div class="badge-row">
                    <Badge value=project.priority />
                    <Badge value=project.status />
                </div>
            </div>
            <p class="text-muted-foreground small">{project.description.unwrap_or_default()}</p>
            {project.due_date.map(|d| view! {
                <div class="small">
                    <span class="font-medium">"Due:"</span>" "{calendar_date(&d)}
                </div>
            })}
        </div>
    }
}
