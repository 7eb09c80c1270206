use leptos::ev::MouseEvent;
use leptos::*;

use crate::args::StoryArgs;
use crate::manifest::{load_catalog, ArgMap, StoryCatalog, StoryRef};

/// Number of action records kept in the actions panel.
pub const ACTION_LOG_LIMIT: usize = 50;

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    /// Story whose component fired the callback.
    pub story_id: String,
    /// Callback arg name, e.g. `on_click`.
    pub action: &'static str,
    /// Payload summary; the new value for `on_change`.
    pub detail: String,
}

/// Prepends `record`, keeping at most [`ACTION_LOG_LIMIT`] entries.
pub fn push_action(log: &mut Vec<ActionRecord>, record: ActionRecord) {
    log.insert(0, record);
    log.truncate(ACTION_LOG_LIMIT);
}

fn action_spy<E: 'static>(
    actions: RwSignal<Vec<ActionRecord>>,
    story_id: String,
    action: &'static str,
    detail: impl Fn(E) -> String + 'static,
) -> Callback<E> {
    Callback::new(move |event: E| {
        let detail = detail(event);
        logging::log!("{story_id}: {action}({detail})");
        actions.update(|log| {
            push_action(
                log,
                ActionRecord {
                    story_id: story_id.clone(),
                    action,
                    detail,
                },
            )
        });
    })
}

fn render_story(
    entry: StoryRef<'_>,
    overrides: &ArgMap,
    actions: RwSignal<Vec<ActionRecord>>,
) -> View {
    let story_id = entry.id();
    let resolved = match entry.resolve(overrides) {
        Ok(resolved) => resolved,
        Err(err) => {
            logging::warn!("story `{story_id}` not rendered: {err}");
            return view! {
                <div class="catalog-canvas__notice" role="alert">{err.to_string()}</div>
            }
            .into_view();
        }
    };

    match resolved {
        StoryArgs::Card(args) => {
            let on_click = entry.component.spies("on_click").then(|| {
                action_spy(actions, story_id.clone(), "on_click", |_: MouseEvent| {
                    "click".to_string()
                })
            });
            args.into_config(on_click).into_view()
        }
        StoryArgs::Input(args) => {
            let on_change = entry
                .component
                .spies("on_change")
                .then(|| action_spy(actions, story_id.clone(), "on_change", |value: String| value));
            args.into_config(on_change).into_view()
        }
    }
}

fn render_controls(
    catalog: StoredValue<StoryCatalog>,
    story_id: String,
    overrides: RwSignal<ArgMap>,
) -> View {
    catalog.with_value(|loaded| {
        let Ok(entry) = loaded.find(&story_id) else {
            return ().into_view();
        };
        let current = entry.args(&overrides.get_untracked());

        entry
            .component
            .controls
            .iter()
            .map(|control| {
                let arg = control.arg.clone();
                let selected_option = current
                    .get(&arg)
                    .and_then(|value| value.as_str())
                    .map(str::to_string);
                let story_id = story_id.clone();
                let options = control
                    .options
                    .iter()
                    .map(|option| {
                        let is_selected = selected_option.as_deref() == Some(option.as_str());
                        view! {
                            <option value=option.clone() selected=is_selected>{option.clone()}</option>
                        }
                    })
                    .collect_view();
                let label = arg.clone();

                view! {
                    <label class="catalog-controls__row">
                        <span class="catalog-controls__name">{label}</span>
                        <select
                            class="catalog-controls__select"
                            on:change=move |ev| {
                                let option = event_target_value(&ev);
                                let mut next = overrides.get_untracked();
                                let applied = catalog.with_value(|loaded| {
                                    loaded
                                        .find(&story_id)
                                        .and_then(|entry| entry.component.apply_control(&mut next, &arg, &option))
                                });
                                match applied {
                                    Ok(()) => overrides.set(next),
                                    Err(err) => logging::warn!("control change ignored: {err}"),
                                }
                            }
                        >
                            {options}
                        </select>
                    </label>
                }
            })
            .collect_view()
    })
}

#[component]
/// Story explorer: navigation, canvas, controls, and an actions log.
pub fn CatalogApp(
    /// Story id selected on first render; defaults to the first story.
    #[prop(default = None)]
    initial_story: Option<String>,
) -> impl IntoView {
    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::error!("story catalog failed to load: {err}");
            return view! {
                <div class="catalog-error" role="alert">{err.to_string()}</div>
            }
            .into_view();
        }
    };

    let initial_story = match initial_story {
        Some(id) if catalog.find(&id).is_ok() => id,
        Some(id) => {
            logging::warn!("unknown story `{id}` requested; showing the first story");
            catalog.first_id().unwrap_or_default()
        }
        None => catalog.first_id().unwrap_or_default(),
    };
    let catalog = store_value(catalog);
    let selected = create_rw_signal(initial_story);
    let overrides = create_rw_signal(ArgMap::new());
    let actions = create_rw_signal(Vec::<ActionRecord>::new());

    let navigation = catalog.with_value(|catalog| {
        catalog
            .components
            .iter()
            .map(|component| {
                let stories = catalog
                    .entries()
                    .filter(|entry| entry.component.title == component.title)
                    .map(|entry| {
                        let id = entry.id();
                        let target = id.clone();
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="catalog-nav__story"
                                    data-ui-selected=move || (selected.get() == id).to_string()
                                    on:click=move |_| {
                                        overrides.set(ArgMap::new());
                                        selected.set(target.clone());
                                    }
                                >
                                    {entry.name()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view();

                let tags = component
                    .tags
                    .iter()
                    .map(|tag| view! { <li class="catalog-nav__tag">{tag.clone()}</li> })
                    .collect_view();

                view! {
                    <section class="catalog-nav__group">
                        <h2 class="catalog-nav__title">{component.title.clone()}</h2>
                        <ul class="catalog-nav__tags">{tags}</ul>
                        <ul class="catalog-nav__list">{stories}</ul>
                    </section>
                }
            })
            .collect_view()
    });

    let canvas = move || {
        let story_id = selected.get();
        let overrides = overrides.get();
        catalog.with_value(|catalog| match catalog.find(&story_id) {
            Ok(entry) => {
                let layout = entry.component.layout.token();
                view! {
                    <div class="catalog-canvas__stage" data-ui-layout=layout>
                        {render_story(entry, &overrides, actions)}
                    </div>
                }
                .into_view()
            }
            Err(err) => {
                logging::warn!("{err}");
                view! { <div class="catalog-canvas__notice" role="alert">{err.to_string()}</div> }
                    .into_view()
            }
        })
    };

    let controls = move || {
        overrides.with(|_| ());
        render_controls(catalog, selected.get(), overrides)
    };

    let action_log = move || {
        actions
            .get()
            .into_iter()
            .map(|record| {
                view! {
                    <li class="catalog-actions__item">
                        <span class="catalog-actions__name">{record.action}</span>
                        <span class="catalog-actions__story">{record.story_id}</span>
                        <span class="catalog-actions__detail">{record.detail}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="catalog-root">
            <nav class="catalog-nav" aria-label="Stories">{navigation}</nav>
            <main class="catalog-canvas">{canvas}</main>
            <aside class="catalog-panels">
                <section class="catalog-controls" aria-label="Controls">
                    <h2>"Controls"</h2>
                    {controls}
                </section>
                <section class="catalog-actions" aria-label="Actions">
                    <h2>"Actions"</h2>
                    <button
                        type="button"
                        class="catalog-actions__clear"
                        on:click=move |_| actions.set(Vec::new())
                    >
                        "Clear"
                    </button>
                    <ul class="catalog-actions__list">{action_log}</ul>
                </section>
            </aside>
        </div>
    }
    .into_view()
}
