//! Application components and pages.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use vault_commerce::prelude::{
    Action, CartEntry, Catalog, FacetOption, FacetOptions, Page, Record, StoreConfig, Storefront,
};

// ============================================================================
// Session State
// ============================================================================

/// Load the embedded store copy, falling back to neutral defaults.
fn load_config() -> StoreConfig {
    StoreConfig::builtin().unwrap_or_else(|err| {
        tracing::warn!(%err, "store config rejected, using defaults");
        StoreConfig::default()
    })
}

fn use_config() -> Arc<StoreConfig> {
    expect_context::<Arc<StoreConfig>>()
}

fn use_storefront() -> RwSignal<Storefront> {
    expect_context::<RwSignal<Storefront>>()
}

/// Route a control's input into the session state.
fn dispatch(state: RwSignal<Storefront>, action: Action) {
    state.update(|store| {
        if let Err(err) = store.dispatch(action) {
            tracing::warn!(%err, "storefront action rejected");
        }
    });
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = Arc::new(load_config());
    let state = RwSignal::new(Storefront::new(Catalog::vinyl_vault()));
    let cart_open = RwSignal::new(false);

    provide_context(config.clone());
    provide_context(state);

    view! {
        <Title text=config.store.name.clone()/>
        <Meta name="description" content=config.store.hero_blurb.clone()/>

        <Header cart_open=cart_open/>
        <CartPanel open=cart_open/>
        <main class="container">
            {move || match state.with(|s| s.page()) {
                Page::Catalog => view! { <CatalogPage/> }.into_any(),
                Page::About => view! { <AboutPage/> }.into_any(),
                Page::Contact => view! { <ContactPage/> }.into_any(),
            }}
        </main>
        <Footer/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(cart_open: RwSignal<bool>) -> impl IntoView {
    let config = use_config();
    let state = use_storefront();

    let nav = Page::ALL
        .into_iter()
        .map(|page| {
            view! {
                <button
                    class="nav-link"
                    class:active=move || state.with(|s| s.page() == page)
                    on:click=move |_| dispatch(state, Action::Navigate(page))
                >
                    {page.label(&config.nav).to_string()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let badge = move || state.with(|s| s.cart().summary().badge());

    view! {
        <header class="site-header">
            <div class="container header-row">
                <div class="brand">
                    <span class="logo spin-slow">{config.store.logo.clone()}</span>
                    <h1>{config.store.name.clone()}</h1>
                </div>
                <nav>{nav}</nav>
                <button class="btn secondary cart-button" on:click=move |_| cart_open.set(true)>
                    "\u{1f6d2}"
                    {move || badge().map(|text| view! { <span class="badge count">{text}</span> })}
                </button>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = use_config();

    view! {
        <footer class="site-footer">
            <div class="brand">
                <span class="logo">{config.store.logo.clone()}</span>
                <p>{config.store.name.clone()}</p>
            </div>
            <p class="muted">{config.store.copyright.clone()}</p>
        </footer>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

/// Slide-over cart; hidden by CSS unless `open`.
#[component]
fn CartPanel(open: RwSignal<bool>) -> impl IntoView {
    let config = use_config();
    let state = use_storefront();

    let empty_label = config.cart.empty.clone();
    let total_label = config.cart.total.clone();
    let checkout_label = config.cart.checkout.clone();

    let body = move || {
        let summary = state.with(|s| s.cart().summary());
        if summary.is_empty() {
            return view! { <p class="muted empty">{empty_label.clone()}</p> }.into_any();
        }

        let entries = state.with(|s| s.cart().entries().to_vec());
        view! {
            <ul class="cart-lines">
                {entries.into_iter().map(|entry| view! { <CartLine entry=entry/> }).collect::<Vec<_>>()}
            </ul>
            <hr/>
            <div class="cart-total">
                <span>{total_label.clone()}</span>
                <span class="price">{summary.total_price.display()}</span>
            </div>
            <button class="btn block" on:click=move |_| dispatch(state, Action::Checkout)>
                {checkout_label.clone()}
            </button>
        }
        .into_any()
    };

    view! {
        <div class="sheet-backdrop" class:open=move || open.get() on:click=move |_| open.set(false)></div>
        <aside class="sheet" class:open=move || open.get()>
            <div class="sheet-header">
                <h2>{config.cart.title.clone()}</h2>
                <button class="ghost" on:click=move |_| open.set(false)>"\u{2715}"</button>
            </div>
            {body}
        </aside>
    }
}

#[component]
fn CartLine(entry: CartEntry) -> impl IntoView {
    let state = use_storefront();
    let quantity = entry.quantity();
    let price = entry.record.price.display();
    let Record { id, title, artist, glyph, .. } = entry.record;

    view! {
        <li class="cart-line">
            <span class="glyph">{glyph}</span>
            <div class="line-info">
                <h3>{title}</h3>
                <p class="muted">{artist}</p>
                <p class="price">{price}</p>
            </div>
            <div class="qty">
                <button class="outline" on:click=move |_| dispatch(state, Action::Decrement(id))>"-"</button>
                <span>{quantity}</span>
                <button class="outline" on:click=move |_| dispatch(state, Action::Increment(id))>"+"</button>
            </div>
            <button class="ghost" on:click=move |_| dispatch(state, Action::RemoveFromCart(id))>
                "\u{1f5d1}"
            </button>
        </li>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CatalogPage() -> impl IntoView {
    let config = use_config();

    view! {
        <section class="hero fade-in">
            <h2>{config.store.hero_heading.clone()}</h2>
            <p class="muted">{config.store.hero_blurb.clone()}</p>
        </section>
        <FilterBar/>
        <RecordGrid/>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let config = use_config();
    let state = use_storefront();
    let facets = state.with_untracked(|s| FacetOptions::from_catalog(s.catalog(), &config.filters));

    view! {
        <div class="filters">
            <input
                type="search"
                class="search"
                placeholder=config.filters.search_placeholder.clone()
                prop:value=move || state.with(|s| s.filters().query.clone())
                on:input=move |ev| dispatch(state, Action::SetQuery(event_target_value(&ev)))
            />
            <FacetSelect
                options=facets.genres
                current=Signal::derive(move || state.with(|s| s.filters().genre.to_string()))
                on_change=Action::SetGenre
            />
            <FacetSelect
                options=facets.years
                current=Signal::derive(move || state.with(|s| s.filters().year.to_string()))
                on_change=Action::SetYear
            />
            <FacetSelect
                options=facets.conditions
                current=Signal::derive(move || state.with(|s| s.filters().condition.to_string()))
                on_change=Action::SetCondition
            />
        </div>
    }
}

#[component]
fn FacetSelect(
    options: Vec<FacetOption>,
    current: Signal<String>,
    on_change: fn(String) -> Action,
) -> impl IntoView {
    let state = use_storefront();

    view! {
        <select on:change=move |ev| dispatch(state, on_change(event_target_value(&ev)))>
            {options
                .into_iter()
                .map(|option| {
                    let value = option.value.clone();
                    view! {
                        <option value=option.value selected=move || current.get() == value>
                            {option.label}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

#[component]
fn RecordGrid() -> impl IntoView {
    let config = use_config();
    let state = use_storefront();
    let no_results = config.filters.no_results.clone();

    // Cart changes don't redraw the grid.
    let visible = Memo::new(move |_| state.with(|s| s.visible().ids()));

    move || {
        let ids = visible.get();
        let records: Vec<Record> = state.with_untracked(|s| {
            ids.into_iter()
                .filter_map(|id| s.catalog().get(id).cloned())
                .collect()
        });

        if records.is_empty() {
            return view! {
                <div class="empty-state">
                    <p class="muted">{no_results.clone()}</p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="records">
                {records.into_iter().map(|record| view! { <RecordCard record=record/> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn RecordCard(record: Record) -> impl IntoView {
    let config = use_config();
    let state = use_storefront();
    let price = record.price.display();
    let Record { id, title, artist, year, genre, condition, glyph, .. } = record;

    view! {
        <article class="record-card fade-in">
            <div class="glyph">{glyph}</div>
            <h3>{title}</h3>
            <p class="muted">{artist}</p>
            <div class="badges">
                <span class="badge secondary">{year}</span>
                <span class="badge outline">{genre}</span>
            </div>
            <p class="condition muted">
                {config.filters.condition_caption.clone()} " " <strong>{condition.as_str()}</strong>
            </p>
            <p class="price">{price}</p>
            <button class="btn block" on:click=move |_| dispatch(state, Action::AddToCart(id))>
                "\u{1f6d2} " {config.cart.add_to_cart.clone()}
            </button>
        </article>
    }
}

// ============================================================================
// Static Pages
// ============================================================================

#[component]
fn AboutPage() -> impl IntoView {
    let config = use_config();
    let about = config.about.clone();

    view! {
        <div class="narrow fade-in">
            <h2>{about.heading}</h2>
            {about.paragraphs.into_iter().map(|p| view! { <p class="lead">{p}</p> }).collect::<Vec<_>>()}
            <div class="panel">
                <h3>{about.perks_heading}</h3>
                <ul class="perks">
                    {about
                        .perks
                        .into_iter()
                        .map(|perk| view! { <li><span class="check">"\u{2713}"</span> {perk}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn ContactPage() -> impl IntoView {
    let config = use_config();
    let contact = config.contact.clone();

    view! {
        <div class="narrow fade-in">
            <h2>{contact.heading}</h2>
            <div class="panel contacts">
                {contact
                    .entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <div class="contact-entry">
                                <span class="glyph">{entry.glyph}</span>
                                <div>
                                    <h3>{entry.title}</h3>
                                    {entry.lines.into_iter().map(|line| view! { <p class="muted">{line}</p> }).collect::<Vec<_>>()}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
