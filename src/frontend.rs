use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent,
};
use yew::prelude::*;

use crate::content::{
    BlockStat, MapViewMode, RedstoneItem, BLOCK_STATS, BLOG_PATH, DOWNLOAD_URL, HERO_BACKGROUND,
    HERO_LOGO, HIGHLIGHT_CARDS, HOTSPOTS, NAV_LOGO, REDSTONE_IMAGE_DIR, REDSTONE_ITEMS, TEAM_URL,
};
use crate::gallery::{GalleryCarousel, HoverPreview, PreviewRng};
use crate::i18n::{tokenize_label, LabelPart, Language, Translations};
use crate::reveal::{ElementRect, RevealGrid, CELL_SIZE};
use crate::scroll::{
    derive_scroll_state, hero_text_hidden, parallax_offset, PageRegions, RegionBounds, ScrollState,
};
use crate::visibility::{
    RevealSet, ScrollSpy, VisibilityEvent, REVEAL_THRESHOLD, SPY_ROOT_MARGIN, SPY_THRESHOLD,
};

// ---------------------------------------------------------------------------
// Shared plumbing

/// Language selection threaded through the component tree instead of living
/// in ambient global state.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub lang: Language,
    pub on_select: Callback<Language>,
}

impl LanguageContext {
    fn text(&self) -> &'static Translations {
        self.lang.text()
    }
}

#[hook]
fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("LanguageContext provided at the app root")
}

/// Animation-frame coalescing: at most one scheduled recomputation is
/// outstanding; events arriving while one is pending are dropped, since only
/// the freshest measurements matter. Dropping the coalescer cancels the
/// pending frame, so nothing runs after teardown.
struct FrameCoalescer {
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameCoalescer {
    fn new() -> Self {
        Self {
            frame: Rc::new(RefCell::new(None)),
        }
    }

    fn request(&self, work: impl FnOnce() + 'static) {
        if self.frame.borrow().is_some() {
            return;
        }
        let slot = Rc::clone(&self.frame);
        let handle = request_animation_frame(move |_| {
            slot.borrow_mut().take();
            work();
        });
        *self.frame.borrow_mut() = Some(handle);
    }
}

fn window_listener(
    event: &'static str,
    mut callback: impl FnMut() + 'static,
) -> Option<EventListener> {
    let window = window()?;
    Some(EventListener::new(&window, event, move |_| callback()))
}

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn element_rect(node: &NodeRef) -> Option<ElementRect> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(ElementRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

fn region_bounds(id: &str) -> Option<RegionBounds> {
    let element = window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(RegionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

fn set_page_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}

/// IntersectionObserver wrapper that reports batches as [`VisibilityEvent`]s
/// indexed by the observed element's position. Returns `None` where the
/// observer cannot be constructed; callers degrade to an inert signal.
struct RegionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl RegionObserver {
    fn observe(
        targets: Vec<Element>,
        threshold: f64,
        root_margin: Option<&str>,
        on_batch: impl Fn(Vec<VisibilityEvent>) + 'static,
    ) -> Option<Self> {
        let lookup = targets.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            let events: Vec<VisibilityEvent> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    lookup
                        .iter()
                        .position(|element| *element == target)
                        .map(|region| VisibilityEvent {
                            region,
                            is_intersecting: entry.is_intersecting(),
                        })
                })
                .collect();
            if !events.is_empty() {
                on_batch(events);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for target in &targets {
            observer.observe(target);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RegionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct MathRandom;

impl PreviewRng for MathRandom {
    fn pick(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (js_sys::Math::random() * bound as f64) as usize % bound
    }
}

// ---------------------------------------------------------------------------
// Reducer actions

enum GridAction {
    PointerMove {
        x: f64,
        y: f64,
        surface: ElementRect,
        wrapper: ElementRect,
    },
    PointerLeave,
    Resize {
        width: f64,
        height: f64,
    },
}

impl Reducible for RevealGrid {
    type Action = GridAction;

    fn reduce(self: Rc<Self>, action: GridAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GridAction::PointerMove {
                x,
                y,
                surface,
                wrapper,
            } => next.on_pointer_move(x, y, surface, wrapper),
            GridAction::PointerLeave => next.on_pointer_leave(),
            GridAction::Resize { width, height } => next.resize(width, height),
        }
        Rc::new(next)
    }
}

impl Reducible for RevealSet {
    type Action = Vec<VisibilityEvent>;

    fn reduce(self: Rc<Self>, events: Vec<VisibilityEvent>) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(&events);
        Rc::new(next)
    }
}

impl Reducible for ScrollSpy {
    type Action = Vec<VisibilityEvent>;

    fn reduce(self: Rc<Self>, events: Vec<VisibilityEvent>) -> Rc<Self> {
        let mut next = *self;
        next.apply(&events);
        Rc::new(next)
    }
}

enum GalleryAction {
    Open(usize),
    Close,
    Next,
    Prev,
    SelectIndex(usize),
    ToggleMode,
    Key(String),
}

impl Reducible for GalleryCarousel {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: GalleryAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GalleryAction::Open(card) => next.open(card),
            GalleryAction::Close => next.close(),
            GalleryAction::Next => next.next(),
            GalleryAction::Prev => next.prev(),
            GalleryAction::SelectIndex(index) => next.select_index(index),
            GalleryAction::ToggleMode => next.toggle_mode(),
            GalleryAction::Key(key) => {
                next.handle_key(&key);
            }
        }
        Rc::new(next)
    }
}

// ---------------------------------------------------------------------------
// Navbar

#[function_component(Navbar)]
fn navbar() -> Html {
    let ctx = use_language();
    let text = ctx.text();
    let state = use_state_eq(ScrollState::default);
    let menu_open = use_state_eq(|| false);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let recompute = move || {
                let regions = PageRegions {
                    showcase: region_bounds("showcase"),
                    highlights: region_bounds("highlights"),
                    redstone: region_bounds("redstone"),
                };
                state.set(derive_scroll_state(scroll_offset(), &regions));
            };

            recompute();

            let coalescer = FrameCoalescer::new();
            let handler = recompute.clone();
            let listener = window_listener("scroll", move || coalescer.request(handler.clone()));
            move || drop(listener)
        });
    }

    let on_menu_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let on_link_click = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let select_language = |lang: Language| {
        let on_select = ctx.on_select.clone();
        Callback::from(move |_| on_select.emit(lang))
    };

    html! {
        <nav class={classes!(
            "navbar",
            state.scrolled.then_some("scrolled"),
            state.theme.class(),
            (*menu_open).then_some("menu-open"),
        )}>
            <div class="nav-container">
                <a href={TEAM_URL} class="nav-logo" target="_blank" rel="noopener noreferrer">
                    <img src={NAV_LOGO} alt="Frost Pursuit" class="logo-img" />
                </a>

                <ul class={classes!("nav-links", (*menu_open).then_some("active"))}>
                    <li><a href="#showcase" onclick={on_link_click.clone()}>{text.nav.showcase}</a></li>
                    <li><a href="#highlights" onclick={on_link_click.clone()}>{text.nav.highlights}</a></li>
                    <li><a href="#redstone" onclick={on_link_click.clone()}>{text.nav.redstone}</a></li>
                    <li>
                        <a
                            href={DOWNLOAD_URL}
                            class="nav-cta"
                            target="_blank"
                            rel="noopener noreferrer"
                            onclick={on_link_click}
                        >
                            {text.nav.download}
                        </a>
                    </li>
                    <li class="nav-lang-toggle">
                        <button
                            class={classes!((ctx.lang == Language::En).then_some("active"))}
                            onclick={select_language(Language::En)}
                        >
                            {"EN"}
                        </button>
                        <span class="lang-sep">{"/"}</span>
                        <button
                            class={classes!((ctx.lang == Language::Zh).then_some("active"))}
                            onclick={select_language(Language::Zh)}
                        >
                            {"繁中"}
                        </button>
                    </li>
                </ul>
                <button
                    class={classes!("nav-toggle", (*menu_open).then_some("active"))}
                    aria-label="Toggle menu"
                    onclick={on_menu_toggle}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

// ---------------------------------------------------------------------------
// Hero

#[function_component(Hero)]
fn hero() -> Html {
    let ctx = use_language();
    let text = ctx.text();
    let hero_ref = use_node_ref();
    let wrapper_ref = use_node_ref();

    let grid = use_reducer_eq(|| RevealGrid::new(HOTSPOTS));
    let loading = use_state_eq(|| true);
    let text_hidden = use_state_eq(|| false);
    let parallax = use_state_eq(|| 0.0_f64);

    let pointer_frames = use_mut_ref(FrameCoalescer::new);
    let pending_pointer = use_mut_ref(|| None::<(f64, f64)>);

    // Scroll drives hero-text visibility and the parallax translation;
    // resize rebuilds the cell grid. Both sampled once per frame.
    {
        let hero_ref = hero_ref.clone();
        let grid = grid.clone();
        let text_hidden = text_hidden.clone();
        let parallax = parallax.clone();
        use_effect_with((), move |_| {
            let on_scroll = {
                let hero_ref = hero_ref.clone();
                move || {
                    let Some(hero) = hero_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let height = f64::from(hero.offset_height());
                    let scroll_y = scroll_offset();
                    text_hidden.set(hero_text_hidden(scroll_y, height));
                    if let Some(offset) = parallax_offset(scroll_y, height) {
                        parallax.set(offset);
                    }
                }
            };
            let on_resize = {
                let hero_ref = hero_ref.clone();
                move || {
                    if let Some(rect) = element_rect(&hero_ref) {
                        grid.dispatch(GridAction::Resize {
                            width: rect.width,
                            height: rect.height,
                        });
                    }
                }
            };

            on_resize();

            let scroll_frames = FrameCoalescer::new();
            let scroll_handler = on_scroll.clone();
            let scroll_listener =
                window_listener("scroll", move || scroll_frames.request(scroll_handler.clone()));

            let resize_frames = FrameCoalescer::new();
            let resize_handler = on_resize.clone();
            let resize_listener =
                window_listener("resize", move || resize_frames.request(resize_handler.clone()));

            move || {
                drop(scroll_listener);
                drop(resize_listener);
            }
        });
    }

    let onmousemove = {
        let grid = grid.clone();
        let hero_ref = hero_ref.clone();
        let wrapper_ref = wrapper_ref.clone();
        let pointer_frames = pointer_frames.clone();
        let pending_pointer = pending_pointer.clone();
        Callback::from(move |event: MouseEvent| {
            *pending_pointer.borrow_mut() =
                Some((f64::from(event.client_x()), f64::from(event.client_y())));

            let grid = grid.clone();
            let hero_ref = hero_ref.clone();
            let wrapper_ref = wrapper_ref.clone();
            let pending_pointer = pending_pointer.clone();
            pointer_frames.borrow().request(move || {
                let Some((x, y)) = pending_pointer.borrow_mut().take() else {
                    return;
                };
                let (Some(surface), Some(wrapper)) =
                    (element_rect(&hero_ref), element_rect(&wrapper_ref))
                else {
                    return;
                };
                grid.dispatch(GridAction::PointerMove {
                    x,
                    y,
                    surface,
                    wrapper,
                });
            });
        })
    };

    let onmouseleave = {
        let grid = grid.clone();
        Callback::from(move |_: MouseEvent| grid.dispatch(GridAction::PointerLeave))
    };

    let onload = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };

    let dims = grid.dimensions();
    let grid_cells = (0..dims.rows)
        .flat_map(|row| (0..dims.cols).map(move |col| (col, row)))
        .map(|(col, row)| {
            let style = format!(
                "left: {}px; top: {}px; width: {}px; height: {}px; opacity: {:.3};",
                col as f64 * CELL_SIZE,
                row as f64 * CELL_SIZE,
                CELL_SIZE,
                CELL_SIZE,
                grid.cell_tint(col, row),
            );
            html! {
                <div key={format!("{col}-{row}")} class="grid-cell" style={style} />
            }
        })
        .collect::<Html>();

    let hotspot_layer = HOTSPOTS
        .iter()
        .map(|hotspot| {
            html! {
                <div
                    key={hotspot.id}
                    class={classes!(
                        "hero-hotspot",
                        format!("{}-hotspot", hotspot.id),
                        (grid.active_hotspot() == Some(hotspot.id)).then_some("hovered"),
                    )}
                >
                    <span class={classes!("waypoint-marker", format!("{}-marker", hotspot.id))}></span>
                    <span class="hotspot-tooltip">{text.hero.hotspot_label(hotspot.id)}</span>
                </div>
            }
        })
        .collect::<Html>();

    let parallax_style = format!("transform: scale(1.1) translateY({:.2}px);", *parallax);

    html! {
        <section
            class={classes!("hero", if *loading { "loading" } else { "loaded" })}
            id="hero"
            ref={hero_ref}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            if *loading {
                <div class="hero-loading">
                    <div class="loading-spinner"></div>
                    <span class="loading-text">{text.hero.loading}</span>
                </div>
            }
            <div class="hero-bg">
                <div class="hero-map-wrapper" ref={wrapper_ref}>
                    <img
                        src={HERO_BACKGROUND}
                        alt="Frost Pursuit Map"
                        class="hero-image"
                        style={parallax_style}
                        onload={onload}
                    />
                    <img src={HERO_BACKGROUND} alt="Frost Pursuit Map Original" class="hero-image-original" />
                </div>

                <div class="hero-grid-overlay">
                    {grid_cells}
                </div>

                <div class="hero-hotspots-layer">
                    {hotspot_layer}
                </div>
            </div>
            <div class={classes!("hero-content", (*text_hidden).then_some("hidden"))}>
                <div class="hero-title">
                    <span class="title-frost">{text.hero.title_line1}</span>
                    <span class="title-pursuit">{text.hero.title_line2}</span>
                </div>
                <p class="hero-subtitle">{text.hero.subtitle}</p>
                <a href={DOWNLOAD_URL} class="hero-cta" target="_blank" rel="noopener noreferrer">
                    {text.hero.cta} <span class="cta-arrow">{"▷"}</span>
                </a>
            </div>
            <div class="hero-bottom-logo">
                <img src={HERO_LOGO} alt="Cloud Town Exquisite Craft" />
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Map showcase

#[function_component(MapShowcase)]
fn map_showcase() -> Html {
    let ctx = use_language();
    let text = ctx.text();
    let view_mode = use_state_eq(MapViewMode::default);

    let view_label = |mode: MapViewMode| match mode {
        MapViewMode::Isometric => text.showcase.view_isometric,
        MapViewMode::NoBalloons => text.showcase.view_no_balloons,
        MapViewMode::TopDown => text.showcase.view_top_down,
    };

    let block_item = |block: &BlockStat, index: usize| {
        html! {
            <div key={format!("{}-{index}", block.name)} class="block-stat-item">
                <img src={block.image} alt={block.name} class="block-icon" />
                <span class="block-name">{text.showcase.block_name(block.name)}</span>
                <span class="block-count">{block.count}</span>
            </div>
        }
    };

    html! {
        <section class="map-showcase" id="showcase">
            <div class="container">
                <ScrollReveal>
                    <div class="block-stats-total">
                        <span class="total-count">
                            {text.showcase.total_count}<sup class="asterisk">{"*"}</sup>{" "}{text.showcase.million}
                        </span>
                        <span class="total-label">{text.showcase.blocks}</span>
                        <span class="total-footnote">{text.showcase.footnote}</span>
                    </div>
                </ScrollReveal>

                // Items doubled for a seamless marquee loop.
                <div class="block-carousel-wrapper">
                    <div class="block-carousel">
                        {for BLOCK_STATS.iter().chain(BLOCK_STATS.iter()).enumerate().map(|(index, block)| block_item(block, index))}
                    </div>
                </div>

                <div class="view-toggle">
                    {for MapViewMode::ALL.iter().map(|mode| {
                        let view_mode = view_mode.clone();
                        let mode = *mode;
                        html! {
                            <button
                                class={classes!("view-btn", (*view_mode == mode).then_some("active"))}
                                onclick={Callback::from(move |_| view_mode.set(mode))}
                            >
                                {view_label(mode)}
                            </button>
                        }
                    })}
                </div>

                <div class="map-image-container">
                    {for MapViewMode::ALL.iter().map(|mode| {
                        html! {
                            <img
                                src={mode.image()}
                                alt={format!("Map {} view", view_label(*mode))}
                                class={classes!("map-image", (*view_mode == *mode).then_some("active"))}
                            />
                        }
                    })}
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// One-shot reveal wrapper

#[derive(Properties, PartialEq)]
struct ScrollRevealProps {
    #[prop_or_default]
    class: Classes,
    children: Html,
}

/// Wraps content in a `.reveal` block that gains `.visible` the first time
/// it intersects the viewport; later visibility loss never reverts it. If
/// observation is unavailable, the content simply stays unrevealed.
#[function_component(ScrollReveal)]
fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let reveals = use_reducer_eq(|| RevealSet::new(1));

    {
        let node = node.clone();
        let reveals = reveals.clone();
        use_effect_with((), move |_| {
            let observer = node.cast::<Element>().and_then(|element| {
                RegionObserver::observe(vec![element], REVEAL_THRESHOLD, None, move |events| {
                    reveals.dispatch(events)
                })
            });
            move || drop(observer)
        });
    }

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.class.clone(),
                reveals.is_revealed(0).then_some("visible"),
            )}
        >
            {props.children.clone()}
        </div>
    }
}

// ---------------------------------------------------------------------------
// Map highlights gallery

#[function_component(MapHighlights)]
fn map_highlights() -> Html {
    let ctx = use_language();
    let text = ctx.text();
    let gallery = use_reducer_eq(|| GalleryCarousel::new(HIGHLIGHT_CARDS));
    let hovered = use_state_eq(|| None::<HoverPreview>);

    // Keyboard bindings live for the whole mount; the reducer keeps them
    // inert while the modal is closed.
    {
        let gallery = gallery.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        gallery.dispatch(GalleryAction::Key(event.key()));
                    }
                })
            });
            move || drop(listener)
        });
    }

    // Page scroll stays suspended exactly while the modal is open, released
    // on close and on unmount.
    {
        let locked = gallery.scroll_locked();
        use_effect_with(locked, move |&locked| {
            set_page_scroll_locked(locked);
            move || {
                if locked {
                    set_page_scroll_locked(false);
                }
            }
        });
    }

    let mode = gallery.mode();

    let cards = HIGHLIGHT_CARDS
        .iter()
        .enumerate()
        .map(|(card_index, card)| {
            let onclick = {
                let gallery = gallery.clone();
                Callback::from(move |_| gallery.dispatch(GalleryAction::Open(card_index)))
            };
            let onmouseenter = {
                let gallery = gallery.clone();
                let hovered = hovered.clone();
                Callback::from(move |_| {
                    hovered.set(gallery.preview_for(card_index, &mut MathRandom));
                })
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_| hovered.set(None))
            };

            let title = text.highlights.card_title(card.id).to_string();
            let preview = (*hovered)
                .filter(|preview| preview.card == card_index)
                .map(|preview| {
                    html! {
                        <div class="card-hover-preview">
                            <img
                                src={preview.image}
                                alt={format!("{title} preview")}
                                loading="lazy"
                            />
                            <div class="preview-info">
                                <span class="preview-title">{title.clone()}</span>
                                <span class="preview-explore">{"→ Explore"}</span>
                            </div>
                        </div>
                    }
                });

            html! {
                <div
                    key={card.id}
                    class="highlight-card"
                    onclick={onclick}
                    onmouseenter={onmouseenter}
                    onmouseleave={onmouseleave}
                >
                    <div class="card-image">
                        // Both thumbnails stay mounted so the toggle crossfades.
                        <img
                            src={card.day_images.first().copied().unwrap_or("")}
                            alt={title.clone()}
                            class={classes!("card-img-day", mode.is_day().then_some("active"))}
                        />
                        <img
                            src={card.night_images.first().copied().unwrap_or("")}
                            alt={title.clone()}
                            class={classes!("card-img-night", (!mode.is_day()).then_some("active"))}
                        />
                    </div>
                    <div class="card-overlay">
                        <h3 class="card-title">{title.clone()}</h3>
                    </div>
                    {preview}
                </div>
            }
        })
        .collect::<Html>();

    let modal = gallery.selected_card().map(|card| {
        let images = gallery.current_images();
        let index = gallery.index();
        let title = text.highlights.card_title(card.id).to_string();

        let on_close = {
            let gallery = gallery.clone();
            Callback::from(move |_| gallery.dispatch(GalleryAction::Close))
        };
        let on_next = {
            let gallery = gallery.clone();
            Callback::from(move |_| gallery.dispatch(GalleryAction::Next))
        };
        let on_prev = {
            let gallery = gallery.clone();
            Callback::from(move |_| gallery.dispatch(GalleryAction::Prev))
        };
        let swallow_click = Callback::from(|event: MouseEvent| event.stop_propagation());

        html! {
            <div class="gallery-modal" onclick={on_close.clone()}>
                <div class="gallery-content" onclick={swallow_click}>
                    <button class="gallery-close" onclick={on_close}>{"×"}</button>

                    <div class="gallery-header">
                        <h2 class="gallery-title">{title.clone()}</h2>
                        <p class="gallery-description">{text.highlights.card_description(card.id)}</p>
                    </div>

                    <div class="gallery-main gallery-desktop">
                        <button class="gallery-nav prev" onclick={on_prev}>{"‹"}</button>
                        <div class="gallery-image-container">
                            <img
                                src={images.get(index).copied().unwrap_or("")}
                                alt={format!("{title} {}", index + 1)}
                                class="gallery-main-image"
                                loading="lazy"
                            />
                        </div>
                        <button class="gallery-nav next" onclick={on_next}>{"›"}</button>
                    </div>

                    <div class="gallery-desktop">
                        <div class="gallery-counter">
                            {format!("{} / {}", index + 1, images.len())}
                        </div>

                        <div class="gallery-thumbnails">
                            {for images.iter().enumerate().map(|(thumb_index, image)| {
                                let gallery = gallery.clone();
                                html! {
                                    <div
                                        key={thumb_index}
                                        class={classes!("gallery-thumb", (thumb_index == index).then_some("active"))}
                                        onclick={Callback::from(move |_| {
                                            gallery.dispatch(GalleryAction::SelectIndex(thumb_index))
                                        })}
                                    >
                                        <img src={*image} alt={format!("Thumbnail {}", thumb_index + 1)} loading="lazy" />
                                    </div>
                                }
                            })}
                        </div>
                    </div>

                    <div class="gallery-mobile-list">
                        {for images.iter().enumerate().map(|(image_index, image)| {
                            html! {
                                <div key={image_index} class="gallery-list-item">
                                    <img src={*image} alt={format!("{title} {}", image_index + 1)} loading="lazy" />
                                </div>
                            }
                        })}
                    </div>
                </div>
            </div>
        }
    });

    let on_toggle_mode = {
        let gallery = gallery.clone();
        Callback::from(move |_| gallery.dispatch(GalleryAction::ToggleMode))
    };

    html! {
        <section class={classes!("map-highlights", mode.section_class())} id="highlights">
            <div class="container">
                <ScrollReveal class="highlights-header">
                    <div class="highlights-title-group">
                        <h2 class="highlights-title">{text.highlights.section_title}</h2>
                        <p class="highlights-subtitle">{text.highlights.section_subtitle}</p>
                    </div>

                    <div class="mode-toggle">
                        <span class={classes!("mode-label", mode.is_day().then_some("active"))}>{"☀️"}</span>
                        <button
                            class="toggle-switch"
                            onclick={on_toggle_mode}
                            aria-label="Toggle day/night mode"
                        >
                            <span class={classes!("toggle-slider", (!mode.is_day()).then_some("night"))}></span>
                        </button>
                        <span class={classes!("mode-label", (!mode.is_day()).then_some("active"))}>{"🌙"}</span>
                    </div>
                </ScrollReveal>

                <div class="highlights-grid">
                    {cards}
                </div>
            </div>

            {modal}
        </section>
    }
}

// ---------------------------------------------------------------------------
// Redstone showcase

#[function_component(RedstoneShowcase)]
fn redstone_showcase() -> Html {
    let ctx = use_language();
    let text = ctx.text();
    let spy = use_reducer_eq(|| ScrollSpy::new(REDSTONE_ITEMS.len()));
    let item_refs = use_state(|| {
        (0..REDSTONE_ITEMS.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    {
        let spy = spy.clone();
        let item_refs = item_refs.clone();
        use_effect_with((), move |_| {
            let targets: Vec<Element> = item_refs
                .iter()
                .filter_map(|node| node.cast::<Element>())
                .collect();
            let observer = RegionObserver::observe(
                targets,
                SPY_THRESHOLD,
                Some(SPY_ROOT_MARGIN),
                move |events| spy.dispatch(events),
            );
            move || drop(observer)
        });
    }

    let item_image = |item: &RedstoneItem| format!("{REDSTONE_IMAGE_DIR}/{}", item.src);

    let scroll_column = REDSTONE_ITEMS
        .iter()
        .enumerate()
        .map(|(index, item)| {
            html! {
                <div
                    key={item.src}
                    class={classes!("redstone-scroll-item", item.large.then_some("large"))}
                    ref={item_refs[index].clone()}
                >
                    <img src={item_image(item)} alt={text.redstone.item_label(item.label).to_string()} />
                </div>
            }
        })
        .collect::<Html>();

    let active = REDSTONE_ITEMS.get(spy.active());
    let active_label = active
        .map(|item| text.redstone.item_label(item.label))
        .unwrap_or("");
    let active_description = active
        .map(|item| text.redstone.item_description(item.label))
        .unwrap_or("");

    let styled_label = tokenize_label(active_label)
        .into_iter()
        .map(|part| match part {
            LabelPart::Text(run) => html! { {run} },
            LabelPart::Symbol(run) => html! { <span class="symbol-text">{run}</span> },
        })
        .collect::<Html>();

    html! {
        <section class="redstone-section" id="redstone">
            <div class="redstone-layout">
                <div class="redstone-scroll">
                    {scroll_column}
                </div>

                <div class="redstone-sticky">
                    <h2 class="redstone-title">
                        {text.redstone.section_title}{" "}
                        <span class="redstone-title-technical">{text.redstone.technical_word}</span>
                    </h2>
                    <p class="redstone-subtitle">{text.redstone.subtitle}</p>
                    <p class="redstone-belief">{text.redstone.belief}</p>
                    <div class="redstone-current-label" key={active_label.to_string()}>
                        {styled_label}
                    </div>
                    <p class="redstone-description" key={format!("desc-{active_label}")}>
                        {active_description}
                    </p>
                    <a href={BLOG_PATH} class="redstone-cta">
                        {text.redstone.learn_more} <span class="cta-arrow">{"▷"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

// ---------------------------------------------------------------------------
// Footer

#[function_component(Footer)]
fn footer() -> Html {
    let ctx = use_language();
    let text = ctx.text();
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <img src={HERO_LOGO} alt="Frost Pursuit" class="footer-logo" />
                        <p>{text.footer.tagline}</p>
                    </div>
                    <nav class="footer-links">
                        <a href="#showcase">{text.nav.showcase}</a>
                        <a href="#highlights">{text.nav.highlights}</a>
                        <a href="#redstone">{text.nav.redstone}</a>
                        <a href="#hero">{text.nav.download}</a>
                    </nav>
                </div>
                <div class="footer-bottom">
                    <p>{text.footer.copyright.replace("2024", &year.to_string())}</p>
                </div>
            </div>
        </footer>
    }
}

// ---------------------------------------------------------------------------
// App shell

#[function_component(App)]
fn app() -> Html {
    let lang = use_state_eq(Language::default);

    let on_select = {
        let lang = lang.clone();
        Callback::from(move |next| lang.set(next))
    };
    let context = LanguageContext {
        lang: *lang,
        on_select,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            <div data-lang={(*lang).tag()}>
                <Navbar />
                <Hero />
                <MapShowcase />
                <MapHighlights />
                <RedstoneShowcase />
                <Footer />
            </div>
        </ContextProvider<LanguageContext>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
