//! Wiring of every effect to the live document.
//!
//! `Mounted` owns everything it registers: event listeners, the reveal
//! observer, the pending parallax frame and all timers. Dropping it removes
//! the listeners and cancels whatever has not run yet.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use super::dom::{self, Field, FormFields};
use super::tasks::Tasks;
use crate::config::FxConfig;
use crate::effects::anchor::{on_anchor_click, resolve_target};
use crate::effects::contact::contact_transform;
use crate::effects::floating::FloatingAnimation;
use crate::effects::intro::{ScrollIntro, INTRO_DISPLACED_TRANSFORM, MAIN_ACTIVE_CLASS};
use crate::effects::modal::{CloseReason, MessageModal, MODAL_OPEN_CLASS};
use crate::effects::parallax::ParallaxHeader;
use crate::effects::reveal::{self, BatchEntry, RevealTracker};
use crate::effects::ripple::{RippleField, RippleGeometry};
use crate::effects::tilt::CardTilt;
use crate::effects::typing::Typewriter;
use crate::report::{Feature, WiringReport};
use crate::stylesheet;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
    tracker: Rc<RefCell<RevealTracker>>,
    items: Rc<Vec<HtmlElement>>,
}

pub(super) struct Mounted {
    listeners: Vec<EventListener>,
    tasks: Tasks,
    ripples: Option<Rc<RefCell<RippleField<HtmlElement>>>>,
    reveal: Option<RevealObserver>,
    parallax: Option<(Rc<RefCell<ParallaxHeader>>, Rc<RefCell<Option<AnimationFrame>>>)>,
    typing: Option<(HtmlElement, Rc<RefCell<Typewriter>>)>,
    report: WiringReport,
}

/// Borrowed handles shared by the wiring steps.
struct Ctx<'a> {
    window: &'a Window,
    document: &'a Document,
    config: &'a FxConfig,
    tasks: &'a Tasks,
}

impl Mounted {
    pub(super) fn mount(window: Window, document: Document, config: FxConfig) -> Self {
        log::info!("🚀 portfolio effects loading");

        let tasks = Tasks::default();
        let mut mounted = Self {
            listeners: Vec::new(),
            tasks: tasks.clone(),
            ripples: None,
            reveal: None,
            parallax: None,
            typing: None,
            report: WiringReport::new(),
        };
        let ctx = Ctx {
            window: &window,
            document: &document,
            config: &config,
            tasks: &tasks,
        };

        mounted.wire_scroll_intro(&ctx);
        let cards = dom::query_all(&document, &config.selectors.cards);
        mounted.wire_card_tilt(&ctx, &cards);
        mounted.wire_ripples(&ctx);
        mounted.wire_reveal(&ctx);
        mounted.wire_parallax(&ctx);
        mounted.wire_typing(&ctx);
        mounted.wire_anchors(&ctx);
        mounted.wire_contact_items(&ctx);
        mounted.wire_floating(&ctx, cards);
        mounted.wire_modal(&ctx);

        log::info!("✨ {}", mounted.report);
        mounted
    }

    pub(super) fn report(&self) -> &WiringReport {
        &self.report
    }

    fn wire_scroll_intro(&mut self, ctx: &Ctx) {
        let sel = &ctx.config.selectors;
        let intro: Option<HtmlElement> = dom::by_id(ctx.document, &sel.intro_id);
        let main: Option<Element> = dom::by_id(ctx.document, &sel.main_id);
        let targets = usize::from(intro.is_some()) + usize::from(main.is_some());
        self.report.record(Feature::ScrollIntro, targets);
        if targets == 0 {
            return;
        }

        let mut fx = ScrollIntro::new(&ctx.config.intro);
        let window = ctx.window.clone();
        self.listeners
            .push(EventListener::new(ctx.window, "scroll", move |_| {
                let Some(viewport) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
                    return;
                };
                let scroll_y = window.scroll_y().unwrap_or(0.0);
                if !fx.on_scroll(scroll_y, viewport) {
                    return;
                }
                if let Some(intro) = &intro {
                    dom::set_style(intro, "transform", INTRO_DISPLACED_TRANSFORM);
                }
                if let Some(main) = &main {
                    dom::toggle_class(main, MAIN_ACTIVE_CLASS, true);
                }
            }));
    }

    fn wire_card_tilt(&mut self, ctx: &Ctx, cards: &[HtmlElement]) {
        self.report.record(Feature::CardTilt, cards.len());
        let tilt = Rc::new(CardTilt::new(&ctx.config.tilt));

        for card in cards {
            let (fx, el) = (tilt.clone(), card.clone());
            self.listeners
                .push(EventListener::new(card, "mousemove", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let transform = fx.hover_transform(
                        dom::rect_of(&el),
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    );
                    dom::set_style(&el, "transform", &transform);
                }));

            let (fx, el) = (tilt.clone(), card.clone());
            self.listeners
                .push(EventListener::new(card, "mouseleave", move |_| {
                    dom::set_style(&el, "transform", &fx.neutral_transform());
                }));
        }
    }

    fn wire_ripples(&mut self, ctx: &Ctx) {
        if let Err(e) = dom::inject_style(ctx.document, &stylesheet::ripple_keyframes_css()) {
            log::warn!("ripple keyframes not injected: {e}");
        }

        let buttons = dom::query_all(ctx.document, &ctx.config.selectors.buttons);
        self.report.record(Feature::ButtonRipple, buttons.len());
        let field = Rc::new(RefCell::new(RippleField::new(&ctx.config.ripple)));
        self.ripples = Some(field.clone());

        for button in buttons {
            let document = ctx.document.clone();
            let tasks = ctx.tasks.clone();
            let field = field.clone();
            let target = button.clone();
            self.listeners
                .push(EventListener::new(&target, "click", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let geometry = RippleGeometry::at(
                        dom::rect_of(&button),
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    );
                    let Some(ripple) = document
                        .create_element("span")
                        .ok()
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    else {
                        return;
                    };
                    let lifetime = field.borrow().lifetime_ms();
                    ripple.style().set_css_text(&geometry.css_text(lifetime));
                    if let Err(e) = button.append_child(&ripple) {
                        log::warn!("ripple not attached: {}", dom::js_message(&e));
                        return;
                    }

                    let spawned = field.borrow_mut().spawn(ripple);
                    let field = field.clone();
                    tasks.after(spawned.remove_in_ms, move || {
                        let overlay = field.borrow_mut().retire(spawned.id);
                        if let Some(overlay) = overlay {
                            overlay.remove();
                        }
                    });
                }));
        }
    }

    fn wire_reveal(&mut self, ctx: &Ctx) {
        let items = Rc::new(dom::query_all(ctx.document, &ctx.config.selectors.project_cards));
        self.report.record(Feature::Reveal, items.len());
        if items.is_empty() {
            return;
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(&ctx.config.reveal, items.len())));
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(tracker.borrow().threshold()));
        init.set_root_margin(&tracker.borrow().root_margin());

        let tasks = ctx.tasks.clone();
        let observed = items.clone();
        let shared = tracker.clone();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let batch: Vec<BatchEntry> = entries
                    .iter()
                    .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = entry.target();
                        let item = observed
                            .iter()
                            .position(|el| el.is_same_node(Some(target.unchecked_ref::<Node>())))?;
                        Some(BatchEntry {
                            item,
                            intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect();

                let reveals = shared.borrow_mut().on_batch(&batch);
                for r in reveals {
                    let el = observed[r.item].clone();
                    observer.unobserve(&el);
                    let tracker = shared.clone();
                    tasks.after(r.delay_ms, move || {
                        show_item(&el);
                        tracker.borrow_mut().mark_shown(r.item);
                    });
                }
                if shared.borrow().all_revealed() {
                    observer.disconnect();
                }
            },
        );

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("reveal disabled, items left visible: {}", dom::js_message(&e));
                    return;
                }
            };

        // hide only once the observer exists to bring the items back
        for item in items.iter() {
            dom::set_style(item, "opacity", reveal::HIDDEN_OPACITY);
            dom::set_style(item, "transform", reveal::HIDDEN_TRANSFORM);
            dom::set_style(item, "transition", reveal::REVEAL_TRANSITION);
            observer.observe(item);
        }
        self.reveal = Some(RevealObserver {
            observer,
            _callback: callback,
            tracker,
            items,
        });
    }

    fn wire_parallax(&mut self, ctx: &Ctx) {
        let header: Option<HtmlElement> = dom::query(ctx.document, &ctx.config.selectors.header);
        self.report.record_optional(Feature::Parallax, header.as_ref());
        let Some(header) = header else {
            return;
        };

        let state = Rc::new(RefCell::new(ParallaxHeader::new(&ctx.config.parallax)));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
        self.parallax = Some((state.clone(), frame.clone()));

        let window = ctx.window.clone();
        self.listeners
            .push(EventListener::new(ctx.window, "scroll", move |_| {
                if !state.borrow_mut().request_frame() {
                    return;
                }
                let (state, header, window) = (state.clone(), header.clone(), window.clone());
                let handle = request_animation_frame(move |_| {
                    let offset = state.borrow_mut().on_frame(window.scroll_y().unwrap_or(0.0));
                    dom::set_style(&header, "transform", &ParallaxHeader::transform(offset));
                });
                *frame.borrow_mut() = Some(handle);
            }));
    }

    fn wire_typing(&mut self, ctx: &Ctx) {
        let title: Option<HtmlElement> = dom::query(ctx.document, &ctx.config.selectors.title);
        self.report.record_optional(Feature::Typing, title.as_ref());
        let Some(title) = title else {
            return;
        };

        let typer = Typewriter::new(title.text_content().unwrap_or_default(), &ctx.config.typing);
        title.set_text_content(Some(""));
        let delay = typer.start_delay_ms();
        let typer = Rc::new(RefCell::new(typer));
        self.typing = Some((title.clone(), typer.clone()));
        type_next(ctx.tasks.clone(), title, typer, delay);
    }

    fn wire_anchors(&mut self, ctx: &Ctx) {
        let links = dom::query_all(ctx.document, &ctx.config.selectors.anchors);
        self.report.record(Feature::AnchorScroll, links.len());

        for link in links {
            let document = ctx.document.clone();
            let el = link.clone();
            self.listeners.push(EventListener::new_with_options(
                &link,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let href = el.get_attribute("href").unwrap_or_default();
                    let Some(click) = on_anchor_click(&href) else {
                        return;
                    };
                    if click.prevent_default {
                        event.prevent_default();
                    }
                    match resolve_target(&click, |id| document.get_element_by_id(id)) {
                        Some(target) => {
                            let options = ScrollIntoViewOptions::new();
                            options.set_behavior(ScrollBehavior::Smooth);
                            target.scroll_into_view_with_scroll_into_view_options(&options);
                        }
                        None => log::debug!("anchor {href}: no target"),
                    }
                },
            ));
        }
    }

    fn wire_contact_items(&mut self, ctx: &Ctx) {
        let items = dom::query_all(ctx.document, &ctx.config.selectors.contact_items);
        self.report.record(Feature::ContactHover, items.len());

        for item in items {
            for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
                let el = item.clone();
                self.listeners.push(EventListener::new(&item, event, move |_| {
                    dom::set_style(&el, "transform", contact_transform(hovered));
                }));
            }
        }
    }

    fn wire_floating(&mut self, ctx: &Ctx, cards: Vec<HtmlElement>) {
        self.report.record(Feature::Floating, cards.len());
        if cards.is_empty() {
            return;
        }

        let config = ctx.config.floating.clone();
        let document = ctx.document.clone();
        ctx.tasks.after(config.start_delay_ms, move || {
            let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
            let mut rng = fastrand::Rng::with_seed(seed);
            for anim in FloatingAnimation::generate_all(cards.len(), &config, &mut rng) {
                if let Err(e) = dom::inject_style(&document, &anim.keyframes_css()) {
                    log::warn!("{} keyframes not injected: {e}", anim.name());
                    continue;
                }
                let card = &cards[anim.index];
                let existing = card.style().get_property_value("animation").unwrap_or_default();
                dom::set_style(card, "animation", &anim.append_to(&existing));
            }
            log::debug!("float animations attached to {} cards", cards.len());
        });
    }

    fn wire_modal(&mut self, ctx: &Ctx) {
        let sel = &ctx.config.selectors;
        let doc = ctx.document;
        let modal: Option<HtmlElement> = dom::by_id(doc, &sel.modal_id);
        let open_button: Option<Element> = dom::by_id(doc, &sel.open_button_id);
        let close_button: Option<Element> = dom::query(doc, &sel.close_button);
        let cancel_button: Option<Element> = dom::query(doc, &sel.cancel_button);
        let form: Option<Element> = dom::by_id(doc, &sel.form_id);

        // every control acts on the modal itself
        let wired = |el: Option<&Element>| usize::from(modal.is_some() && el.is_some());
        self.report.record(Feature::ModalOpen, wired(open_button.as_ref()));
        self.report.record(Feature::ModalClose, wired(close_button.as_ref()));
        self.report.record(Feature::ModalCancel, wired(cancel_button.as_ref()));
        self.report.record(Feature::ModalBackdrop, usize::from(modal.is_some()));
        self.report.record(Feature::ModalSubmit, wired(form.as_ref()));
        log::info!("modal elements: {}", self.report.modal_summary());

        let Some(modal) = modal else {
            return;
        };
        let view = Rc::new(ModalView {
            modal,
            fields: FormFields {
                name: Field::lookup(doc, &sel.name_field_id),
                email: Field::lookup(doc, &sel.email_field_id),
                message: Field::lookup(doc, &sel.message_field_id),
            },
            notification: dom::by_id(doc, &sel.notification_id),
        });
        let state = Rc::new(RefCell::new(MessageModal::new()));

        if let Some(button) = open_button {
            let (view, state) = (view.clone(), state.clone());
            self.listeners.push(EventListener::new_with_options(
                &button,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    state.borrow_mut().open();
                    view.render(&state.borrow());
                },
            ));
        }

        for (button, reason) in [
            (close_button, CloseReason::CloseButton),
            (cancel_button, CloseReason::Cancel),
        ] {
            let Some(button) = button else {
                continue;
            };
            let (view, state) = (view.clone(), state.clone());
            self.listeners
                .push(EventListener::new(&button, "click", move |_| {
                    state.borrow_mut().close(reason);
                    view.render(&state.borrow());
                    view.clear_fields(&state.borrow());
                }));
        }

        {
            let (view, state) = (view.clone(), state.clone());
            self.listeners
                .push(EventListener::new(ctx.window, "click", move |event| {
                    let on_backdrop = event
                        .target()
                        .is_some_and(|t| view.modal.is_same_node(Some(t.unchecked_ref::<Node>())));
                    if state.borrow_mut().on_window_click(on_backdrop) {
                        view.render(&state.borrow());
                        view.clear_fields(&state.borrow());
                    }
                }));
        }

        if let Some(form) = form {
            let tasks = ctx.tasks.clone();
            let visible_ms = ctx.config.notification.visible_ms;
            self.listeners.push(EventListener::new_with_options(
                &form,
                "submit",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let ticket = {
                        let mut modal = state.borrow_mut();
                        modal.set_form(view.fields.read());
                        modal.submit()
                    };
                    view.render(&state.borrow());
                    view.clear_fields(&state.borrow());

                    let (view, state) = (view.clone(), state.clone());
                    tasks.after(visible_ms, move || {
                        if state.borrow_mut().hide_notification(ticket) {
                            view.render(&state.borrow());
                        }
                    });
                },
            ));
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        let pending = self.tasks.pending();
        self.listeners.clear();
        self.tasks.cancel_all();
        if let Some(ripples) = self.ripples.take() {
            for overlay in ripples.borrow_mut().drain() {
                overlay.remove();
            }
        }
        if let Some(reveal) = self.reveal.take() {
            reveal.observer.disconnect();
            for item in reveal.tracker.borrow_mut().finish() {
                show_item(&reveal.items[item]);
            }
        }
        if let Some((title, typer)) = self.typing.take() {
            let full = typer.borrow_mut().finish().map(str::to_owned);
            if let Some(text) = full {
                title.set_text_content(Some(&text));
            }
        }
        if let Some((state, frame)) = self.parallax.take() {
            frame.borrow_mut().take();
            state.borrow_mut().cancel();
        }
        log::debug!("portfolio effects torn down ({pending} pending tasks cancelled)");
    }
}

fn show_item(el: &HtmlElement) {
    dom::set_style(el, "opacity", reveal::SHOWN_OPACITY);
    dom::set_style(el, "transform", reveal::SHOWN_TRANSFORM);
}

/// Schedule the next typing step; each step schedules the one after it.
fn type_next(tasks: Tasks, title: HtmlElement, typer: Rc<RefCell<Typewriter>>, delay_ms: u32) {
    let chain = tasks.clone();
    tasks.after(delay_ms, move || {
        let next = typer.borrow_mut().next();
        if let Some(prefix) = next {
            title.set_text_content(Some(&prefix));
            let interval = typer.borrow().interval_ms();
            type_next(chain, title, typer, interval);
        }
    });
}

/// DOM side of the message modal.
struct ModalView {
    modal: HtmlElement,
    fields: FormFields,
    notification: Option<HtmlElement>,
}

impl ModalView {
    fn render(&self, state: &MessageModal) {
        dom::toggle_class(&self.modal, MODAL_OPEN_CLASS, state.is_open());
        if let Some(notification) = &self.notification {
            dom::set_style(notification, "display", state.notification().display());
        }
    }

    fn clear_fields(&self, state: &MessageModal) {
        self.fields.write(state.form());
    }
}
