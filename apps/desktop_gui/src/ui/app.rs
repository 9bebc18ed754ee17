//! App shell: frame loop, input routing, and the page layout.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FilterToken;
use view_core::{
    anchor_target, MenuEffect, MenuEvent, PageBehavior, MENU_BREAKPOINT,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::DeliveryMode;
use crate::content::PageContent;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{apply_ui_event, UiAction};
use crate::ui::panels;
use crate::ui::theme::{self, Palette};

const SUBMIT_LABEL: &str = "Send Message";
const SUBMIT_PENDING_LABEL: &str = "Sending...";

pub struct FolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    content: PageContent,
    page: PageBehavior,
    mode: DeliveryMode,
    palette: Palette,

    status: String,
    theme_applied: bool,

    // Directed-focus flags consumed by the next frame that renders the
    // target widget.
    focus_first_nav: bool,
    focus_content: bool,

    // Geometry from the previous frame, for outside-click routing and
    // anchor targets.
    section_tops: HashMap<String, f32>,
    toggle_rect: Option<egui::Rect>,
    panel_rect: Option<egui::Rect>,
    last_width: f32,
}

impl FolioApp {
    pub fn new(
        content: PageContent,
        mode: DeliveryMode,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let now = Instant::now();
        let page = PageBehavior::new(
            !content.nav.is_empty(),
            content.projects.clone(),
            content.contact_fields.clone(),
            now,
        );
        Self {
            cmd_tx,
            ui_rx,
            content,
            page,
            mode,
            palette: theme::palette(),
            status: "Starting delivery worker...".to_string(),
            theme_applied: false,
            focus_first_nav: false,
            focus_content: false,
            section_tops: HashMap::new(),
            toggle_rect: None,
            panel_rect: None,
            last_width: 0.0,
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let action = apply_ui_event(&mut self.page, &mut self.status, self.mode, event, now);
            match action {
                Some(UiAction::ScrollBannerIntoView) => self.scroll_to_section("contact", now),
                None => {}
            }
        }
    }

    fn scroll_to_section(&mut self, id: &str, now: Instant) {
        if let Some(top) = self.section_tops.get(id).copied() {
            self.page.scroll.scroll_to(top, now);
        }
    }

    fn narrow_layout(&self) -> bool {
        self.last_width < MENU_BREAKPOINT
    }

    fn route_input(&mut self, ctx: &egui::Context) {
        // Escape closes an open menu.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.page.menu_event(MenuEvent::Escape);
        }

        // Growing into the wide layout closes it too; it never auto-opens.
        let width = ctx.screen_rect().width();
        if width != self.last_width && width >= MENU_BREAKPOINT {
            self.page.menu_event(MenuEvent::ResizeWide);
        }
        self.last_width = width;

        // A primary click outside both the toggle and the panel closes it.
        if self.page.menu.as_ref().is_some_and(|menu| menu.is_open()) {
            let click_pos = ctx.input(|i| {
                if i.pointer.primary_clicked() {
                    i.pointer.interact_pos()
                } else {
                    None
                }
            });
            if let Some(pos) = click_pos {
                let inside =
                    |rect: Option<egui::Rect>| rect.is_some_and(|rect| rect.contains(pos));
                if !inside(self.toggle_rect) && !inside(self.panel_rect) {
                    self.page.menu_event(MenuEvent::OutsideClick);
                }
            }
        }
    }

    fn nav_click(&mut self, href: &str, now: Instant) {
        if let Some(target) = anchor_target(href) {
            let target = target.to_string();
            self.scroll_to_section(&target, now);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::NONE
                    .fill(palette.top_bar)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // Keyboard users land here first.
                    if ui.small_button("Skip to content").clicked() {
                        self.focus_content = true;
                        if let Some(first) = self.content.sections.first() {
                            let id = first.id.clone();
                            self.scroll_to_section(&id, now);
                        }
                    }
                    ui.separator();
                    ui.label(egui::RichText::new(&self.content.title).strong().size(18.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.narrow_layout() {
                            if self.page.menu.is_some() {
                                let expanded = self
                                    .page
                                    .menu
                                    .as_ref()
                                    .is_some_and(|menu| menu.expanded());
                                let response = ui
                                    .add(egui::Button::new("☰").selected(expanded))
                                    .on_hover_text(if expanded {
                                        "Collapse navigation"
                                    } else {
                                        "Expand navigation"
                                    });
                                self.toggle_rect = Some(response.rect);
                                if response.clicked() {
                                    if let Some(MenuEffect::FocusFirstItem) =
                                        self.page.toggle_menu()
                                    {
                                        self.focus_first_nav = true;
                                    }
                                }
                            }
                        } else {
                            self.toggle_rect = None;
                            let mut clicked: Option<String> = None;
                            for entry in self.content.nav.iter().rev() {
                                if ui.link(&entry.label).clicked() {
                                    clicked = Some(entry.href.clone());
                                }
                            }
                            if let Some(href) = clicked {
                                self.nav_click(&href, now);
                            }
                        }
                    });
                });
            });
    }

    fn show_menu_panel(&mut self, ctx: &egui::Context, now: Instant) {
        let open = self.page.menu.as_ref().is_some_and(|menu| menu.is_open());
        if !open || !self.narrow_layout() {
            self.panel_rect = None;
            return;
        }

        let palette = self.palette;
        let response = egui::TopBottomPanel::top("menu_panel")
            .frame(
                egui::Frame::NONE
                    .fill(theme::lighten(palette.top_bar, 0.04))
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                let mut clicked: Option<String> = None;
                for (index, entry) in self.content.nav.iter().enumerate() {
                    let link = ui.link(&entry.label);
                    if index == 0 && self.focus_first_nav {
                        link.request_focus();
                        self.focus_first_nav = false;
                    }
                    if link.clicked() {
                        clicked = Some(entry.href.clone());
                    }
                }
                if let Some(href) = clicked {
                    self.nav_click(&href, now);
                }
            });
        self.panel_rect = Some(response.response.rect);
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let palette = self.palette;
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::NONE
                    .fill(palette.top_bar)
                    .inner_margin(egui::Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.small(egui::RichText::new(&self.status).weak());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format!("delivery: {}", self.mode.label()));
                    });
                });
            });
    }

    fn show_main(&mut self, ctx: &egui::Context, now: Instant) {
        let palette = self.palette;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(palette.app_background))
            .show(ctx, |ui| {
                let offset = self.page.scroll.offset();
                let mut area = egui::ScrollArea::vertical().id_salt("page_scroll");
                if self.page.scroll.animating() {
                    area = area.vertical_scroll_offset(offset);
                }
                let output = area.show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.set_width(ui.available_width());
                    self.page_body(ui, now);
                    ui.add_space(40.0);
                });
                if !self.page.scroll.animating() {
                    self.page.scroll.set_offset(output.state.offset.y);
                }
            });
    }

    fn page_body(&mut self, ui: &mut egui::Ui, now: Instant) {
        let content_top = ui.cursor().top();
        let section_count = self.content.sections.len();
        let mut gallery_rendered = false;
        let mut contact_rendered = false;

        for index in 0..section_count {
            let section = self.content.sections[index].clone();
            self.section_tops
                .insert(section.id.clone(), ui.cursor().top() - content_top);

            let alpha = self.page.reveal.progress(index, now);
            ui.scope(|ui| {
                ui.set_opacity(alpha);
                let heading = ui.add(
                    egui::Label::new(
                        egui::RichText::new(&section.heading).heading().strong(),
                    )
                    .sense(egui::Sense::click()),
                );
                if index == 0 {
                    if self.focus_content {
                        heading.request_focus();
                        self.focus_content = false;
                    }
                    ui.label(egui::RichText::new(&self.content.tagline).weak());
                }
                if !section.body.is_empty() {
                    ui.label(&section.body);
                }

                if section.id == "work" {
                    self.show_gallery(ui, now);
                    gallery_rendered = true;
                } else if section.id == "contact" {
                    self.show_contact(ui, now);
                    contact_rendered = true;
                }
            });
            ui.add_space(28.0);
        }

        // Content without the canonical host sections still gets the
        // gallery and form rather than losing them.
        if !gallery_rendered && self.page.gallery.is_some() {
            self.show_gallery(ui, now);
            ui.add_space(28.0);
        }
        if !contact_rendered && self.page.form.is_some() {
            self.section_tops
                .insert("contact".to_string(), ui.cursor().top() - content_top);
            self.show_contact(ui, now);
        }
    }

    fn show_gallery(&mut self, ui: &mut egui::Ui, now: Instant) {
        let Some(gallery) = self.page.gallery.as_ref() else {
            return;
        };
        let categories: Vec<String> =
            gallery.categories().into_iter().map(str::to_string).collect();
        let active = gallery.active().clone();

        let mut selected: Option<FilterToken> = None;
        ui.horizontal_wrapped(|ui| {
            let all = ui.add(egui::Button::new("All").selected(active == FilterToken::All));
            if all.clicked() {
                selected = Some(FilterToken::All);
            }
            for category in &categories {
                let token = FilterToken::Category(category.clone());
                let pressed = active == token;
                if ui.add(egui::Button::new(category).selected(pressed)).clicked() {
                    selected = Some(token);
                }
            }
        });
        if let Some(token) = selected {
            self.page.apply_filter(token, now);
        }

        ui.add_space(6.0);
        let palette = self.palette;
        let Some(gallery) = self.page.gallery.as_ref() else {
            return;
        };
        ui.horizontal_wrapped(|ui| {
            for card in gallery.displayed() {
                if let Some(visual) = card.visual(now) {
                    panels::project_card(ui, card, visual, &palette);
                }
            }
        });
    }

    fn show_contact(&mut self, ui: &mut egui::Ui, now: Instant) {
        let palette = self.palette;

        let banner = self
            .page
            .form
            .as_ref()
            .and_then(|form| form.banner())
            .map(|banner| (banner.kind, banner.message.clone()));
        if let Some((kind, message)) = banner {
            if panels::form_banner(ui, kind, &message) {
                if let Some(form) = self.page.form.as_mut() {
                    form.dismiss_banner();
                }
            }
            ui.add_space(8.0);
        }

        let Some(form) = self.page.form.as_mut() else {
            return;
        };

        let mut edited: Vec<String> = Vec::new();
        let mut blurred: Vec<String> = Vec::new();
        for field in form.fields_mut() {
            let spec = field.spec.clone();
            let error = field.error().map(str::to_string);
            let response =
                panels::labelled_field(ui, &spec, &mut field.value, error.as_deref(), &palette);
            if response.changed() {
                edited.push(spec.name.clone());
            }
            if response.lost_focus() {
                blurred.push(spec.name);
            }
            ui.add_space(4.0);
        }
        for name in edited {
            form.clear_error(&name);
        }
        for name in blurred {
            let _ = form.validate_field(&name);
        }

        ui.add_space(6.0);
        let pending = form.is_pending();
        let label = if pending { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL };
        let submit = ui.add_enabled(!pending, egui::Button::new(label));
        if submit.clicked() {
            if let Some(message) = form.begin_submit(now) {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SendContact { message },
                    &mut self.status,
                );
                if !queued {
                    form.complete();
                }
            }
        }
    }

    fn show_toast(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(notice) = self.page.notices.current() {
            if let Some(slide) = notice.slide(now) {
                panels::toast(ctx, notice, slide);
            }
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.process_ui_events(now);
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }
        self.route_input(ctx);
        self.page.tick(now);

        self.show_top_bar(ctx, now);
        self.show_menu_panel(ctx, now);
        self.show_status_bar(ctx);
        self.show_main(ctx, now);
        self.show_toast(ctx, now);

        let settling = !self
            .page
            .reveal
            .settled(self.content.sections.len(), now);
        let pending = self
            .page
            .form
            .as_ref()
            .is_some_and(|form| form.is_pending());
        if self.page.animating(now) || settling || pending {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
