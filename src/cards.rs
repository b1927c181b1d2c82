//! Egui cards: nav bar, content card, artist gallery, subscribe form.
//!
//! Reads the interaction machine and renders whatever card its selection
//! points at. All mutation goes back through the machine's handlers so the
//! cards can never desync from the grid.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::content::{self, ContentInfo};
use crate::dot;
use crate::interaction::{InteractionState, NavigateTo, OpenGridCard};
use crate::interaction::machine::Navigation;

/// Nav-bar entries: label and the content key they open.
const NAV_ENTRIES: [(&str, &str); 4] = [
    ("About", "about"),
    ("Projects", "projects"),
    ("Zine", "zine"),
    ("Subscribe", "subscribe"),
];

/// Card and nav-bar rendering.
pub struct CardsPlugin;

impl Plugin for CardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (draw_nav_bar, draw_card).run_if(resource_exists::<InteractionState>),
        );
    }
}

/// Subscribe-form state. Submission is a local stub: no request leaves the
/// process, the form only flips to a confirmation line.
#[derive(Default)]
pub struct SubscribeForm {
    email: String,
    submitted: bool,
}

fn palette_color32(name: &str) -> egui::Color32 {
    let [r, g, b] = content::palette_rgb(name);
    egui::Color32::from_rgb(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
    )
}

/// Top bar firing card-open requests, mirroring the site navigation.
pub fn draw_nav_bar(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    mut open: MessageWriter<OpenGridCard>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    egui::TopBottomPanel::top("nav").show(ctx.get_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("HALFTONE").strong());
            ui.separator();
            for (label, key) in NAV_ENTRIES {
                if ui.button(label).clicked() {
                    open.write(OpenGridCard {
                        key: key.to_owned(),
                    });
                }
            }
        });
    });
}

/// Renders the card for the current selection, if any.
pub fn draw_card(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    mut state: ResMut<InteractionState>,
    mut nav: MessageWriter<NavigateTo>,
    mut form: Local<SubscribeForm>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let Some(key) = state.machine.selected_content.clone() else {
        return;
    };

    let mut close = false;
    let window = egui::Window::new(key.as_str())
        .anchor(egui::Align2::RIGHT_CENTER, [-24.0, 0.0])
        .title_bar(false)
        .resizable(false)
        .collapsible(false);

    window.show(ctx.get_mut(), |ui| {
        if key == "subscribe" {
            close = subscribe_card(ui, &mut form);
        } else if let Some(artist) = dot::artist_for_slug(&key)
            && artist.special_route.is_none()
        {
            close = artist_card(ui, artist);
        } else if let Some(info) = content::content_info(&key) {
            close = content_card(ui, &key, &info, &mut state);
        } else {
            // Selection points at a key with no card behind it.
            close = true;
        }
    });

    if close {
        *form = SubscribeForm::default();
        let Navigation::Route(route) = state.machine.close();
        nav.write(NavigateTo { route });
    }
}

fn content_card(
    ui: &mut egui::Ui,
    key: &str,
    info: &ContentInfo,
    state: &mut InteractionState,
) -> bool {
    let accent = content::content_color(key);
    let chrome = content::complementary(accent);
    ui.heading(egui::RichText::new(key).color(palette_color32(accent)));
    ui.label(info.text);
    if let Some(by) = info.created_by {
        ui.label(
            egui::RichText::new(format!("by {by}"))
                .small()
                .color(palette_color32(chrome)),
        );
    }
    if state.machine.card_expanded {
        ui.separator();
        for image in info.images {
            ui.label(format!("[{image}]"));
        }
        ui.label(egui::RichText::new(info.link).small());
    }
    ui.horizontal(|ui| {
        let toggle = if state.machine.card_expanded {
            "Collapse"
        } else {
            "Expand"
        };
        if ui.button(toggle).clicked() {
            state.machine.card_expanded = !state.machine.card_expanded;
        }
        ui.button("Close").clicked()
    })
    .inner
}

fn artist_card(ui: &mut egui::Ui, artist: &content::Artist) -> bool {
    ui.heading(artist.name);
    ui.label(artist.bio);
    if let Some(project) = artist.project_description {
        ui.label(project);
    }
    ui.separator();
    for piece in artist.artwork {
        ui.label(format!("[{piece}]"));
    }
    if let Some(price) = artist.price {
        ui.label(price);
    }
    if let Some(site) = artist.website {
        ui.label(egui::RichText::new(site).small());
    }
    if let Some(handle) = artist.instagram {
        ui.label(egui::RichText::new(format!("@{handle}")).small());
    }
    ui.button("Close").clicked()
}

fn subscribe_card(ui: &mut egui::Ui, form: &mut SubscribeForm) -> bool {
    ui.heading(egui::RichText::new("Subscribe").color(palette_color32("magenta")));
    if form.submitted {
        ui.label("Thanks! The next letter is yours.");
    } else {
        ui.label("One letter a month, no more.");
        ui.text_edit_singleline(&mut form.email);
        if ui.button("Sign up").clicked() && form.email.contains('@') {
            form.submitted = true;
        }
    }
    ui.button("Close").clicked()
}
