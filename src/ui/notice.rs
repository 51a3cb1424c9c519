use eframe::egui::{self, Align2, Color32, Context, RichText};

use crate::state::{AppState, NoticeKind};

/// Centred pop-up for the pending notice. "OK" dismisses it.
pub fn notice_window(ctx: &Context, state: &mut AppState) {
    let Some(notice) = &state.notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info | NoticeKind::Distance => ctx.style().visuals.text_color(),
        NoticeKind::Warning => Color32::from_rgb(230, 160, 30),
        NoticeKind::Error => Color32::RED,
    };

    let mut dismissed = false;
    egui::Window::new(RichText::new(&notice.title).strong())
        .id(egui::Id::new("notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&notice.text).color(color));
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        state.dismiss_notice();
    }
}
