//! Transient notice toast, anchored top-right over everything else.
//!
//! Expiry is purely render-side: once the virtual clock passes the notice's
//! deadline it simply stops being drawn.

use bookstall_business::{NoticeKind, Notices};
use bookstall_states::{StateCtx, Time};
use egui::Context;

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

pub fn notice_toast(state_ctx: &StateCtx, ctx: &Context) {
    let now = *state_ctx.state::<Time>().as_ref();
    let notices = state_ctx.state::<Notices>();
    let Some(notice) = notices.active(now) else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => COLOR_GREEN,
        NoticeKind::Warning => COLOR_AMBER,
        NoticeKind::Error => COLOR_RED,
    };

    egui::Area::new(egui::Id::new("notice_toast"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.colored_label(color, notice.message.as_str());
            });
        });

    // Keep repainting while a notice is up so it disappears on time.
    ctx.request_repaint_after(std::time::Duration::from_millis(250));
}
