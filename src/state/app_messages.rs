//! Message processing for the tourfolio application.
//!
//! Fetch tasks report back here. A result is applied only to the page that
//! asked for it; anything else is stale and dropped.

use std::time::Instant;

use super::{App, AppMessage, Page};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message, Instant::now());
        }
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage, now: Instant) {
        let applied = match (message, &mut self.page) {
            (AppMessage::HeroLoaded { ticket, result }, Page::Home(page)) => {
                page.apply_hero(ticket, result, now)
            }
            (AppMessage::TestimonialsLoaded { ticket, result }, Page::Home(page)) => {
                page.apply_testimonials(ticket, result, now)
            }
            (AppMessage::FaqsLoaded { ticket, result }, Page::Home(page)) => {
                page.apply_faqs(ticket, result)
            }
            (
                AppMessage::PackagesLoaded {
                    ticket,
                    category,
                    result,
                },
                Page::Packages(page),
            ) if page.category == category => page.apply_packages(ticket, result),
            (AppMessage::PackageLoaded { ticket, id, result }, Page::Detail(page))
                if page.id == id =>
            {
                page.apply_detail(ticket, result)
            }
            (message, _) => {
                tracing::debug!("Dropping result for unmounted page: {}", describe(&message));
                false
            }
        };

        if applied {
            self.sync_layout();
        }
    }
}

fn describe(message: &AppMessage) -> String {
    match message {
        AppMessage::HeroLoaded { .. } => "hero media".to_string(),
        AppMessage::TestimonialsLoaded { .. } => "testimonials".to_string(),
        AppMessage::FaqsLoaded { .. } => "faqs".to_string(),
        AppMessage::PackagesLoaded { category, .. } => format!("{category} packages"),
        AppMessage::PackageLoaded { id, .. } => format!("package {id}"),
    }
}
