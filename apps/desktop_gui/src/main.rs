use std::path::PathBuf;

mod content;

use anyhow::Result;
use clap::Parser;
use client_core::GuideSession;
use eframe::egui;
use shared::domain::CommentKind;
use storage::FileSlot;
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    /// Profile directory holding persisted comments. Defaults to a per-user
    /// app data location.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn resolve_data_dir(args: &Args) -> Result<PathBuf> {
    if let Some(dir) = &args.data_dir {
        return Ok(dir.clone());
    }
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("unable to resolve local app data dir"))?;
    Ok(base.join("mo-driver-guide"))
}

struct GuideApp {
    session: GuideSession<FileSlot>,
    comment_draft: String,
    comment_kind: CommentKind,
    status: Option<String>,
}

impl GuideApp {
    fn new(session: GuideSession<FileSlot>) -> Self {
        Self {
            session,
            comment_draft: String::new(),
            comment_kind: CommentKind::GeneralComment,
            status: None,
        }
    }

    fn locator_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Find a license office");
        let mut query = self.session.query().to_string();
        ui.horizontal(|ui| {
            ui.label("Search:");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("name, street, or phone")
                        .desired_width(260.0),
                )
                .changed()
            {
                self.session.set_query(query);
            }
        });

        let visible = self.session.visible_offices();
        ui.label(format!(
            "Showing {} of {} offices",
            visible.len(),
            self.session.office_count()
        ));
        ui.add_space(4.0);
        for office in &visible {
            ui.group(|ui| {
                ui.strong(&office.name);
                ui.label(&office.address);
                ui.label(&office.phone);
            });
        }
        if visible.is_empty() {
            ui.weak("No offices match the search.");
        }
    }

    fn checklist_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Before you go");
        for section in content::CHECKLIST_SECTIONS {
            ui.add_space(4.0);
            ui.strong(section.title);
            for item in section.items {
                let mut checked = self.session.checklist().is_checked(item.id);
                if ui.checkbox(&mut checked, item.label).changed() {
                    self.session.toggle_item(item.id);
                }
            }
        }
        ui.add_space(4.0);
        ui.weak(format!(
            "{} items checked",
            self.session.checklist().checked_count()
        ));
    }

    fn test_rules_section(&self, ui: &mut egui::Ui) {
        ui.heading("Written test basics");
        for rule in content::TEST_RULES {
            ui.label(format!("\u{2022} {rule}"));
        }
    }

    fn comments_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Comments");
        ui.horizontal(|ui| {
            for kind in [CommentKind::GeneralComment, CommentKind::RequestToEditSteps] {
                ui.radio_value(&mut self.comment_kind, kind, kind.label());
            }
        });

        let mut draft = self.comment_draft.clone();
        ui.add(
            egui::TextEdit::multiline(&mut draft)
                .hint_text("Share a tip or flag an outdated step")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        self.comment_draft = draft;

        if ui.button("Submit").clicked() {
            if self.session.submit_comment(self.comment_kind, &self.comment_draft) {
                self.comment_draft.clear();
                self.status = Some("Comment posted.".to_string());
            } else {
                self.status = Some("Nothing to post.".to_string());
            }
        }
        if let Some(status) = &self.status {
            ui.weak(status);
        }

        ui.add_space(6.0);
        for comment in self.session.comments() {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(comment.kind.label());
                    ui.weak(format_timestamp(comment.created_at));
                });
                ui.label(&comment.text);
            });
        }
        if self.session.comments().is_empty() {
            ui.weak("No comments yet.");
        }
    }
}

impl eframe::App for GuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.locator_section(ui);
                ui.separator();
                self.checklist_section(ui);
                ui.separator();
                self.test_rules_section(ui);
                ui.separator();
                self.comments_section(ui);
            });
        });
    }
}

fn format_timestamp(epoch_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(epoch_ms) {
        Some(when) => when.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let data_dir = resolve_data_dir(&args)?;
    info!("gui: using profile directory {}", data_dir.display());
    let slot = FileSlot::new(&data_dir)?;
    let session = GuideSession::new(content::license_offices(), slot);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Missouri Driver Guide")
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([560.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Missouri Driver Guide",
        options,
        Box::new(|_cc| Ok(Box::new(GuideApp::new(session)))),
    )
    .map_err(|err| anyhow::anyhow!("gui: event loop exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{content, format_timestamp};
    use std::collections::HashSet;

    #[test]
    fn formats_epoch_millis_to_utc_date_and_minute() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00");
        assert_eq!(format_timestamp(1_700_000_000_000), "2023-11-14 22:13");
    }

    #[test]
    fn out_of_range_timestamps_render_as_empty() {
        assert_eq!(format_timestamp(i64::MAX), "");
    }

    #[test]
    fn checklist_ids_are_unique_across_sections() {
        let mut seen = HashSet::new();
        for section in content::CHECKLIST_SECTIONS {
            for item in section.items {
                assert!(seen.insert(item.id), "duplicate checklist id {}", item.id);
            }
        }
    }

    #[test]
    fn office_list_includes_the_afton_and_clayton_entries() {
        let offices = content::license_offices();
        let names: Vec<&str> = offices.iter().map(|o| o.name.as_str()).collect();
        assert!(names.contains(&"AFTON (003)"));
        assert!(names.contains(&"CLAYTON (162)"));
    }
}
