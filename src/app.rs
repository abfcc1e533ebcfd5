//! Desktop UI for browsing sections, folders and word lists.
//! Every edit goes straight through the stores, so what is on screen is what is stored.

use eframe::egui;
use std::fmt::Display;
use std::path::Path;
use vocab_notes_app::export::json::{WordListExport, export_words_to_path, import_words};
use vocab_notes_app::models::SECTIONS;
use vocab_notes_app::models::section::title_for;
use vocab_notes_app::store::test_sheet::{SUBMITTED_MESSAGE, update_entry};
use vocab_notes_app::store::words::SAVED_MESSAGE;
use vocab_notes_app::{
    Confirm, Folder, FolderRegistry, Outcome, Selection, SqliteStore, StoreError, TestEntry,
    TestSheet, WordField, WordItem, WordListStore,
};

const HOME_TITLE: &str = "The things we learned";
const DANGER: egui::Color32 = egui::Color32::from_rgb(0xC0, 0x5A, 0x3E);

/// Application screens. Ids are kept as the strings used in storage keys.
#[derive(Clone, Default)]
enum Screen {
    #[default]
    Home,
    Section {
        section_id: String,
    },
    Folder {
        section_id: String,
        folder_id: String,
    },
    Test {
        section_id: String,
        folder_id: String,
    },
}

/// Message shown in a small window after an action
enum Notice {
    Ack(String),
    Failure(String),
}

/// Folder being renamed and the text typed so far
struct Rename {
    folder_id: String,
    buffer: String,
    focused: bool,
}

/// Asks yes/no questions with a native message box
struct DialogConfirm;

impl Confirm for DialogConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_title("확인")
            .set_description(prompt)
            .set_level(rfd::MessageLevel::Warning)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}

enum FolderAction {
    Open(String),
    StartRename(String),
    CommitRename,
    Delete(String),
    Add,
}

enum WordAction {
    Edit(usize, WordField, String),
    Toggle(String),
    ToggleAll,
    DeleteSelected,
    Save,
    AddItem,
    Export,
    Import,
}

/// Main application state
pub struct VocabApp {
    store: SqliteStore,
    screen: Screen,

    folders: Vec<Folder>,
    renaming: Option<Rename>,

    folder_title: String,
    words: Vec<WordItem>,
    selection: Selection,

    test_rows: Vec<TestEntry>,

    // set when the current screen's stored data could not be read
    load_error: Option<String>,
    notice: Option<Notice>,
}

impl eframe::App for VocabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen.clone() {
            Screen::Home => self.render_home(ctx),
            Screen::Section { section_id } => self.render_section(ctx, &section_id),
            Screen::Folder {
                section_id,
                folder_id,
            } => self.render_folder(ctx, &section_id, &folder_id),
            Screen::Test {
                section_id,
                folder_id,
            } => self.render_test(ctx, &section_id, &folder_id),
        }

        self.render_notice(ctx);
    }
}

impl VocabApp {
    pub fn new(store: SqliteStore) -> Self {
        Self {
            store,
            screen: Screen::Home,
            folders: Vec::new(),
            renaming: None,
            folder_title: String::new(),
            words: Vec::new(),
            selection: Selection::new(),
            test_rows: Vec::new(),
            load_error: None,
            notice: None,
        }
    }

    fn report(&mut self, context: &str, err: impl Display) {
        tracing::error!(error = %err, "{}", context);
        self.notice = Some(Notice::Failure(format!("{}: {}", context, err)));
    }

    fn report_load(&mut self, err: StoreError) {
        tracing::error!(error = %err, "failed to load screen data");
        self.load_error = Some(err.to_string());
    }

    fn open_home(&mut self) {
        self.load_error = None;
        self.screen = Screen::Home;
    }

    fn open_section(&mut self, section_id: &str) {
        self.load_error = None;
        self.renaming = None;
        self.folders.clear();

        match FolderRegistry::new(&self.store).load(section_id) {
            Ok(folders) => self.folders = folders,
            Err(e) => self.report_load(e),
        }

        self.screen = Screen::Section {
            section_id: section_id.to_string(),
        };
    }

    fn open_folder(&mut self, section_id: &str, folder_id: &str) {
        self.load_error = None;
        self.selection.clear();
        self.words.clear();

        self.folder_title = match FolderRegistry::new(&self.store).folder_name(section_id, folder_id)
        {
            Ok(Some(name)) => name,
            Ok(None) => title_for(section_id).to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "folder name unavailable");
                title_for(section_id).to_string()
            }
        };

        match WordListStore::new(&self.store).load(folder_id) {
            Ok(words) => self.words = words,
            Err(e) => self.report_load(e),
        }

        self.screen = Screen::Folder {
            section_id: section_id.to_string(),
            folder_id: folder_id.to_string(),
        };
    }

    fn open_test(&mut self, section_id: &str, folder_id: &str) {
        self.load_error = None;
        self.test_rows.clear();

        match TestSheet::new(&self.store).load(folder_id) {
            Ok(rows) => self.test_rows = rows,
            Err(e) => self.report_load(e),
        }

        self.screen = Screen::Test {
            section_id: section_id.to_string(),
            folder_id: folder_id.to_string(),
        };
    }

    /// Renders the home screen with the fixed list of sections
    fn render_home(&mut self, ctx: &egui::Context) {
        let mut open: Option<String> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.heading(HOME_TITLE);
                ui.add_space(30.0);

                egui::Grid::new("sections")
                    .num_columns(3)
                    .spacing([16.0, 16.0])
                    .show(ui, |ui| {
                        for (i, section) in SECTIONS.iter().enumerate() {
                            if ui
                                .add_sized([150.0, 80.0], egui::Button::new(section.title))
                                .clicked()
                            {
                                open = Some(section.scope_id());
                            }
                            if (i + 1) % 3 == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });
        });

        if let Some(id) = open {
            self.open_section(&id);
        }
    }

    /// Renders the folder list of one section
    fn render_section(&mut self, ctx: &egui::Context, section_id: &str) {
        let mut action: Option<FolderAction> = None;
        let mut back = false;
        let mut reset = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("←").clicked() {
                    back = true;
                }
                ui.heading(title_for(section_id));
            });
            ui.separator();

            if let Some(err) = &self.load_error {
                ui.colored_label(DANGER, format!("폴더를 불러오지 못했습니다: {}", err));
                if ui.button("Reset").clicked() {
                    reset = true;
                }
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("folders_list")
                .show(ui, |ui| {
                    for folder in &self.folders {
                        ui.horizontal(|ui| {
                            match self.renaming.as_mut() {
                                Some(rename) if rename.folder_id == folder.id => {
                                    let response = ui.text_edit_singleline(&mut rename.buffer);
                                    if !rename.focused {
                                        response.request_focus();
                                        rename.focused = true;
                                    }
                                    if response.lost_focus() {
                                        action = Some(FolderAction::CommitRename);
                                    }
                                }
                                _ => {
                                    if ui
                                        .add_sized([200.0, 24.0], egui::Button::new(&folder.name))
                                        .clicked()
                                    {
                                        action = Some(FolderAction::Open(folder.id.clone()));
                                    }
                                    if ui.small_button("이름 수정").clicked() {
                                        action = Some(FolderAction::StartRename(folder.id.clone()));
                                    }
                                    if ui
                                        .small_button(egui::RichText::new("삭제").color(DANGER))
                                        .clicked()
                                    {
                                        action = Some(FolderAction::Delete(folder.id.clone()));
                                    }
                                }
                            }
                        });
                    }
                });

            ui.separator();
            if ui.button("+ 새 폴더").clicked() {
                action = Some(FolderAction::Add);
            }
        });

        if back {
            self.open_home();
            return;
        }
        if reset {
            match FolderRegistry::new(&self.store).reset(section_id) {
                Ok(folders) => {
                    self.folders = folders;
                    self.load_error = None;
                }
                Err(e) => self.report("폴더 초기화 실패", e),
            }
            return;
        }

        let Some(action) = action else {
            return;
        };
        let registry = FolderRegistry::new(&self.store);

        match action {
            FolderAction::Open(folder_id) => self.open_folder(section_id, &folder_id),
            FolderAction::StartRename(folder_id) => {
                let buffer = self
                    .folders
                    .iter()
                    .find(|f| f.id == folder_id)
                    .map(|f| f.name.clone())
                    .unwrap_or_default();
                self.renaming = Some(Rename {
                    folder_id,
                    buffer,
                    focused: false,
                });
            }
            FolderAction::CommitRename => {
                if let Some(rename) = self.renaming.take() {
                    match registry.rename(section_id, &self.folders, &rename.folder_id, &rename.buffer)
                    {
                        Ok(folders) => self.folders = folders,
                        Err(e) => self.report("이름 수정 실패", e),
                    }
                }
            }
            FolderAction::Delete(folder_id) => {
                match registry.remove(section_id, &self.folders, &folder_id, &mut DialogConfirm) {
                    Ok(Outcome::Applied(folders)) => self.folders = folders,
                    Ok(Outcome::Declined) => {}
                    Err(e) => self.report("삭제 실패", e),
                }
            }
            FolderAction::Add => match registry.add(section_id, &self.folders) {
                Ok(folders) => self.folders = folders,
                Err(e) => self.report("폴더 추가 실패", e),
            },
        }
    }

    /// Renders the word editor of one folder
    fn render_folder(&mut self, ctx: &egui::Context, section_id: &str, folder_id: &str) {
        let mut action: Option<WordAction> = None;
        let mut back = false;
        let mut test = false;
        let mut reset = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.folder_title);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.selection.is_empty()
                        && ui
                            .button(
                                egui::RichText::new(format!(
                                    "선택 삭제 ({})",
                                    self.selection.len()
                                ))
                                .color(DANGER),
                            )
                            .clicked()
                    {
                        action = Some(WordAction::DeleteSelected);
                    }

                    let mut all = self.selection.is_all_selected(&self.words);
                    if ui.checkbox(&mut all, "전체 선택").changed() {
                        action = Some(WordAction::ToggleAll);
                    }
                });
            });
            ui.separator();

            if let Some(err) = &self.load_error {
                ui.colored_label(DANGER, format!("단어를 불러오지 못했습니다: {}", err));
                if ui.button("Reset").clicked() {
                    reset = true;
                }
                if ui.button("Back").clicked() {
                    back = true;
                }
                return;
            }

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    action = Some(WordAction::Save);
                }
                if ui.button("Export").clicked() {
                    action = Some(WordAction::Export);
                }
                if ui.button("Import").clicked() {
                    action = Some(WordAction::Import);
                }
            });
            ui.add_space(10.0);

            egui::ScrollArea::vertical()
                .id_salt("words_list")
                .max_height(ui.available_height() - 60.0)
                .show(ui, |ui| {
                    egui::Grid::new("words_grid")
                        .num_columns(4)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            for (index, item) in self.words.iter().enumerate() {
                                let selected = self.selection.contains(&item.id);

                                let mut checked = selected;
                                if ui.checkbox(&mut checked, "").changed() {
                                    action = Some(WordAction::Toggle(item.id.clone()));
                                }

                                let mut word = item.word.clone();
                                if ui
                                    .add(
                                        egui::TextEdit::singleline(&mut word)
                                            .hint_text("applicant")
                                            .desired_width(200.0),
                                    )
                                    .changed()
                                {
                                    action = Some(WordAction::Edit(index, WordField::Word, word));
                                }

                                let mut meaning = item.meaning.clone();
                                if ui
                                    .add(
                                        egui::TextEdit::singleline(&mut meaning)
                                            .hint_text("지원자")
                                            .desired_width(200.0),
                                    )
                                    .changed()
                                {
                                    action =
                                        Some(WordAction::Edit(index, WordField::Meaning, meaning));
                                }

                                if selected {
                                    if ui
                                        .button(egui::RichText::new("Delete").color(DANGER))
                                        .clicked()
                                    {
                                        action = Some(WordAction::DeleteSelected);
                                    }
                                } else if ui.button("Edit").clicked() {
                                    action = Some(WordAction::Save);
                                }
                                ui.end_row();
                            }
                        });

                    if ui.button("+ 단어 추가").clicked() {
                        action = Some(WordAction::AddItem);
                    }
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Back").clicked() {
                    back = true;
                }
                if ui.button("Test").clicked() {
                    test = true;
                }
            });
        });

        if back {
            self.open_section(section_id);
            return;
        }
        if test {
            self.open_test(section_id, folder_id);
            return;
        }
        if reset {
            match WordListStore::new(&self.store).reset(folder_id) {
                Ok(words) => {
                    self.words = words;
                    self.load_error = None;
                }
                Err(e) => self.report("단어 초기화 실패", e),
            }
            return;
        }

        if let Some(action) = action {
            self.apply_word_action(folder_id, action);
        }
    }

    fn apply_word_action(&mut self, folder_id: &str, action: WordAction) {
        let words = WordListStore::new(&self.store);

        match action {
            WordAction::Edit(index, field, value) => {
                match words.update_field(folder_id, &self.words, index, field, value) {
                    Ok(updated) => self.words = updated,
                    Err(e) => self.report("저장 실패", e),
                }
            }
            WordAction::Toggle(id) => self.selection.toggle(&id),
            WordAction::ToggleAll => self.selection.toggle_all(&self.words),
            WordAction::DeleteSelected => {
                match words.delete_selected(
                    folder_id,
                    &self.words,
                    &mut self.selection,
                    &mut DialogConfirm,
                ) {
                    Ok(Outcome::Applied(updated)) => self.words = updated,
                    Ok(Outcome::Declined) => {}
                    Err(e) => self.report("삭제 실패", e),
                }
            }
            WordAction::Save => match words.save(folder_id, &self.words) {
                Ok(()) => self.notice = Some(Notice::Ack(SAVED_MESSAGE.to_string())),
                Err(e) => self.report("저장 실패", e),
            },
            WordAction::AddItem => match words.add_item(folder_id, &self.words) {
                Ok(updated) => self.words = updated,
                Err(e) => self.report("단어 추가 실패", e),
            },
            WordAction::Export => self.handle_export(),
            WordAction::Import => self.handle_import(folder_id),
        }
    }

    /// Renders the self-test sheet. Edits here are never stored.
    fn render_test(&mut self, ctx: &egui::Context, section_id: &str, folder_id: &str) {
        let mut edit: Option<(usize, WordField, String)> = None;
        let mut back = false;
        let mut submit = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("←").clicked() {
                    back = true;
                }
                ui.heading("Test Mode");
            });
            ui.separator();

            if let Some(err) = &self.load_error {
                ui.colored_label(DANGER, format!("단어를 불러오지 못했습니다: {}", err));
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("test_sheet")
                .max_height(ui.available_height() - 40.0)
                .show(ui, |ui| {
                    egui::Grid::new("test_grid")
                        .num_columns(3)
                        .spacing([20.0, 12.0])
                        .show(ui, |ui| {
                            for (index, row) in self.test_rows.iter().enumerate() {
                                ui.horizontal(|ui| {
                                    let mut word = row.word.clone();
                                    if ui
                                        .add(egui::TextEdit::singleline(&mut word).desired_width(120.0))
                                        .changed()
                                    {
                                        edit = Some((index, WordField::Word, word));
                                    }
                                    let mut meaning = row.meaning.clone();
                                    if ui
                                        .add(
                                            egui::TextEdit::singleline(&mut meaning)
                                                .desired_width(120.0),
                                        )
                                        .changed()
                                    {
                                        edit = Some((index, WordField::Meaning, meaning));
                                    }
                                });
                                if (index + 1) % 3 == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button("submit").clicked() {
                    submit = true;
                }
            });
        });

        if let Some((index, field, value)) = edit {
            self.test_rows = update_entry(&self.test_rows, index, field, value);
        }
        if submit {
            self.notice = Some(Notice::Ack(SUBMITTED_MESSAGE.to_string()));
        }
        if back {
            self.open_folder(section_id, folder_id);
        }
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let mut close = false;

        if let Some(notice) = &self.notice {
            let title = match notice {
                Notice::Ack(_) => "알림",
                Notice::Failure(_) => "오류",
            };
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    match notice {
                        Notice::Ack(message) => ui.label(message),
                        Notice::Failure(message) => ui.colored_label(DANGER, message),
                    };
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
        }

        if close {
            self.notice = None;
        }
    }

    /// Handles word list export to a JSON file
    fn handle_export(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", self.folder_title))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        let export = WordListExport {
            folder_name: self.folder_title.clone(),
            words: self.words.clone(),
        };
        match export_words_to_path(&export, &path) {
            Ok(()) => {
                self.notice = Some(Notice::Ack(format!(
                    "'{}' 폴더를 내보냈습니다 ({}개).",
                    self.folder_title,
                    self.words.len()
                )));
            }
            Err(e) => self.report("내보내기 실패", e),
        }
    }

    /// Handles word list import from a JSON file, replacing the current folder's words
    fn handle_import(&mut self, folder_id: &str) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };

        let export = match import_words(&path) {
            Ok(export) => export,
            Err(e) => {
                self.report("가져오기 실패", e);
                return;
            }
        };

        let count = export.words.len();
        match WordListStore::new(&self.store).replace_all(folder_id, export.words, &mut DialogConfirm)
        {
            Ok(Outcome::Applied(words)) => {
                self.words = words;
                self.selection.clear();
                self.notice = Some(Notice::Ack(format!(
                    "'{}'에서 {}개의 단어를 가져왔습니다.",
                    export.folder_name, count
                )));
            }
            Ok(Outcome::Declined) => {}
            Err(e) => self.report("가져오기 실패", e),
        }
    }
}

/// Adds the font at `path` as a fallback for every family so Hangul glyphs render
pub fn install_fonts(ctx: &egui::Context, path: &Path) -> std::io::Result<()> {
    let bytes = std::fs::read(path)?;
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("hangul".to_owned(), egui::FontData::from_owned(bytes));

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("hangul".to_owned());
    }

    ctx.set_fonts(fonts);
    Ok(())
}
